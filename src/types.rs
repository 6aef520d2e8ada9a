//! Shared primitive IDs and ADIF data-type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Row identifier assigned by a logbook after a record is stored.
pub type RowId = i64;

/// ADIF data type attached to every registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Award list (`A`).
    AwardList,
    /// `Y` or `N` (`B`).
    Boolean,
    /// Signed decimal number (`N`).
    Number,
    /// ASCII string (`S`).
    String,
    /// International string (`I`).
    IntlString,
    /// `YYYYMMDD` (`D`).
    Date,
    /// `HHMM` or `HHMMSS` (`T`).
    Time,
    /// Multi-line string (`M`).
    MultilineString,
    /// Multi-line international string (`G`).
    IntlMultilineString,
    /// `XDDDMM.MMM` location, e.g. `N05130.000` (`L`).
    Location,
    /// Value from a closed set (`E`).
    Enumeration,
}

impl DataType {
    /// Every data type, in type-code order.
    pub const ALL: [DataType; 11] = [
        DataType::AwardList,
        DataType::Boolean,
        DataType::Number,
        DataType::String,
        DataType::IntlString,
        DataType::Date,
        DataType::Time,
        DataType::MultilineString,
        DataType::IntlMultilineString,
        DataType::Location,
        DataType::Enumeration,
    ];

    /// One-letter type code used in `<name:len:code>` tags.
    pub fn code(self) -> char {
        match self {
            DataType::AwardList => 'A',
            DataType::Boolean => 'B',
            DataType::Number => 'N',
            DataType::String => 'S',
            DataType::IntlString => 'I',
            DataType::Date => 'D',
            DataType::Time => 'T',
            DataType::MultilineString => 'M',
            DataType::IntlMultilineString => 'G',
            DataType::Location => 'L',
            DataType::Enumeration => 'E',
        }
    }

    /// Parses a type code, ignoring case.
    pub fn from_code(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        Self::ALL.into_iter().find(|t| t.code() == upper)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_are_unique_and_parse_back() {
        for t in DataType::ALL {
            assert_eq!(DataType::from_code(t.code()), Some(t));
            assert_eq!(DataType::from_code(t.code().to_ascii_lowercase()), Some(t));
        }
        assert_eq!(DataType::from_code('C'), None);
    }
}
