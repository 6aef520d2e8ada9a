//! Grammar checks for each ADIF data type.
//!
//! These never fail loudly. A `false` tells the decoder to drop the field.

use chrono::NaiveDate;

use crate::{registry, types::DataType};

const MIN_YEAR: i32 = 1930;

/// Checks `value` against the grammar of `data_type`.
///
/// `field_name` only matters for enumerated types, where it selects the
/// closed value set. The empty string is always valid.
pub fn is_valid(field_name: &str, value: &str, data_type: DataType) -> bool {
    if value.is_empty() {
        return true;
    }

    match data_type {
        DataType::Number => is_number(value),
        DataType::Boolean => value == "Y" || value == "N",
        DataType::Date => is_date(value),
        DataType::Time => is_time(value),
        DataType::String | DataType::IntlString => !value.contains('\n'),
        DataType::MultilineString | DataType::IntlMultilineString => true,
        DataType::Location => is_location(value),
        DataType::Enumeration | DataType::AwardList => match registry::legal_values(field_name) {
            Some(legal) => legal.contains(value),
            None => true,
        },
    }
}

/// Validates `value` against the registered type of `field_name`.
///
/// Returns `None` when the field is not registered.
pub fn validate_field(field_name: &str, value: &str) -> Option<bool> {
    let (data_type, _) = registry::lookup(field_name)?;
    Some(is_valid(field_name, value, data_type))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a fixed-width run of ASCII digits.
fn digits(s: &str, range: std::ops::Range<usize>) -> Option<u32> {
    let part = s.get(range)?;
    if !all_digits(part) {
        return None;
    }
    part.parse().ok()
}

fn is_number(value: &str) -> bool {
    let body = value.strip_prefix('-').unwrap_or(value);
    let mut seen_point = false;
    let mut seen_digit = false;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

fn is_date(value: &str) -> bool {
    if value.len() != 8 || !all_digits(value) {
        return false;
    }
    let (Some(year), Some(month), Some(day)) = (
        digits(value, 0..4),
        digits(value, 4..6),
        digits(value, 6..8),
    ) else {
        return false;
    };
    year as i32 >= MIN_YEAR && NaiveDate::from_ymd_opt(year as i32, month, day).is_some()
}

fn is_time(value: &str) -> bool {
    if (value.len() != 4 && value.len() != 6) || !all_digits(value) {
        return false;
    }
    let hour = digits(value, 0..2);
    let minute = digits(value, 2..4);
    let second = if value.len() == 6 {
        digits(value, 4..6)
    } else {
        Some(0)
    };
    matches!(
        (hour, minute, second),
        (Some(0..=23), Some(0..=59), Some(0..=59))
    )
}

fn is_location(value: &str) -> bool {
    if value.len() != 10 || !value.is_ascii() {
        return false;
    }
    let bytes = value.as_bytes();
    if !matches!(bytes[0].to_ascii_uppercase(), b'E' | b'W' | b'N' | b'S') {
        return false;
    }
    if bytes[6] != b'.' {
        return false;
    }
    matches!(
        (digits(value, 1..4), digits(value, 4..6), digits(value, 7..10)),
        (Some(0..=180), Some(0..=59), Some(_))
    )
}
