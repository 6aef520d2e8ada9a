//! Static table of the ADIF fields this crate understands.
//!
//! The table order is the canonical field order: the encoder writes fields in
//! this order and the logbook lays its columns out in it.

/// Legal values for enumerated fields.
pub mod enums;

use std::sync::LazyLock;

use hashbrown::{HashMap, HashSet};

use crate::types::DataType;

/// One registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Canonical upper-case field name.
    pub name: &'static str,
    /// Data type used for validation.
    pub data_type: DataType,
    /// Human-readable label.
    pub label: &'static str,
    /// Closed set of legal values, when the field has one.
    pub legal_values: Option<&'static [&'static str]>,
}

impl FieldSpec {
    const fn new(name: &'static str, data_type: DataType, label: &'static str) -> Self {
        Self {
            name,
            data_type,
            label,
            legal_values: None,
        }
    }

    const fn closed(
        name: &'static str,
        label: &'static str,
        legal_values: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            data_type: DataType::Enumeration,
            label,
            legal_values: Some(legal_values),
        }
    }

    /// Name as written on the wire.
    pub fn wire_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// Registered fields in canonical order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("CALL", DataType::String, "Callsign"),
    FieldSpec::new("QSO_DATE", DataType::Date, "Date"),
    FieldSpec::new("TIME_ON", DataType::Time, "Time"),
    FieldSpec::new("FREQ", DataType::Number, "Frequency"),
    FieldSpec::closed("BAND", "Band", enums::BANDS),
    FieldSpec::closed("MODE", "Mode", enums::MODES),
    FieldSpec::new("TX_PWR", DataType::Number, "TX Power (W)"),
    FieldSpec::new("RST_SENT", DataType::String, "TX RST"),
    FieldSpec::new("RST_RCVD", DataType::String, "RX RST"),
    FieldSpec::new("QSL_SENT", DataType::String, "QSL Sent"),
    FieldSpec::new("QSL_RCVD", DataType::String, "QSL Received"),
    FieldSpec::new("NOTES", DataType::MultilineString, "Notes"),
    FieldSpec::new("NAME", DataType::String, "Name"),
    FieldSpec::new("ADDRESS", DataType::String, "Address"),
    FieldSpec::new("STATE", DataType::String, "State"),
    FieldSpec::new("COUNTRY", DataType::String, "Country"),
    FieldSpec::new("DXCC", DataType::Number, "DXCC"),
    FieldSpec::new("CQZ", DataType::Number, "CQ Zone"),
    FieldSpec::new("ITUZ", DataType::Number, "ITU Zone"),
    FieldSpec::new("IOTA", DataType::String, "IOTA Designator"),
];

static POSITIONS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    FIELDS
        .iter()
        .enumerate()
        .map(|(pos, spec)| (spec.name, pos))
        .collect()
});

static LEGAL_SETS: LazyLock<HashMap<&'static str, HashSet<&'static str>>> =
    LazyLock::new(|| {
        FIELDS
            .iter()
            .filter_map(|spec| {
                spec.legal_values
                    .map(|values| (spec.name, values.iter().copied().collect()))
            })
            .collect()
    });

fn position_of(name: &str) -> Option<usize> {
    if let Some(pos) = POSITIONS.get(name) {
        return Some(*pos);
    }
    POSITIONS.get(name.to_ascii_uppercase().as_str()).copied()
}

/// Returns the data type and canonical position of `name`, ignoring case.
pub fn lookup(name: &str) -> Option<(DataType, usize)> {
    position_of(name).map(|pos| (FIELDS[pos].data_type, pos))
}

/// Returns the full registry entry for `name`, ignoring case.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    position_of(name).map(|pos| &FIELDS[pos])
}

/// Iterates the registered fields in canonical order.
pub fn fields() -> impl ExactSizeIterator<Item = &'static FieldSpec> {
    FIELDS.iter()
}

/// True when `name` is registered and restricted to a closed value set.
pub fn is_enumerated(name: &str) -> bool {
    legal_values(name).is_some()
}

/// Closed set of legal values for `name`, if it has one.
pub fn legal_values(name: &str) -> Option<&'static HashSet<&'static str>> {
    let spec = field(name)?;
    LEGAL_SETS.get(spec.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("CALL"), Some((DataType::String, 0)));
        assert_eq!(lookup("qso_date"), Some((DataType::Date, 1)));
        assert_eq!(lookup("Time_On"), Some((DataType::Time, 2)));
        assert_eq!(lookup("GRIDSQUARE"), None);
    }

    #[test]
    fn positions_follow_table_order() {
        for (idx, spec) in fields().enumerate() {
            assert_eq!(lookup(spec.name).map(|(_, pos)| pos), Some(idx));
        }
        assert_eq!(fields().len(), 20);
    }

    #[test]
    fn only_band_and_mode_are_enumerated() {
        let enumerated: Vec<_> = fields()
            .filter(|spec| is_enumerated(spec.name))
            .map(|spec| spec.name)
            .collect();
        assert_eq!(enumerated, vec!["BAND", "MODE"]);
        assert!(is_enumerated("band"));
        assert!(!is_enumerated("NOSUCH"));
    }

    #[test]
    fn legal_values_keep_field_case() {
        let bands = legal_values("BAND").expect("band set");
        assert!(bands.contains("40m"));
        assert!(!bands.contains("40M"));

        let modes = legal_values("mode").expect("mode set");
        assert!(modes.contains("CW"));
        assert!(!modes.contains("cw"));
        assert!(legal_values("CALL").is_none());
    }

    #[test]
    fn labels_and_wire_names() {
        let spec = field("tx_pwr").expect("tx_pwr");
        assert_eq!(spec.label, "TX Power (W)");
        assert_eq!(spec.wire_name(), "tx_pwr");
    }
}
