//! Records to ADIF text.

use chrono::Local;
use log::debug;

use crate::{record::Record, registry};

/// ADIF version written to the header by default.
pub const ADIF_VERSION: &str = "1.0";

/// Value that callers use to mark a field as unset. Never written.
pub const NULL_SENTINEL: &str = "NULL";

/// Header values written by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeConfig {
    /// `adif_ver` header tag.
    pub adif_version: String,
    /// `programid` header tag.
    pub program_id: String,
    /// `programversion` header tag. Omitted when empty.
    pub program_version: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            adif_version: ADIF_VERSION.to_string(),
            program_id: env!("CARGO_PKG_NAME").to_string(),
            program_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Encodes records using [`EncodeConfig::default`].
pub fn encode(records: &[Record]) -> String {
    encode_with(records, &EncodeConfig::default())
}

/// Encodes records as ADIF text.
///
/// Each record is written as one block in canonical registry order, whatever
/// order its fields were inserted in. Empty values, `"NULL"` values and fields
/// unknown to the registry are skipped.
pub fn encode_with(records: &[Record], config: &EncodeConfig) -> String {
    debug!("encoding {} record(s)", records.len());
    let mut out = header(records.len(), config);
    for record in records {
        push_record(&mut out, record);
    }
    out
}

fn header(count: usize, config: &EncodeConfig) -> String {
    let mut out = format!(
        "Amateur radio log file. Generated on {}. Contains {} record(s).\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        count
    );
    push_tag(&mut out, "adif_ver", &config.adif_version);
    push_tag(&mut out, "programid", &config.program_id);
    if !config.program_version.is_empty() {
        push_tag(&mut out, "programversion", &config.program_version);
    }
    out.push_str("<eoh>\n");
    out
}

fn push_record(out: &mut String, record: &Record) {
    for spec in registry::fields() {
        let Some(value) = record.get(spec.name) else {
            continue;
        };
        if value.is_empty() || value == NULL_SENTINEL {
            continue;
        }
        push_tag(out, &spec.wire_name(), value);
    }
    out.push_str("<eor>\n");
}

/// Lengths are counted in characters, matching how the decoder truncates.
fn push_tag(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!("<{}:{}>{}\n", name, value.chars().count(), value));
}
