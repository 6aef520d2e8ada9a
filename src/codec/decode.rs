//! ADIF text to records.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::{
    error::{AdifError, AdifResult},
    record::Record,
    registry,
    types::DataType,
};

use super::validate::is_valid;

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<eo([rh])>").expect("marker pattern"));

// `<name:length>` or `<name:length:type>`.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([^<>:]+):(\d+)(?::([^<>:]))?[^<>]*>").expect("tag pattern")
});

/// Non-fatal conditions noticed while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// The input held no record blocks. Empty file or wrong file type.
    NoRecords,
}

/// Records produced by [`decode`] plus any warnings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    /// Records in input order.
    pub records: Vec<Record>,
    /// Warnings raised along the way.
    pub warnings: Vec<DecodeWarning>,
}

impl Decoded {
    /// True when no records were found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discards warnings and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// One `<name:length[:type]>value` tag as found in a record block.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tagged {
    name: String,
    value: String,
    type_hint: Option<DataType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Eor,
    Eoh,
}

/// Splits on markers, keeping them. Text after the last marker is dropped.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for caps in MARKER.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        tokens.push(Token::Text(&text[last..whole.start()]));
        let is_eor = caps
            .get(1)
            .is_some_and(|kind| kind.as_str().eq_ignore_ascii_case("r"));
        tokens.push(if is_eor { Token::Eor } else { Token::Eoh });
        last = whole.end();
    }
    tokens
}

/// Decodes ADIF text into records.
///
/// A header, if present, is skipped. Fields whose names the registry does not
/// know, or whose values fail validation, are dropped without failing the
/// record. Every record block yields one record, even if all of its fields
/// were dropped.
///
/// Fails with [`AdifError::StructuralCorruption`] when the number of `<eor>`
/// markers does not match the number of record blocks, e.g. when a second
/// `<eoh>` appears after the header.
pub fn decode(text: &str) -> AdifResult<Decoded> {
    debug!("decoding {} bytes of ADIF text", text.len());

    let mut tokens = tokenize(text);
    if let Some(eoh) = tokens.iter().position(|t| *t == Token::Eoh) {
        tokens.drain(..=eoh);
    }

    let mut eor_markers = 0usize;
    let mut records = Vec::new();
    for token in tokens {
        match token {
            Token::Eor => eor_markers += 1,
            Token::Text(block) => records.push(decode_block(block)),
            Token::Eoh => records.push(Record::new()),
        }
    }

    if eor_markers != records.len() {
        return Err(AdifError::StructuralCorruption {
            eor_markers,
            record_blocks: records.len(),
        });
    }

    let mut warnings = Vec::new();
    if records.is_empty() {
        warn!("no records found; empty file or wrong file type?");
        warnings.push(DecodeWarning::NoRecords);
    }

    debug!("decoded {} record(s)", records.len());
    Ok(Decoded { records, warnings })
}

fn decode_block(block: &str) -> Record {
    let mut record = Record::new();
    for tagged in extract_fields(block) {
        if let Some((canonical, value)) = accept_field(tagged) {
            record.insert(canonical, value);
        }
    }
    record
}

/// Pulls tagged values out of one record block, names upper-cased.
///
/// Values are cut at `length` characters, or earlier at the next `<` or line
/// break. Tags with an empty value are skipped.
fn extract_fields(block: &str) -> Vec<Tagged> {
    let mut out = Vec::new();
    for caps in TAG.captures_iter(block) {
        let (Some(whole), Some(name), Some(length)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let Ok(length) = length.as_str().parse::<usize>() else {
            debug!("skipping tag with oversized length: {}", whole.as_str());
            continue;
        };

        let value: String = block[whole.end()..]
            .chars()
            .take_while(|c| !is_value_terminator(*c))
            .take(length)
            .collect();
        if value.is_empty() {
            continue;
        }
        let type_hint = caps
            .get(3)
            .and_then(|code| code.as_str().chars().next())
            .and_then(DataType::from_code);
        out.push(Tagged {
            name: name.as_str().to_ascii_uppercase(),
            value,
            type_hint,
        });
    }
    out
}

fn is_value_terminator(c: char) -> bool {
    matches!(c, '<' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Normalizes and validates one field. `None` means drop it.
///
/// The registry's data type always wins over a type code given in the tag.
fn accept_field(tagged: Tagged) -> Option<(&'static str, String)> {
    let Tagged {
        name,
        value,
        type_hint,
    } = tagged;
    let value = match name.as_str() {
        "BAND" => value.to_lowercase(),
        "MODE" | "CALL" => value.to_uppercase(),
        _ => value,
    };

    let spec = registry::field(&name)?;
    if let Some(hint) = type_hint.filter(|hint| *hint != spec.data_type) {
        debug!(
            "{} tagged as type {hint}, validating as {}",
            spec.name, spec.data_type
        );
    }
    if !is_valid(spec.name, &value, spec.data_type) {
        debug!("dropping invalid {} value {:?}", spec.name, value);
        return None;
    }
    Some((spec.name, value))
}
