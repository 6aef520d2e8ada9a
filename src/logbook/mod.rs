//! Record storage that consumes decoded records and feeds the encoder.

pub mod sqlite;

use thiserror::Error;

use crate::{
    codec::{self, EncodeConfig},
    error::AdifError,
    record::Record,
    types::RowId,
};

/// Failures raised by a logbook.
#[derive(Debug, Error)]
pub enum LogbookError {
    /// A SQLite operation failed.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Decoding imported text failed.
    #[error("ADIF error: {0}")]
    Adif(#[from] AdifError),

    /// The field is not in the registry, so it has no column.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The value does not pass the field's validation.
    #[error("invalid value {value:?} for field {field}")]
    InvalidValue {
        /// Canonical field name.
        field: String,
        /// Rejected value.
        value: String,
    },

    /// No record has this row id.
    #[error("no record with id {0}")]
    MissingRecord(RowId),

    /// The log name cannot be used as a table name.
    #[error("invalid log name: {0:?}")]
    InvalidLogName(String),
}

/// Convenience alias that pins the error type to [`LogbookError`].
pub type LogbookResult<T> = Result<T, LogbookError>;

/// A stored record and the row id the logbook gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedRecord {
    /// Row id.
    pub id: RowId,
    /// Field values. Never contains the row id.
    pub record: Record,
}

/// Storage seam between the codec and a persistent logbook.
pub trait RecordStore: Send {
    /// Stores records in order and returns their new row ids.
    fn add_records(&mut self, records: &[Record]) -> LogbookResult<Vec<RowId>>;

    /// Returns every stored record in row id order.
    fn all_records(&self) -> LogbookResult<Vec<LoggedRecord>>;

    /// Decodes ADIF text and stores every record it holds.
    fn import_adif(&mut self, text: &str) -> LogbookResult<Vec<RowId>> {
        let decoded = codec::decode(text)?;
        self.add_records(&decoded.records)
    }

    /// Encodes every stored record, without row ids, as ADIF text.
    fn export_adif(&self, config: &EncodeConfig) -> LogbookResult<String> {
        let records: Vec<Record> = self
            .all_records()?
            .into_iter()
            .map(|logged| logged.record)
            .collect();
        Ok(codec::encode_with(&records, config))
    }
}
