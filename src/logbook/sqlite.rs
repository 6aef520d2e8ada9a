//! SQLite-backed logbook with one text column per registered field.

use std::path::Path;

use log::debug;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

use crate::{codec::validate::is_valid, record::Record, registry, types::RowId};

use super::{LogbookError, LogbookResult, LoggedRecord, RecordStore};

/// A named log stored as one SQLite table.
pub struct SqliteLogbook {
    conn: Connection,
    name: String,
}

impl SqliteLogbook {
    /// Opens or creates the log `name` in the database at `path`.
    ///
    /// Enables WAL mode and sets `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>, name: &str) -> LogbookResult<Self> {
        check_log_name(name)?;
        let conn = Connection::open(path)?;
        Self::init_connection(conn, name)
    }

    /// Opens the log `name` in a fresh in-memory database.
    pub fn open_in_memory(name: &str) -> LogbookResult<Self> {
        check_log_name(name)?;
        let conn = Connection::open_in_memory()?;
        Self::init_connection(conn, name)
    }

    fn init_connection(conn: Connection, name: &str) -> LogbookResult<Self> {
        conn.execute_batch(&create_table_sql(name))?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(Self {
            conn,
            name: name.to_string(),
        })
    }

    /// Name of the log, which is also its table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores one record and returns its row id.
    ///
    /// Only registered fields are stored; missing ones are stored empty.
    pub fn add_record(&mut self, record: &Record) -> LogbookResult<RowId> {
        insert_record(&self.conn, &self.name, record)
    }

    /// Deletes the record with row id `id`.
    pub fn delete_record(&mut self, id: RowId) -> LogbookResult<()> {
        let sql = format!("DELETE FROM \"{}\" WHERE id = ?1", self.name);
        let count = self.conn.execute(&sql, params![id])?;
        if count == 0 {
            return Err(LogbookError::MissingRecord(id));
        }
        debug!("deleted record {id} from {}", self.name);
        Ok(())
    }

    /// Replaces one field of the record with row id `id`.
    ///
    /// The field must be registered and `value` must pass its validation.
    pub fn edit_record(&mut self, id: RowId, field: &str, value: &str) -> LogbookResult<()> {
        let spec =
            registry::field(field).ok_or_else(|| LogbookError::UnknownField(field.to_string()))?;
        if !is_valid(spec.name, value, spec.data_type) {
            return Err(LogbookError::InvalidValue {
                field: spec.name.to_string(),
                value: value.to_string(),
            });
        }

        let sql = format!(
            "UPDATE \"{}\" SET {} = ?1 WHERE id = ?2",
            self.name,
            spec.wire_name()
        );
        let count = self.conn.execute(&sql, params![value, id])?;
        if count == 0 {
            return Err(LogbookError::MissingRecord(id));
        }
        debug!("edited {} of record {id} in {}", spec.name, self.name);
        Ok(())
    }

    /// Returns the record with row id `id`, if any.
    pub fn record_by_id(&self, id: RowId) -> LogbookResult<Option<LoggedRecord>> {
        let sql = format!(
            "SELECT {} FROM \"{}\" WHERE id = ?1",
            select_columns(),
            self.name
        );
        let logged = self
            .conn
            .query_row(&sql, params![id], logged_from_row)
            .optional()?;
        Ok(logged)
    }

    /// Returns the number of stored records.
    pub fn record_count(&self) -> LogbookResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", self.name);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl RecordStore for SqliteLogbook {
    fn add_records(&mut self, records: &[Record]) -> LogbookResult<Vec<RowId>> {
        let tx = self.conn.transaction()?;
        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            ids.push(insert_record(&tx, &self.name, record)?);
        }
        tx.commit()?;
        debug!("added {} record(s) to {}", ids.len(), self.name);
        Ok(ids)
    }

    fn all_records(&self) -> LogbookResult<Vec<LoggedRecord>> {
        let sql = format!(
            "SELECT {} FROM \"{}\" ORDER BY id ASC",
            select_columns(),
            self.name
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], logged_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

/// Table names are always written double-quoted, so keywords such as
/// `order` are usable as log names.
fn check_log_name(name: &str) -> LogbookResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(LogbookError::InvalidLogName(name.to_string()))
    }
}

fn create_table_sql(name: &str) -> String {
    let columns: Vec<String> = registry::fields()
        .map(|spec| format!("{} TEXT DEFAULT ''", spec.wire_name()))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS \"{name}\" (id INTEGER PRIMARY KEY AUTOINCREMENT, {});",
        columns.join(", ")
    )
}

fn select_columns() -> String {
    let mut columns = vec!["id".to_string()];
    columns.extend(registry::fields().map(|spec| spec.wire_name()));
    columns.join(", ")
}

fn insert_record(conn: &Connection, name: &str, record: &Record) -> LogbookResult<RowId> {
    let columns: Vec<String> = registry::fields().map(|spec| spec.wire_name()).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "INSERT INTO \"{name}\" ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    );
    let values = registry::fields().map(|spec| record.get(spec.name).unwrap_or(""));
    conn.execute(&sql, params_from_iter(values))?;
    Ok(conn.last_insert_rowid())
}

/// Empty and NULL columns are left out of the record.
fn logged_from_row(row: &Row<'_>) -> rusqlite::Result<LoggedRecord> {
    let id: RowId = row.get(0)?;
    let mut record = Record::new();
    for (idx, spec) in registry::fields().enumerate() {
        let value: Option<String> = row.get(idx + 1)?;
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            record.insert(spec.name, value);
        }
    }
    Ok(LoggedRecord { id, record })
}
