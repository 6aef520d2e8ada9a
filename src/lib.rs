//! ADIF (Amateur Data Interchange Format) log codec with a SQLite logbook.
//!
//! # Examples
//!
//! Decoding and re-encoding with [`codec`]:
//! ```
//! use adiflog::codec;
//!
//! let text = "Exported log<eoh>\n<call:4>TEST<band:3>40M<mode:2>cw<qso_date:8:d>20130322<eor>\n";
//! let decoded = codec::decode(text).expect("decode");
//! assert_eq!(decoded.records.len(), 1);
//!
//! let rec = &decoded.records[0];
//! assert_eq!(rec.get("BAND"), Some("40m"));
//! assert_eq!(rec.get("MODE"), Some("CW"));
//!
//! let out = codec::encode(&decoded.records);
//! assert!(out.contains("<call:4>TEST\n<qso_date:8>20130322\n<band:3>40m\n<mode:2>CW\n<eor>\n"));
//!
//! let again = codec::decode(&out).expect("decode").into_records();
//! assert_eq!(again, decoded.records);
//! ```
//!
//! Importing into a logbook and exporting back out:
//! ```
//! use adiflog::{
//!     codec::EncodeConfig,
//!     logbook::{sqlite::SqliteLogbook, RecordStore},
//! };
//!
//! let mut book = SqliteLogbook::open_in_memory("contacts").expect("open");
//! let ids = book
//!     .import_adif("<call:5>K1ABC<freq:6>14.025<eor>")
//!     .expect("import");
//! assert_eq!(ids.len(), 1);
//! book.edit_record(ids[0], "MODE", "CW").expect("edit");
//!
//! let text = book.export_adif(&EncodeConfig::default()).expect("export");
//! assert!(text.contains("<call:5>K1ABC\n<freq:6>14.025\n<mode:2>CW\n<eor>\n"));
//! ```
#![deny(missing_docs)]

/// Decoder, encoder and validation rules.
pub mod codec;
/// Codec error types.
pub mod error;
/// File read/write entry points.
pub mod io;
/// Record storage collaborators.
pub mod logbook;
/// Field/value records.
pub mod record;
/// Static field registry.
pub mod registry;
/// Shared primitive types and enums.
pub mod types;

pub use codec::{Decoded, DecodeWarning, EncodeConfig, decode, encode, encode_with, is_valid};
pub use error::{AdifError, AdifResult};
pub use record::Record;
pub use types::{DataType, RowId};
