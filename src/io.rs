//! Reading and writing `.adi` files.

use std::{fs, path::Path};

use log::debug;

use crate::{
    codec::{self, Decoded, EncodeConfig},
    error::AdifResult,
    record::Record,
};

/// Reads and decodes the ADIF file at `path`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// many loggers write Latin-1.
pub fn read_path(path: impl AsRef<Path>) -> AdifResult<Decoded> {
    let path = path.as_ref();
    debug!("reading ADIF file {}", path.display());
    let bytes = fs::read(path)?;
    codec::decode(&String::from_utf8_lossy(&bytes))
}

/// Encodes `records` with default header values and writes them to `path`.
pub fn write_path(records: &[Record], path: impl AsRef<Path>) -> AdifResult<()> {
    write_path_with(records, path, &EncodeConfig::default())
}

/// Encodes `records` with `config` and writes them to `path`, replacing any
/// existing file.
pub fn write_path_with(
    records: &[Record],
    path: impl AsRef<Path>,
    config: &EncodeConfig,
) -> AdifResult<()> {
    let path = path.as_ref();
    debug!("writing {} record(s) to {}", records.len(), path.display());
    fs::write(path, codec::encode_with(records, config))?;
    Ok(())
}
