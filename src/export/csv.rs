//! CSV persistence.
//!
//! Writes the record as exactly two rows: a header of field names and one row
//! of the corresponding values.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::info;

use crate::error_handling::PersistError;
use crate::record::GeoRecord;

use super::ensure_parent_dir;

/// Saves the record as a two-row CSV file.
///
/// The header row lists field names and the second row their values, both in
/// the record's field order, so the columns line up with the console display
/// and the JSON output. Non-string values are written in their compact JSON
/// form; nested objects are not flattened.
///
/// # Errors
///
/// Returns a `PersistError` naming the failing path if a directory cannot be
/// created, the file cannot be written, or a row cannot be encoded.
pub fn save_csv(record: &GeoRecord, path: &Path) -> Result<(), PersistError> {
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|source| PersistError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = Writer::from_writer(file);

    let fields = record.fields();
    writer
        .write_record(fields.iter().map(|(name, _)| *name))
        .map_err(|source| PersistError::CsvEncode {
            path: path.to_path_buf(),
            source,
        })?;
    writer
        .write_record(fields.iter().map(|(_, value)| value.as_str()))
        .map_err(|source| PersistError::CsvEncode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|source| PersistError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Data successfully saved to {}", path.display());
    Ok(())
}
