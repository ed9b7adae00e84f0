//! JSON persistence.
//!
//! Writes the full record as a pretty-printed JSON document matching the
//! shape returned by the endpoint.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error_handling::PersistError;
use crate::record::GeoRecord;

use super::ensure_parent_dir;

/// Saves the record as pretty-printed JSON with a 4-space indent.
///
/// Missing parent directories are created first. The file handle is scoped to
/// this function and closed on every path out of it.
///
/// # Errors
///
/// Returns a `PersistError` naming the failing path if a directory cannot be
/// created, the file cannot be written, or the record cannot be encoded.
pub fn save_json(record: &GeoRecord, path: &Path) -> Result<(), PersistError> {
    ensure_parent_dir(path)?;

    let file = File::create(path).map_err(|source| PersistError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    record
        .serialize(&mut serializer)
        .map_err(|source| PersistError::JsonEncode {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn sample_record() -> GeoRecord {
        serde_json::from_value(json!({
            "ip": "8.8.8.8",
            "city": "Mountain View",
            "org": "AS15169 Google LLC",
            "anycast": true
        }))
        .expect("sample record should deserialize")
    }

    #[test]
    fn test_save_json_round_trips() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("out.json");

        let record = sample_record();
        save_json(&record, &path).expect("save should succeed");

        let content = std::fs::read_to_string(&path).expect("Should read JSON file");
        let read_back: Value = serde_json::from_str(&content).expect("Should parse JSON");
        let original = serde_json::to_value(&record).expect("Should serialize record");
        assert_eq!(read_back, original, "file should round-trip the record");
    }

    #[test]
    fn test_save_json_uses_four_space_indent() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("out.json");

        save_json(&sample_record(), &path).expect("save should succeed");

        let content = std::fs::read_to_string(&path).expect("Should read JSON file");
        assert!(
            content.contains("\n    \"ip\""),
            "fields should be indented four spaces:\n{}",
            content
        );
    }

    #[test]
    fn test_save_json_creates_parent_dirs() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("nested/deeper/out.json");

        save_json(&sample_record(), &path).expect("save should succeed");
        assert!(path.exists(), "file should exist under created directories");
    }
}
