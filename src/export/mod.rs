//! File persistence for lookup results.
//!
//! This module writes a fetched record to disk in two shapes: a pretty-printed
//! JSON document and a two-row CSV (header + values).

use std::path::Path;

use crate::error_handling::PersistError;

mod csv;
mod json;

pub use csv::save_csv;
pub use json::save_json;

/// Creates the missing parent directories for an output path.
///
/// A bare filename has no parent to create and passes through untouched.
fn ensure_parent_dir(path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| PersistError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
