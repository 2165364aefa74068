//! Write functions - persist the cleaned extract as CSV

use crate::cleaning::error::Result;
use crate::cleaning::types::Table;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Write the record set as comma-separated text: header row, then one
/// line per record, nulls as empty fields.
///
/// Missing parent directories are created. The file is written to a
/// sibling temporary path and renamed into place on success, so a failed
/// run never leaves a partial output behind.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path);
    let file = File::create(&tmp_path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|value| value.to_string()))?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("extract.csv"));
    name.push(".tmp");
    path.with_file_name(name)
}
