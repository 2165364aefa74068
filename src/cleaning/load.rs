//! Load functions - read the raw gzip-compressed TSV into a Table

use crate::cleaning::error::Result;
use crate::cleaning::types::{Table, Value};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::path::Path;

/// Read a gzip-compressed, tab-delimited file into memory.
///
/// Column names are taken verbatim from the header line. Empty fields
/// become null cells. The whole file is materialized before returning.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;

    // The raw exports are sometimes written as concatenated gzip members,
    // which a plain single-member decoder would silently truncate.
    let decoder = MultiGzDecoder::new(file);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(decoder);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut table = Table::new(columns);
    for result in reader.records() {
        let record = result?;
        let row: Vec<Value> = record.iter().map(Value::from_field).collect();
        table.rows.push(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::error::CleanError;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_gz(path: &Path, content: &str) {
        let file = File::create(path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
    }

    #[test]
    fn test_load_table_reads_headers_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.tsv.gz");
        write_gz(&path, "region\tstate_code\tinventory\n43201\tOH\t100\n43202\tOH\t\n");

        let table = load_table(&path).unwrap();

        assert_eq!(table.columns, vec!["region", "state_code", "inventory"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][2], Value::Text("100".to_string()));
        assert!(table.rows[1][2].is_null());
    }

    #[test]
    fn test_load_table_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_table(&dir.path().join("nope.tsv.gz")).unwrap_err();
        assert!(matches!(err, CleanError::Io(_)));
    }

    #[test]
    fn test_load_table_corrupt_compression_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.tsv.gz");
        std::fs::write(&path, "this is not gzip data").unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, CleanError::Format(_)));
    }
}
