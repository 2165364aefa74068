//! Core data types for the cleaning pipeline
//! Pure data structures with small helper methods

use crate::cleaning::error::{CleanError, Result};
use std::env;
use std::path::PathBuf;

/// A single cell of the record set.
///
/// Every cell is explicitly one of three states: raw text from the input,
/// a coerced number, or null. Empty input fields load as `Null`, and numeric
/// coercion maps unparseable text to `Null` rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Null,
}

impl Value {
    /// Build a cell from a raw delimited field. Empty fields are null.
    pub fn from_field(raw: &str) -> Value {
        if raw.is_empty() {
            Value::Null
        } else {
            Value::Text(raw.to_string())
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric coercion: text that parses as a finite number becomes a
    /// number, anything else becomes null. Numbers pass through unchanged.
    pub fn coerced(&self) -> Value {
        match self {
            Value::Text(raw) => match raw.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Value::Number(n),
                _ => Value::Null,
            },
            Value::Number(n) => Value::Number(*n),
            Value::Null => Value::Null,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Null => Ok(()),
        }
    }
}

/// The in-memory record set: named columns plus one cell vector per row.
/// Column names are whatever the input header declared (normalized once,
/// up front); every row has exactly one cell per column.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Table {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Look up a column that a filter depends on.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| CleanError::MissingColumn(name.to_string()))
    }

    /// Coerce every cell of one column to numeric-or-null, in place.
    pub fn coerce_column(&mut self, idx: usize) {
        for row in &mut self.rows {
            let coerced = row[idx].coerced();
            row[idx] = coerced;
        }
    }

    /// Keep only rows matching the predicate.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Value]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Append a column whose every cell is null.
    pub fn push_null_column(&mut self, name: &str) {
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(Value::Null);
        }
    }

    /// First `limit` distinct non-null text values of a column, in row
    /// order. Used for operator diagnostics only.
    pub fn distinct_text_sample(&self, name: &str, limit: usize) -> Vec<String> {
        let Some(idx) = self.column_index(name) else {
            return Vec::new();
        };

        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            if let Some(text) = row[idx].text() {
                if !seen.iter().any(|s| s == text) {
                    seen.push(text.to_string());
                    if seen.len() == limit {
                        break;
                    }
                }
            }
        }
        seen
    }
}

/// Configuration for one extract run
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub target_state_code: String,
    pub target_metro_substring: String,
}

impl ExtractConfig {
    pub fn from_env() -> Self {
        ExtractConfig {
            input_path: env::var("INPUT_PATH")
                .unwrap_or_else(|_| "data/raw/zip_code_market_tracker.tsv000.gz".to_string())
                .into(),

            output_path: env::var("OUTPUT_PATH")
                .unwrap_or_else(|_| "data/processed/columbus_oh_zipcodes.csv".to_string())
                .into(),

            target_state_code: env::var("TARGET_STATE_CODE").unwrap_or_else(|_| "OH".to_string()),

            target_metro_substring: env::var("TARGET_METRO_SUBSTRING")
                .unwrap_or_else(|_| "columbus".to_string()),
        }
    }
}

/// Run statistics
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub output_path: PathBuf,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows loaded: {}, rows kept: {}, output: {}",
            self.rows_loaded,
            self.rows_kept,
            self.output_path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field_empty_is_null() {
        assert_eq!(Value::from_field(""), Value::Null);
        assert_eq!(Value::from_field("OH"), Value::Text("OH".to_string()));
    }

    #[test]
    fn test_coerced_parses_numbers() {
        assert_eq!(Value::Text("42".to_string()).coerced(), Value::Number(42.0));
        assert_eq!(
            Value::Text(" 3.5 ".to_string()).coerced(),
            Value::Number(3.5)
        );
        assert_eq!(Value::Text("-1".to_string()).coerced(), Value::Number(-1.0));
    }

    #[test]
    fn test_coerced_maps_garbage_to_null() {
        assert_eq!(Value::Text("n/a".to_string()).coerced(), Value::Null);
        assert_eq!(Value::Text("inf".to_string()).coerced(), Value::Null);
        assert_eq!(Value::Null.coerced(), Value::Null);
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("Columbus, OH".to_string()).to_string(), "Columbus, OH");
    }

    #[test]
    fn test_require_column_missing() {
        let table = Table::new(vec!["region".to_string()]);
        let err = table.require_column("state_code").unwrap_err();
        assert!(matches!(err, CleanError::MissingColumn(name) if name == "state_code"));
    }

    #[test]
    fn test_push_null_column() {
        let mut table = Table::new(vec!["region".to_string()]);
        table.rows.push(vec![Value::Text("43201".to_string())]);
        table.push_null_column("months_of_supply");

        assert_eq!(table.columns.len(), 2);
        assert!(table.rows[0][1].is_null());
    }

    #[test]
    fn test_distinct_text_sample_dedups_and_caps() {
        let mut table = Table::new(vec!["state_code".to_string()]);
        for code in ["OH", "OH", "CA", "TX", "CA"] {
            table.rows.push(vec![Value::Text(code.to_string())]);
        }
        table.rows.push(vec![Value::Null]);

        assert_eq!(table.distinct_text_sample("state_code", 20), vec!["OH", "CA", "TX"]);
        assert_eq!(table.distinct_text_sample("state_code", 2), vec!["OH", "CA"]);
        assert!(table.distinct_text_sample("missing", 20).is_empty());
    }
}
