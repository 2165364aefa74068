//! Header normalization - canonical lowercase column names

use crate::cleaning::types::Table;

/// Normalize every column name in place: strip surrounding whitespace and
/// lowercase. Field values are untouched, so later stages can reference
/// columns by canonical name regardless of how the export was cased.
pub fn normalize_headers(table: &mut Table) {
    for name in &mut table.columns {
        *name = canonical_name(name);
    }
}

fn canonical_name(name: &str) -> String {
    // Some exports prefix the first header with a UTF-8 BOM; if it is not
    // stripped, lookups on that column silently fail.
    name.trim().trim_start_matches('\u{feff}').to_lowercase()
}
