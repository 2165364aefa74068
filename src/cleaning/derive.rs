//! Derivation - numeric coercion and the months-of-supply fallback fill

use crate::cleaning::types::{Table, Value};

/// Columns coerced to numeric before derivation. Coercion is skipped for
/// any of these absent from the input schema.
const NUMERIC_COLUMNS: [&str; 4] = [
    "inventory",
    "homes_sold",
    "period_duration",
    "months_of_supply",
];

/// Coerce the key numeric columns in place. Unparseable values become
/// null; this never fails.
pub fn coerce_numeric_fields(mut table: Table) -> Table {
    for name in NUMERIC_COLUMNS {
        if let Some(idx) = table.column_index(name) {
            table.coerce_column(idx);
        }
    }
    table
}

/// Fill null `months_of_supply` entries from inventory and sales pace.
///
/// The column is introduced as all-null if the input schema lacks it.
/// Existing non-null values are never overwritten, and rows where any of
/// the three inputs is null (or the ratio is not finite) stay null.
pub fn fill_months_of_supply(mut table: Table) -> Table {
    let target = match table.column_index("months_of_supply") {
        Some(idx) => idx,
        None => {
            table.push_null_column("months_of_supply");
            table.columns.len() - 1
        }
    };

    let inputs = (
        table.column_index("inventory"),
        table.column_index("homes_sold"),
        table.column_index("period_duration"),
    );
    let (Some(inv_idx), Some(sold_idx), Some(dur_idx)) = inputs else {
        return table;
    };

    for row in &mut table.rows {
        if !row[target].is_null() {
            continue;
        }
        let (Some(inventory), Some(homes_sold), Some(duration)) = (
            row[inv_idx].number(),
            row[sold_idx].number(),
            row[dur_idx].number(),
        ) else {
            continue;
        };
        if let Some(months) = crate::months_of_supply(inventory, homes_sold, duration) {
            row[target] = Value::Number(months);
        }
    }
    table
}
