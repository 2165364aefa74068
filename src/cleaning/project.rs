//! Projection - select and order the output field set

use crate::cleaning::types::Table;

/// Fields kept in the final extract, in output order.
pub const OUTPUT_COLUMNS: [&str; 9] = [
    "period_begin",
    "period_end",
    "region",
    "state_code",
    "median_sale_price",
    "homes_sold",
    "inventory",
    "median_dom",
    "months_of_supply",
];

/// Keep only the wanted columns, in the wanted order, silently omitting
/// any that the record set does not have.
pub fn project(table: Table, wanted: &[&str]) -> Table {
    let keep: Vec<usize> = wanted
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    let columns = keep.iter().map(|&i| table.columns[i].clone()).collect();
    let rows = table
        .rows
        .into_iter()
        .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Table { columns, rows }
}
