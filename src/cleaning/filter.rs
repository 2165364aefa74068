//! Row filters - narrow the record set down to the target market slice
//!
//! Three predicates applied in sequence. Each one coerces or inspects a
//! single column and keeps the rows that match; a record surviving all
//! three proceeds to field derivation.

use crate::cleaning::error::Result;
use crate::cleaning::types::Table;

/// Property type id meaning "all residential property types combined".
pub const AGGREGATE_PROPERTY_TYPE: f64 = -1.0;

/// Placeholder price meaning "no data", not a real observation.
pub const PLACEHOLDER_PRICE: f64 = 999_999_999.0;

/// Keep only the aggregate "all residential" rows.
///
/// The id column is coerced to numeric first, so unparseable ids become
/// null and are dropped along with every concrete property type.
pub fn retain_aggregate_type(mut table: Table) -> Result<Table> {
    let idx = table.require_column("property_type_id")?;
    table.coerce_column(idx);
    table.retain_rows(|row| row[idx].number() == Some(AGGREGATE_PROPERTY_TYPE));
    Ok(table)
}

/// Drop rows carrying the placeholder sale price.
///
/// Null prices pass through: the test is equality with the sentinel, not
/// "is a valid price".
pub fn drop_placeholder_prices(mut table: Table) -> Result<Table> {
    let idx = table.require_column("median_sale_price")?;
    table.coerce_column(idx);
    table.retain_rows(|row| row[idx].number() != Some(PLACEHOLDER_PRICE));
    Ok(table)
}

/// Keep rows in the target state whose parent metro contains the target
/// substring, case-insensitively. Rows with a null metro are dropped.
pub fn retain_target_region(
    mut table: Table,
    state_code: &str,
    metro_substring: &str,
) -> Result<Table> {
    let state_idx = table.require_column("state_code")?;
    let metro_idx = table.require_column("parent_metro_region")?;

    let want_state = state_code.to_uppercase();
    let want_metro = metro_substring.to_lowercase();

    table.retain_rows(|row| {
        let state_matches = row[state_idx]
            .text()
            .map_or(false, |s| s.to_uppercase() == want_state);
        let metro_matches = row[metro_idx]
            .text()
            .map_or(false, |s| s.to_lowercase().contains(&want_metro));
        state_matches && metro_matches
    });
    Ok(table)
}
