//! Operator diagnostics emitted at fixed pipeline checkpoints
//!
//! Observational only: the transformation stages never call into this
//! module; the pipeline runner invokes it between stages.

use crate::cleaning::types::Table;
use std::path::Path;
use tracing::info;

/// Cap on the distinct values shown per diagnostic sample.
const SAMPLE_LIMIT: usize = 20;

pub fn post_load(table: &Table) {
    info!(
        "Loaded {} rows, {} columns",
        table.row_count(),
        table.columns.len()
    );
}

/// Row count plus small samples of the region columns, so an operator can
/// spot a bad state code or metro substring without re-running.
pub fn post_region_filter(table: &Table) {
    info!("Rows after region filtering: {}", table.row_count());
    info!(
        "Distinct state codes (first {}): {:?}",
        SAMPLE_LIMIT,
        table.distinct_text_sample("state_code", SAMPLE_LIMIT)
    );
    info!(
        "Example parent metro region values (first {}): {:?}",
        SAMPLE_LIMIT,
        table.distinct_text_sample("parent_metro_region", SAMPLE_LIMIT)
    );
}

pub fn pre_write(table: &Table, path: &Path) {
    info!("Writing {} rows to {:?}", table.row_count(), path);
}
