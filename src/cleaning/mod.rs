//! Cleaning pipeline - functional stages that narrow the raw market
//! tracker dataset down to a single metro area extract

pub mod derive;
pub mod error;
pub mod filter;
pub mod load;
pub mod normalize;
pub mod project;
pub mod report;
pub mod types;
pub mod write;

pub use error::{CleanError, Result};
pub use types::*;

use tracing::info;

/// Run the full pipeline: load, normalize, filter, derive, project, write.
///
/// Each stage consumes the previous stage's record set; diagnostics are
/// emitted at the post-load, post-region-filter and pre-write checkpoints.
pub fn run(config: &ExtractConfig) -> Result<RunSummary> {
    info!("Step 1/5: Loading raw data from {:?}", config.input_path);
    let mut table = load::load_table(&config.input_path)?;
    normalize::normalize_headers(&mut table);
    report::post_load(&table);
    let rows_loaded = table.row_count();

    info!("Step 2/5: Filtering rows...");
    let table = filter::retain_aggregate_type(table)?;
    let table = filter::drop_placeholder_prices(table)?;
    let table = filter::retain_target_region(
        table,
        &config.target_state_code,
        &config.target_metro_substring,
    )?;
    report::post_region_filter(&table);

    info!("Step 3/5: Deriving numeric fields...");
    let table = derive::coerce_numeric_fields(table);
    let table = derive::fill_months_of_supply(table);

    info!("Step 4/5: Projecting output columns...");
    let table = project::project(table, &project::OUTPUT_COLUMNS);

    info!("Step 5/5: Writing extract...");
    report::pre_write(&table, &config.output_path);
    write::write_csv(&table, &config.output_path)?;

    Ok(RunSummary {
        rows_loaded,
        rows_kept: table.row_count(),
        output_path: config.output_path.clone(),
    })
}
