//! racelist: list the distinct races found in county election result CSVs.
//!
//! Scans precinct-level result files for one county and prints a report
//! block per election with the deduplicated, sorted race labels it found.

pub mod app;
pub mod domain;

pub use app::extract::extract_races;
pub use domain::{AppError, DEFAULT_COUNTY, ElectionFile, RaceLabel, ScanConfig};

/// Print the race report for every file in `config`, in order.
pub fn report(config: &ScanConfig) -> Result<(), AppError> {
    app::commands::report::execute(config)
}
