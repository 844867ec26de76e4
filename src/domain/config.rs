//! Scan configuration: which files to read and which county to keep.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Days, NaiveDate};

/// County scanned when none is given on the command line.
pub const DEFAULT_COUNTY: &str = "Ingham";

/// Election years covered by the stock file layout, in report order.
const GENERAL_ELECTION_YEARS: [i32; 3] = [2024, 2022, 2020];

/// One result file to scan, plus the label shown in its report heading.
#[derive(Debug, Clone)]
pub struct ElectionFile {
    /// Heading label, the election year as text.
    pub label: String,
    /// Full path to the precinct-level result CSV.
    pub path: PathBuf,
}

/// Explicit configuration for one scan run.
///
/// The driver receives everything it needs through this value; nothing is
/// read from process-wide state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// County the row filter matches against, exactly and case-sensitively.
    pub target_county: String,
    /// Files to process, in report order.
    pub files: Vec<ElectionFile>,
}

impl ScanConfig {
    /// The stock layout: the three most recent Michigan November general
    /// elections, resolved inside `data_dir` under the
    /// `YYYYMMDD__mi__general__precinct.csv` naming convention.
    pub fn november_generals(target_county: &str, data_dir: &Path) -> Self {
        let files = GENERAL_ELECTION_YEARS
            .iter()
            .map(|&year| ElectionFile {
                label: year.to_string(),
                path: data_dir.join(precinct_file_name(year)),
            })
            .collect();

        ScanConfig { target_county: target_county.to_string(), files }
    }
}

/// File name of a Michigan precinct-level general result file for `year`.
fn precinct_file_name(year: i32) -> String {
    format!("{}__mi__general__precinct.csv", general_election_day(year).format("%Y%m%d"))
}

/// The statutory general election day: the first Tuesday after the first
/// Monday of November.
fn general_election_day(year: i32) -> NaiveDate {
    let november_first =
        NaiveDate::from_ymd_opt(year, 11, 1).expect("November 1st is a valid date in every year");
    let days_until_monday = (7 - november_first.weekday().num_days_from_monday()) % 7;
    november_first + Days::new(u64::from(days_until_monday + 1))
}
