//! Race extraction from precinct-level result files.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord};

use crate::domain::{AppError, RaceLabel};

/// Extract the distinct races recorded for `target_county` in the result
/// file at `path`.
///
/// Rows whose `county` field differs from `target_county` (compared exactly,
/// case-sensitively) are skipped. The returned labels are deduplicated and
/// sorted ascending by code-point order; a file with no matching rows yields
/// an empty vector.
pub fn extract_races(path: &Path, target_county: &str) -> Result<Vec<RaceLabel>, AppError> {
    if !path.is_file() {
        return Err(AppError::ResultFileNotFound(path.display().to_string()));
    }

    let reader = Reader::from_path(path)?;
    collect_races(reader, target_county, &path.display().to_string())
}

/// Single pass over the record stream: filter, derive, dedupe, then sort
/// once at the end. The stream is consumed; re-reading means reopening the
/// source.
fn collect_races<R: Read>(
    mut reader: Reader<R>,
    target_county: &str,
    source: &str,
) -> Result<Vec<RaceLabel>, AppError> {
    let headers = reader.headers()?.clone();
    let county = column_index(&headers, "county", source)?;
    let office = column_index(&headers, "office", source)?;
    let district = column_index(&headers, "district", source)?;

    let mut seen: HashSet<RaceLabel> = HashSet::new();
    for record in reader.records() {
        let record = record?;
        if &record[county] != target_county {
            continue;
        }
        seen.insert(RaceLabel::new(&record[office], &record[district]));
    }

    let mut races: Vec<RaceLabel> = seen.into_iter().collect();
    races.sort();
    Ok(races)
}

fn column_index(headers: &StringRecord, column: &str, source: &str) -> Result<usize, AppError> {
    headers.iter().position(|name| name == column).ok_or_else(|| AppError::MissingColumn {
        column: column.to_string(),
        path: source.to_string(),
    })
}
