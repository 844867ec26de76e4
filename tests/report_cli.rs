//! End-to-end CLI exercises for the printed report.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FILE_2024: &str = "20241105__mi__general__precinct.csv";
const FILE_2022: &str = "20221108__mi__general__precinct.csv";
const FILE_2020: &str = "20201103__mi__general__precinct.csv";

const HEADER: &str = "county,precinct,office,district,party,candidate,votes";

fn write_results(dir: &Path, name: &str, rows: &[&str]) {
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(name), content).expect("Failed to write fixture CSV");
}

/// A data directory holding all three stock result files.
fn stock_data_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_results(
        dir.path(),
        FILE_2024,
        &[
            "Ingham,Lansing Ward 3,State House,67,DEM,Jane Doe,120",
            "Ingham,Lansing Ward 3,President,,DEM,Kamala Harris,640",
            "Wayne,Detroit 14,President,,DEM,Kamala Harris,995",
        ],
    );
    write_results(dir.path(), FILE_2022, &[
        "Ingham,Okemos 2,Governor,,DEM,Gretchen Whitmer,511",
    ]);
    write_results(dir.path(), FILE_2020, &[
        "Eaton,Delta 4,President,,REP,Donald Trump,388",
    ]);
    dir
}

fn racelist() -> Command {
    Command::cargo_bin("racelist").expect("binary should build")
}

#[test]
fn prints_one_block_per_election_in_order() {
    let dir = stock_data_dir();

    racelist()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("November 2024 General Election - Races Available"))
        .stdout(predicate::str::contains("November 2022 General Election - Races Available"))
        .stdout(predicate::str::contains("November 2020 General Election - Races Available"));
}

#[test]
fn first_block_matches_expected_format_exactly() {
    let dir = stock_data_dir();
    let rule = "=".repeat(60);
    let expected = format!(
        "\n{rule}\nNovember 2024 General Election - Races Available\n{rule}\n  \
         - President\n  - State House - District 67\n\nTotal races: 2\n"
    );

    racelist()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(expected));
}

#[test]
fn elections_without_matching_rows_report_zero_races() {
    let dir = stock_data_dir();

    // The 2020 fixture only carries Eaton County rows.
    racelist()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total races: 0"));
}

#[test]
fn county_flag_switches_the_row_filter() {
    let dir = stock_data_dir();

    racelist()
        .args(["--data-dir", dir.path().to_str().unwrap(), "--county", "Eaton"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  - President"))
        .stdout(predicate::str::contains("Total races: 1"));
}

#[test]
fn missing_result_file_aborts_with_diagnostic() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    // Only one of the three stock files exists.
    write_results(dir.path(), FILE_2024, &[
        "Ingham,Lansing Ward 3,President,,DEM,Kamala Harris,640",
    ]);

    racelist()
        .args(["--data-dir", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Result file not found"))
        .stderr(predicate::str::contains(FILE_2022));
}
