//! The report command: scan each configured file and print its race list.

use crate::app::extract::extract_races;
use crate::domain::{AppError, RaceLabel, ScanConfig};

const SEPARATOR_WIDTH: usize = 60;

/// Execute the report command.
///
/// Processes the configured files strictly in order and prints one block per
/// file. The first failing file aborts the run; later files are not
/// attempted.
pub fn execute(config: &ScanConfig) -> Result<(), AppError> {
    for file in &config.files {
        let races = extract_races(&file.path, &config.target_county)?;
        println!();
        print!("{}", render_block(&file.label, &races));
    }
    Ok(())
}

/// Render one report block for a file's sorted race list.
pub fn render_block(label: &str, races: &[RaceLabel]) -> String {
    let rule = "=".repeat(SEPARATOR_WIDTH);
    let mut block = String::new();
    block.push_str(&rule);
    block.push('\n');
    block.push_str(&format!("November {label} General Election - Races Available\n"));
    block.push_str(&rule);
    block.push('\n');
    for race in races {
        block.push_str(&format!("  - {race}\n"));
    }
    block.push('\n');
    block.push_str(&format!("Total races: {}\n", races.len()));
    block
}
