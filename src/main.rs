use std::path::PathBuf;

use clap::Parser;
use racelist::{AppError, DEFAULT_COUNTY, ScanConfig};

#[derive(Parser)]
#[command(name = "racelist")]
#[command(version)]
#[command(
    about = "List the distinct races found in county election result CSVs",
    long_about = None
)]
struct Cli {
    /// Directory holding the precinct result CSVs (default: the directory
    /// containing this executable)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// County whose rows are scanned, matched exactly
    #[arg(long, default_value = DEFAULT_COUNTY)]
    county: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    let config = ScanConfig::november_generals(&cli.county, &data_dir);
    racelist::report(&config)
}

/// Result files are looked up beside the executable unless `--data-dir`
/// says otherwise.
fn default_data_dir() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(|dir| dir.to_path_buf()).ok_or_else(|| {
        AppError::Configuration("Cannot determine the executable's directory".to_string())
    })
}
