pub mod config;
pub mod error;
pub mod race;

pub use config::{DEFAULT_COUNTY, ElectionFile, ScanConfig};
pub use error::AppError;
pub use race::RaceLabel;
