mod series;
mod stats;

pub use series::{Observation, ScanData};
pub use stats::{parse_csv_line, GameStat, LOG_HEADER};
