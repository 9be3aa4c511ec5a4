use std::collections::HashMap;

/// One sampled (calendar day, cumulative minutes) pair for a single game.
/// Dates use the zero-padded `%Y-%m-%d` form, so lexical order is
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub date: String,
    pub minutes: i64,
}

/// Everything the log scan produces: the last-seen display name per game id
/// and each game's observations in the order they were appended. Series are
/// not sorted here; the report builder sorts before differencing.
#[derive(Debug, Default)]
pub struct ScanData {
    pub names: HashMap<String, String>,
    pub series: HashMap<String, Vec<Observation>>,
}
