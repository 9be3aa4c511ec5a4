use crate::domain::{parse_csv_line, Observation, ScanData};
use crate::error::{Result, WatchError};
use chrono::{Local, TimeZone};
use std::path::Path;
use tracing::warn;

pub fn scan_log(path: &Path) -> Result<ScanData> {
    let raw = std::fs::read_to_string(path)?;
    scan_lines(raw.strip_prefix('\u{feff}').unwrap_or(&raw))
}

/// Turns raw log text (header line included) into per-game observation
/// series plus the name registry. A name shift on a known id is a
/// diagnostic, not an error; the newest name wins.
pub fn scan_lines(input: &str) -> Result<ScanData> {
    let mut data = ScanData::default();

    for (idx, line) in input.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let (epoch_millis, stat) = parse_csv_line(line, line_no)?;
        let date =
            date_from_epoch_millis(epoch_millis).ok_or_else(|| WatchError::MalformedRecord {
                line: line_no,
                reason: format!("timestamp {epoch_millis} out of range"),
            })?;

        if let Some(known) = data.names.get(&stat.id) {
            if *known != stat.name {
                warn!("Name shifted on {} from {} to {}", stat.id, known, stat.name);
            }
        }

        let minutes = stat.playtime_forever_minutes;
        data.names.insert(stat.id.clone(), stat.name);
        data.series
            .entry(stat.id)
            .or_default()
            .push(Observation { date, minutes });
    }

    Ok(data)
}

/// The stored Date column is ignored on read; the day is rederived from the
/// EpochMilli field. A clock or timezone change between write and read can
/// therefore move an observation across days.
pub fn date_from_epoch_millis(epoch_millis: i64) -> Option<String> {
    Local
        .timestamp_millis_opt(epoch_millis)
        .single()
        .map(|ts| ts.format("%Y-%m-%d").to_string())
}
