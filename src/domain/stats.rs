use crate::error::{Result, WatchError};
use chrono::{DateTime, Local};

pub const LOG_HEADER: &str = "EpochMilli,Date,ID,Name,PlayTimeTwoWeeksMinutes,PlayTimeForeverMinutes";

/// One record from the Steam API: a game and its playtime counters at the
/// moment of sampling. `playtime_forever_minutes` is cumulative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStat {
    pub id: String,
    pub name: String,
    pub playtime_two_weeks_minutes: i64,
    pub playtime_forever_minutes: i64,
}

impl GameStat {
    pub fn csv_line(&self, now: DateTime<Local>) -> String {
        [
            now.timestamp_millis().to_string(),
            now.format("%Y-%m-%d").to_string(),
            self.id.clone(),
            self.name.clone(),
            self.playtime_two_weeks_minutes.to_string(),
            self.playtime_forever_minutes.to_string(),
        ]
        .join(",")
    }
}

/// Parses one log row back into its timestamp and stat.
///
/// Display names may contain commas and are written unescaped, so a general
/// CSV reader would reject those rows. The integer fields sit at fixed
/// positions from both ends of the record, which lets the name be recovered
/// by rejoining everything in between.
pub fn parse_csv_line(line: &str, line_no: usize) -> Result<(i64, GameStat)> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        return Err(malformed(
            line_no,
            format!("expected at least 6 fields, got {}", fields.len()),
        ));
    }

    let epoch_millis = fields[0]
        .parse()
        .map_err(|_| malformed(line_no, format!("bad EpochMilli {:?}", fields[0])))?;
    let playtime_two_weeks_minutes = fields[fields.len() - 2].parse().map_err(|_| {
        malformed(
            line_no,
            format!("bad PlayTimeTwoWeeksMinutes {:?}", fields[fields.len() - 2]),
        )
    })?;
    let playtime_forever_minutes = fields[fields.len() - 1].parse().map_err(|_| {
        malformed(
            line_no,
            format!("bad PlayTimeForeverMinutes {:?}", fields[fields.len() - 1]),
        )
    })?;

    Ok((
        epoch_millis,
        GameStat {
            id: fields[2].to_string(),
            name: fields[3..fields.len() - 2].join(","),
            playtime_two_weeks_minutes,
            playtime_forever_minutes,
        },
    ))
}

fn malformed(line: usize, reason: String) -> WatchError {
    WatchError::MalformedRecord { line, reason }
}
