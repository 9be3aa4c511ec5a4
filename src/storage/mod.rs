use crate::domain::{GameStat, LOG_HEADER};
use crate::error::Result;
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Spreadsheet tools need the BOM to detect UTF-8 and keep non-ASCII game
/// names intact.
const BOM: &str = "\u{feff}";

/// Appends one row per stat, creating the file with a BOM and header row on
/// first use. The file is never locked; concurrent collectors are not
/// supported.
pub fn append_stats(path: &Path, stats: &[GameStat], now: DateTime<Local>) -> Result<()> {
    let mut file = match OpenOptions::new().append(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let mut file = File::create(path)?;
            file.write_all(BOM.as_bytes())?;
            writeln!(file, "{LOG_HEADER}")?;
            file
        }
        Err(err) => return Err(err.into()),
    };

    for stat in stats {
        writeln!(file, "{}", stat.csv_line(now))?;
    }
    Ok(())
}

/// Writes the report from scratch; an existing file is truncated first.
pub fn write_report(path: &Path, lines: &[String]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(BOM.as_bytes())?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
