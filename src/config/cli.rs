use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Steam Web API key from https://steamcommunity.com/dev/apikey
    #[arg(long, default_value = "TOP_SECRET")]
    pub api_key: String,

    /// Steam account ID from your Steam profile page
    #[arg(long, default_value_t = 11223344556677880)]
    pub steam_id: i64,

    /// Append-only playtime log
    #[arg(long, default_value = "steam_profile_watch.csv")]
    pub log_file: PathBuf,

    /// Where the delta report is written
    #[arg(long, default_value = "report.csv")]
    pub report_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Sample the Steam API once and append the stats to the log
    Collect,
    /// Parse the log and write the per-day playtime delta report
    Report,
}
