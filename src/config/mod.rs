use crate::config::cli::{Args, Command};
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        let http_client = Client::builder()
            .timeout(Duration::from_secs(5))
            .user_agent("steamwatch/0.1")
            .build()?;

        Ok(Self { args, http_client })
    }

    /// Report mode is the default when no subcommand is given.
    pub fn command(&self) -> Command {
        self.args.command.unwrap_or(Command::Report)
    }
}
