use crate::clients::{ClientPermit, SteamClient};
use crate::config::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::services::collector::CollectService;
use crate::services::{report, scan};
use tracing::{error, info};

mod clients;
mod config;
mod domain;
mod error;
mod services;
mod storage;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::new()?;

    match config.command() {
        Command::Collect => {
            let client = SteamClient::new(
                ClientPermit::new(),
                config.args.api_key.clone(),
                config.args.steam_id,
                config.http_client.clone(),
            )?;
            CollectService::new(client, &config.args.log_file).run().await?;
        }
        Command::Report => {
            let data = scan::scan_log(&config.args.log_file)?;
            let lines = report::build_report(&data);
            storage::write_report(&config.args.report_file, &lines)?;
            info!("Report written to {:?}", config.args.report_file);
        }
    }

    Ok(())
}
