use crate::clients::SteamClient;
use crate::error::Result;
use crate::storage;
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

pub struct CollectService {
    client: SteamClient,
    log_file: PathBuf,
}

impl CollectService {
    pub fn new(client: SteamClient, log_file: impl Into<PathBuf>) -> Self {
        Self {
            client,
            log_file: log_file.into(),
        }
    }

    /// One sampling cycle: fetch the recently played stats and append them,
    /// all tagged with a single wall-clock timestamp.
    pub async fn run(&self) -> Result<()> {
        let stats = self.client.recently_played().await?;
        info!("Fetched {} recently played games", stats.len());

        storage::append_stats(&self.log_file, &stats, Local::now())?;
        info!("Appended samples to {:?}", self.log_file);
        Ok(())
    }
}
