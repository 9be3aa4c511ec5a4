use crate::domain::GameStat;
use crate::error::{Result, WatchError};
use reqwest::Client;
use serde::Deserialize;

const RECENTLY_PLAYED_URL: &str =
    "https://api.steampowered.com/IPlayerService/GetRecentlyPlayedGames/v1/";

/// If this is set, the upstream binding would pick it up as a second
/// credential source, so client construction refuses to proceed.
const STEAM_TOKEN_ENV: &str = "STEAM_TOKEN";

/// Token consumed by [`SteamClient::new`]. It is not cloneable, so a permit
/// yields at most one client; `main` creates exactly one per process, and
/// tests can mint their own.
#[derive(Debug, Default)]
pub struct ClientPermit(());

impl ClientPermit {
    pub fn new() -> Self {
        ClientPermit(())
    }
}

#[derive(Debug)]
pub struct SteamClient {
    http: Client,
    api_key: String,
    steam_id: i64,
}

#[derive(Debug, Deserialize)]
struct RecentlyPlayedEnvelope {
    response: RecentlyPlayedBody,
}

#[derive(Debug, Default, Deserialize)]
struct RecentlyPlayedBody {
    #[serde(default)]
    games: Vec<PlayedGame>,
}

#[derive(Debug, Deserialize)]
struct PlayedGame {
    appid: u64,
    name: String,
    #[serde(default)]
    playtime_2weeks: i64,
    playtime_forever: i64,
}

impl SteamClient {
    pub fn new(_permit: ClientPermit, api_key: String, steam_id: i64, http: Client) -> Result<Self> {
        if let Ok(value) = std::env::var(STEAM_TOKEN_ENV) {
            if !value.is_empty() {
                return Err(WatchError::Config(format!(
                    "env {STEAM_TOKEN_ENV} is already set, refusing to install a second API key"
                )));
            }
        }

        Ok(Self {
            http,
            api_key,
            steam_id,
        })
    }

    /// One call to GetRecentlyPlayedGames. The request timeout comes from
    /// the shared HTTP client; expiry surfaces as an error, never a retry.
    pub async fn recently_played(&self) -> Result<Vec<GameStat>> {
        let steam_id = self.steam_id.to_string();
        let body = self
            .http
            .get(RECENTLY_PLAYED_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("steamid", steam_id.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let envelope: RecentlyPlayedEnvelope = serde_json::from_str(&body)?;
        Ok(stats_from(envelope))
    }
}

fn stats_from(envelope: RecentlyPlayedEnvelope) -> Vec<GameStat> {
    envelope
        .response
        .games
        .into_iter()
        .map(|game| GameStat {
            id: game.appid.to_string(),
            name: game.name,
            playtime_two_weeks_minutes: game.playtime_2weeks,
            playtime_forever_minutes: game.playtime_forever,
        })
        .collect()
}
