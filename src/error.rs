use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Steam API error: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, WatchError>;
