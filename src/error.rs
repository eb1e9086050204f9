use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("malformed row {index}: {reason}")]
    MalformedRow { index: usize, reason: String },

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeaderboardError>;
