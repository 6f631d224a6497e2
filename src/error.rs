use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservatoryError {
    #[error("data directory does not exist: {0}")]
    DataDirNotFound(String),

    #[error("table file not found: {0}{1}")]
    TableNotFound(String, String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unknown country code: {0}")]
    UnknownCountry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ObservatoryError>;
