use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid app id '{0}': must be a number (e.g. 292030)")]
    InvalidAppId(String),

    #[error("{0}")]
    Other(String),
}
