use std::io;
use thiserror::Error;

/// Custom error type for the dashboard
#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stat collection failed: {0}")]
    Collection(String),

    #[error("Invalid tab set: {0}")]
    InvalidTabs(String),
}

/// Result type alias for the dashboard
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Create a collection error
    pub fn collection<S: Into<String>>(msg: S) -> Self {
        DashError::Collection(msg.into())
    }

    pub fn invalid_tabs<S: Into<String>>(msg: S) -> Self {
        DashError::InvalidTabs(msg.into())
    }
}
