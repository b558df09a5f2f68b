use crate::domain::model::RemoteFeedLoaderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client could not be built: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("Feed load failed: {0}")]
    LoadError(#[from] RemoteFeedLoaderError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FeedError {
    /// Process exit code used by the `feed-loader` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            FeedError::LoadError(RemoteFeedLoaderError::Connectivity) => 2,
            FeedError::LoadError(RemoteFeedLoaderError::InvalidData) => 3,
            FeedError::IoError(_)
            | FeedError::HttpClientError(_)
            | FeedError::ConfigError { .. }
            | FeedError::MissingConfigError { .. }
            | FeedError::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
