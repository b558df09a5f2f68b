use crate::domain::model::{FeedItem, HttpResponse, RemoteFeedLoaderError};
use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Failure reported by an [`HttpClient`] when no usable HTTP response came back.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

impl TransportError {
    pub fn request(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        TransportError::Request(error.into())
    }
}

pub type HttpClientResult = std::result::Result<HttpResponse, TransportError>;

pub type LoadFeedResult = std::result::Result<Vec<FeedItem>, RemoteFeedLoaderError>;

/// Performs a single HTTP GET.
///
/// Implementations resolve exactly once per call and leave status codes and
/// body decoding to the caller.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> HttpClientResult;
}

#[async_trait]
pub trait FeedLoader: Send + Sync {
    async fn load(&self) -> LoadFeedResult;
}
