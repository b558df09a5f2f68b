use serde::Serialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

/// A single entry of a remote feed.
///
/// Values are immutable once built; equality compares all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn image_url(&self) -> &Url {
        &self.image_url
    }
}

/// Raw outcome of a successful HTTP exchange, before any status or body checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub body: Vec<u8>,
    pub status: u16,
    /// Final URL of the response, after redirects.
    pub url: Url,
}

/// Every way a remote load can fail, as seen by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFeedLoaderError {
    #[error("could not reach the feed endpoint")]
    Connectivity,

    #[error("feed endpoint returned invalid data")]
    InvalidData,
}
