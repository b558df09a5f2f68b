//! Status and payload validation for feed responses.
//!
//! Expected payload:
//!
//! ```json
//! { "items": [ { "id": "<uuid>", "description": "...", "location": "...", "image": "<url>" } ] }
//! ```
//!
//! `description` and `location` may be missing or `null`. One malformed
//! element rejects the whole payload.

use crate::domain::model::FeedItem;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

const OK_200: u16 = 200;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("unexpected status code {0}, expected 200")]
    UnexpectedStatus(u16),

    #[error("malformed feed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Validates `status` and decodes `body` into feed items, keeping document order.
pub fn map(body: &[u8], status: u16) -> Result<Vec<FeedItem>, MapperError> {
    if status != OK_200 {
        return Err(MapperError::UnexpectedStatus(status));
    }

    let root: Root = serde_json::from_slice(body)?;
    Ok(root.items.into_iter().map(FeedItem::from).collect())
}
