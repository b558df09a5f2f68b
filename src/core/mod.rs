pub mod feed_items_mapper;
pub mod remote_feed_loader;

pub use crate::domain::model::{FeedItem, HttpResponse};
pub use crate::domain::ports::{FeedLoader, HttpClient, HttpClientResult, LoadFeedResult};
pub use remote_feed_loader::{RemoteFeedLoader, RemoteFeedLoaderError};
