pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::ReqwestHttpClient;
pub use config::FeedConfig;
pub use core::{
    FeedItem, FeedLoader, HttpClient, HttpResponse, LoadFeedResult, RemoteFeedLoader,
    RemoteFeedLoaderError,
};
pub use domain::ports::TransportError;
pub use utils::error::{FeedError, Result};
