use crate::core::feed_items_mapper;
pub use crate::domain::model::RemoteFeedLoaderError;
use crate::domain::ports::{FeedLoader, HttpClient, LoadFeedResult};
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tokio::task::JoinHandle;
use url::Url;

/// Loads a feed from one fixed URL through an [`HttpClient`].
///
/// Each load issues exactly one request; nothing is cached or retried.
pub struct RemoteFeedLoader<C: HttpClient + ?Sized> {
    url: Url,
    client: Arc<C>,
    // Tasks spawned by `load_with` hold a `Weak` to this; once the loader is
    // dropped their outcome is discarded.
    alive: Arc<()>,
}

impl<C: HttpClient + ?Sized> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: Arc<C>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Starts a load on the current tokio runtime and reports the outcome to
    /// `completion`.
    ///
    /// `completion` runs at most once, and never if this loader has been
    /// dropped before the request resolves. The request itself is not
    /// cancelled. The returned handle only signals that the task finished.
    ///
    /// Each call spawns its own task, so on a multi-threaded runtime separate
    /// calls may reach the [`HttpClient`] in any order. Await [`FeedLoader::load`]
    /// sequentially when requests must start in call order.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn load_with<F>(&self, completion: F) -> JoinHandle<()>
    where
        C: 'static,
        F: FnOnce(LoadFeedResult) + Send + 'static,
    {
        let url = self.url.clone();
        let client = Arc::clone(&self.client);
        let alive: Weak<()> = Arc::downgrade(&self.alive);

        tokio::spawn(async move {
            let result = fetch(&url, client.as_ref()).await;

            if alive.upgrade().is_none() {
                tracing::trace!("Loader for {} dropped, discarding outcome", url);
                return;
            }

            completion(result);
        })
    }
}

#[async_trait]
impl<C: HttpClient + ?Sized> FeedLoader for RemoteFeedLoader<C> {
    async fn load(&self) -> LoadFeedResult {
        fetch(&self.url, self.client.as_ref()).await
    }
}

async fn fetch<C: HttpClient + ?Sized>(url: &Url, client: &C) -> LoadFeedResult {
    tracing::debug!("Requesting feed from: {}", url);

    let response = match client.get(url).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Feed request to {} failed: {}", url, e);
            return Err(RemoteFeedLoaderError::Connectivity);
        }
    };

    tracing::debug!(
        "Feed response from {}: status {}, {} bytes",
        response.url,
        response.status,
        response.body.len()
    );

    match feed_items_mapper::map(&response.body, response.status) {
        Ok(items) => {
            tracing::info!("Loaded {} feed items from {}", items.len(), url);
            Ok(items)
        }
        Err(e) => {
            tracing::warn!("Rejected feed response from {}: {}", url, e);
            Err(RemoteFeedLoaderError::InvalidData)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HttpResponse;
    use crate::domain::ports::{HttpClientResult, TransportError};
    use std::sync::Mutex;

    /// Answers every request with a clone of a canned response.
    struct StubHttpClient {
        status: u16,
        body: Vec<u8>,
        requested: Mutex<Vec<Url>>,
    }

    impl StubHttpClient {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.as_bytes().to_vec(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpClient for StubHttpClient {
        async fn get(&self, url: &Url) -> HttpClientResult {
            self.requested.lock().unwrap().push(url.clone());
            Ok(HttpResponse {
                body: self.body.clone(),
                status: self.status,
                url: url.clone(),
            })
        }
    }

    struct FailingHttpClient;

    #[async_trait]
    impl HttpClient for FailingHttpClient {
        async fn get(&self, _url: &Url) -> HttpClientResult {
            Err(TransportError::request("connection reset"))
        }
    }

    fn a_url() -> Url {
        Url::parse("http://a-given-url.com").unwrap()
    }

    #[tokio::test]
    async fn test_new_does_not_request_data() {
        let client = Arc::new(StubHttpClient::new(200, r#"{"items": []}"#));
        let _loader = RemoteFeedLoader::new(a_url(), Arc::clone(&client));

        assert!(client.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_delivers_empty_feed_on_200_with_empty_items() {
        let client = Arc::new(StubHttpClient::new(200, r#"{"items": []}"#));
        let loader = RemoteFeedLoader::new(a_url(), Arc::clone(&client));

        let result = loader.load().await;

        assert_eq!(result, Ok(vec![]));
        assert_eq!(*client.requested.lock().unwrap(), vec![a_url()]);
    }

    #[tokio::test]
    async fn test_load_twice_requests_twice() {
        let client = Arc::new(StubHttpClient::new(200, r#"{"items": []}"#));
        let loader = RemoteFeedLoader::new(a_url(), Arc::clone(&client));

        let _ = loader.load().await;
        let _ = loader.load().await;

        assert_eq!(*client.requested.lock().unwrap(), vec![a_url(), a_url()]);
    }

    #[tokio::test]
    async fn test_load_delivers_connectivity_on_transport_error() {
        let loader = RemoteFeedLoader::new(a_url(), Arc::new(FailingHttpClient));

        assert_eq!(
            loader.load().await,
            Err(RemoteFeedLoaderError::Connectivity)
        );
    }

    #[tokio::test]
    async fn test_load_delivers_invalid_data_on_bad_status() {
        let client = Arc::new(StubHttpClient::new(404, r#"{"items": []}"#));
        let loader = RemoteFeedLoader::new(a_url(), client);

        assert_eq!(loader.load().await, Err(RemoteFeedLoaderError::InvalidData));
    }

    #[tokio::test]
    async fn test_loader_accepts_trait_object_client() {
        let client: Arc<dyn HttpClient> = Arc::new(FailingHttpClient);
        let loader: Box<dyn FeedLoader> = Box::new(RemoteFeedLoader::new(a_url(), client));

        assert_eq!(
            loader.load().await,
            Err(RemoteFeedLoaderError::Connectivity)
        );
    }

    #[tokio::test]
    async fn test_load_with_delivers_outcome_to_completion() {
        let loader = RemoteFeedLoader::new(a_url(), Arc::new(FailingHttpClient));
        let (tx, rx) = tokio::sync::oneshot::channel();

        loader
            .load_with(move |result| {
                let _ = tx.send(result);
            })
            .await
            .unwrap();

        assert_eq!(rx.await.unwrap(), Err(RemoteFeedLoaderError::Connectivity));
    }
}
