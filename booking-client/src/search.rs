//! Debounced navbar search
//!
//! Keystrokes are pushed into the dispatcher as they happen. Once the input
//! has been quiet for the debounce window the latest query goes to the
//! [`SearchSource`] and the results are published on a `watch` channel.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::Listing;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::{ClientResult, HttpClient};

/// Quiet period before a query is dispatched
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Most suggestions shown under the search box
pub const MAX_SUGGESTIONS: usize = 8;

/// Where dispatched queries are answered
#[async_trait]
pub trait SearchSource: Send + Sync + 'static {
    async fn search(&self, query: &str) -> ClientResult<Vec<Listing>>;
}

/// In-memory catalog of events, play venues and dining outlets
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl CatalogSource {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(RwLock::new(listings)),
        }
    }

    /// Build the catalog from the three browse endpoints
    pub async fn load(client: &HttpClient) -> ClientResult<Self> {
        let (events, play, dining) = tokio::try_join!(
            client.list_events(),
            client.list_play_venues(),
            client.list_dining_venues(),
        )?;

        let mut listings: Vec<Listing> = events.iter().map(Listing::from).collect();
        listings.extend(play.iter().map(Listing::from));
        listings.extend(dining.iter().map(Listing::from));
        tracing::info!(count = listings.len(), "Search catalog loaded");
        Ok(Self::new(listings))
    }

    pub fn replace(&self, listings: Vec<Listing>) {
        *self.listings.write() = listings;
    }

    pub fn len(&self) -> usize {
        self.listings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.read().is_empty()
    }

    pub fn filter(&self, query: &str) -> Vec<Listing> {
        self.listings
            .read()
            .iter()
            .filter(|listing| listing.matches(query))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SearchSource for CatalogSource {
    async fn search(&self, query: &str) -> ClientResult<Vec<Listing>> {
        Ok(self.filter(query))
    }
}

/// Latest published search state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub listings: Vec<Listing>,
    /// User-facing reason the last search failed
    pub error: Option<String>,
}

impl SearchResults {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Debounced search worker handle
#[derive(Debug)]
pub struct SearchDispatcher {
    queries: mpsc::UnboundedSender<String>,
    results: watch::Receiver<SearchResults>,
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl SearchDispatcher {
    /// Spawn with the default 300 ms window
    pub fn spawn<S: SearchSource>(source: S) -> Self {
        Self::with_debounce(source, Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }

    pub fn with_debounce<S: SearchSource>(source: S, debounce: Duration) -> Self {
        let (queries, query_rx) = mpsc::unbounded_channel();
        let (results_tx, results) = watch::channel(SearchResults::default());
        let shutdown = CancellationToken::new();

        let worker = SearchWorker {
            source,
            debounce,
            results: results_tx,
            shutdown: shutdown.clone(),
        };
        let handle = tokio::spawn(worker.run(query_rx));

        Self {
            queries,
            results,
            shutdown,
            handle,
        }
    }

    /// Push the current search box contents; `false` once stopped
    pub fn push(&self, query: impl Into<String>) -> bool {
        self.queries.send(query.into()).is_ok()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchResults> {
        self.results.clone()
    }

    pub fn latest(&self) -> SearchResults {
        self.results.borrow().clone()
    }

    /// Stop the worker; a pending query is dropped
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Wait for the worker to exit
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            tracing::warn!("Search worker ended abnormally: {e}");
        }
    }
}

struct SearchWorker<S> {
    source: S,
    debounce: Duration,
    results: watch::Sender<SearchResults>,
    shutdown: CancellationToken,
}

impl<S: SearchSource> SearchWorker<S> {
    async fn run(self, mut queries: mpsc::UnboundedReceiver<String>) {
        tracing::debug!(debounce_ms = self.debounce.as_millis() as u64, "Search worker started");

        let mut pending: Option<String> = None;
        let mut deadline: Option<Instant> = None;

        loop {
            let sleep_until =
                deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    tracing::debug!("Search worker shutting down");
                    break;
                }

                _ = tokio::time::sleep_until(sleep_until), if deadline.is_some() => {
                    deadline = None;
                    if let Some(query) = pending.take() {
                        self.dispatch(query).await;
                    }
                }

                query = queries.recv() => {
                    let Some(query) = query else {
                        tracing::debug!("Search input closed");
                        break;
                    };
                    if query.trim().is_empty() {
                        pending = None;
                        deadline = None;
                        self.results.send_replace(SearchResults {
                            query,
                            ..Default::default()
                        });
                    } else {
                        pending = Some(query);
                        deadline = Some(Instant::now() + self.debounce);
                    }
                }
            }
        }

        tracing::debug!("Search worker stopped");
    }

    async fn dispatch(&self, query: String) {
        let results = match self.source.search(query.trim()).await {
            Ok(listings) => {
                tracing::info!(%query, results = listings.len(), "Search dispatched");
                SearchResults {
                    query,
                    listings,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(%query, "Search failed: {e}");
                SearchResults {
                    query,
                    listings: Vec::new(),
                    error: Some(e.user_message()),
                }
            }
        };
        self.results.send_replace(results);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use shared::BookingType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn listing(kind: BookingType, name: &str, city: &str) -> Listing {
        Listing {
            kind,
            id: name.to_lowercase(),
            name: name.into(),
            slug: shared::util::slugify(name),
            city: city.into(),
        }
    }

    fn catalog() -> CatalogSource {
        CatalogSource::new(vec![
            listing(BookingType::Play, "Smash Arena", "Pune"),
            listing(BookingType::Dining, "Toit Brewpub", "Bengaluru"),
            listing(BookingType::Event, "Sunburn Arena", "Pune"),
        ])
    }

    #[derive(Clone)]
    struct Counting {
        inner: CatalogSource,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SearchSource for Counting {
        async fn search(&self, query: &str) -> ClientResult<Vec<Listing>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.search(query).await
        }
    }

    fn counting() -> (Counting, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Counting {
                inner: catalog(),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }

    struct Unreachable;

    #[async_trait]
    impl SearchSource for Unreachable {
        async fn search(&self, _query: &str) -> ClientResult<Vec<Listing>> {
            Err(ClientError::Config("catalog unavailable".into()))
        }
    }

    #[test]
    fn test_catalog_filter() {
        let names: Vec<_> = catalog()
            .filter("arena pune")
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Smash Arena", "Sunburn Arena"]);
        assert!(catalog().filter("goa").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_dispatches_latest_query_once() {
        let (source, calls) = counting();
        let dispatcher = SearchDispatcher::spawn(source);
        let mut results = dispatcher.subscribe();

        dispatcher.push("s");
        dispatcher.push("sm");
        dispatcher.push("smash");

        results.changed().await.unwrap();
        let latest = results.borrow().clone();
        assert_eq!(latest.query, "smash");
        assert_eq!(latest.listings.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_inside_window_restarts_it() {
        let (source, calls) = counting();
        let dispatcher = SearchDispatcher::spawn(source);
        let mut results = dispatcher.subscribe();
        let start = Instant::now();

        dispatcher.push("toit");
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        dispatcher.push("pune");

        results.changed().await.unwrap();
        assert_eq!(results.borrow().query, "pune");
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_clears_without_dispatch() {
        let (source, calls) = counting();
        let dispatcher = SearchDispatcher::spawn(source);
        let mut results = dispatcher.subscribe();

        dispatcher.push("arena");
        dispatcher.push("   ");

        results.changed().await.unwrap();
        assert!(results.borrow().listings.is_empty());
        tokio::time::sleep(Duration::from_millis(DEFAULT_DEBOUNCE_MS * 2)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.latest().query, "   ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_search_publishes_error() {
        let dispatcher = SearchDispatcher::spawn(Unreachable);
        let mut results = dispatcher.subscribe();

        dispatcher.push("arena");
        results.changed().await.unwrap();
        let latest = results.borrow().clone();
        assert_eq!(latest.query, "arena");
        assert!(latest.listings.is_empty());
        assert!(latest.is_error());
        assert!(latest.error.unwrap().contains("catalog unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_search_has_no_error() {
        let (source, _calls) = counting();
        let dispatcher = SearchDispatcher::spawn(source);
        let mut results = dispatcher.subscribe();

        dispatcher.push("goa");
        results.changed().await.unwrap();
        let latest = results.borrow().clone();
        assert!(latest.listings.is_empty());
        assert_eq!(latest.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_worker() {
        let (source, calls) = counting();
        let dispatcher = SearchDispatcher::spawn(source);
        let mut results = dispatcher.subscribe();

        dispatcher.push("arena");
        dispatcher.shutdown();
        dispatcher.join().await;

        assert!(results.changed().await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
