use crate::config::Config;
use crate::search::state::SearchState;
use crate::tmdb::{CatalogError, Movie, MovieCatalog};
use crate::trending::{SearchRecord, SearchStore};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc as tokio_mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info, warn};

/// Shown for transport and HTTP failures
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching movies. Please try again later.";

/// Commands sent to the search service
#[derive(Debug, Clone)]
pub enum SearchCommand {
    SetSearchTerm(String),
}

/// Tuning knobs for the search service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    /// How long the search term must stay unchanged before it is fetched
    pub debounce: Duration,
    /// Number of trending searches to show
    pub trending_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            trending_limit: 5,
        }
    }
}

impl From<&Config> for SearchSettings {
    fn from(config: &Config) -> Self {
        Self {
            debounce: config.debounce,
            trending_limit: config.trending_limit,
        }
    }
}

/// Handle to the search service for sending commands and watching state
#[derive(Clone)]
pub struct SearchHandle {
    command_tx: tokio_mpsc::UnboundedSender<SearchCommand>,
    state_rx: watch::Receiver<SearchState>,
}

impl SearchHandle {
    pub fn set_search_term(&self, term: impl Into<String>) {
        let _ = self
            .command_tx
            .send(SearchCommand::SetSearchTerm(term.into()));
    }

    /// Current state snapshot
    pub fn state(&self) -> SearchState {
        self.state_rx.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_rx.clone()
    }
}

enum FetchOutcome {
    Finished(Result<Vec<Movie>, CatalogError>),
    Panicked,
}

enum ServiceEvent {
    FetchCompleted {
        generation: u64,
        query: String,
        outcome: FetchOutcome,
    },
    TrendingLoaded(Vec<SearchRecord>),
}

/// Search service that owns the search page state
///
/// Keystrokes arrive as commands; the term is debounced, fetched from the
/// catalog on a spawned task, and the outcome is folded back into the state
/// here. Every fetch carries a generation number so a slow response for an
/// older term never overwrites the results of a newer one.
pub struct SearchService {
    catalog: Arc<dyn MovieCatalog>,
    store: Arc<dyn SearchStore>,
    settings: SearchSettings,
    command_rx: tokio_mpsc::UnboundedReceiver<SearchCommand>,
    event_tx: tokio_mpsc::UnboundedSender<ServiceEvent>,
    event_rx: tokio_mpsc::UnboundedReceiver<ServiceEvent>,
    state_tx: watch::Sender<SearchState>,
    state: SearchState,
    pending_term: Option<(String, Instant)>,
    generation: u64,
    runtime_handle: tokio::runtime::Handle,
}

impl SearchService {
    pub fn start(
        catalog: Arc<dyn MovieCatalog>,
        store: Arc<dyn SearchStore>,
        settings: SearchSettings,
        runtime_handle: tokio::runtime::Handle,
    ) -> SearchHandle {
        let (command_tx, command_rx) = tokio_mpsc::unbounded_channel();
        let (event_tx, event_rx) = tokio_mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SearchState::default());

        let handle = SearchHandle {
            command_tx,
            state_rx,
        };

        let service = SearchService {
            catalog,
            store,
            settings,
            command_rx,
            event_tx,
            event_rx,
            state_tx,
            state: SearchState::default(),
            pending_term: None,
            generation: 0,
            runtime_handle: runtime_handle.clone(),
        };

        runtime_handle.spawn(service.run());

        handle
    }

    async fn run(mut self) {
        info!("SearchService started");

        self.load_trending();
        // The debounced term starts out empty, which means discovery
        self.start_fetch(String::new());

        loop {
            let deadline = self.pending_term.as_ref().map(|(_, deadline)| *deadline);

            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(SearchCommand::SetSearchTerm(term)) => self.set_search_term(term),
                    None => {
                        info!("Search command channel closed, exiting");
                        break;
                    }
                },
                Some(event) = self.event_rx.recv() => self.handle_event(event),
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.debounce_elapsed();
                }
            }
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state.clone());
    }

    fn set_search_term(&mut self, term: String) {
        self.state.search_term = term.clone();
        self.publish();
        // Every keystroke restarts the quiet period
        self.pending_term = Some((term, Instant::now() + self.settings.debounce));
    }

    fn debounce_elapsed(&mut self) {
        let Some((term, _)) = self.pending_term.take() else {
            return;
        };

        if term == self.state.debounced_search_term {
            debug!("Search term settled on '{}' again, nothing to fetch", term);
            return;
        }

        self.state.debounced_search_term = term.clone();
        self.start_fetch(term);
    }

    fn start_fetch(&mut self, query: String) {
        self.generation += 1;
        let generation = self.generation;

        self.state.begin_fetch();
        self.publish();

        if query.is_empty() {
            info!("🔍 Fetching popular movies (generation {})", generation);
        } else {
            info!("🔍 Searching movies for '{}' (generation {})", query, generation);
        }

        let catalog = self.catalog.clone();
        let event_tx = self.event_tx.clone();

        self.runtime_handle.spawn(async move {
            let request = async {
                if query.is_empty() {
                    catalog.discover().await
                } else {
                    catalog.search(&query).await
                }
            };

            let outcome = match AssertUnwindSafe(request).catch_unwind().await {
                Ok(result) => FetchOutcome::Finished(result),
                Err(_) => FetchOutcome::Panicked,
            };

            let _ = event_tx.send(ServiceEvent::FetchCompleted {
                generation,
                query,
                outcome,
            });
        });
    }

    fn handle_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::FetchCompleted {
                generation,
                query,
                outcome,
            } => self.fetch_completed(generation, query, outcome),
            ServiceEvent::TrendingLoaded(records) => {
                info!("✓ Loaded {} trending search(es)", records.len());
                self.state.trending = records;
                self.publish();
            }
        }
    }

    fn fetch_completed(&mut self, generation: u64, query: String, outcome: FetchOutcome) {
        if generation != self.generation {
            debug!(
                "Discarding stale response for '{}' (generation {}, current {})",
                query, generation, self.generation
            );
            return;
        }

        match outcome {
            FetchOutcome::Finished(Ok(movies)) => {
                let top_result = if query.is_empty() {
                    None
                } else {
                    movies.first().cloned()
                };

                self.state.succeed(movies);
                self.publish();

                if let Some(movie) = top_result {
                    self.record_search(query, movie);
                }
            }
            FetchOutcome::Finished(Err(CatalogError::Application(message))) => {
                warn!("✗ Catalog reported failure for '{}': {}", query, message);
                self.state.fail(message);
                self.publish();
            }
            FetchOutcome::Finished(Err(e)) => {
                error!("Error fetching movies: {}", e);
                self.state.fail(FETCH_ERROR_MESSAGE.to_string());
                self.publish();
            }
            FetchOutcome::Panicked => {
                error!("Error fetching movies: catalog request panicked");
                self.state.fail(FETCH_ERROR_MESSAGE.to_string());
                self.publish();
            }
        }
    }

    /// Bump the term's search count without holding up the search itself
    fn record_search(&self, term: String, movie: Movie) {
        let store = self.store.clone();

        self.runtime_handle.spawn(async move {
            if let Err(e) = store.record_search(&term, &movie).await {
                warn!("Failed to update search count for '{}': {}", term, e);
            }
        });
    }

    fn load_trending(&self) {
        let store = self.store.clone();
        let event_tx = self.event_tx.clone();
        let limit = self.settings.trending_limit;

        self.runtime_handle.spawn(async move {
            match store.get_trending(limit).await {
                Ok(records) => {
                    let _ = event_tx.send(ServiceEvent::TrendingLoaded(records));
                }
                Err(e) => warn!("Error fetching trending movies: {}", e),
            }
        });
    }
}
