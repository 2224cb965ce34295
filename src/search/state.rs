use crate::tmdb::Movie;
use crate::trending::SearchRecord;

/// Where the current catalog fetch stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Snapshot of everything the search page renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Raw text in the search box
    pub search_term: String,
    /// Last value that stayed unchanged for the whole debounce period
    pub debounced_search_term: String,
    pub movies: Vec<Movie>,
    pub trending: Vec<SearchRecord>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub phase: FetchPhase,
}

impl SearchState {
    pub(crate) fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error_message = None;
        self.phase = FetchPhase::Loading;
    }

    pub(crate) fn succeed(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.error_message = None;
        self.is_loading = false;
        self.phase = FetchPhase::Success;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.movies.clear();
        self.error_message = Some(message);
        self.is_loading = false;
        self.phase = FetchPhase::Failed;
    }
}
