pub mod service;
pub mod state;

pub use service::{SearchCommand, SearchHandle, SearchService, SearchSettings, FETCH_ERROR_MESSAGE};
pub use state::{FetchPhase, SearchState};
