#![allow(dead_code)]

pub mod recording_store;
pub mod scripted_catalog;

pub use recording_store::RecordingStore;
pub use scripted_catalog::{CatalogCall, Scripted, ScriptedCatalog};

use marquee::search::{SearchHandle, SearchState};
use marquee::tmdb::Movie;
use std::time::Duration;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn movie(id: u64, title: &str) -> Movie {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "poster_path": format!("/poster-{}.jpg", id),
        "vote_average": 7.5,
        "original_language": "en",
        "release_date": "2021-09-15",
    }))
    .unwrap()
}

/// Wait until the published search state satisfies `condition`
pub async fn wait_for_state<F>(handle: &SearchHandle, mut condition: F) -> SearchState
where
    F: FnMut(&SearchState) -> bool,
{
    let mut state_rx = handle.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(60), state_rx.wait_for(|s| condition(s)))
        .await
        .expect("timed out waiting for search state")
        .expect("search service stopped");
    let snapshot = state.clone();
    snapshot
}
