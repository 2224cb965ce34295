use dioxus::prelude::*;
use marquee::config::Config;
use marquee::search::{SearchService, SearchSettings};
use marquee::tmdb::TmdbClient;
use marquee::trending::{AppwriteStore, MemorySearchStore, SearchStore};
use marquee::ui::{make_config, App};
use marquee::AppContext;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match TmdbClient::new(&config.tmdb) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create movie catalog client: {}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn SearchStore> = match &config.appwrite {
        Some(appwrite) => {
            info!(
                "Recording search counts in Appwrite project {} (collection {})",
                appwrite.project_id, appwrite.collection_id
            );
            Arc::new(AppwriteStore::new(appwrite))
        }
        None => Arc::new(MemorySearchStore::new()),
    };

    // Runtime for the search service; kept alive for the lifetime of the window
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let search_handle = SearchService::start(
        Arc::new(catalog),
        store,
        SearchSettings::from(&config),
        runtime.handle().clone(),
    );

    let context = AppContext {
        config,
        search_handle,
    };

    info!("Launching marquee");

    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
