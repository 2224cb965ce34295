use crate::config::TmdbConfig;
use crate::tmdb::models::{CatalogPayload, Movie};
use crate::tmdb::{CatalogError, MovieCatalog, GENERIC_FAILURE_MESSAGE};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.trim().is_empty() {
            return Err(CatalogError::MissingToken);
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint for a query: discovery when empty, title search otherwise
    pub fn endpoint_for(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}/discover/movie?sort_by=popularity.desc", self.base_url)
        } else {
            format!(
                "{}/search/movie?query={}",
                self.base_url,
                urlencoding::encode(query)
            )
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Movie>, CatalogError> {
        debug!("📡 TMDB API: GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("✗ TMDB API error: {}", status);
            return Err(CatalogError::Status(status));
        }

        let payload: CatalogPayload = response.json().await?;

        if payload.response == Some(false) {
            let message = payload
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            warn!("✗ TMDB reported failure: {}", message);
            return Err(CatalogError::Application(message));
        }

        let movies = payload.results.unwrap_or_default();
        info!("✓ TMDB returned {} movie(s)", movies.len());
        Ok(movies)
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        self.fetch(&self.endpoint_for(query)).await
    }

    async fn discover(&self) -> Result<Vec<Movie>, CatalogError> {
        self.fetch(&self.endpoint_for("")).await
    }
}
