pub mod client;
pub mod models;

pub use client::TmdbClient;
pub use models::Movie;

use reqwest::{Error as ReqwestError, StatusCode};
use thiserror::Error;

/// Fallback message when the catalog reports a failure without text
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch movies";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Catalog returned HTTP {0}")]
    Status(StatusCode),
    /// Well-formed response whose payload reports a logical failure
    #[error("{0}")]
    Application(String),
    #[error("Missing catalog API token")]
    MissingToken,
}

/// Trait for movie catalog lookups (allows scripted catalogs in tests)
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies by title
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError>;

    /// Popular movies, used when there is no query
    async fn discover(&self) -> Result<Vec<Movie>, CatalogError>;
}
