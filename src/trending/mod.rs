pub mod appwrite;
pub mod memory;

pub use appwrite::AppwriteStore;
pub use memory::MemorySearchStore;

use crate::tmdb::Movie;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Permission denied: {0}")]
    Permission(String),
    #[error("Store API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Search count for one distinct search term
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRecord {
    #[serde(rename = "$id")]
    pub id: String,
    pub term: String,
    pub count: u64,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub movie_id: String,
    #[serde(rename = "$createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "$updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Attributes written when a term is searched for the first time
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewSearchRecord {
    pub term: String,
    pub count: u64,
    pub poster_url: String,
    pub movie_id: String,
}

/// Attributes written on every later search for the same term
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRecordUpdate {
    pub count: u64,
    pub poster_url: String,
    pub movie_id: String,
}

/// Trait for the search-count store (Appwrite in production, memory otherwise)
#[async_trait::async_trait]
pub trait SearchStore: Send + Sync {
    /// Find the record for an exact term
    async fn find_by_term(&self, term: &str) -> Result<Option<SearchRecord>, StoreError>;

    async fn create_record(&self, record: NewSearchRecord) -> Result<SearchRecord, StoreError>;

    async fn update_record(
        &self,
        id: &str,
        update: SearchRecordUpdate,
    ) -> Result<SearchRecord, StoreError>;

    /// Up to `limit` records, highest count first
    async fn get_trending(&self, limit: usize) -> Result<Vec<SearchRecord>, StoreError>;

    /// Create the term's record with count 1, or bump the existing one
    ///
    /// Read-then-write, so concurrent writers for the same term can lose
    /// increments. Poster and movie id always take the latest values.
    async fn record_search(&self, term: &str, movie: &Movie) -> Result<SearchRecord, StoreError> {
        let poster_url = movie.poster_url().unwrap_or_default();
        let movie_id = movie.id.to_string();

        match self.find_by_term(term).await? {
            Some(existing) => {
                let record = self
                    .update_record(
                        &existing.id,
                        SearchRecordUpdate {
                            count: existing.count + 1,
                            poster_url,
                            movie_id,
                        },
                    )
                    .await?;
                info!("Search count for '{}' is now {}", term, record.count);
                Ok(record)
            }
            None => {
                let record = self
                    .create_record(NewSearchRecord {
                        term: term.to_string(),
                        count: 1,
                        poster_url,
                        movie_id,
                    })
                    .await?;
                info!("Started counting searches for '{}'", term);
                Ok(record)
            }
        }
    }
}
