use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base URL for poster images at the size the cards render
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A movie as returned by the catalog search/discover endpoints
///
/// Only the fields the UI renders are typed; everything else the catalog
/// sends is kept in `extra` and passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub original_language: Option<String>,
    pub release_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    /// Full poster URL, if the catalog has a poster for this movie
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }

    /// Release year parsed from `release_date` ("2021-09-15" -> "2021")
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }
}

/// Raw catalog response body
///
/// `response` and `Error` are only present when the API reports a
/// logical failure inside an otherwise successful HTTP response.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogPayload {
    pub response: Option<bool>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    pub results: Option<Vec<Movie>>,
}
