use marquee::tmdb::{CatalogError, Movie, MovieCatalog};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// What the catalog answers for a query
#[derive(Clone)]
pub enum Scripted {
    Movies(Vec<Movie>),
    Status(u16),
    Application(String),
    Panic,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogCall {
    Search(String),
    Discover,
}

/// Catalog with canned answers per query; the empty query is discovery
///
/// Unscripted queries answer with no movies.
#[derive(Default)]
pub struct ScriptedCatalog {
    responses: Mutex<HashMap<String, (Scripted, Duration)>>,
    calls: Mutex<Vec<CatalogCall>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, query: &str, response: Scripted) -> Self {
        self.respond_after(query, response, Duration::ZERO)
    }

    pub fn respond_after(self, query: &str, response: Scripted, delay: Duration) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(query.to_string(), (response, delay));
        self
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let scripted = self.responses.lock().unwrap().get(query).cloned();
        let Some((response, delay)) = scripted else {
            return Ok(Vec::new());
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match response {
            Scripted::Movies(movies) => Ok(movies),
            Scripted::Status(code) => Err(CatalogError::Status(StatusCode::from_u16(code).unwrap())),
            Scripted::Application(message) => Err(CatalogError::Application(message)),
            Scripted::Panic => panic!("catalog exploded"),
        }
    }
}

#[async_trait::async_trait]
impl MovieCatalog for ScriptedCatalog {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        self.calls
            .lock()
            .unwrap()
            .push(CatalogCall::Search(query.to_string()));
        self.answer(query).await
    }

    async fn discover(&self) -> Result<Vec<Movie>, CatalogError> {
        self.calls.lock().unwrap().push(CatalogCall::Discover);
        self.answer("").await
    }
}
