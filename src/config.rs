use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_APPWRITE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
const DEFAULT_DEBOUNCE_MS: u64 = 1000;
const DEFAULT_TRENDING_LIMIT: usize = 5;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("Incomplete Appwrite configuration, missing {0}")]
    Incomplete(&'static str),
}

/// Movie catalog (TMDB) connection settings
#[derive(Clone, Debug, PartialEq)]
pub struct TmdbConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Appwrite project holding the search-count collection
#[derive(Clone, Debug, PartialEq)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key. Optional when the collection grants guest access.
    pub api_key: Option<String>,
}

/// Application configuration
/// In debug builds a .env file is loaded first, then everything is read from the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub tmdb: TmdbConfig,
    /// None means no Appwrite project is configured and search counts stay in memory
    pub appwrite: Option<AppwriteConfig>,
    pub debounce: Duration,
    pub trending_limit: usize,
}

impl Config {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, reading process environment only");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key =
            get("MARQUEE_TMDB_API_KEY").ok_or(ConfigError::Missing("MARQUEE_TMDB_API_KEY"))?;
        let tmdb = TmdbConfig {
            base_url: get("MARQUEE_TMDB_BASE_URL")
                .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            api_key,
        };

        let appwrite = match (
            get("MARQUEE_APPWRITE_PROJECT_ID"),
            get("MARQUEE_APPWRITE_DATABASE_ID"),
            get("MARQUEE_APPWRITE_COLLECTION_ID"),
        ) {
            (None, None, None) => {
                warn!("Config: No Appwrite project configured, trending searches are kept in memory");
                None
            }
            (Some(project_id), Some(database_id), Some(collection_id)) => Some(AppwriteConfig {
                endpoint: get("MARQUEE_APPWRITE_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_APPWRITE_ENDPOINT.to_string()),
                project_id,
                database_id,
                collection_id,
                api_key: get("MARQUEE_APPWRITE_API_KEY"),
            }),
            (None, _, _) => return Err(ConfigError::Incomplete("MARQUEE_APPWRITE_PROJECT_ID")),
            (_, None, _) => return Err(ConfigError::Incomplete("MARQUEE_APPWRITE_DATABASE_ID")),
            (_, _, None) => return Err(ConfigError::Incomplete("MARQUEE_APPWRITE_COLLECTION_ID")),
        };

        let debounce_ms = match get("MARQUEE_DEBOUNCE_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) => ms,
                Err(_) => {
                    return Err(ConfigError::Invalid {
                        name: "MARQUEE_DEBOUNCE_MS",
                        value,
                    })
                }
            },
            None => DEFAULT_DEBOUNCE_MS,
        };

        let trending_limit = match get("MARQUEE_TRENDING_LIMIT") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "MARQUEE_TRENDING_LIMIT",
                        value,
                    })
                }
            },
            None => DEFAULT_TRENDING_LIMIT,
        };

        Ok(Self {
            tmdb,
            appwrite,
            debounce: Duration::from_millis(debounce_ms),
            trending_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_token_only() {
        let config = Config::from_lookup(lookup(&[("MARQUEE_TMDB_API_KEY", "secret")])).unwrap();

        assert_eq!(config.tmdb.api_key, "secret");
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.appwrite, None);
        assert_eq!(config.debounce, Duration::from_millis(1000));
        assert_eq!(config.trending_limit, 5);
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("MARQUEE_TMDB_API_KEY"));

        let err = Config::from_lookup(lookup(&[("MARQUEE_TMDB_API_KEY", "   ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("MARQUEE_TMDB_API_KEY"));
    }

    #[test]
    fn test_full_appwrite_config() {
        let config = Config::from_lookup(lookup(&[
            ("MARQUEE_TMDB_API_KEY", "secret"),
            ("MARQUEE_APPWRITE_PROJECT_ID", "proj"),
            ("MARQUEE_APPWRITE_DATABASE_ID", "db"),
            ("MARQUEE_APPWRITE_COLLECTION_ID", "metrics"),
        ]))
        .unwrap();

        let appwrite = config.appwrite.unwrap();
        assert_eq!(appwrite.endpoint, "https://cloud.appwrite.io/v1");
        assert_eq!(appwrite.project_id, "proj");
        assert_eq!(appwrite.database_id, "db");
        assert_eq!(appwrite.collection_id, "metrics");
        assert_eq!(appwrite.api_key, None);
    }

    #[test]
    fn test_partial_appwrite_config_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("MARQUEE_TMDB_API_KEY", "secret"),
            ("MARQUEE_APPWRITE_PROJECT_ID", "proj"),
            ("MARQUEE_APPWRITE_DATABASE_ID", "db"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Incomplete("MARQUEE_APPWRITE_COLLECTION_ID"));
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("MARQUEE_TMDB_API_KEY", "secret"),
            ("MARQUEE_DEBOUNCE_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "MARQUEE_DEBOUNCE_MS", .. }));

        let err = Config::from_lookup(lookup(&[
            ("MARQUEE_TMDB_API_KEY", "secret"),
            ("MARQUEE_TRENDING_LIMIT", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "MARQUEE_TRENDING_LIMIT", .. }));
    }
}
