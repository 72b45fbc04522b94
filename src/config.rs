// src/config.rs
//
// Process configuration
//
// PRINCIPLES:
// - Read once at startup, passed explicitly afterwards
// - Environment variables (optionally from a .env file) override defaults
// - Bad values are reported, never silently replaced

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com/";
pub const IMDB_BASE_URL: &str = "https://www.imdb.com/title/";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

/// Which gateway implementation backs the managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    JsonFile,
}

impl std::str::FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "json" => Ok(StorageBackend::JsonFile),
            other => Err(AppError::Config(format!(
                "Unknown storage backend '{}', expected 'sqlite' or 'json'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub detail_base_url: String,
    pub timeout: Duration,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            detail_base_url: IMDB_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    /// SQLite database file
    pub database_path: PathBuf,
    /// Directory holding one JSON file per table (json backend only)
    pub data_dir: PathBuf,
    pub omdb: OmdbConfig,
    /// When false, movies are created from their name only
    pub enrichment_enabled: bool,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// A `.env` file in the working directory is honoured if present.
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("MOVIEFLIX_STORAGE") {
            Some(value) => value.parse()?,
            None => StorageBackend::Sqlite,
        };

        let data_dir = match lookup("MOVIEFLIX_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let database_path = match lookup("MOVIEFLIX_DATABASE_PATH") {
            Some(path) => PathBuf::from(path),
            None => data_dir.join("movieflix.db"),
        };

        let timeout_secs = match lookup("MOVIEFLIX_LOOKUP_TIMEOUT_SECS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("Invalid lookup timeout '{}'", value))
            })?,
            None => DEFAULT_LOOKUP_TIMEOUT_SECS,
        };

        let enrichment_enabled = match lookup("MOVIEFLIX_ENRICHMENT") {
            Some(value) => parse_bool(&value)?,
            None => true,
        };

        let omdb = OmdbConfig {
            api_key: lookup("OMDB_API_KEY").unwrap_or_default(),
            base_url: lookup("OMDB_BASE_URL").unwrap_or_else(|| DEFAULT_OMDB_BASE_URL.to_string()),
            detail_base_url: IMDB_BASE_URL.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            storage,
            database_path,
            data_dir,
            omdb,
            enrichment_enabled,
        })
    }
}

/// {APP_DATA}/movieflix
fn default_data_dir() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))?;
    Ok(app_data_dir.join("movieflix"))
}

fn parse_bool(value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("Invalid boolean '{}'", other))),
    }
}
