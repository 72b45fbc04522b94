// src/main.rs

use std::sync::Arc;

use anyhow::Context;

use movieflix::application::AppState;
use movieflix::config::{AppConfig, StorageBackend};
use movieflix::db::{
    create_connection_pool, get_connection, get_database_stats, initialize_database,
    verify_database_integrity,
};
use movieflix::integrations::OmdbClient;
use movieflix::repositories::Repositories;
use movieflix::services::EnrichmentService;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().context("loading configuration")?;

    // 1. INFRASTRUCTURE + 2. REPOSITORIES
    let repos = match config.storage {
        StorageBackend::Sqlite => {
            let pool = create_connection_pool(&config.database_path).with_context(|| {
                format!("opening database {}", config.database_path.display())
            })?;

            // Initialize schema (idempotent)
            {
                let conn = get_connection(&pool)?;
                initialize_database(&conn)?;
                verify_database_integrity(&conn)?;

                let stats = get_database_stats(&conn)?;
                log::info!(
                    "Database {} ({} bytes): {} users, {} movies, {} favorites, {} reviews",
                    config.database_path.display(),
                    stats.size_bytes,
                    stats.user_count,
                    stats.movie_count,
                    stats.favorite_count,
                    stats.review_count
                );
            }

            Repositories::sqlite(Arc::new(pool))
        }
        StorageBackend::JsonFile => {
            log::info!("Using flat-file storage in {}", config.data_dir.display());
            Repositories::json_files(&config.data_dir).context("opening flat-file storage")?
        }
    };

    // 3. SERVICES
    let enrichment = if !config.enrichment_enabled {
        log::info!("Metadata enrichment disabled");
        EnrichmentService::disabled()
    } else if config.omdb.api_key.is_empty() {
        log::warn!("OMDB_API_KEY is not set, metadata enrichment disabled");
        EnrichmentService::disabled()
    } else {
        let client = OmdbClient::new(&config.omdb)?;
        EnrichmentService::new(Arc::new(client), config.omdb.detail_base_url.clone())
    };

    // 4. APPLICATION STATE
    let state = AppState::new(&repos, enrichment);

    let users = movieflix::commands::list_users(&state)
        .map_err(|e| anyhow::anyhow!("listing users: {}", e.message))?;
    let movies = movieflix::commands::list_movies(&state)
        .map_err(|e| anyhow::anyhow!("listing movies: {}", e.message))?;

    log::info!(
        "MovieFlix ready: {} users, {} movies, enrichment {}",
        users.len(),
        movies.len(),
        if state.enrichment_service.is_enabled() { "on" } else { "off" }
    );

    Ok(())
}
