// src/db/migrations.rs
//
// Database schema initialization and migrations
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Idempotent operations

use rusqlite::Connection;
use crate::error::{AppError, AppResult};

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Tables counted by `get_database_stats`
const DOMAIN_TABLES: [&str; 4] = ["users", "movies", "favorites", "reviews"];

/// Initialize the database schema
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
        log::info!("Applied schema version {}", CURRENT_SCHEMA_VERSION);
    } else if current_version < CURRENT_SCHEMA_VERSION {
        return Err(AppError::Storage(format!(
            "Schema version {} is outdated. Expected {}. Manual migration required.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(AppError::Storage(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Returns 0 if schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    let schema = include_str!("../../schema.sql");

    conn.execute_batch(schema)
        .map_err(|e| AppError::Storage(format!("Failed to apply initial schema: {}", e)))
}

/// Runs SQLite's integrity check
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if result != "ok" {
        return Err(AppError::Storage(format!("Database integrity check failed: {}", result)));
    }

    Ok(())
}

pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    let mut counts = [0i64; 4];
    for (count, table) in counts.iter_mut().zip(DOMAIN_TABLES) {
        *count = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
    }
    let [user_count, movie_count, favorite_count, review_count] = counts;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        user_count,
        movie_count,
        favorite_count,
        review_count,
    })
}

#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub user_count: i64,
    pub movie_count: i64,
    pub favorite_count: i64,
    pub review_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_connection;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = create_test_connection().unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);

        initialize_database(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 1);

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 5, "four domain tables plus schema_version");
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        initialize_database(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_favorite_requires_existing_user() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let result = conn.execute("INSERT INTO favorites (user_id, movie_id) VALUES (42, 42)", []);
        assert!(result.is_err(), "Foreign key constraint should have been violated");
    }

    #[test]
    fn test_movie_name_is_unique() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        conn.execute("INSERT INTO movies (movie_name) VALUES ('Titanic')", []).unwrap();
        let result = conn.execute("INSERT INTO movies (movie_name) VALUES ('Titanic')", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_delete_cascades_but_movie_delete_is_restricted() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        conn.execute_batch(
            "INSERT INTO users (user_name) VALUES ('Alice');
             INSERT INTO movies (movie_name) VALUES ('Titanic');
             INSERT INTO favorites (user_id, movie_id) VALUES (1, 1);
             INSERT INTO reviews (user_id, movie_id, rating, review_text) VALUES (1, 1, 8.0, 'Great');",
        )
        .unwrap();

        assert!(conn.execute("DELETE FROM movies WHERE id = 1", []).is_err());

        conn.execute("DELETE FROM users WHERE id = 1", []).unwrap();
        let stats = get_database_stats(&conn).unwrap();
        assert_eq!(stats.favorite_count, 0);
        assert_eq!(stats.review_count, 0);
        assert_eq!(stats.movie_count, 1);
    }

    #[test]
    fn test_database_stats() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let stats = get_database_stats(&conn).unwrap();
        assert!(stats.size_bytes > 0);
        assert_eq!(stats.user_count, 0);
        assert_eq!(stats.movie_count, 0);
    }

    #[test]
    fn test_integrity_check() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        verify_database_integrity(&conn).unwrap();
    }
}
