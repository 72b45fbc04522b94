use std::sync::Arc;

use crate::db::{create_test_pool, get_connection, initialize_database};
use crate::repositories::Repositories;

/// SQLite-backed gateways over a fresh in-memory database
pub(crate) fn sqlite_repositories() -> Repositories {
    let pool = create_test_pool().unwrap();
    initialize_database(&get_connection(&pool).unwrap()).unwrap();
    Repositories::sqlite(Arc::new(pool))
}
