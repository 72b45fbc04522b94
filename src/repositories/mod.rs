// src/repositories/mod.rs
//
// Gateway layer
//
// CRITICAL RULES:
// - Gateways are DUMB data mappers
// - NO business logic
// - NO cross-gateway calls
// - Storage failures leave this layer as AppError, never as driver errors

pub mod favorite_repository;
pub mod json_gateway;
pub mod movie_repository;
pub mod record;
pub mod review_repository;
pub mod sqlite_gateway;
pub mod user_repository;

use std::path::Path;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Favorite, Movie, Review, User};
use crate::error::AppResult;

pub use favorite_repository::FavoriteRepository;
pub use json_gateway::JsonFileGateway;
pub use movie_repository::MovieRepository;
pub use record::{generate_new_id, Patch, Record};
pub use review_repository::ReviewRepository;
pub use sqlite_gateway::SqliteGateway;
pub use user_repository::UserRepository;

/// Uniform CRUD over one persisted entity kind
pub trait Gateway<R: Record>: Send + Sync {
    /// Every record, ordered by id
    fn get_all(&self) -> AppResult<Vec<R>>;

    /// `None` both for unknown and for non-positive ids
    fn get_by_id(&self, id: i64) -> AppResult<Option<R>>;

    /// Persist a new record and return the assigned id.
    /// The id carried by `record` is ignored.
    fn add(&self, record: &R) -> AppResult<i64>;

    /// Merge the provided fields into an existing record
    fn update(&self, patch: &R::Patch) -> AppResult<()>;

    fn delete(&self, id: i64) -> AppResult<()>;
}

/// One gateway per entity, built once at startup
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<UserRepository>,
    pub movies: Arc<MovieRepository>,
    pub favorites: Arc<FavoriteRepository>,
    pub reviews: Arc<ReviewRepository>,
}

impl Repositories {
    pub fn sqlite(pool: Arc<ConnectionPool>) -> Self {
        Self {
            users: Arc::new(SqliteGateway::<User>::new(pool.clone())),
            movies: Arc::new(SqliteGateway::<Movie>::new(pool.clone())),
            favorites: Arc::new(SqliteGateway::<Favorite>::new(pool.clone())),
            reviews: Arc::new(SqliteGateway::<Review>::new(pool)),
        }
    }

    /// Flat-file backing: no uniqueness, cascade or restrict rules
    pub fn json_files(dir: &Path) -> AppResult<Self> {
        Ok(Self {
            users: Arc::new(JsonFileGateway::<User>::open(dir)?),
            movies: Arc::new(JsonFileGateway::<Movie>::open(dir)?),
            favorites: Arc::new(JsonFileGateway::<Favorite>::open(dir)?),
            reviews: Arc::new(JsonFileGateway::<Review>::open(dir)?),
        })
    }
}
