// src/services/mod.rs
//
// Services Module - Entity Managers
//
// Managers translate between records and boundary-facing views.
// Gateways are injected; each manager is built once at startup.

pub mod enrichment_service;
pub mod favorite_service;
pub mod movie_service;
pub mod review_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod test_support;


pub use enrichment_service::EnrichmentService;
pub use favorite_service::FavoriteService;
pub use movie_service::MovieService;
pub use review_service::ReviewService;
pub use user_service::UserService;
