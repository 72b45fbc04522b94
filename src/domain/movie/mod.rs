pub mod entity;
pub mod invariants;

pub use entity::{Movie, MovieInput, MoviePatch, NewMovie};
pub use invariants::{validate_movie_input, MAX_RATING, MIN_RATING};
