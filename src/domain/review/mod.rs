pub mod entity;
pub mod invariants;

pub use entity::{NewReview, Review, ReviewInput, ReviewPatch};
pub use invariants::validate_review_input;
