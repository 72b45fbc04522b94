pub mod entity;
pub mod invariants;

pub use entity::{NewUser, User, UserPatch};
pub use invariants::validate_user_name;
