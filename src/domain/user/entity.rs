use serde::{Deserialize, Serialize};

/// A registered user.
/// Owns its favorites and reviews; both go away with the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate key assigned by the store
    pub id: i64,

    pub user_name: String,
}

/// Candidate for a new user, before it has an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub user_name: String,
}

/// Field-merge update: only `Some` fields overwrite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub id: i64,
    pub user_name: Option<String>,
}

impl User {
    pub fn new(user_name: String) -> Self {
        Self { id: 0, user_name }
    }
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        User::new(new_user.user_name)
    }
}

impl UserPatch {
    pub fn rename(id: i64, user_name: String) -> Self {
        Self {
            id,
            user_name: Some(user_name),
        }
    }
}
