// src/repositories/user_repository.rs

use rusqlite::types::Value;
use rusqlite::Row;

use super::record::{Patch, Record};
use super::Gateway;
use crate::domain::{User, UserPatch};

pub type UserRepository = dyn Gateway<User>;

impl Record for User {
    type Patch = UserPatch;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["user_name"];

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get("id")?,
            user_name: row.get("user_name")?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![Value::Text(self.user_name.clone())]
    }
}

impl Patch<User> for UserPatch {
    fn id(&self) -> i64 {
        self.id
    }

    fn assignments(&self) -> Vec<(&'static str, Value)> {
        let mut assignments = Vec::new();
        if let Some(user_name) = &self.user_name {
            assignments.push(("user_name", Value::Text(user_name.clone())));
        }
        assignments
    }

    fn merge_into(&self, user: &mut User) {
        if let Some(user_name) = &self.user_name {
            user.user_name = user_name.clone();
        }
    }
}
