/// Validates a candidate user name
///
/// At most one message is returned: the letter check only applies once the
/// name is known to be non-empty.
pub fn validate_user_name(user_name: &str) -> Vec<String> {
    match user_name.chars().next() {
        None => vec!["User name cannot be empty".to_string()],
        Some(first) if !first.is_alphabetic() => {
            vec!["User name must start with letter".to_string()]
        }
        Some(_) => Vec::new(),
    }
}

/// Invariants that must hold true for the User domain:
///
/// 1. Identity (id) is assigned by the store and never changes
/// 2. Name is non-empty and starts with a letter
/// 3. Deleting a user deletes its favorites and reviews, never movies
