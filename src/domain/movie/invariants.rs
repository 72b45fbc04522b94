use super::entity::MovieInput;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

/// Validates untrusted movie input and returns every applicable message,
/// in field order. An empty vector means the input is acceptable.
///
/// A missing name counts as empty. The other fields are only checked when
/// submitted and non-empty.
pub fn validate_movie_input(input: &MovieInput) -> Vec<String> {
    let mut errors = Vec::new();

    let movie_name = input.movie_name.as_deref().unwrap_or("");
    match movie_name.chars().next() {
        None => errors.push("Movie name cannot be empty".to_string()),
        Some(first) if !first.is_alphabetic() => {
            errors.push("Movie name must start with letter".to_string())
        }
        Some(_) => {}
    }

    if let Some(first) = input.director.as_deref().and_then(|d| d.chars().next()) {
        if !first.is_alphabetic() {
            errors.push("Director name must start with letter".to_string());
        }
    }

    if let Some(year) = input.year.as_deref().filter(|y| !y.is_empty()) {
        let all_digits = year.chars().all(|c| c.is_ascii_digit());
        if !all_digits {
            errors.push("Year must be number".to_string());
        }
        if all_digits && year.chars().count() != 4 {
            errors.push("Year must be 4 digits".to_string());
        }
    }

    if let Some(rating) = input.rating.as_deref().filter(|r| !r.is_empty()) {
        errors.extend(check_rating(rating));
    }

    errors
}

/// Rating must parse as a float and lie in [1.0, 10.0].
/// The range check only runs once parsing succeeded.
pub(crate) fn check_rating(rating: &str) -> Option<String> {
    match rating.trim().parse::<f64>() {
        Err(_) => Some("Rating must be a number".to_string()),
        Ok(value) if !(MIN_RATING..=MAX_RATING).contains(&value) => {
            Some("Rating must be between 1.0 - 10.0".to_string())
        }
        Ok(_) => None,
    }
}
