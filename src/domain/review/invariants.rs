use super::entity::ReviewInput;
use crate::domain::movie::invariants::check_rating;

/// Validates untrusted review input.
///
/// Reviews use the same [1.0, 10.0] rating bound as movies, and the rating
/// is mandatory. The review text may be empty.
pub fn validate_review_input(input: &ReviewInput) -> Vec<String> {
    let mut errors = Vec::new();

    match input.rating.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        None => errors.push("Rating cannot be empty".to_string()),
        Some(rating) => errors.extend(check_rating(rating)),
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rating: Option<&str>) -> ReviewInput {
        ReviewInput {
            rating: rating.map(str::to_string),
            review_text: Some("Loved it".to_string()),
        }
    }

    #[test]
    fn test_valid_review() {
        assert!(validate_review_input(&input(Some("8.5"))).is_empty());
        assert!(validate_review_input(&ReviewInput {
            rating: Some("1".to_string()),
            review_text: None,
        })
        .is_empty());
    }

    #[test]
    fn test_missing_rating() {
        assert_eq!(validate_review_input(&input(None)), vec!["Rating cannot be empty"]);
        assert_eq!(validate_review_input(&input(Some("  "))), vec!["Rating cannot be empty"]);
    }

    #[test]
    fn test_rating_must_be_number_in_range() {
        assert_eq!(
            validate_review_input(&input(Some("great"))),
            vec!["Rating must be a number"]
        );
        assert_eq!(
            validate_review_input(&input(Some("11"))),
            vec!["Rating must be between 1.0 - 10.0"]
        );
    }
}
