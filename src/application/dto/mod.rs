// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are boundary-friendly representations
// - Every request field is optional: absence is reported by validation,
//   not by the decoder
// - Numeric form fields arrive as strings or numbers
// - DTOs become domain inputs, never records

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{MovieInput, ReviewInput};

// ============================================================================
// USER DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub user_name: Option<String>,
}

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDto {
    #[serde(default)]
    pub movie_name: Option<String>,

    #[serde(default)]
    pub director: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub year: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub rating: Option<String>,
}

impl From<MovieDto> for MovieInput {
    fn from(dto: MovieDto) -> Self {
        Self {
            movie_name: dto.movie_name,
            director: dto.director,
            year: dto.year,
            rating: dto.rating,
        }
    }
}

// ============================================================================
// FAVORITE DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteDto {
    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub movie_id: Option<i64>,
}

// ============================================================================
// REVIEW DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewDto {
    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub movie_id: Option<i64>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub rating: Option<String>,

    #[serde(default)]
    pub review_text: Option<String>,
}

impl ReviewDto {
    pub fn input(&self) -> ReviewInput {
        ReviewInput {
            rating: self.rating.clone(),
            review_text: self.review_text.clone(),
        }
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

/// Success envelope for writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub success: bool,
    pub status: u16,
    pub message: String,

    /// Id of the created record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Confirmation {
    pub fn created(message: impl Into<String>, id: i64) -> Self {
        Self {
            success: true,
            status: 201,
            message: message.into(),
            id: Some(id),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            status: 200,
            message: message.into(),
            id: None,
        }
    }
}

/// Accepts `"1997"`, `1997` and `7.9` alike; `null` means absent
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
