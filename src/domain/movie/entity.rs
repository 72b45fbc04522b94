use serde::{Deserialize, Serialize};

/// A catalogued movie.
/// Unknown metadata is stored as zero values (`""`, `0`, `0.0`), never NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Surrogate key assigned by the store
    pub id: i64,

    /// Unique across the catalogue
    pub movie_name: String,

    pub director: String,

    /// Release year, 0 when unknown
    pub year: i32,

    /// 0.0 when unknown
    pub rating: f64,

    /// Poster image URL
    pub poster: String,

    /// Detail page URL
    pub website: String,
}

/// Movie info before it has an id.
/// Produced by enrichment, or by name only when enrichment fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub movie_name: String,
    pub director: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
    pub website: String,
}

/// Field-merge update: only `Some` fields overwrite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
    pub id: i64,
    pub movie_name: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub poster: Option<String>,
    pub website: Option<String>,
}

/// Untrusted movie fields as typed into a form or JSON payload.
/// `None` means the field was not submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    pub movie_name: Option<String>,
    pub director: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
}

impl NewMovie {
    /// Name only, every other field at its zero value
    pub fn named(movie_name: impl Into<String>) -> Self {
        Self {
            movie_name: movie_name.into(),
            director: String::new(),
            year: 0,
            rating: 0.0,
            poster: String::new(),
            website: String::new(),
        }
    }
}

impl Movie {
    pub fn from_new(id: i64, new_movie: NewMovie) -> Self {
        Self {
            id,
            movie_name: new_movie.movie_name,
            director: new_movie.director,
            year: new_movie.year,
            rating: new_movie.rating,
            poster: new_movie.poster,
            website: new_movie.website,
        }
    }
}

impl From<NewMovie> for Movie {
    fn from(new_movie: NewMovie) -> Self {
        Movie::from_new(0, new_movie)
    }
}

impl MovieInput {
    /// Convert already-validated input into a patch for movie `id`.
    ///
    /// Submitted-but-empty year and rating reset to their zero values.
    /// Numeric fields that fail to parse are left out of the patch;
    /// validation reports them before this is called.
    pub fn into_patch(self, id: i64) -> MoviePatch {
        MoviePatch {
            id,
            movie_name: self.movie_name,
            director: self.director,
            year: self.year.and_then(|year| {
                let year = year.trim();
                if year.is_empty() {
                    Some(0)
                } else {
                    year.parse().ok()
                }
            }),
            rating: self.rating.and_then(|rating| {
                let rating = rating.trim();
                if rating.is_empty() {
                    Some(0.0)
                } else {
                    rating.parse().ok()
                }
            }),
            poster: None,
            website: None,
        }
    }
}
