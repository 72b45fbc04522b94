// src/services/movie_service.rs
//
// Movie Service - catalogue management
//
// CRITICAL RULES:
// - Movie names are unique across the catalogue, on every backing
// - A movie still referenced by a favorite or review cannot be deleted
// - A user favorites a movie at most once
// - Enrichment happens before this layer; movie info arrives complete

use std::sync::Arc;

use crate::domain::{Favorite, Movie, MoviePatch, NewMovie};
use crate::error::{AppError, AppResult};
use crate::repositories::{FavoriteRepository, MovieRepository, ReviewRepository};

pub const MOVIE_EXISTS: &str = "Movie already exists";
pub const ALREADY_FAVORITE: &str = "Movie already in favorites";
pub const MOVIE_IN_USE: &str = "Movie is still referenced by favorites or reviews";

pub struct MovieService {
    movie_repo: Arc<MovieRepository>,
    favorite_repo: Arc<FavoriteRepository>,
    review_repo: Arc<ReviewRepository>,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<MovieRepository>,
        favorite_repo: Arc<FavoriteRepository>,
        review_repo: Arc<ReviewRepository>,
    ) -> Self {
        Self {
            movie_repo,
            favorite_repo,
            review_repo,
        }
    }

    pub fn get_movies(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.get_all()
    }

    pub fn get_movie(&self, movie_id: i64) -> AppResult<Option<Movie>> {
        self.movie_repo.get_by_id(movie_id)
    }

    /// Exact, case-sensitive name match
    pub fn find_by_name(&self, movie_name: &str) -> AppResult<Option<Movie>> {
        Ok(self
            .movie_repo
            .get_all()?
            .into_iter()
            .find(|movie| movie.movie_name == movie_name))
    }

    pub fn add_new_movie(&self, info: NewMovie) -> AppResult<i64> {
        if info.movie_name.trim().is_empty() {
            return Err(AppError::validation("Invalid movie data"));
        }
        if self.find_by_name(&info.movie_name)?.is_some() {
            return Err(AppError::conflict(MOVIE_EXISTS));
        }

        let movie_name = info.movie_name.clone();
        let movie_id = self.movie_repo.add(&Movie::from(info))?;
        log::info!("Added movie {} '{}'", movie_id, movie_name);
        Ok(movie_id)
    }

    /// Favorite a movie for a user, adding it to the catalogue first when
    /// no movie with that name exists yet. Returns the favorite id.
    pub fn add_user_movie(&self, user_id: i64, info: NewMovie) -> AppResult<i64> {
        let movie_id = match self.find_by_name(&info.movie_name)? {
            Some(existing) => existing.id,
            None => self.add_new_movie(info)?,
        };

        let already = self
            .favorite_repo
            .get_all()?
            .iter()
            .any(|favorite| favorite.pair() == (user_id, movie_id));
        if already {
            return Err(AppError::conflict(ALREADY_FAVORITE));
        }

        let favorite_id = self.favorite_repo.add(&Favorite::new(user_id, movie_id))?;
        log::info!(
            "User {} favorited movie {} (favorite {})",
            user_id,
            movie_id,
            favorite_id
        );
        Ok(favorite_id)
    }

    pub fn update_movie(&self, patch: MoviePatch) -> AppResult<()> {
        self.movie_repo.update(&patch)
    }

    pub fn delete_movie(&self, movie_id: i64) -> AppResult<()> {
        if self.movie_repo.get_by_id(movie_id)?.is_none() {
            return Err(AppError::NotFound);
        }

        // The flat-file store has no foreign keys to refuse this
        let favorited = self
            .favorite_repo
            .get_all()?
            .iter()
            .any(|favorite| favorite.movie_id == movie_id);
        let reviewed = self
            .review_repo
            .get_all()?
            .iter()
            .any(|review| review.movie_id == movie_id);
        if favorited || reviewed {
            return Err(AppError::conflict(MOVIE_IN_USE));
        }

        self.movie_repo.delete(movie_id)?;
        log::info!("Deleted movie {}", movie_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewReview, Review, User};
    use crate::repositories::Repositories;
    use crate::services::test_support::sqlite_repositories;

    fn service() -> (MovieService, Repositories) {
        service_over(sqlite_repositories())
    }

    fn service_over(repos: Repositories) -> (MovieService, Repositories) {
        let service = MovieService::new(
            repos.movies.clone(),
            repos.favorites.clone(),
            repos.reviews.clone(),
        );
        (service, repos)
    }

    #[test]
    fn test_add_and_get_movie() {
        let (service, _repos) = service();
        let mut info = NewMovie::named("Titanic");
        info.director = "James Cameron".to_string();
        info.year = 1997;

        let id = service.add_new_movie(info).unwrap();
        let movie = service.get_movie(id).unwrap().unwrap();
        assert_eq!(movie.movie_name, "Titanic");
        assert_eq!(movie.year, 1997);
        assert_eq!(movie.poster, "");
    }

    #[test]
    fn test_duplicate_name_is_conflict() {
        let (service, _repos) = service();
        service.add_new_movie(NewMovie::named("Heat")).unwrap();
        let result = service.add_new_movie(NewMovie::named("Heat"));
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(service.get_movies().unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_nameless_movie() {
        let (service, _repos) = service();
        let result = service.add_new_movie(NewMovie::named(""));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_add_user_movie_reuses_existing_movie() {
        let (service, repos) = service();
        let user_id = repos.users.add(&User::new("Alice".to_string())).unwrap();
        let movie_id = service.add_new_movie(NewMovie::named("Heat")).unwrap();

        let favorite_id = service
            .add_user_movie(user_id, NewMovie::named("Heat"))
            .unwrap();

        let favorite = repos.favorites.get_by_id(favorite_id).unwrap().unwrap();
        assert_eq!(favorite.pair(), (user_id, movie_id));
        assert_eq!(service.get_movies().unwrap().len(), 1);
    }

    #[test]
    fn test_add_user_movie_creates_missing_movie() {
        let (service, repos) = service();
        let user_id = repos.users.add(&User::new("Alice".to_string())).unwrap();

        service
            .add_user_movie(user_id, NewMovie::named("Alien"))
            .unwrap();

        let movie = service.find_by_name("Alien").unwrap().unwrap();
        assert!(movie.id > 0);
    }

    #[test]
    fn test_update_merges_fields() {
        let (service, _repos) = service();
        let id = service.add_new_movie(NewMovie::named("Heat")).unwrap();

        service
            .update_movie(MoviePatch {
                id,
                director: Some("Michael Mann".to_string()),
                ..Default::default()
            })
            .unwrap();

        let movie = service.get_movie(id).unwrap().unwrap();
        assert_eq!(movie.movie_name, "Heat");
        assert_eq!(movie.director, "Michael Mann");
    }

    #[test]
    fn test_referenced_movie_cannot_be_deleted() {
        let (service, repos) = service();
        let user_id = repos.users.add(&User::new("Alice".to_string())).unwrap();
        let movie_id = service.add_new_movie(NewMovie::named("Heat")).unwrap();
        repos.favorites.add(&Favorite::new(user_id, movie_id)).unwrap();

        assert!(matches!(service.delete_movie(movie_id), Err(AppError::Conflict(_))));
        assert!(service.get_movie(movie_id).unwrap().is_some());
    }

    #[test]
    fn test_delete_unknown_movie_is_not_found() {
        let (service, _repos) = service();
        assert!(matches!(service.delete_movie(42), Err(AppError::NotFound)));
    }

    #[test]
    fn test_duplicate_name_is_conflict_in_flat_files() {
        let dir = tempfile::tempdir().unwrap();
        let (service, _repos) = service_over(Repositories::json_files(dir.path()).unwrap());
        service.add_new_movie(NewMovie::named("Heat")).unwrap();

        let error = service.add_new_movie(NewMovie::named("Heat")).unwrap_err();
        assert!(matches!(error, AppError::Conflict(ref reason) if reason == MOVIE_EXISTS));
        assert_eq!(service.get_movies().unwrap().len(), 1);
    }

    #[test]
    fn test_add_user_movie_twice_is_conflict() {
        let (service, repos) = service();
        let user_id = repos.users.add(&User::new("Alice".to_string())).unwrap();
        service.add_user_movie(user_id, NewMovie::named("Heat")).unwrap();

        let error = service
            .add_user_movie(user_id, NewMovie::named("Heat"))
            .unwrap_err();
        assert!(matches!(error, AppError::Conflict(ref reason) if reason == ALREADY_FAVORITE));
        assert_eq!(repos.favorites.get_all().unwrap().len(), 1);
    }

    #[test]
    fn test_referenced_movie_cannot_be_deleted_in_flat_files() {
        let dir = tempfile::tempdir().unwrap();
        let (service, repos) = service_over(Repositories::json_files(dir.path()).unwrap());
        let user_id = repos.users.add(&User::new("Alice".to_string())).unwrap();
        let heat = service.add_new_movie(NewMovie::named("Heat")).unwrap();
        let alien = service.add_new_movie(NewMovie::named("Alien")).unwrap();
        repos.favorites.add(&Favorite::new(user_id, heat)).unwrap();
        repos
            .reviews
            .add(&Review::from(NewReview {
                user_id,
                movie_id: alien,
                rating: 6.0,
                review_text: String::new(),
            }))
            .unwrap();

        for movie_id in [heat, alien] {
            let error = service.delete_movie(movie_id).unwrap_err();
            assert!(matches!(error, AppError::Conflict(ref reason) if reason == MOVIE_IN_USE));
            assert!(service.get_movie(movie_id).unwrap().is_some());
        }
        assert!(matches!(service.delete_movie(99), Err(AppError::NotFound)));
    }
}
