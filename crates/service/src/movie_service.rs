use models::{Movie, MoviePatch, MovieSearch, NewMovie};
use rand::Rng;
use tracing::info;

use crate::{errors::ServiceError, storage::{Entity, SharedStore}};

/// Movies API semantics on top of the in-memory store.
#[derive(Clone, Default)]
pub struct MovieService {
    store: SharedStore<Movie>,
}

impl MovieService {
    pub async fn create(&self, input: NewMovie) -> Movie {
        let movie = self.store.create(input).await;
        info!(movie_id = movie.id, title = %movie.title, "created movie");
        movie
    }

    /// All movies when no parameter is given, otherwise the filtered list.
    /// An empty result is a valid answer here.
    pub async fn list(&self, query: MovieSearch) -> Vec<Movie> {
        let criteria = query.criteria();
        if criteria.is_empty() {
            return self.store.all().await;
        }
        self.store.filter(&criteria).await
    }

    pub async fn get(&self, id: u64) -> Result<Movie, ServiceError> {
        self.store
            .read_store(|s| s.get_by_id(id).cloned())
            .await
            .ok_or_else(|| ServiceError::not_found(Movie::KIND))
    }

    pub async fn update(&self, id: u64, patch: MoviePatch) -> Result<Movie, ServiceError> {
        patch.validate()?;
        let updated = self
            .store
            .update_store(|s| {
                let current = s.get_by_id(id).cloned()?;
                s.update(&current, patch)
            })
            .await
            .ok_or_else(|| ServiceError::not_found(Movie::KIND))?;
        info!(movie_id = id, "updated movie");
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<Movie, ServiceError> {
        let removed = self
            .store
            .update_store(|s| {
                let current = s.get_by_id(id).cloned()?;
                s.delete(&current).then_some(current)
            })
            .await
            .ok_or_else(|| ServiceError::not_found(Movie::KIND))?;
        info!(movie_id = id, "deleted movie");
        Ok(removed)
    }

    pub async fn seed<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> usize {
        let seeded = self.store.update_store(|s| s.seed_dummy_data(count, rng)).await;
        info!(count = seeded, "seeded dummy movies");
        seeded
    }
}
