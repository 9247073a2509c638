use crate::error::MovieError;
use crate::model::MovieCollection;
use crate::store::MovieStore;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Keeps the collection in memory, nothing survives a restart
#[derive(Default)]
pub struct InMemoryStore {
    movies: Mutex<MovieCollection>,
}

impl InMemoryStore {
    pub fn new(movies: MovieCollection) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }
}

#[async_trait]
impl MovieStore for InMemoryStore {
    async fn load(&self) -> Result<MovieCollection, MovieError> {
        Ok(self.movies.lock().await.clone())
    }

    async fn save(&self, movies: &MovieCollection) -> Result<(), MovieError> {
        *self.movies.lock().await = movies.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_replaces_collection() {
        let store = InMemoryStore::default();
        assert!(store.load().await.unwrap().is_empty());

        let mut movies = MovieCollection::new();
        movies.insert(2020, Vec::new());
        store.save(&movies).await.unwrap();

        assert_eq!(store.load().await.unwrap(), movies);
    }
}
