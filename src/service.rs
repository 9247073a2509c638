use crate::error::MovieError;
use crate::extractors::extract_movies;
use crate::fetchers::FragmentSource;
use crate::model::{MovieCollection, MovieRecord};
use crate::store::MovieStore;
use log::{debug, info};
use tokio::sync::Mutex;

/// Movie lists per year, scraped on demand and kept in a [`MovieStore`]
///
/// Every call loads the whole collection; mutating calls save it back.
/// Mutations run one at a time so two writers never save over each other.
pub struct MovieService {
    store: Box<dyn MovieStore>,
    source: Box<dyn FragmentSource>,
    write_lock: Mutex<()>,
}

impl MovieService {
    pub fn new(store: Box<dyn MovieStore>, source: Box<dyn FragmentSource>) -> Self {
        Self {
            store,
            source,
            write_lock: Mutex::new(()),
        }
    }

    /// Scrape `year` and turn every fragment into a record.
    pub async fn fetch_movies_for_year(&self, year: i32) -> Vec<MovieRecord> {
        let fragments = self.source.fetch_fragments(year).await;
        debug!("Extracting {} movies for {}", fragments.len(), year);
        extract_movies(&fragments)
    }

    pub async fn list_all(&self) -> Result<MovieCollection, MovieError> {
        self.store.load().await
    }

    pub async fn list_year(&self, year: i32) -> Result<Vec<MovieRecord>, MovieError> {
        self.store
            .load()
            .await?
            .remove(&year)
            .ok_or(MovieError::YearNotFound)
    }

    /// Scrape and store a year that has no movies yet.
    pub async fn add_year(&self, year: i32) -> Result<Vec<MovieRecord>, MovieError> {
        let _guard = self.write_lock.lock().await;
        let mut movies = self.store.load().await?;
        if movies.contains_key(&year) {
            return Err(MovieError::YearExists);
        }

        let fetched = self.fetch_movies_for_year(year).await;
        movies.insert(year, fetched.clone());
        self.store.save(&movies).await?;

        info!("Added {} movies for {}", fetched.len(), year);
        Ok(fetched)
    }

    /// Scrape a stored year again and overwrite its movies.
    pub async fn replace_year(&self, year: i32) -> Result<Vec<MovieRecord>, MovieError> {
        let _guard = self.write_lock.lock().await;
        let mut movies = self.store.load().await?;
        if !movies.contains_key(&year) {
            return Err(MovieError::YearNotFound);
        }

        let fetched = self.fetch_movies_for_year(year).await;
        movies.insert(year, fetched.clone());
        self.store.save(&movies).await?;

        info!("Replaced movies for {} with {} entries", year, fetched.len());
        Ok(fetched)
    }

    /// Remove every movie called `name` from `year`.
    ///
    /// Returns the last removed record; names are compared exactly.
    pub async fn delete_movie(&self, year: i32, name: &str) -> Result<MovieRecord, MovieError> {
        let _guard = self.write_lock.lock().await;
        let mut movies = self.store.load().await?;
        let not_found = || MovieError::MovieNotFound {
            name: name.to_string(),
        };

        let list = movies.get_mut(&year).ok_or_else(not_found)?;
        let (removed, kept): (Vec<_>, Vec<_>) =
            list.drain(..).partition(|movie| movie.name == name);
        *list = kept;
        let deleted = removed.into_iter().last().ok_or_else(not_found)?;

        self.store.save(&movies).await?;

        info!("Deleted '{}' from {}", name, year);
        Ok(deleted)
    }
}
