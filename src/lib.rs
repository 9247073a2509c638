pub mod api;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod service;
pub mod store;

pub use crate::config::AppConfig;
pub use error::MovieError;
pub use extractors::{
    extract_content_rating, extract_duration, extract_genre, extract_movie, extract_movies,
    extract_name,
};
pub use fetchers::{FragmentSource, SearchFetcher};
pub use model::{MovieCollection, MovieRecord};
pub use service::MovieService;
pub use store::{InMemoryStore, JsonFileStore, MovieStore};

/// Build the service backed by the JSON file and the search page from `config`
pub fn service_from_config(config: &AppConfig) -> Result<MovieService, MovieError> {
    let store = JsonFileStore::new(&config.storage_path);
    let fetcher = SearchFetcher::from_config(config)?;

    Ok(MovieService::new(Box::new(store), Box::new(fetcher)))
}

/// Scrape the popular movies of `year` without touching any store
pub async fn fetch_movies_for_year(
    config: &AppConfig,
    year: i32,
) -> Result<Vec<MovieRecord>, MovieError> {
    let fetcher = SearchFetcher::from_config(config)?;
    let fragments = fetcher.fetch_fragments(year).await;

    Ok(extract_movies(&fragments))
}
