use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder for a text field the extractors could not recognise
pub const NOT_AVAILABLE: &str = "N/A";

/// One movie scraped from a search results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub name: String,
    /// One of G, PG, PG-13, R, NC-17 or N/A
    #[serde(rename = "movie_type")]
    pub content_rating: String,
    /// Hours and minutes, (0, 0) when the fragment carried no duration
    #[serde(rename = "duration_period")]
    pub duration: (u32, u32),
    pub genre: String,
}

/// Every stored year with its movies in scrape order
pub type MovieCollection = BTreeMap<i32, Vec<MovieRecord>>;
