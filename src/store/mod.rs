mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::error::MovieError;
use crate::model::MovieCollection;
use async_trait::async_trait;

/// Whole-collection persistence
///
/// Implementations read and write the full year map at once; there are no
/// partial updates.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Read every stored year. A store that was never written is empty.
    async fn load(&self) -> Result<MovieCollection, MovieError>;

    /// Replace the stored collection with `movies`.
    async fn save(&self, movies: &MovieCollection) -> Result<(), MovieError>;
}
