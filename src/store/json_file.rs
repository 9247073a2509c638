use crate::error::MovieError;
use crate::model::MovieCollection;
use crate::store::MovieStore;
use async_trait::async_trait;
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"     ";

/// Stores the collection as one pretty-printed JSON document
///
/// Every save rewrites the file in place. A crash mid-write can leave a
/// truncated document behind.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render the collection with a five-space indent, non-ASCII kept verbatim
pub fn to_pretty_json(movies: &MovieCollection) -> Result<Vec<u8>, MovieError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    movies.serialize(&mut serializer)?;
    Ok(buf)
}

#[async_trait]
impl MovieStore for JsonFileStore {
    async fn load(&self) -> Result<MovieCollection, MovieError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No movie file at {}, starting empty", self.path.display());
                return Ok(MovieCollection::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, movies: &MovieCollection) -> Result<(), MovieError> {
        let json = to_pretty_json(movies)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await?;

        info!(
            "Saved {} years of movies to {}",
            movies.len(),
            self.path.display()
        );
        Ok(())
    }
}
