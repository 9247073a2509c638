use thiserror::Error;

/// Errors that can occur while serving or persisting movie lists
#[derive(Error, Debug)]
pub enum MovieError {
    /// No movies stored under the requested year
    #[error("Movies for the specified year not found")]
    YearNotFound,

    /// Movies were already added for the requested year
    #[error("Movies for the specified year already exist")]
    YearExists,

    /// The year exists but holds no movie with this name
    #[error("Movie '{name}' for the specified year not found")]
    MovieNotFound { name: String },

    /// Failed to read or write the storage file
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Stored document is not valid JSON for a movie collection
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to fetch the search results page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The configured CSS selector does not parse
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages() {
        assert_eq!(
            MovieError::YearNotFound.to_string(),
            "Movies for the specified year not found"
        );
        assert_eq!(
            MovieError::YearExists.to_string(),
            "Movies for the specified year already exist"
        );
        assert_eq!(
            MovieError::MovieNotFound {
                name: "Dune".to_string()
            }
            .to_string(),
            "Movie 'Dune' for the specified year not found"
        );
    }
}
