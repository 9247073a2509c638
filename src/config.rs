use crate::error::MovieError;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration for the scraper, the store and the HTTP server
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the JSON document holding every stored year
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
    /// Search endpoint queried with `q=popular movies in <year>`
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// User agent sent with the search request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// CSS selector matching one element per movie on the results page
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Address the HTTP server binds to
    #[serde(default = "default_address")]
    pub address: String,
    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            search_url: default_search_url(),
            user_agent: default_user_agent(),
            selector: default_selector(),
            timeout: default_timeout(),
            address: default_address(),
            port: default_port(),
        }
    }
}

// Default value functions
fn default_storage_path() -> String {
    "data_storage/movies.json".to_string()
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_selector() -> String {
    ".UnFsfe.cyKJce.ZvGeOb".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MOVIES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MOVIES__STORAGE_PATH
    pub fn load() -> Result<Self, MovieError> {
        Ok(load_config()?)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("MOVIES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
