use crate::config::AppConfig;
use crate::error::MovieError;
use crate::fetchers::FragmentSource;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

/// Scrapes the "popular movies in <year>" panel of a search results page
///
/// The selector targets generated class names of the results page, so a
/// markup change upstream shows up as an empty list, never as an error.
pub struct SearchFetcher {
    client: Client,
    search_url: String,
    selector: Selector,
}

impl SearchFetcher {
    pub fn new(
        search_url: impl Into<String>,
        user_agent: &str,
        selector: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, MovieError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        let selector = Selector::parse(selector).map_err(|e| MovieError::Selector(e.to_string()))?;

        Ok(Self {
            client,
            search_url: search_url.into(),
            selector,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, MovieError> {
        Self::new(
            config.search_url.as_str(),
            &config.user_agent,
            &config.selector,
            Some(Duration::from_secs(config.timeout)),
        )
    }

    /// Query text sent for a year
    pub fn query(year: i32) -> String {
        format!("popular movies in {year}")
    }

    async fn fetch_page(&self, year: i32) -> Result<Option<String>, MovieError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", Self::query(year))])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                "Failed to fetch movies for {}: status {}",
                year,
                response.status()
            );
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    /// Inner text of every element matching the selector
    pub fn select_fragments(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}

#[async_trait]
impl FragmentSource for SearchFetcher {
    async fn fetch_fragments(&self, year: i32) -> Vec<String> {
        let html = match self.fetch_page(year).await {
            Ok(Some(html)) => html,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to fetch movies for {}: {}", year, e);
                return Vec::new();
            }
        };

        let fragments = self.select_fragments(&html);
        debug!("Scraped {} fragments for {}: {:?}", fragments.len(), year, fragments);
        fragments
    }
}
