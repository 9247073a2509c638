mod search;

pub use search::SearchFetcher;

use async_trait::async_trait;

/// Source of raw movie fragments for a year
///
/// A fragment is the undelimited text of one candidate movie, e.g.
/// `"DunePG-132 h 35 min.Acțiune"`.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Fetch every fragment found for `year`, in page order.
    ///
    /// Failures are not reported: an unreachable page yields an empty list.
    async fn fetch_fragments(&self, year: i32) -> Vec<String>;
}
