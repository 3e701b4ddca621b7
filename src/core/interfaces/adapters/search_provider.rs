use async_trait::async_trait;

use crate::core::models::{ImageResult, ImageSearchError, SearchQuery};

#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    /// Returns the first page of hits for `query`, in the provider's ranking order.
    async fn search_photos(&self, query: &SearchQuery)
        -> Result<Vec<ImageResult>, ImageSearchError>;

    /// Returns one random photo, optionally biased by `query`.
    async fn random_photo(&self, query: Option<&SearchQuery>)
        -> Result<ImageResult, ImageSearchError>;
}
