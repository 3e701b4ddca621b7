use thiserror::Error;

/// Failures surfaced by an image search provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageSearchError {
    /// The upstream service rejected or failed the request: bad credential,
    /// rate limit, transport failure or an undecodable body.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The query was valid but matched nothing.
    #[error("No images found for this query")]
    NoResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailureKind {
    Provider,
    NoResults,
}

impl ImageSearchError {
    pub fn kind(&self) -> SearchFailureKind {
        match self {
            ImageSearchError::Provider(_) => SearchFailureKind::Provider,
            ImageSearchError::NoResults => SearchFailureKind::NoResults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_message_includes_upstream_text() {
        let error = ImageSearchError::Provider("Rate Limit Exceeded".to_string());

        assert_eq!(error.to_string(), "Provider error: Rate Limit Exceeded");
        assert_eq!(error.kind(), SearchFailureKind::Provider);
    }

    #[test]
    fn test_no_results_error_has_its_own_kind() {
        assert_eq!(ImageSearchError::NoResults.kind(), SearchFailureKind::NoResults);
        assert_eq!(
            ImageSearchError::NoResults.to_string(),
            "No images found for this query"
        );
    }
}
