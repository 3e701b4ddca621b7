use crate::core::interfaces::adapters::ImageSearchProvider;
use crate::core::models::{ImageResult, ImageSearchError, SearchFailureKind, SearchQuery};
use crate::global_constants;

/// Submission lifecycle shared by the desktop shell and its tests.
///
/// At most one request is in flight; `is_loading` is the only guard. A failed
/// request keeps the previous results on screen next to the error.
#[derive(Debug, Default)]
pub struct SearchSession {
    query_text: String,
    is_loading: bool,
    last_failure: Option<ImageSearchError>,
    results: Vec<ImageResult>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn results(&self) -> &[ImageResult] {
        &self.results
    }

    pub fn last_failure_kind(&self) -> Option<SearchFailureKind> {
        self.last_failure.as_ref().map(ImageSearchError::kind)
    }

    /// User-facing message for the last failure, identical for every kind.
    pub fn last_error(&self) -> Option<&'static str> {
        self.last_failure
            .as_ref()
            .map(|_| global_constants::USER_MESSAGE_GENERATION_FAILED)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.query_text.is_empty()
    }

    pub fn update_query_text(&mut self, query_text: String) {
        self.query_text = query_text;
    }

    /// Moves to loading and hands back the query to send, or `None` when the
    /// submission must be ignored.
    pub fn begin_search(&mut self) -> Option<SearchQuery> {
        if self.is_loading {
            log::debug!("[SESSION] Ignoring submit, a request is already in flight");
            return None;
        }

        let query = SearchQuery::parse(&self.query_text)?;
        self.start_loading();
        Some(query)
    }

    /// Like [`Self::begin_search`] but an empty query is allowed and means
    /// "any photo".
    pub fn begin_random(&mut self) -> Option<Option<SearchQuery>> {
        if self.is_loading {
            log::debug!("[SESSION] Ignoring random request, a request is already in flight");
            return None;
        }

        let query = SearchQuery::parse(&self.query_text);
        self.start_loading();
        Some(query)
    }

    pub fn complete(&mut self, outcome: Result<Vec<ImageResult>, ImageSearchError>) {
        if !self.is_loading {
            log::warn!("[SESSION] Dropping completion that arrived while idle");
            return;
        }

        self.is_loading = false;

        match outcome {
            Ok(results) => {
                log::info!("[SESSION] Showing {} results", results.len());
                self.results = results;
            }
            Err(error) => {
                log::error!("[SESSION] Search failed: {}", error);
                self.last_failure = Some(error);
            }
        }
    }

    #[allow(dead_code)]
    pub async fn submit_search(&mut self, provider: &dyn ImageSearchProvider) {
        let Some(query) = self.begin_search() else {
            return;
        };

        let outcome = provider.search_photos(&query).await;
        self.complete(outcome);
    }

    #[allow(dead_code)]
    pub async fn submit_random(&mut self, provider: &dyn ImageSearchProvider) {
        let Some(query) = self.begin_random() else {
            return;
        };

        let outcome = provider
            .random_photo(query.as_ref())
            .await
            .map(|photo| vec![photo]);
        self.complete(outcome);
    }

    fn start_loading(&mut self) {
        self.last_failure = None;
        self.is_loading = true;
    }
}
