use async_trait::async_trait;

use super::unsplash_response;
use crate::core::interfaces::adapters::ImageSearchProvider;
use crate::core::models::{ImageResult, ImageSearchError, SearchQuery};
use crate::global_constants;

/// Connection details for the Unsplash API, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplashConfig {
    pub access_key: String,
    pub api_base_url: String,
}

impl UnsplashConfig {
    pub fn new(access_key: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            api_base_url: api_base_url.into(),
        }
    }
}

pub struct UnsplashImageSearchProvider {
    http_client: reqwest::Client,
    config: UnsplashConfig,
}

impl UnsplashImageSearchProvider {
    pub fn new(config: UnsplashConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    fn api_root(&self) -> &str {
        self.config.api_base_url.trim_end_matches('/')
    }

    fn construct_search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/search/photos?query={}&per_page={}&orientation={}",
            self.api_root(),
            urlencoding::encode(query.as_str()),
            global_constants::SEARCH_PAGE_SIZE,
            global_constants::SEARCH_ORIENTATION
        )
    }

    fn construct_random_url(&self, query: Option<&SearchQuery>) -> String {
        let mut url = format!(
            "{}/photos/random?count={}",
            self.api_root(),
            global_constants::RANDOM_PHOTO_COUNT
        );

        if let Some(q) = query {
            url.push_str("&query=");
            url.push_str(&urlencoding::encode(q.as_str()));
        }

        url
    }

    async fn fetch_body(&self, url: &str) -> Result<String, ImageSearchError> {
        log::debug!("[UNSPLASH] GET {}", url);

        let response = self
            .http_client
            .get(url)
            .header(
                "Authorization",
                format!("Client-ID {}", self.config.access_key),
            )
            .header("Accept-Version", global_constants::UNSPLASH_API_VERSION)
            .send()
            .await
            .map_err(|e| {
                log::error!("[UNSPLASH] Request failed: {}", e);
                ImageSearchError::Provider(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ImageSearchError::Provider(e.to_string()))?;

        if !status.is_success() {
            let message = unsplash_response::extract_error_message(
                status.as_u16(),
                status.canonical_reason(),
                &body,
            );
            log::error!("[UNSPLASH] Provider rejected request ({}): {}", status, message);
            return Err(ImageSearchError::Provider(message));
        }

        Ok(body)
    }
}

#[async_trait]
impl ImageSearchProvider for UnsplashImageSearchProvider {
    async fn search_photos(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<ImageResult>, ImageSearchError> {
        log::info!("[UNSPLASH] Searching photos for query: {}", query);

        let body = self.fetch_body(&self.construct_search_url(query)).await?;
        let results = unsplash_response::parse_search_response(&body)?;

        log::info!("[UNSPLASH] Received {} photos", results.len());
        Ok(results)
    }

    async fn random_photo(
        &self,
        query: Option<&SearchQuery>,
    ) -> Result<ImageResult, ImageSearchError> {
        log::info!("[UNSPLASH] Fetching random photo (query: {:?})", query);

        let body = self.fetch_body(&self.construct_random_url(query)).await?;
        unsplash_response::parse_random_response(&body)
    }
}
