use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::PreviewLoader;

pub struct HttpPreviewLoader {
    http_client: reqwest::Client,
}

impl HttpPreviewLoader {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PreviewLoader for HttpPreviewLoader {
    async fn load_preview(&self, image_url: &str) -> Result<Vec<u8>> {
        log::debug!("[PREVIEW] Downloading {}", image_url);

        let response = self
            .http_client
            .get(image_url)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;

        log::debug!("[PREVIEW] Downloaded {} bytes from {}", bytes.len(), image_url);
        Ok(bytes.to_vec())
    }
}
