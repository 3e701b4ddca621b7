use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PreviewLoader: Send + Sync {
    async fn load_preview(&self, image_url: &str) -> Result<Vec<u8>>;
}
