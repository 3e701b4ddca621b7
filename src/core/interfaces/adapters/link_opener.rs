use anyhow::Result;

pub trait LinkOpener: Send + Sync {
    fn open_link(&self, url: &str) -> Result<()>;
}
