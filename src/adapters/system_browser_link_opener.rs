use anyhow::Result;

use crate::core::interfaces::adapters::LinkOpener;

/// Opens links in the user's default browser.
pub struct SystemBrowserLinkOpener;

impl LinkOpener for SystemBrowserLinkOpener {
    fn open_link(&self, url: &str) -> Result<()> {
        if url.is_empty() {
            anyhow::bail!("Refusing to open an empty link");
        }

        log::info!("[BROWSER] Opening {}", url);
        open::that(url)?;
        Ok(())
    }
}
