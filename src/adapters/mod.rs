mod http_preview_loader;
mod system_browser_link_opener;
mod unsplash_image_search_provider;
mod unsplash_response;

pub use http_preview_loader::HttpPreviewLoader;
pub use system_browser_link_opener::SystemBrowserLinkOpener;
pub use unsplash_image_search_provider::{UnsplashConfig, UnsplashImageSearchProvider};
