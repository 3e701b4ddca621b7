mod link_opener;
mod preview_loader;
mod search_provider;

pub use link_opener::LinkOpener;
pub use preview_loader::PreviewLoader;
pub use search_provider::ImageSearchProvider;
