mod image_result;
mod search_error;
mod search_query;
mod user_settings;

pub use image_result::ImageResult;
pub use search_error::{ImageSearchError, SearchFailureKind};
pub use search_query::SearchQuery;
pub use user_settings::{ThemeMode, UserSettings};
