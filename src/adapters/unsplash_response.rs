use serde::{Deserialize, Deserializer};

use crate::core::models::{ImageResult, ImageSearchError};
use crate::global_constants;

// Every field defaults so a partial photo still maps, with blanks. Absent
// keys and explicit nulls are treated the same.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchPhotosResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UnsplashPhoto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: PhotoUrls,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: PhotoUser,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
pub struct PhotoUrls {
    #[serde(default, deserialize_with = "null_as_default")]
    pub regular: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PhotoUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: PageLinks,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default, deserialize_with = "null_as_default")]
    pub html: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RandomPhotoResponse {
    Many(Vec<UnsplashPhoto>),
    One(UnsplashPhoto),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

impl From<UnsplashPhoto> for ImageResult {
    fn from(photo: UnsplashPhoto) -> Self {
        ImageResult::new(
            photo.urls.regular,
            photo.user.name,
            photo.user.links.html,
            photo.links.html,
        )
    }
}

pub fn parse_search_response(body: &str) -> Result<Vec<ImageResult>, ImageSearchError> {
    let response: SearchPhotosResponse = serde_json::from_str(body).map_err(|e| {
        ImageSearchError::Provider(format!("malformed search response: {}", e))
    })?;

    if response.results.is_empty() {
        return Err(ImageSearchError::NoResults);
    }

    Ok(response.results.into_iter().map(ImageResult::from).collect())
}

pub fn parse_random_response(body: &str) -> Result<ImageResult, ImageSearchError> {
    let response: RandomPhotoResponse = serde_json::from_str(body).map_err(|e| {
        ImageSearchError::Provider(format!("malformed random photo response: {}", e))
    })?;

    let photo = match response {
        RandomPhotoResponse::Many(photos) => photos.into_iter().next(),
        RandomPhotoResponse::One(photo) => Some(photo),
    };

    photo
        .map(ImageResult::from)
        .ok_or(ImageSearchError::NoResults)
}

/// Builds the message for a rejected request: the first `errors` entry when
/// the body has one, otherwise the status line.
pub fn extract_error_message(status: u16, reason: Option<&str>, body: &str) -> String {
    let first_error = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.errors.into_iter().next())
        .filter(|message| !message.is_empty());

    match first_error {
        Some(message) => message,
        None => format!(
            "HTTP {} {}",
            status,
            reason.unwrap_or(global_constants::PROVIDER_ERROR_MISSING_BODY)
        ),
    }
}
