pub const APPLICATION_TITLE: &str = "Image Generator";
pub const APPLICATION_TAGLINE: &str = "Unleash your imagination: transform words into stunning visuals!";

pub const UNSPLASH_API_URL: &str = "https://api.unsplash.com";
pub const UNSPLASH_API_VERSION: &str = "v1";
pub const UNSPLASH_ACCESS_KEY_ENV_VAR: &str = "UNSPLASH_ACCESS_KEY";

pub const SEARCH_PAGE_SIZE: u32 = 20;
pub const SEARCH_ORIENTATION: &str = "squarish";
pub const RANDOM_PHOTO_COUNT: u32 = 1;

pub const SETTINGS_DIRECTORY_NAME: &str = "image-generator";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const PROMPT_INPUT_ID: &str = "prompt-input";
pub const PROMPT_PLACEHOLDER: &str = "A serene lake surrounded by mountains at sunset...";
pub const RESULT_GRID_COLUMNS: usize = 3;
pub const RESULT_CARD_IMAGE_SIZE: f32 = 240.0;

pub const USER_MESSAGE_GENERATION_FAILED: &str = "Failed to generate images. Please try again.";
pub const USER_MESSAGE_NO_RESULTS_HINT: &str =
    "Nothing matched that prompt. Try different or broader words.";
pub const USER_MESSAGE_EMPTY_STATE: &str = "Your images will appear here";
pub const USER_MESSAGE_PREVIEW_LOADING: &str = "Loading preview...";

pub const PROVIDER_ERROR_MISSING_BODY: &str = "no error details returned by provider";
