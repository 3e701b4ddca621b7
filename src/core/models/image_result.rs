/// Creator credit that must accompany every displayed photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    pub photographer: String,
    pub photographer_url: String,
    pub unsplash_url: String,
}

/// One normalized search hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResult {
    /// Display-resolution image, not the original asset.
    pub url: String,
    pub attribution: Attribution,
}

impl ImageResult {
    pub fn new(
        url: impl Into<String>,
        photographer: impl Into<String>,
        photographer_url: impl Into<String>,
        unsplash_url: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            attribution: Attribution {
                photographer: photographer.into(),
                photographer_url: photographer_url.into(),
                unsplash_url: unsplash_url.into(),
            },
        }
    }
}
