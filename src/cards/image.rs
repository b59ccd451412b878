//! Image identifiers.
//!
//! A card face is an opaque reference to an image. The engine only ever
//! compares identifiers for equality; resolving them to pixels is the
//! renderer's job.

use serde::{Deserialize, Serialize};

/// Opaque reference to the image on a card face.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImageId {
    /// Built-in drawable resource.
    Builtin(u32),
    /// User-uploaded image, addressed by its download URL.
    Url(String),
}

impl ImageId {
    /// Create a built-in image identifier.
    #[must_use]
    pub const fn builtin(id: u32) -> Self {
        Self::Builtin(id)
    }

    /// Create a URL image identifier.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Check if this is a built-in image.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin(_))
    }

    /// Get the URL for a user-uploaded image.
    #[must_use]
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Builtin(_) => None,
        }
    }
}

impl From<u32> for ImageId {
    fn from(id: u32) -> Self {
        Self::Builtin(id)
    }
}

impl From<String> for ImageId {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<&str> for ImageId {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin(id) => write!(f, "Builtin({})", id),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}
