//! Memory cards - one face of the board.
//!
//! The identifier never changes after construction. Only the engine
//! mutates the face-up and matched flags.

use serde::{Deserialize, Serialize};

use super::image::ImageId;

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryCard {
    identifier: ImageId,

    /// Is the image currently showing?
    pub(crate) face_up: bool,

    /// Has this card been paired with its twin?
    pub(crate) matched: bool,
}

impl MemoryCard {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(identifier: ImageId) -> Self {
        Self {
            identifier,
            face_up: false,
            matched: false,
        }
    }

    /// Image shown on this card.
    #[must_use]
    pub fn identifier(&self) -> &ImageId {
        &self.identifier
    }

    /// Is the card face-up?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has the card been matched?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Does this card show the same image as `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &MemoryCard) -> bool {
        self.identifier == other.identifier
    }
}
