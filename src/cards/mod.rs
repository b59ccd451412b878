//! Card system: image identifiers, cards and the built-in icon set.
//!
//! ## Key Types
//!
//! - `ImageId`: Opaque image reference (built-in resource or URL)
//! - `MemoryCard`: Runtime card state (face-up, matched)
//! - `DEFAULT_ICONS`: Images used when no custom set is supplied

pub mod card;
pub mod icons;
pub mod image;

pub use card::MemoryCard;
pub use icons::{default_icons, DEFAULT_ICONS, DEFAULT_ICON_COUNT};
pub use image::ImageId;
