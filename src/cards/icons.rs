//! Built-in icon set used when a game has no custom images.

use super::image::ImageId;

/// Number of built-in icons. Caps the pair count of built-in games.
pub const DEFAULT_ICON_COUNT: usize = 12;

/// Resource ids of the built-in icons.
pub const DEFAULT_ICONS: [u32; DEFAULT_ICON_COUNT] = [
    0x7f07_0060, // bicycle
    0x7f07_0061, // boat
    0x7f07_0062, // bus
    0x7f07_0063, // car
    0x7f07_0064, // flight
    0x7f07_0065, // motorcycle
    0x7f07_0066, // railway
    0x7f07_0067, // rocket
    0x7f07_0068, // scooter
    0x7f07_0069, // subway
    0x7f07_006a, // taxi
    0x7f07_006b, // tram
];

/// The built-in icons as image identifiers.
#[must_use]
pub fn default_icons() -> Vec<ImageId> {
    DEFAULT_ICONS.iter().copied().map(ImageId::Builtin).collect()
}
