//! Session layer: the controller that drives games and custom game data.
//!
//! - `GameSession`: Owns the current game, filters taps, starts new games
//! - `CustomGame`: Validated name and image list of a user-made game
//! - `GameDraft`: A custom game being assembled

pub mod controller;
pub mod custom;

pub use controller::{GameSession, TapOutcome};
pub use custom::{
    board_size_for_images, check_distinct_images, validate_game_name, CustomGame, GameDraft, UserImageList,
    GAME_NAME_LENGTH_MAX, GAME_NAME_LENGTH_MIN,
};
