//! # memory-match
//!
//! A memory/matching card game engine.
//!
//! Cards are dealt in pairs and shuffled. The player flips two cards at a
//! time; matching pairs stay face-up and the game is won once every pair
//! is found. Games use the built-in icon set or a list of custom image
//! URLs.
//!
//! ## Design Principles
//!
//! 1. **Engine as a value**: `MemoryGame` is plain data owned by whoever
//!    drives the game. A new game replaces it in one assignment.
//!
//! 2. **Injected randomness**: Every shuffle draws from a seedable
//!    `GameRng`, so decks are reproducible in tests.
//!
//! 3. **Caller-side validation**: The engine trusts its inputs. The
//!    `GameSession` controller rejects illegal taps and bad custom game
//!    data before they reach it.
//!
//! ## Modules
//!
//! - `core`: Board sizes, session configuration, RNG
//! - `cards`: Image identifiers, cards, built-in icons
//! - `rules`: The matching engine
//! - `session`: Session controller and custom game validation
//! - `error`: Session error type

pub mod core;
pub mod cards;
pub mod rules;
pub mod session;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BoardSize, GameRng, SessionConfig};

pub use crate::cards::{ImageId, MemoryCard, DEFAULT_ICONS};

pub use crate::rules::{FlipResult, MemoryGame};

pub use crate::session::{CustomGame, GameDraft, GameSession, TapOutcome, UserImageList};

pub use crate::error::{Result, SessionError};
