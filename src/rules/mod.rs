//! Matching rules: the in-memory game engine.

pub mod engine;

pub use engine::{FlipResult, MemoryGame};
