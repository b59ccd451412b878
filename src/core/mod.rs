//! Core types: board configuration and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::{BoardSize, SessionConfig, DEFAULT_APP_NAME};
pub use rng::GameRng;
