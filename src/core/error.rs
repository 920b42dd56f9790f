//! Error type for the fallible edges of the engine.
//!
//! Gameplay itself never fails: unknown cards and empty-deck deals are
//! reported through `Outcome` or a zero count. `GameError` covers
//! configuration, attribute conversion, and snapshot decoding.

use thiserror::Error;

/// Errors raised outside normal gameplay.
#[derive(Debug, Error)]
pub enum GameError {
    /// A card count outside 1..=3.
    #[error("invalid card count {0}, expected 1..=3")]
    InvalidCount(u8),

    /// A `GameConfig` that cannot drive a game.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Snapshot encoding or decoding failed.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// A restored state that breaks the pile invariants.
    #[error("corrupt game state: {0}")]
    Corrupt(String),
}
