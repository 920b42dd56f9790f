//! Core engine types: card IDs, state, actions, RNG, configuration, errors.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use entity::CardId;
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, MatchRemoval, Pile};
pub use action::{Action, ActionRecord};
pub use error::GameError;
pub use state::{GameState, Snapshot};
