//! Game rules: the matching rule and the engine that applies it.
//!
//! - `matching`: Pure functions over cards (`is_valid_set`, `find_set`)
//! - `engine`: `GameEngine`, the only thing that mutates a `GameState`

pub mod engine;
pub mod matching;

pub use engine::{GameEngine, Outcome};
pub use matching::{count_sets, find_set, is_valid_set, third_key, violations};
