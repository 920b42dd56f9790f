//! # set-engine
//!
//! Game-state core for a single-player Set card game.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A `GameState` value is passed into every engine
//!    call. No global model, and `clone()` is an undo point.
//!
//! 2. **No Timers**: Every call completes before returning. What changed is
//!    reported as `GameEvent`s that the presentation layer animates.
//!
//! 3. **Replayable**: A seed plus the recorded action history rebuilds any
//!    game exactly.
//!
//! ## Modules
//!
//! - `core`: Card IDs, state, actions, RNG, configuration, errors
//! - `cards`: Attributes, cards, and the 81-card deck
//! - `zones`: Pile membership and order (deck, active, matched)
//! - `rules`: The matching rule and `GameEngine`
//! - `events`: Events emitted for the presentation layer
//!
//! ## Example
//!
//! ```
//! use set_engine::{GameConfig, GameEngine, Outcome};
//!
//! let engine = GameEngine::new(GameConfig::new().with_seed(11)).unwrap();
//! let mut state = engine.start_game();
//!
//! if let Some([a, b, c]) = engine.hint(&state) {
//!     engine.select_card(&mut state, a);
//!     engine.select_card(&mut state, b);
//!     assert_eq!(engine.select_card(&mut state, c), Outcome::Matched);
//!     assert_eq!(state.matched_len(), 3);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng, GameRngState,
    Pile, GameConfig, MatchRemoval,
    Action, ActionRecord,
    GameError, GameState, Snapshot,
};

pub use crate::zones::ZoneManager;

pub use crate::cards::{Attribute, Card, Color, Count, Feature, Shading, Symbol, DECK_SIZE};

pub use crate::rules::{GameEngine, Outcome, find_set, is_valid_set};

pub use crate::events::GameEvent;
