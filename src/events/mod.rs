//! Event emission for the presentation layer.
//!
//! The engine appends `GameEvent`s to the `GameState` it mutates. Callers
//! drain them with `GameState::drain_events` after each call and decide how
//! to animate them. Timing never flows back into the engine.

pub mod event;

pub use event::GameEvent;
