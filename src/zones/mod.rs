//! Pile tracking for card locations.
//!
//! A game has three piles: the deck, the active cards on the table, and the
//! matched cards. Each card is in exactly one of them.
//!
//! ## Key Types
//!
//! - `Pile`: Pile identifier (from `core::config`)
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::ZoneManager;

// Re-export pile type from core for convenience
pub use crate::core::config::Pile;
