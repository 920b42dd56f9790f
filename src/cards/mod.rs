//! Card system: attributes, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Symbol`, `Color`, `Shading`, `Count`: The four three-valued attributes
//! - `Feature`: Dense indexing shared by all attributes
//! - `Card`: Attribute tuple + identity + presentation flags
//! - `full_deck` / `shuffled_deck`: The 81-card deck

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Color, Count, Feature, Shading, Symbol};
pub use card::Card;
pub use deck::{full_deck, shuffled_deck, DECK_SIZE};
