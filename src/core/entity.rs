//! Card identification.
//!
//! Every card dealt in a game has a unique `CardId`. IDs are allocated by
//! `GameState` when the deck is built and never change for the lifetime of
//! that game.
//!
//! ## Usage
//!
//! ```
//! use set_engine::core::CardId;
//!
//! let id = CardId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(format!("{}", id), "Card(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Opaque identity of a card within one game.
///
/// Two games may reuse the same raw values, so an ID held over from a
/// previous game is a stale reference: engine operations report it as
/// not found or resolve it against the new deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
