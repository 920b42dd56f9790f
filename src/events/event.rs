//! Game event types.
//!
//! Events describe what an engine call changed, so a presentation layer can
//! schedule its animations (deal, zoom on a match, shake on a miss) without
//! the engine ever running timers itself.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Something that happened during an engine call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cards moved from the deck to the active pile, in deal order.
    Dealt { cards: Vec<CardId> },

    /// A card's selection flag changed.
    SelectionChanged { card: CardId, selected: bool },

    /// Three selected cards formed a set and were flagged matched.
    MatchResolved { cards: [CardId; 3] },

    /// Three selected cards did not form a set and were deselected.
    MismatchResolved { cards: [CardId; 3] },

    /// Matched cards left the active pile.
    MatchedRemoved { cards: Vec<CardId> },

    /// Face-down active cards were turned face-up.
    Revealed { cards: Vec<CardId> },

    /// The active pile was reordered.
    ActiveShuffled,
}

impl GameEvent {
    /// Cards this event refers to.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        match self {
            GameEvent::Dealt { cards }
            | GameEvent::MatchedRemoved { cards }
            | GameEvent::Revealed { cards } => cards,
            GameEvent::SelectionChanged { card, .. } => std::slice::from_ref(card),
            GameEvent::MatchResolved { cards } | GameEvent::MismatchResolved { cards } => cards,
            GameEvent::ActiveShuffled => &[],
        }
    }
}
