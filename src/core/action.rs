//! Recorded engine actions.
//!
//! Every state-changing `GameEngine` call appends one `ActionRecord` to the
//! game's history. Together with the game seed the history is enough to
//! rebuild the state via `GameEngine::replay`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::CardId;

/// A state-changing engine operation.
///
/// ## Example
///
/// ```
/// use set_engine::core::{Action, CardId};
///
/// let deal = Action::Deal(3);
/// let tap = Action::Select(CardId(5));
/// let mark = Action::mark_matched(&[CardId(1), CardId(2), CardId(3)]);
///
/// assert_ne!(deal, tap);
/// assert!(matches!(mark, Action::MarkMatched(ref ids) if ids.len() == 3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deal up to `n` cards from the deck.
    Deal(usize),
    /// Toggle selection on a card.
    Select(CardId),
    /// Flag cards as matched without moving them.
    /// SmallVec holds the usual three IDs without heap allocation.
    MarkMatched(SmallVec<[CardId; 3]>),
    /// Move flagged cards to the matched pile.
    RemoveMatched,
    /// Reorder the active cards.
    ShuffleActive,
    /// Turn face-down active cards face-up.
    RevealActive,
}

impl Action {
    /// Build a `MarkMatched` action from a slice of IDs.
    #[must_use]
    pub fn mark_matched(ids: &[CardId]) -> Self {
        Action::MarkMatched(SmallVec::from_slice(ids))
    }
}

/// A recorded action with its position in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number (0-based, strictly increasing).
    pub sequence: u32,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action) -> Self {
        Self { sequence, action }
    }
}
