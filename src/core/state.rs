//! Game state: piles, cards, RNG, history and pending events.
//!
//! ## GameState
//!
//! A complete single-player game:
//! - Zone manager (which pile each card is in, pile order)
//! - Card table (attributes + presentation flags)
//! - Seeded RNG
//! - Action history for replay
//! - Events not yet drained by the caller
//!
//! `GameState` is an explicit value. The engine mutates it through
//! `&mut` and the caller can `clone()` it before a call to undo.
//!
//! ## Snapshot
//!
//! A serde view of the state without pending events, with a bincode
//! byte encoding. Restoring validates every pile invariant.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use super::action::{Action, ActionRecord};
use super::config::Pile;
use super::entity::CardId;
use super::error::GameError;
use super::rng::{GameRng, GameRngState};
use crate::cards::{shuffled_deck, Card, DECK_SIZE};
use crate::events::GameEvent;
use crate::zones::ZoneManager;

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Zone manager for card locations.
    zones: ZoneManager,

    /// Cards by ID.
    cards: FxHashMap<CardId, Card>,

    /// Deterministic RNG.
    rng: GameRng,

    /// Every state-changing action since the deck was built.
    history: Vector<ActionRecord>,

    /// Events waiting for the caller.
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game with all 81 cards shuffled into the deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let deck = shuffled_deck(&mut rng);

        let mut zones = ZoneManager::new();
        let mut cards = FxHashMap::default();
        for card in deck {
            zones.add_to_zone(card.id(), Pile::Deck);
            cards.insert(card.id(), card);
        }

        Self {
            zones,
            cards,
            rng,
            history: Vector::new(),
            events: Vec::new(),
        }
    }

    /// Seed the deck was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Piles ===

    /// Cards in a pile, in pile order.
    pub fn pile(&self, pile: Pile) -> impl Iterator<Item = &Card> + '_ {
        self.zones
            .cards_in_zone(pile)
            .iter()
            .filter_map(move |id| self.cards.get(id))
    }

    /// Undealt cards, next-to-deal first.
    pub fn deck(&self) -> impl Iterator<Item = &Card> + '_ {
        self.pile(Pile::Deck)
    }

    /// Cards on the table, in display order.
    pub fn active(&self) -> impl Iterator<Item = &Card> + '_ {
        self.pile(Pile::Active)
    }

    /// Removed sets, oldest first.
    pub fn matched(&self) -> impl Iterator<Item = &Card> + '_ {
        self.pile(Pile::Matched)
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.zones.zone_size(Pile::Deck)
    }

    #[must_use]
    pub fn active_len(&self) -> usize {
        self.zones.zone_size(Pile::Active)
    }

    #[must_use]
    pub fn matched_len(&self) -> usize {
        self.zones.zone_size(Pile::Matched)
    }

    /// Zone manager, for pile-level queries.
    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    pub(crate) fn zones_mut(&mut self) -> &mut ZoneManager {
        &mut self.zones
    }

    /// Which pile a card is in.
    #[must_use]
    pub fn pile_of(&self, id: CardId) -> Option<Pile> {
        self.zones.get_zone(id)
    }

    // === Cards ===

    /// Get a card by ID, in any pile.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    /// A card that can be tapped: active, face-up, not yet matched.
    #[must_use]
    pub fn is_selectable(&self, id: CardId) -> bool {
        self.zones.is_in_zone(id, Pile::Active)
            && self
                .cards
                .get(&id)
                .is_some_and(|c| !c.is_matched() && !c.is_face_down())
    }

    /// Selected active cards, in display order.
    #[must_use]
    pub fn selected(&self) -> SmallVec<[CardId; 3]> {
        self.active()
            .filter(|c| c.is_selected() && !c.is_matched())
            .map(Card::id)
            .collect()
    }

    /// Active cards flagged matched but not yet removed.
    #[must_use]
    pub fn pending_matched(&self) -> Vec<CardId> {
        self.active().filter(|c| c.is_matched()).map(Card::id).collect()
    }

    /// Shuffle a pile with the game RNG.
    pub(crate) fn shuffle_pile(&mut self, pile: Pile) {
        self.zones.shuffle_zone(pile, &mut self.rng);
    }

    // === History ===

    /// Recorded actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The actions alone, for `GameEngine::replay`.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        self.history.iter().map(|r| r.action.clone()).collect()
    }

    pub(crate) fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(sequence, action));
    }

    // === Events ===

    /// Events emitted since the last drain.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    // === Invariants ===

    /// Verify the pile and flag invariants.
    ///
    /// - 81 cards with 81 distinct attribute tuples
    /// - every card in exactly one pile, and every pile entry a real card
    /// - deck cards face-down, unselected, unmatched
    /// - matched-pile cards flagged matched
    /// - no card both selected and matched
    /// - at most two cards selected between calls
    pub fn check_invariants(&self) -> Result<(), GameError> {
        if self.cards.len() != DECK_SIZE {
            return Err(GameError::Corrupt(format!(
                "{} cards, expected {}",
                self.cards.len(),
                DECK_SIZE
            )));
        }

        self.zones.check_consistency().map_err(GameError::Corrupt)?;

        if self.zones.total_cards() != DECK_SIZE {
            return Err(GameError::Corrupt(format!(
                "{} cards in piles, expected {}",
                self.zones.total_cards(),
                DECK_SIZE
            )));
        }
        for pile in Pile::ALL {
            if let Some(id) = self
                .zones
                .cards_in_zone(pile)
                .iter()
                .find(|id| !self.cards.contains_key(*id))
            {
                return Err(GameError::Corrupt(format!("{} in {} has no card", id, pile)));
            }
        }

        let keys: FxHashSet<u8> = self.cards.values().map(Card::key).collect();
        if keys.len() != DECK_SIZE {
            return Err(GameError::Corrupt("duplicate attribute tuples".into()));
        }

        for (id, card) in &self.cards {
            if card.id() != *id {
                return Err(GameError::Corrupt(format!("{} stored under {}", card.id(), id)));
            }
            let pile = self
                .zones
                .get_zone(*id)
                .ok_or_else(|| GameError::Corrupt(format!("{} is in no pile", id)))?;

            if card.is_selected() && card.is_matched() {
                return Err(GameError::Corrupt(format!("{} is selected and matched", id)));
            }
            match pile {
                Pile::Deck if !card.is_face_down() || card.is_selected() || card.is_matched() => {
                    return Err(GameError::Corrupt(format!("{} in deck has table flags", id)));
                }
                Pile::Matched if !card.is_matched() => {
                    return Err(GameError::Corrupt(format!("{} in matched pile is unmatched", id)));
                }
                _ => {}
            }
        }

        if self.selected().len() >= 3 {
            return Err(GameError::Corrupt("three or more cards selected".into()));
        }

        Ok(())
    }

    // === Snapshots ===

    /// Capture the state, minus pending events.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let mut cards: Vec<Card> = self.cards.values().cloned().collect();
        cards.sort_by_key(Card::id);

        Snapshot {
            cards,
            zones: self.zones.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a state from a snapshot, rejecting any that breaks the
    /// invariants.
    pub fn restore(snapshot: Snapshot) -> Result<Self, GameError> {
        let state = Self {
            cards: snapshot.cards.into_iter().map(|c| (c.id(), c)).collect(),
            zones: snapshot.zones,
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history,
            events: Vec::new(),
        };

        if let Err(err) = state.check_invariants() {
            warn!(error = %err, "rejected snapshot");
            return Err(err);
        }
        Ok(state)
    }
}

/// Serializable capture of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All 81 cards, sorted by ID.
    pub cards: Vec<Card>,
    /// Pile membership and order.
    pub zones: ZoneManager,
    /// RNG position.
    pub rng: GameRngState,
    /// Action history.
    pub history: Vector<ActionRecord>,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. Does not validate; use `GameState::restore`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
