//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which pile every card is in and the order of
//! cards within each pile. It supports:
//! - Appending cards to a pile
//! - Moving cards between piles while keeping each pile's order
//! - Card lookup by ID
//! - Shuffling a pile with the game RNG

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::Pile;
use crate::core::entity::CardId;
use crate::core::rng::GameRng;

/// Manages card locations across the three piles.
///
/// ## Usage
///
/// ```
/// use set_engine::core::{CardId, Pile};
/// use set_engine::zones::ZoneManager;
///
/// let mut manager = ZoneManager::new();
///
/// manager.add_to_zone(CardId(10), Pile::Deck);
/// manager.add_to_zone(CardId(11), Pile::Deck);
///
/// let dealt = manager.move_front(Pile::Deck, Pile::Active, 1);
/// assert_eq!(dealt, vec![CardId(10)]);
/// assert_eq!(manager.cards_in_zone(Pile::Active), &[CardId(10)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    /// Card locations: card_id -> pile
    locations: FxHashMap<CardId, Pile>,

    /// Ordered card lists, indexed by `Pile::index`.
    order: [Vec<CardId>; 3],
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to a pile.
    ///
    /// Panics if the card is already tracked.
    pub fn add_to_zone(&mut self, card: CardId, pile: Pile) {
        if self.locations.contains_key(&card) {
            panic!("{} already exists in zone manager", card);
        }

        self.locations.insert(card, pile);
        self.order[pile.index()].push(card);
    }

    /// Move a card from its current pile to the back of another.
    ///
    /// Moving within the same pile is a no-op. Returns the old pile, or
    /// `None` if the card isn't tracked.
    pub fn move_to_zone(&mut self, card: CardId, new_pile: Pile) -> Option<Pile> {
        let old_pile = self.locations.get(&card).copied()?;

        if old_pile == new_pile {
            return Some(old_pile);
        }

        self.order[old_pile.index()].retain(|&c| c != card);
        self.locations.insert(card, new_pile);
        self.order[new_pile.index()].push(card);

        Some(old_pile)
    }

    /// Move up to `n` cards from the front of `from` to the back of `to`,
    /// keeping their order. Returns the moved IDs.
    pub fn move_front(&mut self, from: Pile, to: Pile, n: usize) -> Vec<CardId> {
        if from == to {
            return Vec::new();
        }

        let take = n.min(self.order[from.index()].len());
        let moved: Vec<CardId> = self.order[from.index()].drain(..take).collect();

        for &card in &moved {
            self.locations.insert(card, to);
        }
        self.order[to.index()].extend_from_slice(&moved);

        moved
    }

    /// Get the pile a card is in.
    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<Pile> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific pile.
    #[must_use]
    pub fn is_in_zone(&self, card: CardId, pile: Pile) -> bool {
        self.locations.get(&card) == Some(&pile)
    }

    /// Get the cards in a pile, in order.
    #[must_use]
    pub fn cards_in_zone(&self, pile: Pile) -> &[CardId] {
        &self.order[pile.index()]
    }

    /// Get the number of cards in a pile.
    #[must_use]
    pub fn zone_size(&self, pile: Pile) -> usize {
        self.order[pile.index()].len()
    }

    /// Shuffle a pile in place.
    pub fn shuffle_zone(&mut self, pile: Pile, rng: &mut GameRng) {
        rng.shuffle(&mut self.order[pile.index()]);
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager contains a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.locations.contains_key(&card)
    }

    /// Check that the location map and the pile orders agree.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn check_consistency(&self) -> Result<(), String> {
        let ordered: usize = self.order.iter().map(Vec::len).sum();
        if ordered != self.locations.len() {
            return Err(format!(
                "{} cards ordered but {} located",
                ordered,
                self.locations.len()
            ));
        }

        for pile in Pile::ALL {
            for &card in self.cards_in_zone(pile) {
                match self.locations.get(&card) {
                    Some(&located) if located == pile => {}
                    Some(&located) => {
                        return Err(format!("{} ordered in {} but located in {}", card, pile, located));
                    }
                    None => return Err(format!("{} ordered in {} but not located", card, pile)),
                }
            }
        }

        Ok(())
    }
}
