//! Deck construction.
//!
//! The full deck is one card per attribute tuple: 3^4 = 81 cards.

use super::attributes::{Color, Count, Feature, Shading, Symbol};
use super::card::Card;
use crate::core::{CardId, GameRng};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 81;

/// Build the 81-card deck in canonical order.
///
/// Card IDs are `0..81` and equal each card's `key()`.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for symbol in Symbol::ALL {
        for color in Color::ALL {
            for shading in Shading::ALL {
                for count in Count::ALL {
                    let id = CardId::new(deck.len() as u32);
                    deck.push(Card::new(id, symbol, color, shading, count));
                }
            }
        }
    }
    deck
}

/// Build the deck and shuffle it with the game RNG.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}
