//! A single card: immutable attributes plus presentation flags.
//!
//! The attribute tuple never changes after construction. The three flags
//! (`selected`, `matched`, `face_down`) are mutated only by the engine, so
//! their setters are crate-private.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Feature, Shading, Symbol};
use crate::core::CardId;

/// A card in a game.
///
/// ## Example
///
/// ```
/// use set_engine::cards::{Card, Color, Count, Shading, Symbol};
/// use set_engine::core::CardId;
///
/// let card = Card::new(CardId(0), Symbol::Rhombus, Color::Red, Shading::Filled, Count::One);
///
/// assert_eq!(card.key(), 0);
/// assert!(card.is_face_down());
/// assert!(!card.is_selected());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    color: Color,
    shading: Shading,
    count: Count,
    selected: bool,
    matched: bool,
    face_down: bool,
}

impl Card {
    /// Create a card in its deck state: face-down, unselected, unmatched.
    #[must_use]
    pub fn new(id: CardId, symbol: Symbol, color: Color, shading: Shading, count: Count) -> Self {
        Self {
            id,
            symbol,
            color,
            shading,
            count,
            selected: false,
            matched: false,
            face_down: true,
        }
    }

    /// Rebuild a card from its base-3 key (see `key`).
    ///
    /// Returns `None` if `key >= 81`.
    #[must_use]
    pub fn from_key(id: CardId, key: u8) -> Option<Self> {
        if usize::from(key) >= super::DECK_SIZE {
            return None;
        }
        Some(Self::new(
            id,
            Symbol::from_index(key / 27)?,
            Color::from_index(key / 9 % 3)?,
            Shading::from_index(key / 3 % 3)?,
            Count::from_index(key % 3)?,
        ))
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn shading(&self) -> Shading {
        self.shading
    }

    #[must_use]
    pub fn count(&self) -> Count {
        self.count
    }

    /// Attribute indices in `Attribute::ALL` order.
    #[must_use]
    pub fn indices(&self) -> [u8; 4] {
        [
            self.symbol.index(),
            self.color.index(),
            self.shading.index(),
            self.count.index(),
        ]
    }

    /// Index of a single attribute.
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Symbol => self.symbol.index(),
            Attribute::Color => self.color.index(),
            Attribute::Shading => self.shading.index(),
            Attribute::Count => self.count.index(),
        }
    }

    /// Base-3 encoding of the attribute tuple, unique in `0..81`.
    #[must_use]
    pub fn key(&self) -> u8 {
        let [s, c, sh, n] = self.indices();
        s * 27 + c * 9 + sh * 3 + n
    }

    /// Same attribute tuple, ignoring identity and flags.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.key() == other.key()
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.face_down
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Flag as part of a confirmed set. Clears the selection.
    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
        self.selected = false;
    }

    pub(crate) fn set_face_down(&mut self, face_down: bool) {
        self.face_down = face_down;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} {:?} {:?} {:?}]",
            self.id,
            self.count.value(),
            self.color,
            self.shading,
            self.symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for key in 0..81u8 {
            let card = Card::from_key(CardId(u32::from(key)), key).unwrap();
            assert_eq!(card.key(), key);
        }
        assert!(Card::from_key(CardId(81), 81).is_none());
    }

    #[test]
    fn test_key_layout() {
        let card = Card::new(CardId(1), Symbol::Square, Color::Green, Shading::Striped, Count::Two);
        assert_eq!(card.indices(), [2, 1, 2, 1]);
        assert_eq!(card.key(), 2 * 27 + 9 + 2 * 3 + 1);
        assert_eq!(card.attribute(Attribute::Color), 1);
    }

    #[test]
    fn test_mark_matched_clears_selection() {
        let mut card = Card::from_key(CardId(0), 0).unwrap();
        card.set_selected(true);
        card.mark_matched();

        assert!(card.is_matched());
        assert!(!card.is_selected());
    }

    #[test]
    fn test_same_face_ignores_identity() {
        let a = Card::from_key(CardId(1), 40).unwrap();
        let b = Card::from_key(CardId(2), 40).unwrap();
        assert!(a.same_face(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId(3), Symbol::Rhombus, Color::Blue, Shading::Empty, Count::Three);
        assert_eq!(format!("{}", card), "Card(3) [3 Blue Empty Rhombus]");
    }
}
