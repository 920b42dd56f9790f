//! The matching rule.
//!
//! Three cards form a set when, for every attribute, their values are all
//! the same or all different. With values as indices in `0..3` that is
//! `(a + b + c) % 3 == 0`: all-same gives `3a`, all-different gives
//! `0 + 1 + 2`, and any two-same-one-different sum is not a multiple of 3.
//! The same identity gives the unique third card completing any pair.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Attribute, Card};
use crate::core::CardId;

/// Check whether three cards form a set.
///
/// Symmetric under any permutation of its arguments. Identity and flags are
/// ignored, so three copies of one attribute tuple are a set.
///
/// ```
/// use set_engine::cards::{Card, Color, Count, Shading, Symbol};
/// use set_engine::core::CardId;
/// use set_engine::rules::is_valid_set;
///
/// let a = Card::new(CardId(0), Symbol::Rhombus, Color::Red, Shading::Filled, Count::One);
/// let b = Card::new(CardId(1), Symbol::Rectangle, Color::Green, Shading::Filled, Count::One);
/// let c = Card::new(CardId(2), Symbol::Square, Color::Blue, Shading::Filled, Count::One);
/// assert!(is_valid_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    let (a, b, c) = (a.indices(), b.indices(), c.indices());
    (0..4).all(|i| (a[i] + b[i] + c[i]) % 3 == 0)
}

/// Attributes on which three cards have exactly two equal values.
///
/// Empty iff the cards form a set.
#[must_use]
pub fn violations(a: &Card, b: &Card, c: &Card) -> SmallVec<[Attribute; 4]> {
    Attribute::ALL
        .into_iter()
        .filter(|&attr| (a.attribute(attr) + b.attribute(attr) + c.attribute(attr)) % 3 != 0)
        .collect()
}

/// Key of the unique card that completes a set with `a` and `b`.
#[must_use]
pub fn third_key(a: &Card, b: &Card) -> u8 {
    let (a, b) = (a.indices(), b.indices());
    let third = |i: usize| (6 - a[i] - b[i]) % 3;
    third(0) * 27 + third(1) * 9 + third(2) * 3 + third(3)
}

/// Find any set among `cards`, returning IDs in input order.
///
/// O(n^2): each pair is completed through a key lookup.
#[must_use]
pub fn find_set<'a, I>(cards: I) -> Option<[CardId; 3]>
where
    I: IntoIterator<Item = &'a Card>,
{
    let cards: Vec<&Card> = cards.into_iter().collect();
    let by_key: FxHashMap<u8, usize> = cards.iter().enumerate().map(|(i, c)| (c.key(), i)).collect();

    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let needed = third_key(cards[i], cards[j]);
            if let Some(&k) = by_key.get(&needed) {
                if k > j {
                    return Some([cards[i].id(), cards[j].id(), cards[k].id()]);
                }
            }
        }
    }
    None
}

/// Count the distinct sets among `cards`.
#[must_use]
pub fn count_sets<'a, I>(cards: I) -> usize
where
    I: IntoIterator<Item = &'a Card>,
{
    let cards: Vec<&Card> = cards.into_iter().collect();
    let by_key: FxHashMap<u8, usize> = cards.iter().enumerate().map(|(i, c)| (c.key(), i)).collect();

    let mut total = 0;
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if by_key
                .get(&third_key(cards[i], cards[j]))
                .is_some_and(|&k| k > j)
            {
                total += 1;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Color, Count, Shading, Symbol};

    fn card(id: u32, symbol: Symbol, color: Color, shading: Shading, count: Count) -> Card {
        Card::new(CardId(id), symbol, color, shading, count)
    }

    #[test]
    fn test_all_different_symbol_and_color() {
        let a = card(0, Symbol::Rhombus, Color::Red, Shading::Filled, Count::One);
        let b = card(1, Symbol::Rectangle, Color::Green, Shading::Filled, Count::One);
        let c = card(2, Symbol::Square, Color::Blue, Shading::Filled, Count::One);

        assert!(is_valid_set(&a, &b, &c));
        assert!(violations(&a, &b, &c).is_empty());
    }

    #[test]
    fn test_two_same_color_is_not_a_set() {
        let a = card(0, Symbol::Rhombus, Color::Red, Shading::Filled, Count::One);
        let b = card(1, Symbol::Rectangle, Color::Red, Shading::Filled, Count::One);
        let c = card(2, Symbol::Square, Color::Green, Shading::Filled, Count::One);

        assert!(!is_valid_set(&a, &b, &c));
        assert_eq!(violations(&a, &b, &c).as_slice(), &[Attribute::Color]);
    }

    #[test]
    fn test_identical_tuples_are_a_set() {
        let a = card(0, Symbol::Square, Color::Blue, Shading::Striped, Count::Two);
        let b = card(1, Symbol::Square, Color::Blue, Shading::Striped, Count::Two);
        let c = card(2, Symbol::Square, Color::Blue, Shading::Striped, Count::Two);

        assert!(is_valid_set(&a, &b, &c));
    }

    #[test]
    fn test_all_attributes_different() {
        let a = card(0, Symbol::Rhombus, Color::Red, Shading::Filled, Count::One);
        let b = card(1, Symbol::Rectangle, Color::Green, Shading::Empty, Count::Two);
        let c = card(2, Symbol::Square, Color::Blue, Shading::Striped, Count::Three);

        assert!(is_valid_set(&a, &b, &c));
    }

    #[test]
    fn test_third_key_completes_every_pair() {
        let deck = full_deck();
        for a in deck.iter().step_by(7) {
            for b in deck.iter().step_by(5) {
                let c = &deck[usize::from(third_key(a, b))];
                assert!(is_valid_set(a, b, c));
            }
        }
    }

    #[test]
    fn test_third_key_of_equal_pair_is_itself() {
        let deck = full_deck();
        assert_eq!(third_key(&deck[40], &deck[40]), 40);
    }

    #[test]
    fn test_find_set() {
        let a = card(10, Symbol::Rhombus, Color::Red, Shading::Filled, Count::One);
        let b = card(11, Symbol::Rhombus, Color::Red, Shading::Filled, Count::Two);
        let x = card(12, Symbol::Square, Color::Green, Shading::Empty, Count::One);
        let c = card(13, Symbol::Rhombus, Color::Red, Shading::Filled, Count::Three);

        assert_eq!(find_set([&a, &b, &x, &c]), Some([CardId(10), CardId(11), CardId(13)]));
        assert_eq!(find_set([&a, &b, &x]), None);
        assert_eq!(find_set(std::iter::empty::<&Card>()), None);
    }

    #[test]
    fn test_count_sets_full_deck() {
        // C(81, 2) / 3 = 1080
        assert_eq!(count_sets(&full_deck()), 1080);
    }
}
