//! The four card attributes.
//!
//! Each attribute has exactly three values with no ranking between them.
//! The `Feature` trait gives every attribute a dense index in `0..3`,
//! which is what the matching rule works on.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// A three-valued card attribute.
pub trait Feature: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Every value, in index order.
    const ALL: [Self; 3];

    /// Dense index in `0..3`.
    fn index(self) -> u8;

    /// Inverse of `index`.
    #[must_use]
    fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

macro_rules! feature {
    ($(#[$meta:meta])* $name:ident { $a:ident, $b:ident, $c:ident }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $a,
            $b,
            $c,
        }

        impl Feature for $name {
            const ALL: [Self; 3] = [$name::$a, $name::$b, $name::$c];

            fn index(self) -> u8 {
                self as u8
            }
        }
    };
}

feature!(
    /// Glyph drawn on the card.
    Symbol { Rhombus, Rectangle, Square }
);

feature!(
    /// Glyph color.
    Color { Red, Green, Blue }
);

feature!(
    /// Glyph fill style.
    Shading { Filled, Empty, Striped }
);

feature!(
    /// Number of glyphs on the card.
    Count { One, Two, Three }
);

impl Count {
    /// Number of glyphs, 1..=3.
    #[must_use]
    pub fn value(self) -> u8 {
        self.index() + 1
    }
}

impl TryFrom<u8> for Count {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Count::One),
            2 => Ok(Count::Two),
            3 => Ok(Count::Three),
            other => Err(GameError::InvalidCount(other)),
        }
    }
}

/// Names one of the four attributes, e.g. to report which one broke a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Symbol,
    Color,
    Shading,
    Count,
}

impl Attribute {
    /// All attributes, in the order `Card::indices` uses.
    pub const ALL: [Attribute; 4] = [
        Attribute::Symbol,
        Attribute::Color,
        Attribute::Shading,
        Attribute::Count,
    ];
}
