//! Game configuration types.
//!
//! - `Pile`: The three places a card can be (deck, active, matched)
//! - `MatchRemoval`: Whether a found set leaves the table at once
//! - `GameConfig`: Combines all configuration
//!
//! `GameConfig` is serde-friendly with per-field defaults, so a host can
//! load a partial config from JSON or TOML and fill in the rest.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::DECK_SIZE;

/// A card's location. Every card is in exactly one pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    /// Undealt cards, face-down, in shuffled order.
    Deck,
    /// Dealt cards the player can see and select.
    Active,
    /// Cards removed as part of a confirmed set.
    Matched,
}

impl Pile {
    /// All piles, in index order.
    pub const ALL: [Pile; 3] = [Pile::Deck, Pile::Active, Pile::Matched];

    /// Dense index for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Pile::Deck => 0,
            Pile::Active => 1,
            Pile::Matched => 2,
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Pile::Deck => "deck",
            Pile::Active => "active",
            Pile::Matched => "matched",
        };
        f.write_str(name)
    }
}

/// What `select_card` does with a set it has just confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRemoval {
    /// Mark the three cards matched and move them to the matched pile.
    #[default]
    Immediate,
    /// Only mark them; the caller runs `remove_matched` when its
    /// animation finishes.
    Deferred,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed shuffle seed. `None` draws a fresh seed per game.
    pub seed: Option<u64>,

    /// Cards dealt by `start_game`.
    pub initial_deal: usize,

    /// Cards dealt by `deal_more`.
    pub deal_size: usize,

    /// Handling of confirmed sets.
    pub match_removal: MatchRemoval,

    /// Leave newly dealt cards face-down until `reveal_active`.
    pub deal_face_down: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_deal: 12,
            deal_size: 3,
            match_removal: MatchRemoval::Immediate,
            deal_face_down: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of cards dealt at game start.
    #[must_use]
    pub fn with_initial_deal(mut self, count: usize) -> Self {
        self.initial_deal = count;
        self
    }

    /// Set the number of cards dealt by "deal more".
    #[must_use]
    pub fn with_deal_size(mut self, count: usize) -> Self {
        self.deal_size = count;
        self
    }

    /// Keep matched cards on the table until `remove_matched`.
    #[must_use]
    pub fn deferred_removal(mut self) -> Self {
        self.match_removal = MatchRemoval::Deferred;
        self
    }

    /// Deal cards face-down.
    #[must_use]
    pub fn face_down_deal(mut self) -> Self {
        self.deal_face_down = true;
        self
    }

    /// Check that this config can drive a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.deal_size == 0 {
            return Err(GameError::InvalidConfig("deal_size must be at least 1".into()));
        }
        if self.initial_deal > DECK_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "initial_deal {} exceeds deck size {}",
                self.initial_deal, DECK_SIZE
            )));
        }
        Ok(())
    }
}
