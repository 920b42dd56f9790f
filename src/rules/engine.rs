//! The game engine: every operation that changes a `GameState`.
//!
//! `GameEngine` holds only its `GameConfig`. All game data lives in the
//! `GameState` passed to each call, so one engine can drive any number of
//! games and a caller can clone a state to undo.
//!
//! Each state-changing call:
//! - completes synchronously, with no timers or deferred mutation
//! - appends an `ActionRecord` to the state's history
//! - appends `GameEvent`s for the presentation layer
//!
//! Calls that change nothing (unknown card, empty deck) record nothing.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::matching::{find_set, is_valid_set};
use crate::core::{Action, CardId, GameConfig, GameError, GameState, MatchRemoval, Pile};
use crate::events::GameEvent;

/// Result of tapping a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Fewer than three cards are selected after the toggle.
    Indeterminate,
    /// The third selection completed a set.
    Matched,
    /// The third selection did not complete a set; all three were deselected.
    NotASet,
    /// The ID does not name a selectable active card. Nothing changed.
    NotFound,
}

impl Outcome {
    /// Status line for the player.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Matched => "Set was removed",
            Outcome::NotASet => "Not a set",
            Outcome::Indeterminate | Outcome::NotFound => "",
        }
    }

    /// Whether three cards were evaluated.
    #[must_use]
    pub fn is_resolution(self) -> bool {
        matches!(self, Outcome::Matched | Outcome::NotASet)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Drives games according to a `GameConfig`.
///
/// ## Example
///
/// ```
/// use set_engine::core::GameConfig;
/// use set_engine::rules::{GameEngine, Outcome};
///
/// let engine = GameEngine::new(GameConfig::new().with_seed(7)).unwrap();
/// let mut state = engine.start_game();
/// assert_eq!(state.active_len(), 12);
///
/// let first = state.active().next().unwrap().id();
/// assert_eq!(engine.select_card(&mut state, first), Outcome::Indeterminate);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    /// Create an engine, rejecting configs that cannot drive a game.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Game lifecycle ===

    /// Fresh game: all 81 cards shuffled into the deck, nothing dealt.
    ///
    /// Uses the configured seed, or a random one.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        self.new_game_with_seed(seed)
    }

    /// Fresh game with an explicit seed.
    #[must_use]
    pub fn new_game_with_seed(&self, seed: u64) -> GameState {
        debug!(seed, "new game");
        GameState::new(seed)
    }

    /// Fresh game with the initial deal already on the table.
    #[must_use]
    pub fn start_game(&self) -> GameState {
        let mut state = self.new_game();
        self.deal_cards(&mut state, self.config.initial_deal);
        state
    }

    // === Dealing ===

    /// Move up to `n` cards from the front of the deck to the table.
    ///
    /// Returns how many moved. An empty deck (or `n == 0`) is a no-op.
    pub fn deal_cards(&self, state: &mut GameState, n: usize) -> usize {
        if n == 0 || state.deck_len() == 0 {
            trace!(requested = n, "nothing to deal");
            return 0;
        }

        let dealt = state.zones_mut().move_front(Pile::Deck, Pile::Active, n);
        for &id in &dealt {
            if let Some(card) = state.card_mut(id) {
                card.set_face_down(self.config.deal_face_down);
            }
        }

        debug!(
            requested = n,
            dealt = dealt.len(),
            remaining = state.deck_len(),
            "dealt cards"
        );

        let count = dealt.len();
        state.record(Action::Deal(n));
        state.emit(GameEvent::Dealt { cards: dealt });
        count
    }

    /// Deal the configured "deal more" amount.
    pub fn deal_more(&self, state: &mut GameState) -> usize {
        self.deal_cards(state, self.config.deal_size)
    }

    // === Selection ===

    /// Toggle selection on an active card and resolve a completed trio.
    ///
    /// The third selection is evaluated at once: a set is marked matched
    /// (and removed, under `MatchRemoval::Immediate`), a non-set is
    /// deselected. A fourth selected card therefore never exists.
    pub fn select_card(&self, state: &mut GameState, id: CardId) -> Outcome {
        if !state.is_selectable(id) {
            trace!(card = %id, "selection ignored");
            return Outcome::NotFound;
        }

        let Some(card) = state.card_mut(id) else {
            return Outcome::NotFound;
        };
        let selected = !card.is_selected();
        card.set_selected(selected);

        trace!(card = %id, selected, "selection toggled");
        state.record(Action::Select(id));
        state.emit(GameEvent::SelectionChanged { card: id, selected });

        let chosen = state.selected();
        if chosen.len() < 3 {
            return Outcome::Indeterminate;
        }
        let trio = [chosen[0], chosen[1], chosen[2]];
        self.resolve(state, trio)
    }

    fn resolve(&self, state: &mut GameState, trio: [CardId; 3]) -> Outcome {
        let valid = match (state.card(trio[0]), state.card(trio[1]), state.card(trio[2])) {
            (Some(a), Some(b), Some(c)) => is_valid_set(a, b, c),
            _ => false,
        };

        if valid {
            self.apply_mark_matched(state, &trio);
            debug!(cards = ?trio, "set found");
            state.emit(GameEvent::MatchResolved { cards: trio });

            if self.config.match_removal == MatchRemoval::Immediate {
                self.apply_remove_matched(state);
            }
            Outcome::Matched
        } else {
            for &id in &trio {
                if let Some(card) = state.card_mut(id) {
                    card.set_selected(false);
                }
            }
            debug!(cards = ?trio, "not a set");
            state.emit(GameEvent::MismatchResolved { cards: trio });
            Outcome::NotASet
        }
    }

    // === Matched cards ===

    /// Flag active cards as matched without moving them.
    ///
    /// Cards that are not active, or already matched, are skipped.
    /// Returns how many were flagged.
    pub fn mark_matched(&self, state: &mut GameState, ids: &[CardId]) -> usize {
        let marked = self.apply_mark_matched(state, ids);
        if !marked.is_empty() {
            state.record(Action::mark_matched(ids));
        }
        marked.len()
    }

    fn apply_mark_matched(&self, state: &mut GameState, ids: &[CardId]) -> SmallVec<[CardId; 3]> {
        let mut marked = SmallVec::new();
        for &id in ids {
            if state.pile_of(id) != Some(Pile::Active) {
                continue;
            }
            if let Some(card) = state.card_mut(id) {
                if !card.is_matched() {
                    card.mark_matched();
                    marked.push(id);
                }
            }
        }
        marked
    }

    /// Move every matched card on the table to the matched pile.
    ///
    /// Cards keep their table order and turn face-up. Returns how many moved.
    pub fn remove_matched(&self, state: &mut GameState) -> usize {
        let removed = self.apply_remove_matched(state);
        if removed > 0 {
            state.record(Action::RemoveMatched);
        }
        removed
    }

    fn apply_remove_matched(&self, state: &mut GameState) -> usize {
        let pending = state.pending_matched();
        if pending.is_empty() {
            return 0;
        }

        for &id in &pending {
            state.zones_mut().move_to_zone(id, Pile::Matched);
            if let Some(card) = state.card_mut(id) {
                card.set_face_down(false);
            }
        }

        debug!(removed = pending.len(), matched = state.matched_len(), "matched cards removed");
        let count = pending.len();
        state.emit(GameEvent::MatchedRemoved { cards: pending });
        count
    }

    // === Table ===

    /// Reorder the active cards with the game RNG.
    pub fn shuffle_active(&self, state: &mut GameState) {
        if state.active_len() == 0 {
            return;
        }
        state.shuffle_pile(Pile::Active);
        state.record(Action::ShuffleActive);
        state.emit(GameEvent::ActiveShuffled);
    }

    /// Turn every face-down active card face-up. Returns how many turned.
    pub fn reveal_active(&self, state: &mut GameState) -> usize {
        let hidden: Vec<CardId> = state
            .active()
            .filter(|c| c.is_face_down())
            .map(|c| c.id())
            .collect();
        if hidden.is_empty() {
            return 0;
        }

        for &id in &hidden {
            if let Some(card) = state.card_mut(id) {
                card.set_face_down(false);
            }
        }

        let count = hidden.len();
        state.record(Action::RevealActive);
        state.emit(GameEvent::Revealed { cards: hidden });
        count
    }

    // === Queries ===

    /// Any set among the selectable active cards.
    ///
    /// Read-only; dealing never consults it.
    #[must_use]
    pub fn hint(&self, state: &GameState) -> Option<[CardId; 3]> {
        find_set(state.active().filter(|c| state.is_selectable(c.id())))
    }

    /// The deck is empty and no set remains on the table.
    #[must_use]
    pub fn is_finished(&self, state: &GameState) -> bool {
        state.deck_len() == 0 && self.hint(state).is_none()
    }

    // === Replay ===

    /// Apply a recorded action.
    pub fn apply(&self, state: &mut GameState, action: &Action) {
        match action {
            Action::Deal(n) => {
                self.deal_cards(state, *n);
            }
            Action::Select(id) => {
                self.select_card(state, *id);
            }
            Action::MarkMatched(ids) => {
                self.mark_matched(state, ids);
            }
            Action::RemoveMatched => {
                self.remove_matched(state);
            }
            Action::ShuffleActive => self.shuffle_active(state),
            Action::RevealActive => {
                self.reveal_active(state);
            }
        }
    }

    /// Rebuild a game from its seed and action history.
    ///
    /// Must run under the same config that produced the history. The
    /// returned state has no pending events.
    #[must_use]
    pub fn replay(&self, seed: u64, actions: &[Action]) -> GameState {
        let mut state = self.new_game_with_seed(seed);
        for action in actions {
            self.apply(&mut state, action);
        }
        state.drain_events();
        debug!(seed, actions = actions.len(), "replayed game");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::rules::matching::third_key;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::new().with_seed(42)).unwrap()
    }

    /// A valid trio and a non-set trio on the table of `state`.
    fn trios(state: &GameState) -> ([CardId; 3], [CardId; 3]) {
        let active: Vec<&Card> = state.active().collect();
        let mut set = None;
        let mut miss = None;
        for i in 0..active.len() {
            for j in (i + 1)..active.len() {
                for k in (j + 1)..active.len() {
                    let ids = [active[i].id(), active[j].id(), active[k].id()];
                    if is_valid_set(active[i], active[j], active[k]) {
                        set.get_or_insert(ids);
                    } else {
                        miss.get_or_insert(ids);
                    }
                }
            }
        }
        (set.unwrap(), miss.unwrap())
    }

    /// Deal the whole deck so every set is reachable.
    fn full_table(engine: &GameEngine) -> GameState {
        let mut state = engine.new_game();
        engine.deal_cards(&mut state, 81);
        state.drain_events();
        state
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Matched.message(), "Set was removed");
        assert_eq!(Outcome::NotASet.to_string(), "Not a set");
        assert_eq!(Outcome::Indeterminate.message(), "");
        assert!(Outcome::NotASet.is_resolution());
        assert!(!Outcome::NotFound.is_resolution());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(GameEngine::new(GameConfig::new().with_deal_size(0)).is_err());
    }

    #[test]
    fn test_new_game_is_undealt() {
        let state = engine().new_game();
        assert_eq!(state.deck_len(), 81);
        assert_eq!(state.active_len(), 0);
        assert_eq!(state.seed(), 42);
    }

    #[test]
    fn test_start_game_deals_initial() {
        let state = engine().start_game();
        assert_eq!(state.active_len(), 12);
        assert_eq!(state.deck_len(), 69);
        assert!(state.active().all(|c| !c.is_face_down()));
    }

    #[test]
    fn test_deal_in_deck_order() {
        let engine = engine();
        let mut state = engine.new_game();
        let front: Vec<CardId> = state.deck().take(3).map(Card::id).collect();

        assert_eq!(engine.deal_more(&mut state), 3);
        let active: Vec<CardId> = state.active().map(Card::id).collect();
        assert_eq!(active, front);
        assert_eq!(state.drain_events(), vec![GameEvent::Dealt { cards: front }]);
    }

    #[test]
    fn test_deal_from_empty_deck_is_noop() {
        let engine = engine();
        let mut state = full_table(&engine);
        let history = state.history().len();

        assert_eq!(engine.deal_cards(&mut state, 3), 0);
        assert_eq!(state.history().len(), history);
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_deal_zero_is_noop() {
        let engine = engine();
        let mut state = engine.new_game();

        assert_eq!(engine.deal_cards(&mut state, 0), 0);
        assert_eq!(state.deck_len(), 81);
        assert!(state.history().is_empty());
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_unseeded_games_draw_fresh_seeds() {
        let engine = GameEngine::default();
        let seeds: Vec<u64> = (0..4).map(|_| engine.new_game().seed()).collect();

        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
        assert_eq!(engine.replay(seeds[0], &[]).seed(), seeds[0]);
    }

    #[test]
    fn test_face_down_deal_and_reveal() {
        let engine = GameEngine::new(GameConfig::new().with_seed(1).face_down_deal()).unwrap();
        let mut state = engine.start_game();
        let first = state.active().next().unwrap().id();

        assert_eq!(engine.select_card(&mut state, first), Outcome::NotFound);
        assert_eq!(engine.reveal_active(&mut state), 12);
        assert_eq!(engine.reveal_active(&mut state), 0);
        assert_eq!(engine.select_card(&mut state, first), Outcome::Indeterminate);
    }

    #[test]
    fn test_select_toggles() {
        let engine = engine();
        let mut state = engine.start_game();
        let first = state.active().next().unwrap().id();

        assert_eq!(engine.select_card(&mut state, first), Outcome::Indeterminate);
        assert!(state.card(first).unwrap().is_selected());

        assert_eq!(engine.select_card(&mut state, first), Outcome::Indeterminate);
        assert!(!state.card(first).unwrap().is_selected());
    }

    #[test]
    fn test_select_deck_card_not_found() {
        let engine = engine();
        let mut state = engine.start_game();
        let in_deck = state.deck().next().unwrap().id();
        let before = state.snapshot();

        assert_eq!(engine.select_card(&mut state, in_deck), Outcome::NotFound);
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_match_moves_cards() {
        let engine = engine();
        let mut state = full_table(&engine);
        let (set, _) = trios(&state);

        engine.select_card(&mut state, set[0]);
        engine.select_card(&mut state, set[1]);
        assert_eq!(engine.select_card(&mut state, set[2]), Outcome::Matched);

        for id in set {
            let card = state.card(id).unwrap();
            assert!(card.is_matched());
            assert!(!card.is_selected());
            assert_eq!(state.pile_of(id), Some(Pile::Matched));
        }
        assert_eq!(state.matched_len(), 3);
        assert_eq!(state.active_len(), 78);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_mismatch_deselects() {
        let engine = engine();
        let mut state = full_table(&engine);
        let (_, miss) = trios(&state);

        engine.select_card(&mut state, miss[0]);
        engine.select_card(&mut state, miss[1]);
        assert_eq!(engine.select_card(&mut state, miss[2]), Outcome::NotASet);

        for id in miss {
            assert!(!state.card(id).unwrap().is_selected());
            assert_eq!(state.pile_of(id), Some(Pile::Active));
        }
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_deferred_removal() {
        let engine = GameEngine::new(GameConfig::new().with_seed(3).deferred_removal()).unwrap();
        let mut state = full_table(&engine);
        let (set, _) = trios(&state);

        for id in set {
            engine.select_card(&mut state, id);
        }
        assert_eq!(state.pending_matched().len(), 3);
        assert_eq!(state.matched_len(), 0);

        // Flagged cards stay on the table but can't be tapped.
        assert_eq!(engine.select_card(&mut state, set[0]), Outcome::NotFound);

        assert_eq!(engine.remove_matched(&mut state), 3);
        assert_eq!(state.matched_len(), 3);
        assert_eq!(engine.remove_matched(&mut state), 0);
    }

    #[test]
    fn test_mark_matched_skips_non_active() {
        let engine = engine();
        let mut state = engine.start_game();
        let active = state.active().next().unwrap().id();
        let in_deck = state.deck().next().unwrap().id();

        assert_eq!(engine.mark_matched(&mut state, &[active, in_deck]), 1);
        assert_eq!(engine.mark_matched(&mut state, &[active]), 0);
        assert_eq!(state.pile_of(active), Some(Pile::Active));
    }

    #[test]
    fn test_shuffle_active_keeps_cards() {
        let engine = engine();
        let mut state = engine.start_game();
        let mut before: Vec<CardId> = state.active().map(Card::id).collect();

        engine.shuffle_active(&mut state);
        let mut after: Vec<CardId> = state.active().map(Card::id).collect();

        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert_eq!(state.history().last().unwrap().action, Action::ShuffleActive);
    }

    #[test]
    fn test_hint_is_valid() {
        let engine = engine();
        let state = full_table(&engine);
        let [a, b, c] = engine.hint(&state).unwrap();

        let (a, b, c) = (state.card(a).unwrap(), state.card(b).unwrap(), state.card(c).unwrap());
        assert!(is_valid_set(a, b, c));
        assert_eq!(usize::from(third_key(a, b)), usize::from(c.key()));
        assert!(!engine.is_finished(&state));
    }
}
