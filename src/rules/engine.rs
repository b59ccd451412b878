//! The matching engine.
//!
//! `MemoryGame` owns a shuffled deck of paired cards and the flip/match
//! bookkeeping. Callers pre-filter taps: the engine assumes it is never
//! asked to flip a face-up or matched card.
//!
//! ## Flip cycle
//!
//! - No pending selection: every unmatched card is turned face-down, then
//!   the flipped card becomes the pending selection.
//! - Pending selection: the flipped card is compared against it. Either
//!   way the pending selection is cleared and both cards stay face-up
//!   until the next cycle starts.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::cards::{default_icons, ImageId, MemoryCard, DEFAULT_ICON_COUNT};
use crate::core::{BoardSize, GameRng};

/// Outcome of a single flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipResult {
    /// The flipped card completed a pair.
    Match,
    /// Either the first flip of a cycle or a failed comparison.
    NoMatch,
}

impl FlipResult {
    /// Did this flip complete a pair?
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, FlipResult::Match)
    }
}

/// In-memory state of one matching game.
///
/// ## Example
///
/// ```
/// use memory_match::cards::ImageId;
/// use memory_match::rules::{FlipResult, MemoryGame};
///
/// let a = ImageId::builtin(1);
/// let b = ImageId::builtin(2);
/// let mut game = MemoryGame::from_layout(vec![a.clone(), b.clone(), a, b]);
///
/// assert_eq!(game.flip(0), FlipResult::NoMatch);
/// assert_eq!(game.flip(2), FlipResult::Match);
/// assert_eq!(game.pairs_found(), 1);
/// assert!(!game.is_won());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryGame {
    cards: Vec<MemoryCard>,
    pair_count: usize,
    pairs_found: usize,
    flip_count: u32,
    pending: Option<usize>,
}

impl MemoryGame {
    /// Deal a new shuffled game with `pair_count` pairs.
    ///
    /// With `images`, those identifiers are paired; there must be exactly
    /// `pair_count` of them. Without, `pair_count` icons are drawn at
    /// random from the built-in set.
    ///
    /// # Panics
    ///
    /// Panics if `pair_count` is zero, if `images` has the wrong length, or
    /// if more pairs are requested than there are built-in icons. Debug
    /// builds also panic on repeated images.
    #[must_use]
    pub fn new(pair_count: usize, images: Option<Vec<ImageId>>, rng: &mut GameRng) -> Self {
        assert!(pair_count > 0, "Must have at least 1 pair");

        let chosen = match images {
            Some(images) => {
                assert_eq!(
                    images.len(),
                    pair_count,
                    "Expected {} images, got {}",
                    pair_count,
                    images.len()
                );
                debug_assert!(
                    images.iter().collect::<FxHashSet<_>>().len() == images.len(),
                    "Images must be distinct"
                );
                images
            }
            None => {
                assert!(
                    pair_count <= DEFAULT_ICON_COUNT,
                    "At most {} pairs supported with built-in icons",
                    DEFAULT_ICON_COUNT
                );
                let mut icons = default_icons();
                rng.shuffle(&mut icons);
                icons.truncate(pair_count);
                icons
            }
        };

        let mut deck = chosen.clone();
        deck.extend(chosen);
        rng.shuffle(&mut deck);

        log::debug!("Dealt {} cards for {} pairs", deck.len(), pair_count);
        Self::with_deck(deck, pair_count)
    }

    /// Deal a new shuffled game sized for `board_size`.
    #[must_use]
    pub fn for_board(board_size: BoardSize, images: Option<Vec<ImageId>>, rng: &mut GameRng) -> Self {
        Self::new(board_size.num_pairs(), images, rng)
    }

    /// Build a game from an explicit, already-ordered deck.
    ///
    /// # Panics
    ///
    /// Panics if the layout is empty or any identifier does not appear
    /// exactly twice.
    #[must_use]
    pub fn from_layout(layout: Vec<ImageId>) -> Self {
        assert!(!layout.is_empty(), "Must have at least 1 pair");

        let pair_count = {
            let mut counts: FxHashMap<&ImageId, usize> = FxHashMap::default();
            for identifier in &layout {
                *counts.entry(identifier).or_insert(0) += 1;
            }
            if let Some((identifier, count)) = counts.iter().find(|&(_, &count)| count != 2) {
                panic!("Image {} appears {} times, expected 2", identifier, count);
            }
            counts.len()
        };
        Self::with_deck(layout, pair_count)
    }

    fn with_deck(deck: Vec<ImageId>, pair_count: usize) -> Self {
        Self {
            cards: deck.into_iter().map(MemoryCard::new).collect(),
            pair_count,
            pairs_found: 0,
            flip_count: 0,
            pending: None,
        }
    }

    // === Operations ===

    /// Flip the card at `position`.
    ///
    /// The flip counter is incremented whatever the outcome.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the deck.
    pub fn flip(&mut self, position: usize) -> FlipResult {
        assert!(
            position < self.cards.len(),
            "Card position {} out of range for {} cards",
            position,
            self.cards.len()
        );

        self.flip_count += 1;

        let result = match self.pending.take() {
            None => {
                self.flip_unmatched_down();
                self.pending = Some(position);
                FlipResult::NoMatch
            }
            Some(selected) => self.check_for_match(selected, position),
        };

        self.cards[position].face_up = true;
        result
    }

    fn check_for_match(&mut self, first: usize, second: usize) -> FlipResult {
        if !self.cards[first].pairs_with(&self.cards[second]) {
            return FlipResult::NoMatch;
        }

        self.cards[first].matched = true;
        self.cards[second].matched = true;
        self.pairs_found += 1;
        debug_assert!(self.pairs_found <= self.pair_count);
        FlipResult::Match
    }

    fn flip_unmatched_down(&mut self) {
        for card in self.cards.iter_mut().filter(|card| !card.matched) {
            card.face_up = false;
        }
    }

    /// Have all pairs been found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pairs_found == self.pair_count
    }

    /// Number of moves made. A move is two flips.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.flip_count / 2
    }

    // === Read access ===

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    /// Card at `position`, if in range.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&MemoryCard> {
        self.cards.get(position)
    }

    /// Number of distinct images in play.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Number of pairs matched so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Number of flips made so far.
    #[must_use]
    pub fn flip_count(&self) -> u32 {
        self.flip_count
    }

    /// Card awaiting a partner, if any.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn img(id: u32) -> ImageId {
        ImageId::builtin(id)
    }

    fn abab() -> MemoryGame {
        MemoryGame::from_layout(vec![img(1), img(2), img(1), img(2)])
    }

    #[test]
    fn test_worked_example() {
        let mut game = abab();

        assert_eq!(game.flip(0), FlipResult::NoMatch);
        assert_eq!(game.pending(), Some(0));
        assert!(game.cards()[0].is_face_up());

        assert_eq!(game.flip(2), FlipResult::Match);
        assert_eq!(game.pairs_found(), 1);
        assert!(game.cards()[0].is_matched());
        assert!(game.cards()[2].is_matched());
        assert_eq!(game.pending(), None);

        assert_eq!(game.flip(1), FlipResult::NoMatch);
        assert_eq!(game.pending(), Some(1));
        assert!(game.cards()[1].is_face_up());

        assert_eq!(game.flip(3), FlipResult::Match);
        assert_eq!(game.pairs_found(), 2);
        assert!(game.is_won());
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_failed_pair_stays_face_up_until_next_cycle() {
        let mut game = abab();

        game.flip(0);
        assert_eq!(game.flip(1), FlipResult::NoMatch);
        assert_eq!(game.pending(), None);
        assert!(game.cards()[0].is_face_up());
        assert!(game.cards()[1].is_face_up());

        // Starting a new cycle clears the stray pair
        game.flip(2);
        assert!(!game.cards()[0].is_face_up());
        assert!(!game.cards()[1].is_face_up());
        assert!(game.cards()[2].is_face_up());
        assert_eq!(game.pending(), Some(2));
    }

    #[test]
    fn test_matched_cards_never_flip_down() {
        let mut game = MemoryGame::from_layout(vec![img(1), img(1), img(2), img(3), img(2), img(3)]);

        game.flip(0);
        game.flip(1);
        game.flip(2);
        game.flip(3);
        game.flip(4);

        assert!(game.cards()[0].is_face_up());
        assert!(game.cards()[1].is_face_up());
        assert!(!game.cards()[3].is_face_up());
    }

    #[test]
    fn test_flip_count_increments_on_every_flip() {
        let mut game = abab();

        for (expected, position) in [0, 1, 2, 3].into_iter().enumerate() {
            assert_eq!(game.flip_count(), expected as u32);
            assert_eq!(game.move_count(), expected as u32 / 2);
            game.flip(position);
        }
        assert_eq!(game.flip_count(), 4);
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_first_flip_with_nothing_face_up() {
        let mut game = abab();

        assert_eq!(game.flip(3), FlipResult::NoMatch);
        let face_up: Vec<_> = game.cards().iter().map(MemoryCard::is_face_up).collect();
        assert_eq!(face_up, vec![false, false, false, true]);
    }

    #[test]
    fn test_new_with_builtin_icons() {
        let mut rng = GameRng::new(42);
        let game = MemoryGame::new(4, None, &mut rng);

        assert_eq!(game.cards().len(), 8);
        assert_eq!(game.pair_count(), 4);
        assert!(game.cards().iter().all(|c| c.identifier().is_builtin()));
        assert!(game.cards().iter().all(|c| !c.is_face_up() && !c.is_matched()));

        let distinct: FxHashSet<_> = game.cards().iter().map(MemoryCard::identifier).collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_new_with_custom_images() {
        let mut rng = GameRng::new(42);
        let images = vec![ImageId::url("https://i/a.jpg"), ImageId::url("https://i/b.jpg")];
        let game = MemoryGame::new(2, Some(images.clone()), &mut rng);

        for image in &images {
            let count = game.cards().iter().filter(|c| c.identifier() == image).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let game1 = MemoryGame::for_board(BoardSize::Hard, None, &mut GameRng::new(5));
        let game2 = MemoryGame::for_board(BoardSize::Hard, None, &mut GameRng::new(5));

        assert_eq!(game1, game2);
    }

    #[test]
    fn test_from_layout_counts_pairs() {
        let game = MemoryGame::from_layout(vec![img(9), img(8), img(8), img(9)]);
        assert_eq!(game.pair_count(), 2);
        assert!(!game.is_won());
    }

    #[test]
    #[should_panic(expected = "expected 2")]
    fn test_from_layout_rejects_unpaired() {
        let _ = MemoryGame::from_layout(vec![img(1), img(1), img(1), img(2)]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 pair")]
    fn test_zero_pairs_panics() {
        let _ = MemoryGame::new(0, None, &mut GameRng::new(1));
    }

    #[test]
    #[should_panic(expected = "built-in icons")]
    fn test_too_many_builtin_pairs_panics() {
        let _ = MemoryGame::new(DEFAULT_ICON_COUNT + 1, None, &mut GameRng::new(1));
    }

    #[test]
    #[should_panic(expected = "Expected 3 images")]
    fn test_wrong_image_count_panics() {
        let _ = MemoryGame::new(3, Some(vec![img(1), img(2)]), &mut GameRng::new(1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Images must be distinct")]
    fn test_repeated_images_panic_in_debug() {
        let _ = MemoryGame::new(2, Some(vec![img(1), img(1)]), &mut GameRng::new(1));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut game = abab();
        game.flip(0);

        let json = serde_json::to_value(&game).unwrap();

        assert_eq!(json["pending"], 0);
        assert_eq!(json["flip_count"], 1);
        assert_eq!(json["cards"][0]["face_up"], true);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_flip_out_of_range_panics() {
        abab().flip(4);
    }

    #[test]
    fn test_flip_result_is_match() {
        assert!(FlipResult::Match.is_match());
        assert!(!FlipResult::NoMatch.is_match());
    }
}
