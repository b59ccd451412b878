//! Game session controller.
//!
//! `GameSession` owns the current `MemoryGame` and the settings that
//! produced it. It pre-filters taps so the engine only ever sees legal
//! flips, and replaces the game wholesale on every "new game" action.

use crate::cards::MemoryCard;
use crate::core::{BoardSize, GameRng, SessionConfig};
use crate::error::{Result, SessionError};
use crate::rules::MemoryGame;

use super::custom::CustomGame;

/// Result of an accepted tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapOutcome {
    /// Did the flip complete a pair?
    pub matched: bool,
    /// Pairs found after the flip.
    pub pairs_found: usize,
    /// Moves made after the flip.
    pub moves: u32,
    /// Did this flip win the game?
    pub won: bool,
}

/// Controller for one player's sequence of games.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    board_size: BoardSize,
    custom: Option<CustomGame>,
    rng: GameRng,
    game: MemoryGame,
}

impl GameSession {
    /// Start a session with a built-in game on the configured board.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::debug!("Session seed {}", rng.seed());
        let board_size = config.board_size;
        let game = MemoryGame::for_board(board_size, None, &mut rng.fork());

        Self {
            config,
            board_size,
            custom: None,
            rng,
            game,
        }
    }

    // === Input ===

    /// Handle a tap on the card at `position`.
    ///
    /// Rejected taps leave the game untouched.
    pub fn tap(&mut self, position: usize) -> Result<TapOutcome> {
        let card = self.game.card(position).ok_or(SessionError::PositionOutOfRange {
            position,
            card_count: self.game.cards().len(),
        })?;

        if self.game.is_won() {
            return Err(SessionError::AlreadyWon);
        }
        if card.is_face_up() {
            return Err(SessionError::InvalidMove(position));
        }

        let matched = self.game.flip(position).is_match();
        let won = self.game.is_won();

        if matched {
            log::info!(
                "Found a match! Number of pairs found: {}",
                self.game.pairs_found()
            );
        }
        if won {
            log::info!("Game won in {} moves", self.game.move_count());
        }

        Ok(TapOutcome {
            matched,
            pairs_found: self.game.pairs_found(),
            moves: self.game.move_count(),
            won,
        })
    }

    // === New game actions ===

    /// Would restarting throw away progress?
    ///
    /// True once a move has been made on a game that is not yet won.
    #[must_use]
    pub fn needs_quit_confirmation(&self) -> bool {
        self.game.move_count() > 0 && !self.game.is_won()
    }

    /// Deal a fresh game with the current board and images.
    pub fn restart(&mut self) {
        let images = self.custom.as_ref().map(CustomGame::image_ids);
        self.game = MemoryGame::for_board(self.board_size, images, &mut self.rng.fork());
        log::debug!("Started new {} game", self.board_size.name());
    }

    /// Switch to a built-in game on another board.
    pub fn change_board_size(&mut self, board_size: BoardSize) {
        self.board_size = board_size;
        self.custom = None;
        self.restart();
    }

    /// Switch to a custom game.
    pub fn load_custom_game(&mut self, game: CustomGame) {
        log::info!("Now playing '{}'", game.name());
        self.board_size = game.board_size();
        self.custom = Some(game);
        self.restart();
    }

    /// Validate downloaded game data and switch to it.
    pub fn load_custom_images(&mut self, name: &str, images: Vec<String>) -> Result<()> {
        let game = CustomGame::new(name, images).inspect_err(|err| {
            log::warn!("Invalid custom game data for '{}': {}", name, err);
        })?;
        self.load_custom_game(game);
        Ok(())
    }

    // === Read access ===

    /// Current game.
    #[must_use]
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    /// Cards of the current game in board order.
    #[must_use]
    pub fn cards(&self) -> &[MemoryCard] {
        self.game.cards()
    }

    /// Session seed. A session built with the same seed deals the same games.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Current board size.
    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Custom game being played, if any.
    #[must_use]
    pub fn custom_game(&self) -> Option<&CustomGame> {
        self.custom.as_ref()
    }

    /// Custom game name, or the app name for built-in games.
    #[must_use]
    pub fn title(&self) -> &str {
        self.custom
            .as_ref()
            .map_or(self.config.app_name.as_str(), CustomGame::name)
    }

    /// Fraction of pairs found, from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.game.pairs_found() as f32 / self.game.pair_count() as f32
    }

    /// Board description, e.g. "Easy: 4 x 2".
    #[must_use]
    pub fn board_label(&self) -> String {
        self.board_size.to_string()
    }

    /// Pair progress, e.g. "Pairs: 1 / 4".
    #[must_use]
    pub fn pairs_label(&self) -> String {
        format!("Pairs: {} / {}", self.game.pairs_found(), self.game.pair_count())
    }

    /// Move count, e.g. "Moves: 3".
    #[must_use]
    pub fn moves_label(&self) -> String {
        format!("Moves: {}", self.game.move_count())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
