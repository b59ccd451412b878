//! Game and session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{ImageId, DEFAULT_ICON_COUNT};
use crate::core::{BoardSize, GameRng, SessionConfig};
use crate::error::SessionError;
use crate::rules::MemoryGame;
use crate::session::{GameSession, TapOutcome};

use super::py_cards::PyMemoryCard;

impl From<SessionError> for PyErr {
    fn from(err: SessionError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn parse_board_size(name: &str) -> PyResult<BoardSize> {
    BoardSize::ALL
        .into_iter()
        .find(|size| size.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| PyValueError::new_err(format!("Unknown board size '{}'", name)))
}

/// Python wrapper for MemoryGame.
///
/// The bare engine: no tap filtering, so callers must not flip face-up or
/// matched cards.
#[pyclass(name = "MemoryGame")]
#[derive(Clone)]
pub struct PyMemoryGame(pub MemoryGame);

#[pymethods]
impl PyMemoryGame {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - pair_count: Number of distinct images
    /// - images: Optional image URLs, one per pair
    /// - seed: RNG seed for a reproducible deck
    #[new]
    #[pyo3(signature = (pair_count, images = None, seed = 42))]
    fn new(pair_count: usize, images: Option<Vec<String>>, seed: u64) -> PyResult<Self> {
        if pair_count == 0 {
            return Err(PyValueError::new_err("Must have at least 1 pair"));
        }
        match &images {
            Some(images) if images.len() != pair_count => {
                return Err(PyValueError::new_err(format!(
                    "Expected {} images, got {}",
                    pair_count,
                    images.len()
                )));
            }
            None if pair_count > DEFAULT_ICON_COUNT => {
                return Err(PyValueError::new_err(format!(
                    "At most {} pairs supported with built-in icons",
                    DEFAULT_ICON_COUNT
                )));
            }
            _ => {}
        }

        let images = images.map(|urls| urls.into_iter().map(ImageId::Url).collect());
        let mut rng = GameRng::new(seed);
        Ok(Self(MemoryGame::new(pair_count, images, &mut rng)))
    }

    /// Flip a card. Returns True on a match.
    fn flip(&mut self, position: usize) -> PyResult<bool> {
        if position >= self.0.cards().len() {
            return Err(SessionError::PositionOutOfRange {
                position,
                card_count: self.0.cards().len(),
            }
            .into());
        }
        Ok(self.0.flip(position).is_match())
    }

    fn is_won(&self) -> bool {
        self.0.is_won()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.0.move_count()
    }

    #[getter]
    fn flip_count(&self) -> u32 {
        self.0.flip_count()
    }

    #[getter]
    fn pairs_found(&self) -> usize {
        self.0.pairs_found()
    }

    #[getter]
    fn pair_count(&self) -> usize {
        self.0.pair_count()
    }

    #[getter]
    fn pending(&self) -> Option<usize> {
        self.0.pending()
    }

    #[getter]
    fn cards(&self) -> Vec<PyMemoryCard> {
        self.0.cards().iter().cloned().map(PyMemoryCard).collect()
    }

    fn __len__(&self) -> usize {
        self.0.cards().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(pairs={}/{}, moves={})",
            self.0.pairs_found(),
            self.0.pair_count(),
            self.0.move_count()
        )
    }
}

/// Python wrapper for TapOutcome.
#[pyclass(name = "TapOutcome")]
#[derive(Clone, Debug)]
pub struct PyTapOutcome(pub TapOutcome);

#[pymethods]
impl PyTapOutcome {
    #[getter]
    fn matched(&self) -> bool {
        self.0.matched
    }

    #[getter]
    fn pairs_found(&self) -> usize {
        self.0.pairs_found
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.0.moves
    }

    #[getter]
    fn won(&self) -> bool {
        self.0.won
    }

    fn __repr__(&self) -> String {
        format!(
            "TapOutcome(matched={}, pairs_found={}, moves={}, won={})",
            self.0.matched,
            self.0.pairs_found,
            self.0.moves,
            self.0.won
        )
    }
}

/// Python wrapper for GameSession.
#[pyclass(name = "GameSession")]
pub struct PyGameSession(pub GameSession);

#[pymethods]
impl PyGameSession {
    /// Start a session.
    ///
    /// # Arguments
    /// - board_size: "easy", "medium" or "hard"
    /// - seed: RNG seed, or None to seed from the OS
    #[new]
    #[pyo3(signature = (board_size = "easy", seed = None))]
    fn new(board_size: &str, seed: Option<u64>) -> PyResult<Self> {
        let mut config = SessionConfig::new().with_board_size(parse_board_size(board_size)?);
        config.seed = seed;
        Ok(Self(GameSession::new(config)))
    }

    /// Tap a card. Raises ValueError for rejected taps.
    fn tap(&mut self, position: usize) -> PyResult<PyTapOutcome> {
        Ok(PyTapOutcome(self.0.tap(position)?))
    }

    fn needs_quit_confirmation(&self) -> bool {
        self.0.needs_quit_confirmation()
    }

    fn restart(&mut self) {
        self.0.restart();
    }

    fn change_board_size(&mut self, board_size: &str) -> PyResult<()> {
        self.0.change_board_size(parse_board_size(board_size)?);
        Ok(())
    }

    /// Switch to a downloaded custom game.
    fn load_custom_images(&mut self, name: &str, images: Vec<String>) -> PyResult<()> {
        Ok(self.0.load_custom_images(name, images)?)
    }

    #[getter]
    fn game(&self) -> PyMemoryGame {
        PyMemoryGame(self.0.game().clone())
    }

    #[getter]
    fn title(&self) -> String {
        self.0.title().to_string()
    }

    #[getter]
    fn progress(&self) -> f32 {
        self.0.progress()
    }

    #[getter]
    fn board_label(&self) -> String {
        self.0.board_label()
    }

    #[getter]
    fn pairs_label(&self) -> String {
        self.0.pairs_label()
    }

    #[getter]
    fn moves_label(&self) -> String {
        self.0.moves_label()
    }

    fn __repr__(&self) -> String {
        format!("GameSession(title={:?}, {})", self.0.title(), self.0.board_label())
    }
}
