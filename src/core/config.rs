//! Board sizes and session configuration.
//!
//! - `BoardSize`: The three fixed board layouts
//! - `SessionConfig`: Starting board, seed and display name for a session

use serde::{Deserialize, Serialize};

/// Display name used when no custom game is loaded.
pub const DEFAULT_APP_NAME: &str = "Memory";

/// Supported board layouts.
///
/// Each layout is a grid of `width` columns by `height` rows and holds
/// `num_cards / 2` pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 4 rows of 2 cards.
    #[default]
    Easy,
    /// 6 rows of 3 cards.
    Medium,
    /// 6 rows of 4 cards.
    Hard,
}

impl BoardSize {
    /// All sizes, smallest first.
    pub const ALL: [BoardSize; 3] = [BoardSize::Easy, BoardSize::Medium, BoardSize::Hard];

    /// Total number of cards on the board.
    #[must_use]
    pub const fn num_cards(self) -> usize {
        match self {
            BoardSize::Easy => 8,
            BoardSize::Medium => 18,
            BoardSize::Hard => 24,
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            BoardSize::Easy => 2,
            BoardSize::Medium => 3,
            BoardSize::Hard => 4,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(self) -> usize {
        self.num_cards() / self.width()
    }

    /// Number of distinct images in a game of this size.
    #[must_use]
    pub const fn num_pairs(self) -> usize {
        self.num_cards() / 2
    }

    /// Look up the board size holding exactly `num_cards` cards.
    ///
    /// ```
    /// use memory_match::core::BoardSize;
    ///
    /// assert_eq!(BoardSize::from_card_count(18), Some(BoardSize::Medium));
    /// assert_eq!(BoardSize::from_card_count(10), None);
    /// ```
    #[must_use]
    pub fn from_card_count(num_cards: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.num_cards() == num_cards)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoardSize::Easy => "Easy",
            BoardSize::Medium => "Medium",
            BoardSize::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} x {}", self.name(), self.height(), self.width())
    }
}

/// Configuration for a `GameSession`.
///
/// ## Example
///
/// ```
/// use memory_match::core::{BoardSize, SessionConfig};
///
/// let config = SessionConfig::new()
///     .with_board_size(BoardSize::Hard)
///     .with_seed(42);
///
/// assert_eq!(config.board_size, BoardSize::Hard);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board used for the first game.
    pub board_size: BoardSize,

    /// Session seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Title shown while playing a built-in game.
    pub app_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            seed: None,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: BoardSize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Use a fixed seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the title shown for built-in games.
    #[must_use]
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }
}
