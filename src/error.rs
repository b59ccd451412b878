use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Card position {position} out of range for {card_count} cards")]
    PositionOutOfRange { position: usize, card_count: usize },
    #[error("Game already won, no new moves are accepted")]
    AlreadyWon,
    #[error("Invalid move: card {0} is already face-up")]
    InvalidMove(usize),
    #[error("Game name must be {min} to {max} characters, got {len}")]
    InvalidGameName { len: usize, min: usize, max: usize },
    #[error("No board holds {0} images")]
    UnsupportedImageCount(usize),
    #[error("Board already has all {0} images")]
    TooManyImages(usize),
    #[error("Image {0} is used more than once")]
    DuplicateImage(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
