//! Custom games built from user images.
//!
//! A custom game is a name plus the download URLs of its images. The
//! upload and download themselves happen outside this crate; this module
//! only decides whether the data describes a playable board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::ImageId;
use crate::core::BoardSize;
use crate::error::{Result, SessionError};

/// Shortest accepted game name.
pub const GAME_NAME_LENGTH_MIN: usize = 3;

/// Longest accepted game name.
pub const GAME_NAME_LENGTH_MAX: usize = 14;

/// Check a game name, returning it trimmed.
///
/// ```
/// use memory_match::session::validate_game_name;
///
/// assert_eq!(validate_game_name("  cats ").unwrap(), "cats");
/// assert!(validate_game_name("ab").is_err());
/// ```
pub fn validate_game_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if !(GAME_NAME_LENGTH_MIN..=GAME_NAME_LENGTH_MAX).contains(&len) {
        return Err(SessionError::InvalidGameName {
            len,
            min: GAME_NAME_LENGTH_MIN,
            max: GAME_NAME_LENGTH_MAX,
        });
    }
    Ok(trimmed)
}

/// Board size for a list of `image_count` distinct images.
pub fn board_size_for_images(image_count: usize) -> Result<BoardSize> {
    BoardSize::from_card_count(image_count * 2).ok_or(SessionError::UnsupportedImageCount(image_count))
}

/// Check that no image URL appears twice.
pub fn check_distinct_images(images: &[String]) -> Result<()> {
    let mut seen = FxHashSet::default();
    match images.iter().find(|image| !seen.insert(image.as_str())) {
        Some(duplicate) => Err(SessionError::DuplicateImage(duplicate.clone())),
        None => Ok(()),
    }
}

/// Image list as stored in the community catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserImageList {
    /// Download URLs, one per pair.
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// A validated custom game.
///
/// Deserializing runs the same checks as `CustomGame::new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCustomGame")]
pub struct CustomGame {
    name: String,
    images: Vec<String>,
}

#[derive(Deserialize)]
struct UncheckedCustomGame {
    name: String,
    images: Vec<String>,
}

impl TryFrom<UncheckedCustomGame> for CustomGame {
    type Error = SessionError;

    fn try_from(raw: UncheckedCustomGame) -> Result<Self> {
        Self::new(&raw.name, raw.images)
    }
}

impl CustomGame {
    /// Validate a name and image list.
    pub fn new(name: &str, images: Vec<String>) -> Result<Self> {
        let name = validate_game_name(name)?.to_string();
        board_size_for_images(images.len())?;
        check_distinct_images(&images)?;
        Ok(Self { name, images })
    }

    /// Build from a downloaded catalog entry.
    ///
    /// A missing image list is reported as zero images.
    pub fn from_image_list(name: &str, list: UserImageList) -> Result<Self> {
        Self::new(name, list.images.unwrap_or_default())
    }

    /// Game name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image URLs, one per pair.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Board size this game is played on.
    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        // Checked by `new`, which deserialization also goes through.
        BoardSize::from_card_count(self.images.len() * 2).unwrap_or_default()
    }

    /// Images as card identifiers.
    #[must_use]
    pub fn image_ids(&self) -> Vec<ImageId> {
        self.images.iter().cloned().map(ImageId::Url).collect()
    }

    /// Catalog entry for this game.
    #[must_use]
    pub fn to_image_list(&self) -> UserImageList {
        UserImageList {
            images: Some(self.images.clone()),
        }
    }
}

/// A custom game under construction.
///
/// ## Example
///
/// ```
/// use memory_match::core::BoardSize;
/// use memory_match::session::GameDraft;
///
/// let mut draft = GameDraft::new(BoardSize::Easy);
/// for i in 0..4 {
///     draft.add_image(format!("content://photos/{}", i)).unwrap();
/// }
/// draft.set_name("holiday");
///
/// assert!(draft.can_save());
/// let game = draft.finish().unwrap();
/// assert_eq!(game.board_size(), BoardSize::Easy);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameDraft {
    board_size: BoardSize,
    images: Vec<String>,
    name: String,
}

impl GameDraft {
    /// Start an empty draft for the given board.
    #[must_use]
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            images: Vec::with_capacity(board_size.num_pairs()),
            name: String::new(),
        }
    }

    /// Board this draft targets.
    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Number of images the board needs.
    #[must_use]
    pub fn required_images(&self) -> usize {
        self.board_size.num_pairs()
    }

    /// Images picked so far.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Add a picked image.
    pub fn add_image(&mut self, image: impl Into<String>) -> Result<()> {
        if self.images.len() >= self.required_images() {
            return Err(SessionError::TooManyImages(self.required_images()));
        }
        let image = image.into();
        if self.images.contains(&image) {
            return Err(SessionError::DuplicateImage(image));
        }
        self.images.push(image);
        Ok(())
    }

    /// Remove a picked image, returning it.
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Set the game name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Are all images picked and is the name acceptable?
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.images.len() == self.required_images() && validate_game_name(&self.name).is_ok()
    }

    /// Turn the draft into a custom game.
    pub fn finish(self) -> Result<CustomGame> {
        CustomGame::new(&self.name, self.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("https://img/{}.jpg", i)).collect()
    }

    #[test]
    fn test_validate_game_name_bounds() {
        assert!(validate_game_name("abc").is_ok());
        assert!(validate_game_name("abcdefghijklmn").is_ok());
        assert_eq!(
            validate_game_name("abcdefghijklmno"),
            Err(SessionError::InvalidGameName { len: 15, min: 3, max: 14 })
        );
        assert!(validate_game_name("   ").is_err());
        assert!(validate_game_name(" a ").is_err());
    }

    #[test]
    fn test_board_size_for_images() {
        assert_eq!(board_size_for_images(4), Ok(BoardSize::Easy));
        assert_eq!(board_size_for_images(9), Ok(BoardSize::Medium));
        assert_eq!(board_size_for_images(12), Ok(BoardSize::Hard));
        assert_eq!(board_size_for_images(5), Err(SessionError::UnsupportedImageCount(5)));
    }

    #[test]
    fn test_custom_game_new() {
        let game = CustomGame::new(" pets ", urls(9)).unwrap();

        assert_eq!(game.name(), "pets");
        assert_eq!(game.board_size(), BoardSize::Medium);
        assert_eq!(game.image_ids()[0], ImageId::url("https://img/0.jpg"));
    }

    #[test]
    fn test_custom_game_rejects_bad_image_count() {
        assert_eq!(
            CustomGame::new("pets", urls(3)),
            Err(SessionError::UnsupportedImageCount(3))
        );
    }

    #[test]
    fn test_from_missing_image_list() {
        let list: UserImageList = serde_json::from_str("{}").unwrap();
        assert_eq!(
            CustomGame::from_image_list("pets", list),
            Err(SessionError::UnsupportedImageCount(0))
        );
    }

    #[test]
    fn test_image_list_document() {
        let game = CustomGame::new("pets", urls(4)).unwrap();
        let json = serde_json::to_value(game.to_image_list()).unwrap();

        assert_eq!(json["images"].as_array().map(Vec::len), Some(4));

        let list: UserImageList = serde_json::from_value(json).unwrap();
        assert_eq!(CustomGame::from_image_list("pets", list), Ok(game));
    }

    #[test]
    fn test_custom_game_rejects_duplicate_images() {
        let images = vec!["a".to_string(), "a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            CustomGame::new("dupes", images),
            Err(SessionError::DuplicateImage("a".to_string()))
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let too_many = r#"{"name":"pets","images":["a","b","c","d","e"]}"#;
        assert!(serde_json::from_str::<CustomGame>(too_many).is_err());

        let bad_name = r#"{"name":"x","images":["a","b","c","d"]}"#;
        assert!(serde_json::from_str::<CustomGame>(bad_name).is_err());

        let dupes = r#"{"name":"pets","images":["a","a","b","c"]}"#;
        assert!(serde_json::from_str::<CustomGame>(dupes).is_err());
    }

    #[test]
    fn test_serde_keeps_valid_game() {
        let game = CustomGame::new("pets", urls(4)).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let deserialized: CustomGame = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, game);
        assert_eq!(deserialized.board_size(), BoardSize::Easy);
    }

    #[test]
    fn test_draft_rejects_duplicate_image() {
        let mut draft = GameDraft::new(BoardSize::Easy);
        draft.add_image("a").unwrap();

        assert_eq!(
            draft.add_image("a"),
            Err(SessionError::DuplicateImage("a".to_string()))
        );
        assert_eq!(draft.images().len(), 1);
    }

    #[test]
    fn test_draft_limits_images() {
        let mut draft = GameDraft::new(BoardSize::Easy);
        for url in urls(4) {
            draft.add_image(url).unwrap();
        }

        assert_eq!(draft.add_image("extra"), Err(SessionError::TooManyImages(4)));
        assert_eq!(draft.images().len(), 4);
    }

    #[test]
    fn test_draft_can_save_needs_name_and_images() {
        let mut draft = GameDraft::new(BoardSize::Easy);
        draft.set_name("trip");
        assert!(!draft.can_save());

        for url in urls(4) {
            draft.add_image(url).unwrap();
        }
        assert!(draft.can_save());

        draft.set_name("no");
        assert!(!draft.can_save());
    }

    #[test]
    fn test_draft_remove_image() {
        let mut draft = GameDraft::new(BoardSize::Easy);
        draft.add_image("a").unwrap();
        draft.add_image("b").unwrap();

        assert_eq!(draft.remove_image(0), Some("a".to_string()));
        assert_eq!(draft.remove_image(5), None);
        assert_eq!(draft.images(), &["b".to_string()]);
    }
}
