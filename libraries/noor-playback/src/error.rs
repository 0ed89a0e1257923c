//! Error types for verse playback

use noor_core::{CoreError, SurahNumber, VerseKey};
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Verse is not part of the active surah
    #[error("Verse {verse_key} is not part of surah {surah}")]
    VerseNotInSurah {
        verse_key: VerseKey,
        surah: SurahNumber,
    },

    /// Reciter id missing from the registry
    #[error("Unknown reciter: {0}")]
    UnknownReciter(String),

    /// Audio backend refused an operation
    #[error("Audio backend error: {0}")]
    Backend(String),

    /// Core domain error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
