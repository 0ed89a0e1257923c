/// Core error types for Noor Recite
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Noor Recite
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Surah number outside 1..=114
    #[error("Invalid surah number: {0}")]
    InvalidSurah(u16),

    /// Verse key that is malformed or does not exist in its surah
    #[error("Invalid verse key: {0}")]
    InvalidVerseKey(String),

    /// Reciter id missing from the registry
    #[error("Unknown reciter: {0}")]
    UnknownReciter(String),

    /// Reciter registry could not be built
    #[error("Invalid reciter registry: {0}")]
    InvalidRegistry(String),

    /// Base URL that cannot carry path segments
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
