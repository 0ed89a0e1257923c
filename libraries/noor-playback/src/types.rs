//! Core types for verse playback

use noor_core::SurahNumber;
use serde::{Deserialize, Serialize};

/// Proxy endpoint used when none is configured
pub const DEFAULT_PROXY_ENDPOINT: &str = "/api/audio";

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No verse loaded
    Idle,

    /// Source assigned, waiting for the backend to accept playback
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-verse, source retained
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial reciter (default: first registry entry)
    pub reciter_id: Option<String>,

    /// Initial surah (default: Al-Fatiha)
    pub surah: SurahNumber,

    /// Media proxy endpoint that sources are routed through
    ///
    /// `None` hands upstream URLs to the backend directly.
    pub proxy_endpoint: Option<String>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            reciter_id: None,
            surah: SurahNumber::AL_FATIHA,
            proxy_endpoint: Some(DEFAULT_PROXY_ENDPOINT.to_string()),
        }
    }
}
