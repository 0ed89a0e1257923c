//! Playback Events
//!
//! Event-based communication for UI synchronization. The UI drains these to
//! move the verse highlight, scroll the active verse into view, and show
//! one-shot notices.

use crate::types::PlaybackState;
use noor_core::{SurahNumber, VerseKey};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Current verse changed (`None` when playback is cleared)
    VerseChanged {
        verse_key: Option<VerseKey>,
        previous: Option<VerseKey>,
    },

    /// Playback ran past the last verse of the surah
    SurahFinished { surah: SurahNumber },

    /// User-visible, one-shot notice
    Notice { message: String },
}
