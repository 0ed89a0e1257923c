//! Platform-agnostic audio backend trait
//!
//! Abstracts the single audio element the controller drives (an HTML audio
//! element in a browser, a native player elsewhere). Lifecycle callbacks are
//! reported back as [`BackendEvent`]s tagged with the session they belong to.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one source assignment
///
/// A new session starts every time the controller loads a source. Events
/// carrying an older session id belong to a torn-down source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for SessionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Platform audio backend
///
/// Implementors own exactly one playable source at a time.
pub trait AudioBackend: Send {
    /// Assign a source for a new session
    ///
    /// The controller always calls [`AudioBackend::clear`] for the previous
    /// session first.
    fn load(&mut self, session: SessionId, source: &str) -> Result<()>;

    /// Start or continue playback of the loaded source
    ///
    /// `Ok` means the backend accepted playback.
    fn play(&mut self) -> Result<()>;

    /// Pause without discarding the source
    fn pause(&mut self);

    /// Abort any in-flight load and detach the source
    ///
    /// Backends commonly report an aborted error for the cleared session;
    /// the controller ignores it.
    fn clear(&mut self);
}

/// Media failure categories reported by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaErrorKind {
    /// Load aborted because the source was cleared
    Aborted,

    /// Network failure while fetching
    Network,

    /// Data could not be decoded
    Decode,

    /// Source format or URL not supported
    SourceNotSupported,
}

impl MediaErrorKind {
    /// Map an HTML `MediaError.code` value
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => MediaErrorKind::Aborted,
            2 => MediaErrorKind::Network,
            3 => MediaErrorKind::Decode,
            _ => MediaErrorKind::SourceNotSupported,
        }
    }
}

impl fmt::Display for MediaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MediaErrorKind::Aborted => "load aborted",
            MediaErrorKind::Network => "network error",
            MediaErrorKind::Decode => "decode error",
            MediaErrorKind::SourceNotSupported => "source not supported",
        };
        f.write_str(text)
    }
}

/// What happened to a backend session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendEventKind {
    /// Track reached its natural end
    Ended,

    /// Playback failed
    Error(MediaErrorKind),
}

/// Lifecycle event fired by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendEvent {
    /// Session the event belongs to
    pub session: SessionId,

    pub kind: BackendEventKind,
}

impl BackendEvent {
    pub fn ended(session: SessionId) -> Self {
        Self {
            session,
            kind: BackendEventKind::Ended,
        }
    }

    pub fn error(session: SessionId, kind: MediaErrorKind) -> Self {
        Self {
            session,
            kind: BackendEventKind::Error(kind),
        }
    }
}
