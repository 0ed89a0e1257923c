//! Noor Recite - Verse Playback
//!
//! Platform-agnostic sequential verse playback for Noor Recite.
//!
//! This crate provides:
//! - A single-source playback state machine (`Idle`, `Loading`, `Playing`, `Paused`)
//! - Automatic advance through a surah in canonical verse order
//! - Error recovery that resets to `Idle` with a one-shot notice
//! - Suppression of errors caused by intentionally clearing a source
//!
//! # Architecture
//!
//! `noor-playback` knows nothing about the platform audio element. The
//! platform implements [`AudioBackend`] and forwards its lifecycle callbacks
//! (end of track, errors) to [`PlaybackController::handle_event`].
//!
//! # Example
//!
//! ```rust
//! use noor_core::{AudioResolver, SurahNumber};
//! use noor_playback::{
//!     AudioBackend, BackendEvent, PlaybackConfig, PlaybackController, PlaybackState, Result,
//!     SessionId,
//! };
//!
//! #[derive(Default)]
//! struct SilentBackend {
//!     session: Option<SessionId>,
//! }
//!
//! impl AudioBackend for SilentBackend {
//!     fn load(&mut self, session: SessionId, _source: &str) -> Result<()> {
//!         self.session = Some(session);
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn clear(&mut self) {
//!         self.session = None;
//!     }
//! }
//!
//! let config = PlaybackConfig {
//!     surah: SurahNumber::new(112).unwrap(),
//!     ..PlaybackConfig::default()
//! };
//! let mut controller = PlaybackController::new(
//!     AudioResolver::with_defaults().unwrap(),
//!     Box::new(SilentBackend::default()),
//!     config,
//! )
//! .unwrap();
//!
//! // Start from the opening formula
//! controller.toggle();
//! assert_eq!(controller.state(), PlaybackState::Playing);
//! assert_eq!(controller.current_verse().unwrap().to_string(), "112:0");
//!
//! // The platform reports the end of the track
//! let session = controller.active_session().unwrap();
//! controller.handle_event(BackendEvent::ended(session));
//! assert_eq!(controller.current_verse().unwrap().to_string(), "112:1");
//! ```

mod backend;
mod controller;
mod error;
mod events;
pub mod types;

// Public exports
pub use backend::{AudioBackend, BackendEvent, BackendEventKind, MediaErrorKind, SessionId};
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use types::{PlaybackConfig, PlaybackState, DEFAULT_PROXY_ENDPOINT};
