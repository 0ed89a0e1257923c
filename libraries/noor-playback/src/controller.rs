//! Playback controller - sequential verse playback
//!
//! Owns the playback state and the single audio backend. All mutation goes
//! through the operations below; backend callbacks arrive as
//! [`BackendEvent`]s and are handled as explicit transitions.

use crate::{
    backend::{AudioBackend, BackendEvent, BackendEventKind, MediaErrorKind, SessionId},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    types::{PlaybackConfig, PlaybackState},
};
use noor_core::{proxied_url, AudioResolver, SurahNumber, VerseKey};
use tracing::{debug, info, warn};

/// Sequential verse playback
///
/// States: `Idle -> Loading -> Playing <-> Paused`. At most one backend
/// session is active; every new source is preceded by tearing down the
/// previous one.
pub struct PlaybackController {
    // State
    state: PlaybackState,
    current: Option<VerseKey>,

    // Active surah and its canonical verse order
    surah: SurahNumber,
    playlist: Vec<VerseKey>,

    // Audio resolution
    resolver: AudioResolver,
    reciter_id: String,
    proxy_endpoint: Option<String>,

    // Backend session tracking
    backend: Box<dyn AudioBackend>,
    last_session: SessionId,
    active_session: Option<SessionId>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create a controller in the `Idle` state
    pub fn new(
        resolver: AudioResolver,
        backend: Box<dyn AudioBackend>,
        config: PlaybackConfig,
    ) -> Result<Self> {
        let reciter_id = match config.reciter_id {
            Some(id) if resolver.registry().get(&id).is_some() => id,
            Some(id) => return Err(PlaybackError::UnknownReciter(id)),
            None => resolver.registry().default_reciter().id.clone(),
        };

        Ok(Self {
            state: PlaybackState::Idle,
            current: None,
            surah: config.surah,
            playlist: config.surah.chapter().playlist(),
            resolver,
            reciter_id,
            proxy_endpoint: config.proxy_endpoint,
            backend,
            last_session: SessionId::from(0),
            active_session: None,
            pending_events: Vec::new(),
        })
    }

    // ===== Playback Control =====

    /// Play a verse of the active surah
    ///
    /// Abandons whatever is loaded or playing without waiting for it.
    pub fn play(&mut self, verse_key: VerseKey) -> Result<()> {
        let index = self.index_of(verse_key)?;
        self.play_from_index(index);
        Ok(())
    }

    /// Pause playback, keeping the source for [`resume`](Self::resume)
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.backend.pause();
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Resume a paused verse on the existing source
    pub fn resume(&mut self) {
        if self.state != PlaybackState::Paused {
            return;
        }

        match self.backend.play() {
            Ok(()) => self.set_state(PlaybackState::Playing),
            Err(e) => self.fail(format!("Could not resume playback: {e}")),
        }
    }

    /// Transport play/pause button
    ///
    /// Starts from the first verse when nothing is loaded.
    pub fn toggle(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.resume(),
            PlaybackState::Idle => {
                if !self.playlist.is_empty() {
                    self.play_from_index(0);
                }
            }
            PlaybackState::Loading => {}
        }
    }

    /// Manual verse selection
    ///
    /// Clicking the verse that is currently playing pauses it; any other
    /// verse starts playing immediately.
    pub fn select_verse(&mut self, verse_key: VerseKey) -> Result<()> {
        if self.current == Some(verse_key) && self.state == PlaybackState::Playing {
            self.pause();
            Ok(())
        } else {
            self.play(verse_key)
        }
    }

    /// Skip to the next verse, stopping after the last one
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let Some(index) = self.current_index() else {
            return;
        };

        if index + 1 < self.playlist.len() {
            self.play_from_index(index + 1);
        } else {
            self.stop();
        }
    }

    /// Go back one verse; no-op on the first verse
    pub fn previous(&mut self) {
        if let Some(index) = self.current_index() {
            if index > 0 {
                self.play_from_index(index - 1);
            }
        }
    }

    /// Stop playback and clear the current verse
    pub fn stop(&mut self) {
        self.teardown();
        self.set_current(None);
        self.set_state(PlaybackState::Idle);
    }

    // ===== Context Changes =====

    /// Switch reciter, stopping any audio first
    pub fn change_reciter(&mut self, reciter_id: &str) -> Result<()> {
        self.stop();

        if self.resolver.registry().get(reciter_id).is_none() {
            return Err(PlaybackError::UnknownReciter(reciter_id.to_string()));
        }

        info!(reciter = %reciter_id, "Reciter changed");
        self.reciter_id = reciter_id.to_string();
        Ok(())
    }

    /// Switch surah, stopping any audio first
    pub fn change_surah(&mut self, surah: SurahNumber) {
        self.stop();

        info!(surah = %surah, "Surah changed");
        self.surah = surah;
        self.playlist = surah.chapter().playlist();
    }

    // ===== Backend Events =====

    /// Handle a lifecycle event from the audio backend
    ///
    /// Events for sessions that were already torn down, and aborted loads,
    /// are ignored so that clearing a source never surfaces a notice.
    pub fn handle_event(&mut self, event: BackendEvent) {
        if self.active_session != Some(event.session) || self.state == PlaybackState::Idle {
            debug!(session = %event.session, kind = ?event.kind, "Ignoring stale backend event");
            return;
        }

        match event.kind {
            BackendEventKind::Ended => self.advance_after_end(),
            BackendEventKind::Error(MediaErrorKind::Aborted) => {
                debug!(session = %event.session, "Ignoring aborted load");
            }
            BackendEventKind::Error(kind) => {
                let message = match self.current {
                    Some(key) => format!("Could not play verse {key}: {kind}"),
                    None => format!("Audio playback failed: {kind}"),
                };
                self.fail(message);
            }
        }
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Verse that is loaded, playing or paused
    pub fn current_verse(&self) -> Option<VerseKey> {
        self.current
    }

    pub fn surah(&self) -> SurahNumber {
        self.surah
    }

    pub fn reciter_id(&self) -> &str {
        &self.reciter_id
    }

    /// Canonical verse order of the active surah
    pub fn playlist(&self) -> &[VerseKey] {
        &self.playlist
    }

    /// Session of the source currently assigned to the backend
    pub fn active_session(&self) -> Option<SessionId> {
        self.active_session
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn index_of(&self, verse_key: VerseKey) -> Result<usize> {
        self.playlist
            .iter()
            .position(|key| *key == verse_key)
            .ok_or(PlaybackError::VerseNotInSurah {
                verse_key,
                surah: self.surah,
            })
    }

    fn current_index(&self) -> Option<usize> {
        let current = self.current?;
        self.playlist.iter().position(|key| *key == current)
    }

    /// Load and start the verse at `index`
    ///
    /// Opening formulas without a recording are skipped in favour of the
    /// following verse.
    fn play_from_index(&mut self, mut index: usize) {
        self.teardown();

        let (verse_key, upstream) = loop {
            let Some(&verse_key) = self.playlist.get(index) else {
                self.finish_surah();
                return;
            };

            match self.resolver.resolve(&self.reciter_id, verse_key) {
                Some(url) => break (verse_key, url),
                None if verse_key.is_opening_formula() => {
                    debug!(verse = %verse_key, "Skipping unrecited opening formula");
                    index += 1;
                }
                None => {
                    self.fail(format!(
                        "No recitation available for verse {verse_key} from reciter {}",
                        self.reciter_id
                    ));
                    return;
                }
            }
        };

        let source = match &self.proxy_endpoint {
            Some(endpoint) => proxied_url(endpoint, &upstream),
            None => upstream.to_string(),
        };

        let session = self.last_session.next();
        self.last_session = session;
        self.active_session = Some(session);

        self.set_current(Some(verse_key));
        self.set_state(PlaybackState::Loading);
        debug!(verse = %verse_key, session = %session, source = %source, "Loading verse");

        if let Err(e) = self.backend.load(session, &source) {
            self.fail(format!("Could not load verse {verse_key}: {e}"));
            return;
        }

        match self.backend.play() {
            Ok(()) => self.set_state(PlaybackState::Playing),
            Err(e) => self.fail(format!("Could not play verse {verse_key}: {e}")),
        }
    }

    fn advance_after_end(&mut self) {
        match self.current_index() {
            Some(index) if index + 1 < self.playlist.len() => self.play_from_index(index + 1),
            _ => self.finish_surah(),
        }
    }

    fn finish_surah(&mut self) {
        self.stop();
        self.pending_events
            .push(PlaybackEvent::SurahFinished { surah: self.surah });
    }

    /// Playback failure: reset to `Idle` and raise a notice
    fn fail(&mut self, message: String) {
        warn!(message = %message, "Playback failed");
        self.stop();
        self.pending_events.push(PlaybackEvent::Notice { message });
    }

    /// Detach the active source, if any
    fn teardown(&mut self) {
        if let Some(session) = self.active_session.take() {
            debug!(session = %session, "Clearing audio source");
            self.backend.clear();
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlaybackEvent::StateChanged { state });
        }
    }

    fn set_current(&mut self, verse_key: Option<VerseKey>) {
        if self.current != verse_key {
            let previous = std::mem::replace(&mut self.current, verse_key);
            self.pending_events.push(PlaybackEvent::VerseChanged {
                verse_key,
                previous,
            });
        }
    }
}
