//! Verse audio URL resolution
//!
//! Turns a `(reciter, verse)` pair into the upstream URL of its recitation.
//! Files are named `SSSVVV.mp3` (3-digit zero-padded surah and verse) and
//! live in a per-reciter directory under a shared base URL. No network I/O
//! happens here.

use crate::error::{CoreError, Result};
use crate::reciters::ReciterRegistry;
use crate::types::{SurahNumber, VerseKey, VerseSlot};
use std::sync::Arc;
use url::Url;

/// Default upstream for per-verse recitations
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://everyayah.com/data";

/// File name for a verse, or `None` when the verse has no recording
///
/// The synthetic opening formula maps to the recitation of 1:1. It is never
/// recited for At-Tawbah, and Al-Fatiha has no synthetic verse at all.
pub fn audio_file_name(key: VerseKey) -> Option<String> {
    let (surah, verse) = match key.slot() {
        VerseSlot::Verse(verse) => (key.surah().get(), verse),
        VerseSlot::OpeningFormula if key.surah().has_opening_formula() => {
            (SurahNumber::AL_FATIHA.get(), 1)
        }
        VerseSlot::OpeningFormula => return None,
    };

    Some(format!("{:03}{:03}.mp3", surah, verse))
}

/// Resolves verse audio URLs against a reciter registry
#[derive(Debug, Clone)]
pub struct AudioResolver {
    base_url: Url,
    registry: Arc<ReciterRegistry>,
}

impl AudioResolver {
    /// Create a resolver for an absolute base URL
    pub fn new(base_url: &str, registry: Arc<ReciterRegistry>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| CoreError::InvalidUrl(format!("{base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidUrl(format!(
                "{base_url}: cannot carry path segments"
            )));
        }

        Ok(Self { base_url, registry })
    }

    /// Resolver over the default base URL and reciter list
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_AUDIO_BASE_URL, Arc::new(ReciterRegistry::default()))
    }

    /// Upstream URL for a verse
    ///
    /// Returns `None` for an unknown reciter or for an opening formula that is
    /// not recited, so callers decide how to degrade.
    pub fn resolve(&self, reciter_id: &str, key: VerseKey) -> Option<Url> {
        let reciter = self.registry.get(reciter_id)?;
        let file_name = audio_file_name(key)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(&reciter.audio_path_segment)
            .push(&file_name);

        Some(url)
    }

    pub fn registry(&self) -> &ReciterRegistry {
        &self.registry
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Route an upstream URL through the media proxy endpoint
///
/// Produces `<proxy_endpoint>?url=<percent-encoded upstream>`. The endpoint
/// may be relative (`/api/audio`) since the source is handed to a client.
pub fn proxied_url(proxy_endpoint: &str, upstream: &Url) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", upstream.as_str())
        .finish();
    format!("{}?{}", proxy_endpoint.trim_end_matches('?'), query)
}
