//! Reciter registry
//!
//! A small ordered list of audio-narration sources. The registry is built
//! once at startup and never mutated; the first entry is the default reciter.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Audio-narration source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReciterDescriptor {
    /// Registry id
    pub id: String,

    /// Name shown in the reciter picker
    pub display_name: String,

    /// Directory of this reciter's files under the audio base URL
    pub audio_path_segment: String,
}

impl ReciterDescriptor {
    /// Create a reciter descriptor
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        audio_path_segment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            audio_path_segment: audio_path_segment.into(),
        }
    }
}

/// Immutable, ordered reciter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReciterRegistry {
    reciters: Vec<ReciterDescriptor>,
}

impl ReciterRegistry {
    /// Build a registry
    ///
    /// Rejects an empty list, duplicate ids, and empty path segments.
    pub fn new(reciters: Vec<ReciterDescriptor>) -> Result<Self> {
        if reciters.is_empty() {
            return Err(CoreError::InvalidRegistry(
                "at least one reciter is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for reciter in &reciters {
            if !seen.insert(reciter.id.as_str()) {
                return Err(CoreError::InvalidRegistry(format!(
                    "duplicate reciter id {}",
                    reciter.id
                )));
            }
            if reciter.audio_path_segment.trim().is_empty() {
                return Err(CoreError::InvalidRegistry(format!(
                    "reciter {} has no audio path segment",
                    reciter.id
                )));
            }
        }

        Ok(Self { reciters })
    }

    /// Look up a reciter by id
    pub fn get(&self, id: &str) -> Option<&ReciterDescriptor> {
        self.reciters.iter().find(|r| r.id == id)
    }

    /// Default reciter (first entry)
    pub fn default_reciter(&self) -> &ReciterDescriptor {
        // Construction guarantees at least one entry.
        &self.reciters[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReciterDescriptor> {
        self.reciters.iter()
    }

    pub fn len(&self) -> usize {
        self.reciters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reciters.is_empty()
    }
}

impl Default for ReciterRegistry {
    fn default() -> Self {
        Self {
            reciters: vec![
                ReciterDescriptor::new(
                    "7",
                    "Mishary Rashid Alafasy",
                    "Mishary_Bin_Rashid_Alafasy_128kbps",
                ),
                ReciterDescriptor::new("4", "Mahmoud Khalil Al-Husary", "Husary_128kbps"),
                ReciterDescriptor::new(
                    "1",
                    "Abdur-Rahman as-Sudais",
                    "Abdurrahmaan_As-Sudais_128kbps",
                ),
                ReciterDescriptor::new("2", "Saad al-Ghamdi", "Ghamadi_40kbps"),
                ReciterDescriptor::new("5", "Saud ash-Shuraym", "Saood_ash-Shuraym_128kbps"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_order() {
        let registry = ReciterRegistry::default();
        let ids: Vec<&str> = registry.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["7", "4", "1", "2", "5"]);
        assert_eq!(registry.default_reciter().id, "7");
    }

    #[test]
    fn lookup_by_id() {
        let registry = ReciterRegistry::default();
        assert_eq!(registry.get("4").unwrap().audio_path_segment, "Husary_128kbps");
        assert!(registry.get("99").is_none());
    }

    #[test]
    fn rejects_invalid_lists() {
        assert!(ReciterRegistry::new(vec![]).is_err());

        let duplicate = vec![
            ReciterDescriptor::new("1", "A", "a"),
            ReciterDescriptor::new("1", "B", "b"),
        ];
        assert!(ReciterRegistry::new(duplicate).is_err());

        let blank = vec![ReciterDescriptor::new("1", "A", "  ")];
        assert!(ReciterRegistry::new(blank).is_err());
    }
}
