/// Tafsir store - verse commentary loaded from a local dataset
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::HashMap, path::Path};
use tokio::fs;

/// Commentary for one verse
///
/// Fields beyond `surah`, `verse` and `text` are kept as they appear in the
/// dataset and returned unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TafsirEntry {
    pub surah: u16,
    pub verse: u16,
    pub text: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct TafsirDataset {
    tafsir: Vec<TafsirEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct TafsirStore {
    entries: HashMap<(u16, u16), TafsirEntry>,
}

impl TafsirStore {
    pub fn new(entries: Vec<TafsirEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            // First entry for a verse wins
            map.entry((entry.surah, entry.verse)).or_insert(entry);
        }
        Self { entries: map }
    }

    /// Parse a `{"tafsir": [...]}` dataset
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let dataset: TafsirDataset = serde_json::from_str(json)?;
        Ok(Self::new(dataset.tafsir))
    }

    /// Load the dataset file
    ///
    /// A missing or unreadable dataset yields an empty store.
    pub async fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Tafsir dataset {:?} unavailable: {}", path, e);
                return Self::default();
            }
        };

        match Self::from_json(&contents) {
            Ok(store) => {
                tracing::info!("Loaded {} tafsir entries from {:?}", store.len(), path);
                store
            }
            Err(e) => {
                tracing::warn!("Tafsir dataset {:?} is invalid: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn get(&self, surah: u16, verse: u16) -> Option<&TafsirEntry> {
        self.entries.get(&(surah, verse))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"{
        "tafsir": [
            {"surah": 1, "verse": 1, "text": "In the name of Allah", "author": "Ibn Kathir"},
            {"surah": 1, "verse": 2, "text": "All praise"},
            {"surah": 1, "verse": 1, "text": "duplicate"}
        ]
    }"#;

    #[test]
    fn test_lookup() {
        let store = TafsirStore::from_json(DATASET).unwrap();
        assert_eq!(store.len(), 2);

        let entry = store.get(1, 1).unwrap();
        assert_eq!(entry.text, "In the name of Allah");
        assert_eq!(entry.extra["author"], "Ibn Kathir");
        assert!(store.get(2, 255).is_none());
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(TafsirStore::from_json(r#"{"entries": []}"#).is_err());
        assert!(TafsirStore::from_json(r#"{"tafsir": [{"surah": 1}]}"#).is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let store = TafsirStore::load(Path::new("/nonexistent/tafsir.json")).await;
        assert!(store.is_empty());
    }
}
