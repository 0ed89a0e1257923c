/// Verse keys
use super::SurahNumber;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verse identifier, written `"<surah>:<verse>"`
///
/// Verse `0` is the opening formula prepended to every surah except
/// Al-Fatiha (where it is verse 1) and At-Tawbah (where it is absent).
/// Keys are validated against the chapter table on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerseKey {
    surah: SurahNumber,
    verse: u16,
}

/// Position of a key inside a surah's playable list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSlot {
    /// Synthetic opening formula ahead of verse 1
    OpeningFormula,

    /// Real verse with its 1-based number
    Verse(u16),
}

impl VerseKey {
    /// Create a verse key, checking the verse exists in the surah
    pub fn new(surah: SurahNumber, verse: u16) -> Result<Self> {
        let valid = if verse == 0 {
            surah.has_opening_formula()
        } else {
            verse <= surah.verse_count()
        };

        if valid {
            Ok(Self { surah, verse })
        } else {
            Err(CoreError::InvalidVerseKey(format!("{}:{}", surah, verse)))
        }
    }

    /// Key of the synthetic opening formula for a surah, if it carries one
    pub fn opening_formula(surah: SurahNumber) -> Option<Self> {
        surah
            .has_opening_formula()
            .then_some(Self { surah, verse: 0 })
    }

    /// Key built from already-validated parts
    pub(crate) const fn from_parts(surah: SurahNumber, verse: u16) -> Self {
        Self { surah, verse }
    }

    /// Surah this verse belongs to
    pub fn surah(&self) -> SurahNumber {
        self.surah
    }

    /// Verse number (0 for the opening formula)
    pub fn verse(&self) -> u16 {
        self.verse
    }

    /// Slot of this key in the playable list
    pub fn slot(&self) -> VerseSlot {
        if self.verse == 0 {
            VerseSlot::OpeningFormula
        } else {
            VerseSlot::Verse(self.verse)
        }
    }

    /// Whether this is the synthetic opening formula
    pub fn is_opening_formula(&self) -> bool {
        self.slot() == VerseSlot::OpeningFormula
    }
}

impl FromStr for VerseKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidVerseKey(s.to_string());

        let (surah, verse) = s.trim().split_once(':').ok_or_else(invalid)?;
        let surah: u16 = surah.parse().map_err(|_| invalid())?;
        let verse: u16 = verse.parse().map_err(|_| invalid())?;
        let surah = SurahNumber::new(surah).map_err(|_| invalid())?;

        Self::new(surah, verse)
    }
}

impl TryFrom<String> for VerseKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VerseKey> for String {
    fn from(value: VerseKey) -> Self {
        value.to_string()
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.verse)
    }
}
