/// Surah (chapter) number
use crate::chapters::{self, ChapterInfo};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated surah number in `1..=114`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct SurahNumber(u16);

impl SurahNumber {
    /// Lowest surah number
    pub const MIN: u16 = 1;

    /// Highest surah number
    pub const MAX: u16 = 114;

    /// Al-Fatiha, where the opening formula is itself the first verse
    pub const AL_FATIHA: SurahNumber = SurahNumber(1);

    /// At-Tawbah, the only surah recited without the opening formula
    pub const AT_TAWBAH: SurahNumber = SurahNumber(9);

    /// Create a surah number, rejecting values outside `1..=114`
    pub fn new(number: u16) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CoreError::InvalidSurah(number))
        }
    }

    /// Surah number taken from the chapter table
    pub(crate) const fn from_table(number: u16) -> Self {
        Self(number)
    }

    /// Get the raw number
    pub fn get(self) -> u16 {
        self.0
    }

    /// Whether the opening formula is prepended to this surah as a synthetic verse
    pub fn has_opening_formula(self) -> bool {
        self != Self::AL_FATIHA && self != Self::AT_TAWBAH
    }

    /// Static chapter information
    pub fn chapter(self) -> &'static ChapterInfo {
        // Range is checked at construction, so the index is always valid.
        &chapters::CHAPTERS[usize::from(self.0 - 1)]
    }

    /// Number of real verses in this surah
    pub fn verse_count(self) -> u16 {
        self.chapter().verse_count
    }
}

impl TryFrom<u16> for SurahNumber {
    type Error = CoreError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SurahNumber> for u16 {
    fn from(value: SurahNumber) -> Self {
        value.0
    }
}

impl FromStr for SurahNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let number: u16 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidSurah(0))?;
        Self::new(number)
    }
}

impl fmt::Display for SurahNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
