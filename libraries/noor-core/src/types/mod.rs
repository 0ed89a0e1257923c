mod surah;
mod verse;

pub use surah::SurahNumber;
pub use verse::{VerseKey, VerseSlot};
