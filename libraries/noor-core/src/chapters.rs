//! Static chapter table
//!
//! Names and verse counts for all 114 surahs. The table is the source of
//! truth for verse-key validation and for the canonical verse order used by
//! the playback controller.

use crate::types::{SurahNumber, VerseKey};
use serde::Serialize;

/// Chapter metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterInfo {
    /// Surah number (1-114)
    pub number: u16,

    /// Arabic name
    pub name_arabic: &'static str,

    /// Transliterated name
    pub name_english: &'static str,

    /// Number of real verses, excluding the prepended opening formula
    pub verse_count: u16,
}

impl ChapterInfo {
    const fn new(
        number: u16,
        name_arabic: &'static str,
        name_english: &'static str,
        verse_count: u16,
    ) -> Self {
        Self {
            number,
            name_arabic,
            name_english,
            verse_count,
        }
    }

    /// Validated surah number for this chapter
    pub fn surah(&self) -> SurahNumber {
        SurahNumber::from_table(self.number)
    }

    /// Ordered playable verse list
    ///
    /// Starts with the opening formula (verse 0) when the surah carries it,
    /// followed by verses `1..=verse_count` in canonical order.
    pub fn playlist(&self) -> Vec<VerseKey> {
        let surah = self.surah();
        let first = if surah.has_opening_formula() { 0 } else { 1 };

        (first..=self.verse_count)
            .map(|verse| VerseKey::from_parts(surah, verse))
            .collect()
    }
}

/// All chapters
pub fn chapters() -> &'static [ChapterInfo] {
    &CHAPTERS
}

/// Look up a chapter by number
pub fn chapter(number: u16) -> Option<&'static ChapterInfo> {
    SurahNumber::new(number).ok().map(SurahNumber::chapter)
}

pub(crate) static CHAPTERS: [ChapterInfo; 114] = [
    ChapterInfo::new(1, "الفاتحة", "Al-Fatiha", 7),
    ChapterInfo::new(2, "البقرة", "Al-Baqarah", 286),
    ChapterInfo::new(3, "آل عمران", "Ali 'Imran", 200),
    ChapterInfo::new(4, "النساء", "An-Nisa", 176),
    ChapterInfo::new(5, "المائدة", "Al-Ma'idah", 120),
    ChapterInfo::new(6, "الأنعام", "Al-An'am", 165),
    ChapterInfo::new(7, "الأعراف", "Al-A'raf", 206),
    ChapterInfo::new(8, "الأنفال", "Al-Anfal", 75),
    ChapterInfo::new(9, "التوبة", "At-Tawbah", 129),
    ChapterInfo::new(10, "يونس", "Yunus", 109),
    ChapterInfo::new(11, "هود", "Hud", 123),
    ChapterInfo::new(12, "يوسف", "Yusuf", 111),
    ChapterInfo::new(13, "الرعد", "Ar-Ra'd", 43),
    ChapterInfo::new(14, "ابراهيم", "Ibrahim", 52),
    ChapterInfo::new(15, "الحجر", "Al-Hijr", 99),
    ChapterInfo::new(16, "النحل", "An-Nahl", 128),
    ChapterInfo::new(17, "الإسراء", "Al-Isra", 111),
    ChapterInfo::new(18, "الكهف", "Al-Kahf", 110),
    ChapterInfo::new(19, "مريم", "Maryam", 98),
    ChapterInfo::new(20, "طه", "Taha", 135),
    ChapterInfo::new(21, "الأنبياء", "Al-Anbya", 112),
    ChapterInfo::new(22, "الحج", "Al-Hajj", 78),
    ChapterInfo::new(23, "المؤمنون", "Al-Mu'minun", 118),
    ChapterInfo::new(24, "النور", "An-Nur", 64),
    ChapterInfo::new(25, "الفرقان", "Al-Furqan", 77),
    ChapterInfo::new(26, "الشعراء", "Ash-Shu'ara", 227),
    ChapterInfo::new(27, "النمل", "An-Naml", 93),
    ChapterInfo::new(28, "القصص", "Al-Qasas", 88),
    ChapterInfo::new(29, "العنكبوت", "Al-'Ankabut", 69),
    ChapterInfo::new(30, "الروم", "Ar-Rum", 60),
    ChapterInfo::new(31, "لقمان", "Luqman", 34),
    ChapterInfo::new(32, "السجدة", "As-Sajdah", 30),
    ChapterInfo::new(33, "الأحزاب", "Al-Ahzab", 73),
    ChapterInfo::new(34, "سبإ", "Saba", 54),
    ChapterInfo::new(35, "فاطر", "Fatir", 45),
    ChapterInfo::new(36, "يس", "Ya-Sin", 83),
    ChapterInfo::new(37, "الصافات", "As-Saffat", 182),
    ChapterInfo::new(38, "ص", "Sad", 88),
    ChapterInfo::new(39, "الزمر", "Az-Zumar", 75),
    ChapterInfo::new(40, "غافر", "Ghafir", 85),
    ChapterInfo::new(41, "فصلت", "Fussilat", 54),
    ChapterInfo::new(42, "الشورى", "Ash-Shuraa", 53),
    ChapterInfo::new(43, "الزخرف", "Az-Zukhruf", 89),
    ChapterInfo::new(44, "الدخان", "Ad-Dukhan", 59),
    ChapterInfo::new(45, "الجاثية", "Al-Jathiyah", 37),
    ChapterInfo::new(46, "الأحقاف", "Al-Ahqaf", 35),
    ChapterInfo::new(47, "محمد", "Muhammad", 38),
    ChapterInfo::new(48, "الفتح", "Al-Fath", 29),
    ChapterInfo::new(49, "الحجرات", "Al-Hujurat", 18),
    ChapterInfo::new(50, "ق", "Qaf", 45),
    ChapterInfo::new(51, "الذاريات", "Adh-Dhariyat", 60),
    ChapterInfo::new(52, "الطور", "At-Tur", 49),
    ChapterInfo::new(53, "النجم", "An-Najm", 62),
    ChapterInfo::new(54, "القمر", "Al-Qamar", 55),
    ChapterInfo::new(55, "الرحمن", "Ar-Rahman", 78),
    ChapterInfo::new(56, "الواقعة", "Al-Waqi'ah", 96),
    ChapterInfo::new(57, "الحديد", "Al-Hadid", 29),
    ChapterInfo::new(58, "المجادلة", "Al-Mujadila", 22),
    ChapterInfo::new(59, "الحشر", "Al-Hashr", 24),
    ChapterInfo::new(60, "الممتحنة", "Al-Mumtahanah", 13),
    ChapterInfo::new(61, "الصف", "As-Saf", 14),
    ChapterInfo::new(62, "الجمعة", "Al-Jumu'ah", 11),
    ChapterInfo::new(63, "المنافقون", "Al-Munafiqun", 11),
    ChapterInfo::new(64, "التغابن", "At-Taghabun", 18),
    ChapterInfo::new(65, "الطلاق", "At-Talaq", 12),
    ChapterInfo::new(66, "التحريم", "At-Tahrim", 12),
    ChapterInfo::new(67, "الملك", "Al-Mulk", 30),
    ChapterInfo::new(68, "القلم", "Al-Qalam", 52),
    ChapterInfo::new(69, "الحاقة", "Al-Haqqah", 52),
    ChapterInfo::new(70, "المعارج", "Al-Ma'arij", 44),
    ChapterInfo::new(71, "نوح", "Nuh", 28),
    ChapterInfo::new(72, "الجن", "Al-Jinn", 28),
    ChapterInfo::new(73, "المزمل", "Al-Muzzammil", 20),
    ChapterInfo::new(74, "المدثر", "Al-Muddaththir", 56),
    ChapterInfo::new(75, "القيامة", "Al-Qiyamah", 40),
    ChapterInfo::new(76, "الانسان", "Al-Insan", 31),
    ChapterInfo::new(77, "المرسلات", "Al-Mursalat", 50),
    ChapterInfo::new(78, "النبإ", "An-Naba", 40),
    ChapterInfo::new(79, "النازعات", "An-Nazi'at", 46),
    ChapterInfo::new(80, "عبس", "'Abasa", 42),
    ChapterInfo::new(81, "التكوير", "At-Takwir", 29),
    ChapterInfo::new(82, "الإنفطار", "Al-Infitar", 19),
    ChapterInfo::new(83, "المطففين", "Al-Mutaffifin", 36),
    ChapterInfo::new(84, "الإنشقاق", "Al-Inshiqaq", 25),
    ChapterInfo::new(85, "البروج", "Al-Buruj", 22),
    ChapterInfo::new(86, "الطارق", "At-Tariq", 17),
    ChapterInfo::new(87, "الأعلى", "Al-A'la", 19),
    ChapterInfo::new(88, "الغاشية", "Al-Ghashiyah", 26),
    ChapterInfo::new(89, "الفجر", "Al-Fajr", 30),
    ChapterInfo::new(90, "البلد", "Al-Balad", 20),
    ChapterInfo::new(91, "الشمس", "Ash-Shams", 15),
    ChapterInfo::new(92, "الليل", "Al-Layl", 21),
    ChapterInfo::new(93, "الضحى", "Ad-Duhaa", 11),
    ChapterInfo::new(94, "الشرح", "Ash-Sharh", 8),
    ChapterInfo::new(95, "التين", "At-Tin", 8),
    ChapterInfo::new(96, "العلق", "Al-'Alaq", 19),
    ChapterInfo::new(97, "القدر", "Al-Qadr", 5),
    ChapterInfo::new(98, "البينة", "Al-Bayyinah", 8),
    ChapterInfo::new(99, "الزلزلة", "Az-Zalzalah", 8),
    ChapterInfo::new(100, "العاديات", "Al-'Adiyat", 11),
    ChapterInfo::new(101, "القارعة", "Al-Qari'ah", 11),
    ChapterInfo::new(102, "التكاثر", "At-Takathur", 8),
    ChapterInfo::new(103, "العصر", "Al-'Asr", 3),
    ChapterInfo::new(104, "الهمزة", "Al-Humazah", 9),
    ChapterInfo::new(105, "الفيل", "Al-Fil", 5),
    ChapterInfo::new(106, "قريش", "Quraysh", 4),
    ChapterInfo::new(107, "الماعون", "Al-Ma'un", 7),
    ChapterInfo::new(108, "الكوثر", "Al-Kawthar", 3),
    ChapterInfo::new(109, "الكافرون", "Al-Kafirun", 6),
    ChapterInfo::new(110, "النصر", "An-Nasr", 3),
    ChapterInfo::new(111, "المسد", "Al-Masad", 5),
    ChapterInfo::new(112, "الإخلاص", "Al-Ikhlas", 4),
    ChapterInfo::new(113, "الفلق", "Al-Falaq", 5),
    ChapterInfo::new(114, "الناس", "An-Nas", 6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete_and_ordered() {
        assert_eq!(chapters().len(), 114);
        for (index, chapter) in chapters().iter().enumerate() {
            assert_eq!(usize::from(chapter.number), index + 1);
            assert!(chapter.verse_count > 0);
        }
    }

    #[test]
    fn total_verse_count() {
        let total: u32 = chapters().iter().map(|c| u32::from(c.verse_count)).sum();
        assert_eq!(total, 6236);
    }

    #[test]
    fn playlist_prepends_formula_except_first_and_ninth() {
        let fatiha = chapter(1).unwrap().playlist();
        assert_eq!(fatiha.len(), 7);
        assert_eq!(fatiha[0].to_string(), "1:1");

        let tawbah = chapter(9).unwrap().playlist();
        assert_eq!(tawbah.len(), 129);
        assert_eq!(tawbah[0].to_string(), "9:1");

        let nas = chapter(114).unwrap().playlist();
        assert_eq!(nas.len(), 7);
        assert!(nas[0].is_opening_formula());
        assert_eq!(nas[6].to_string(), "114:6");
    }

    #[test]
    fn playlist_is_strictly_ascending() {
        for chapter in chapters() {
            let list = chapter.playlist();
            assert!(list.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn unknown_chapter() {
        assert!(chapter(0).is_none());
        assert!(chapter(115).is_none());
        assert_eq!(chapter(18).unwrap().name_english, "Al-Kahf");
    }
}
