//! The static chapter metadata table.
//!
//! Names, original-script names, verse counts and revelation periods are
//! hand-authored and never change, so they live here rather than in any of
//! the source databases.

use crate::keys::{ChapterNumber, VerseKey, VerseNumber};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use self::Revelation::{Meccan, Medinan};

/// Period in which a chapter was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Revelation {
    Meccan,
    Medinan,
}
impl Revelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meccan => "Meccan",
            Medinan => "Medinan",
        }
    }
}
impl Display for Revelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata for one chapter (surah).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chapter {
    pub number: ChapterNumber,
    /// Transliterated name (e.g. `Al-Fatihah`)
    pub name: &'static str,
    /// Name in the original script
    pub arabic: &'static str,
    /// Declared number of verses
    pub verses: u16,
    pub revelation: Revelation,
}
impl Chapter {
    /// Every verse key of this chapter, `1..=verses`, in order.
    pub fn verse_keys(&self) -> impl Iterator<Item = VerseKey> + use<> {
        let chapter = self.number;
        (1..=self.verses).map(move |verse| VerseKey { chapter, verse: VerseNumber(verse) })
    }
}

impl ChapterNumber {
    /// Static metadata for this chapter.
    pub fn metadata(self) -> &'static Chapter {
        // Construction guarantees `1..=114`.
        &CHAPTERS[usize::from(self.0) - 1]
    }
}

const fn chapter(number: u8, name: &'static str, arabic: &'static str, verses: u16, revelation: Revelation) -> Chapter {
    Chapter { number: ChapterNumber(number), name, arabic, verses, revelation }
}

/// All 114 chapters, ordered by number.
pub static CHAPTERS: [Chapter; 114] = [
    chapter(1, "Al-Fatihah", "الفاتحة", 7, Meccan),
    chapter(2, "Al-Baqarah", "البقرة", 286, Medinan),
    chapter(3, "Aali Imran", "آل عمران", 200, Medinan),
    chapter(4, "An-Nisa", "النساء", 176, Medinan),
    chapter(5, "Al-Ma'idah", "المائدة", 120, Medinan),
    chapter(6, "Al-An'am", "الأنعام", 165, Meccan),
    chapter(7, "Al-A'raf", "الأعراف", 206, Meccan),
    chapter(8, "Al-Anfal", "الأنفال", 75, Medinan),
    chapter(9, "At-Tawbah", "التوبة", 129, Medinan),
    chapter(10, "Yunus", "يونس", 109, Meccan),
    chapter(11, "Hud", "هود", 123, Meccan),
    chapter(12, "Yusuf", "يوسف", 111, Meccan),
    chapter(13, "Ar-Ra'd", "الرعد", 43, Medinan),
    chapter(14, "Ibrahim", "إبراهيم", 52, Meccan),
    chapter(15, "Al-Hijr", "الحجر", 99, Meccan),
    chapter(16, "An-Nahl", "النحل", 128, Meccan),
    chapter(17, "Al-Isra", "الإسراء", 111, Meccan),
    chapter(18, "Al-Kahf", "الكهف", 110, Meccan),
    chapter(19, "Maryam", "مريم", 98, Meccan),
    chapter(20, "Ta-Ha", "طه", 135, Meccan),
    chapter(21, "Al-Anbiya", "الأنبياء", 112, Meccan),
    chapter(22, "Al-Hajj", "الحج", 78, Medinan),
    chapter(23, "Al-Mu'minun", "المؤمنون", 118, Meccan),
    chapter(24, "An-Nur", "النور", 64, Medinan),
    chapter(25, "Al-Furqan", "الفرقان", 77, Meccan),
    chapter(26, "Ash-Shu'ara", "الشعراء", 227, Meccan),
    chapter(27, "An-Naml", "النمل", 93, Meccan),
    chapter(28, "Al-Qasas", "القصص", 88, Meccan),
    chapter(29, "Al-Ankabut", "العنكبوت", 69, Meccan),
    chapter(30, "Ar-Rum", "الروم", 60, Meccan),
    chapter(31, "Luqman", "لقمان", 34, Meccan),
    chapter(32, "As-Sajdah", "السجدة", 30, Meccan),
    chapter(33, "Al-Ahzab", "الأحزاب", 73, Medinan),
    chapter(34, "Saba", "سبأ", 54, Meccan),
    chapter(35, "Fatir", "فاطر", 45, Meccan),
    chapter(36, "Ya-Sin", "يس", 83, Meccan),
    chapter(37, "As-Saffat", "الصافات", 182, Meccan),
    chapter(38, "Sad", "ص", 88, Meccan),
    chapter(39, "Az-Zumar", "الزمر", 75, Meccan),
    chapter(40, "Ghafir", "غافر", 85, Meccan),
    chapter(41, "Fussilat", "فصلت", 54, Meccan),
    chapter(42, "Ash-Shura", "الشورى", 53, Meccan),
    chapter(43, "Az-Zukhruf", "الزخرف", 89, Meccan),
    chapter(44, "Ad-Dukhan", "الدخان", 59, Meccan),
    chapter(45, "Al-Jathiyah", "الجاثية", 37, Meccan),
    chapter(46, "Al-Ahqaf", "الأحقاف", 35, Meccan),
    chapter(47, "Muhammad", "محمد", 38, Medinan),
    chapter(48, "Al-Fath", "الفتح", 29, Medinan),
    chapter(49, "Al-Hujurat", "الحجرات", 18, Medinan),
    chapter(50, "Qaf", "ق", 45, Meccan),
    chapter(51, "Adh-Dhariyat", "الذاريات", 60, Meccan),
    chapter(52, "At-Tur", "الطور", 49, Meccan),
    chapter(53, "An-Najm", "النجم", 62, Meccan),
    chapter(54, "Al-Qamar", "القمر", 55, Meccan),
    chapter(55, "Ar-Rahman", "الرحمن", 78, Medinan),
    chapter(56, "Al-Waqi'ah", "الواقعة", 96, Meccan),
    chapter(57, "Al-Hadid", "الحديد", 29, Medinan),
    chapter(58, "Al-Mujadila", "المجادلة", 22, Medinan),
    chapter(59, "Al-Hashr", "الحشر", 24, Medinan),
    chapter(60, "Al-Mumtahanah", "الممتحنة", 13, Medinan),
    chapter(61, "As-Saff", "الصف", 14, Medinan),
    chapter(62, "Al-Jumu'ah", "الجمعة", 11, Medinan),
    chapter(63, "Al-Munafiqun", "المنافقون", 11, Medinan),
    chapter(64, "At-Taghabun", "التغابن", 18, Medinan),
    chapter(65, "At-Talaq", "الطلاق", 12, Medinan),
    chapter(66, "At-Tahrim", "التحريم", 12, Medinan),
    chapter(67, "Al-Mulk", "الملك", 30, Meccan),
    chapter(68, "Al-Qalam", "القلم", 52, Meccan),
    chapter(69, "Al-Haqqah", "الحاقة", 52, Meccan),
    chapter(70, "Al-Ma'arij", "المعارج", 44, Meccan),
    chapter(71, "Nuh", "نوح", 28, Meccan),
    chapter(72, "Al-Jinn", "الجن", 28, Meccan),
    chapter(73, "Al-Muzzammil", "المزمل", 20, Meccan),
    chapter(74, "Al-Muddaththir", "المدثر", 56, Meccan),
    chapter(75, "Al-Qiyamah", "القيامة", 40, Meccan),
    chapter(76, "Al-Insan", "الإنسان", 31, Medinan),
    chapter(77, "Al-Mursalat", "المرسلات", 50, Meccan),
    chapter(78, "An-Naba", "النبأ", 40, Meccan),
    chapter(79, "An-Nazi'at", "النازعات", 46, Meccan),
    chapter(80, "Abasa", "عبس", 42, Meccan),
    chapter(81, "At-Takwir", "التكوير", 29, Meccan),
    chapter(82, "Al-Infitar", "الانفطار", 19, Meccan),
    chapter(83, "Al-Mutaffifin", "المطففين", 36, Meccan),
    chapter(84, "Al-Inshiqaq", "الانشقاق", 25, Meccan),
    chapter(85, "Al-Buruj", "البروج", 22, Meccan),
    chapter(86, "At-Tariq", "الطارق", 17, Meccan),
    chapter(87, "Al-A'la", "الأعلى", 19, Meccan),
    chapter(88, "Al-Ghashiyah", "الغاشية", 26, Meccan),
    chapter(89, "Al-Fajr", "الفجر", 30, Meccan),
    chapter(90, "Al-Balad", "البلد", 20, Meccan),
    chapter(91, "Ash-Shams", "الشمس", 15, Meccan),
    chapter(92, "Al-Layl", "الليل", 21, Meccan),
    chapter(93, "Ad-Duha", "الضحى", 11, Meccan),
    chapter(94, "Ash-Sharh", "الشرح", 8, Meccan),
    chapter(95, "At-Tin", "التين", 8, Meccan),
    chapter(96, "Al-Alaq", "العلق", 19, Meccan),
    chapter(97, "Al-Qadr", "القدر", 5, Meccan),
    chapter(98, "Al-Bayyinah", "البينة", 8, Medinan),
    chapter(99, "Az-Zalzalah", "الزلزلة", 8, Medinan),
    chapter(100, "Al-Adiyat", "العاديات", 11, Meccan),
    chapter(101, "Al-Qari'ah", "القارعة", 11, Meccan),
    chapter(102, "At-Takathur", "التكاثر", 8, Meccan),
    chapter(103, "Al-Asr", "العصر", 3, Meccan),
    chapter(104, "Al-Humazah", "الهمزة", 9, Meccan),
    chapter(105, "Al-Fil", "الفيل", 5, Meccan),
    chapter(106, "Quraysh", "قريش", 4, Meccan),
    chapter(107, "Al-Ma'un", "الماعون", 7, Meccan),
    chapter(108, "Al-Kawthar", "الكوثر", 3, Meccan),
    chapter(109, "Al-Kafirun", "الكافرون", 6, Meccan),
    chapter(110, "An-Nasr", "النصر", 3, Medinan),
    chapter(111, "Al-Masad", "المسد", 5, Meccan),
    chapter(112, "Al-Ikhlas", "الإخلاص", 4, Meccan),
    chapter(113, "Al-Falaq", "الفلق", 5, Meccan),
    chapter(114, "An-Nas", "الناس", 6, Meccan),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_table_is_ordered_and_complete() {
        for (position, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(usize::from(chapter.number.get()), position + 1);
            assert!(chapter.verses > 0);
            assert!(!chapter.name.is_empty());
            assert!(!chapter.arabic.is_empty());
        }
    }

    #[test]
    fn test_total_verse_count() {
        let total: u32 = CHAPTERS.iter().map(|c| u32::from(c.verses)).sum();
        assert_eq!(total, 6236);
    }

    #[rstest]
    #[case(1, "Al-Fatihah", 7, Meccan)]
    #[case(2, "Al-Baqarah", 286, Medinan)]
    #[case(55, "Ar-Rahman", 78, Medinan)]
    #[case(114, "An-Nas", 6, Meccan)]
    fn test_lookup(#[case] number: u8, #[case] name: &str, #[case] verses: u16, #[case] revelation: Revelation) {
        let chapter = ChapterNumber::new(number).unwrap().metadata();
        assert_eq!(chapter.name, name);
        assert_eq!(chapter.verses, verses);
        assert_eq!(chapter.revelation, revelation);
    }

    #[test]
    fn test_verse_keys() {
        let keys = ChapterNumber::new(1).unwrap().metadata().verse_keys().map(|k| k.to_string()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["1:1", "1:2", "1:3", "1:4", "1:5", "1:6", "1:7"]);
    }

    #[test]
    fn test_revelation_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Medinan).unwrap(), r#""Medinan""#);
    }
}
