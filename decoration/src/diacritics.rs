//! Arabic diacritic set and normalization.

use std::fmt;

/// Marks removed by [`normalize`]: tanwin, short vowels, shadda, sukun (U+064B..=U+0652) and superscript alef.
pub const DIACRITICS: &[char] = &[
    '\u{064B}', // Fathatan
    '\u{064C}', // Dammatan
    '\u{064D}', // Kasratan
    '\u{064E}', // Fatha
    '\u{064F}', // Damma
    '\u{0650}', // Kasra
    '\u{0651}', // Shadda
    '\u{0652}', // Sukun
    '\u{0670}', // Superscript alef
];

/// Tatweel (kashida), the Arabic connector glyph. Never stripped.
pub const TATWEEL: char = '\u{0640}';

pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

/// Text with every diacritic removed. Holds no markup escaping; escaping belongs to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips the fixed diacritic set, keeping every other code point in order. Never fails.
pub fn normalize(text: &str) -> NormalizedText {
    NormalizedText(text.chars().filter(|c| !is_diacritic(*c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_shadda() {
        assert_eq!(normalize("محمّد").as_str(), "محمد");
    }

    #[test]
    fn test_normalize_removes_full_tashkeel() {
        assert_eq!(normalize("بِسْمِ اللَّهِ الرَّحْمَٰنِ").as_str(), "بسم الله الرحمن");
    }

    #[test]
    fn test_normalize_removes_tanwin() {
        assert_eq!(normalize("كتابٌ جميلٌ").as_str(), "كتاب جميل");
        assert_eq!(normalize("شكراً").as_str(), "شكرا");
    }

    #[test]
    fn test_normalize_keeps_tatweel_and_latin() {
        assert_eq!(normalize("نـــور <b>&").as_str(), "نـــور <b>&");
    }

    #[test]
    fn test_normalize_empty_and_marks_only() {
        assert!(normalize("").is_empty());
        assert!(normalize("\u{064E}\u{0651}\u{0670}").is_empty());
    }

    #[test]
    fn test_diacritic_table_matches_predicate() {
        for c in DIACRITICS {
            assert!(is_diacritic(*c), "{:?} should be a diacritic", c);
        }
        assert!(!is_diacritic(TATWEEL));
        assert!(!is_diacritic('\u{0653}'));
        assert!(!is_diacritic('ا'));
    }

    #[test]
    fn test_char_count_counts_scalars() {
        assert_eq!(normalize("نور").char_count(), 3);
    }
}
