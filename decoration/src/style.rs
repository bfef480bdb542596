//! Style catalog: every decoration the bot can offer, its callback id, its Arabic menu label and its recipe.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Tatweels per space in the elongated kashida style.
pub const KASHIDA_RUN: usize = 8;

/// One body transformation. Steps run in order, then the frame is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Replace every U+0020 space with this many tatweels.
    Connect(usize),
    /// Randomized diacritic overlay with the given per-character density.
    Overlay(f64),
}

/// How a style is built: body steps plus an optional `(open, close)` frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    pub steps: &'static [Step],
    pub frame: Option<(&'static str, &'static str)>,
}

impl Recipe {
    /// True when applying the recipe never consumes randomness.
    pub fn is_deterministic(&self) -> bool {
        !self.steps.iter().any(|s| matches!(s, Step::Overlay(_)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleId {
    RoyalCrown,
    FancyBracket,
    QuranicBracket,
    IslamicOrnament,
    StarFrame,
    CornerBracket,
    DoubleAngle,
    LenticularBracket,
    FlowerFrame,
    ElongatedKashida,
    ShortKashida,
    WingedKashida,
    LightDiacritization,
    ClassicDiacritization,
    OrnateDiacritization,
    CalligraphicDiacritization,
    FullDiacritization,
    ThuluthDeveloped,
}

/// Menu shown when no `STYLE_MENU` is configured.
pub const DEFAULT_MENU: &[StyleId] = &[
    StyleId::ElongatedKashida,
    StyleId::ThuluthDeveloped,
    StyleId::RoyalCrown,
    StyleId::FancyBracket,
    StyleId::FullDiacritization,
    StyleId::QuranicBracket,
    StyleId::IslamicOrnament,
    StyleId::OrnateDiacritization,
];

/// Largest menu a chat keyboard is allowed to show.
pub const MAX_MENU_LEN: usize = 10;

impl StyleId {
    pub const ALL: [StyleId; 18] = [
        StyleId::RoyalCrown,
        StyleId::FancyBracket,
        StyleId::QuranicBracket,
        StyleId::IslamicOrnament,
        StyleId::StarFrame,
        StyleId::CornerBracket,
        StyleId::DoubleAngle,
        StyleId::LenticularBracket,
        StyleId::FlowerFrame,
        StyleId::ElongatedKashida,
        StyleId::ShortKashida,
        StyleId::WingedKashida,
        StyleId::LightDiacritization,
        StyleId::ClassicDiacritization,
        StyleId::OrnateDiacritization,
        StyleId::CalligraphicDiacritization,
        StyleId::FullDiacritization,
        StyleId::ThuluthDeveloped,
    ];

    /// Stable identifier, used as button callback data and in configuration.
    pub fn id(self) -> &'static str {
        match self {
            StyleId::RoyalCrown => "royal-crown",
            StyleId::FancyBracket => "fancy-bracket",
            StyleId::QuranicBracket => "quranic-bracket",
            StyleId::IslamicOrnament => "islamic-ornament",
            StyleId::StarFrame => "star-frame",
            StyleId::CornerBracket => "corner-bracket",
            StyleId::DoubleAngle => "double-angle",
            StyleId::LenticularBracket => "lenticular-bracket",
            StyleId::FlowerFrame => "flower-frame",
            StyleId::ElongatedKashida => "elongated-kashida",
            StyleId::ShortKashida => "short-kashida",
            StyleId::WingedKashida => "winged-kashida",
            StyleId::LightDiacritization => "light-diacritization",
            StyleId::ClassicDiacritization => "classic-diacritization",
            StyleId::OrnateDiacritization => "ornate-diacritization",
            StyleId::CalligraphicDiacritization => "calligraphic-diacritization",
            StyleId::FullDiacritization => "full-diacritization",
            StyleId::ThuluthDeveloped => "thuluth-developed",
        }
    }

    /// Arabic button label.
    pub fn label(self) -> &'static str {
        match self {
            StyleId::RoyalCrown => "نمط الزخرفة الملكية",
            StyleId::FancyBracket => "نمط الأقواس الفخمة",
            StyleId::QuranicBracket => "نمط الأقواس القرآنية",
            StyleId::IslamicOrnament => "نمط الزخرفة الإسلامية",
            StyleId::StarFrame => "نمط إطار النجوم",
            StyleId::CornerBracket => "نمط الأقواس الزاوية",
            StyleId::DoubleAngle => "نمط الأقواس المزدوجة",
            StyleId::LenticularBracket => "نمط الأقواس العدسية",
            StyleId::FlowerFrame => "نمط إطار الزهور",
            StyleId::ElongatedKashida => "نمط الكشيدة (ممتد)",
            StyleId::ShortKashida => "نمط الكشيدة القصيرة",
            StyleId::WingedKashida => "نمط الكشيدة المجنحة",
            StyleId::LightDiacritization => "نمط التشكيل الخفيف",
            StyleId::ClassicDiacritization => "نمط التشكيل الكلاسيكي",
            StyleId::OrnateDiacritization => "نمط التشكيل المزخرف",
            StyleId::CalligraphicDiacritization => "نمط التشكيل الخطي",
            StyleId::FullDiacritization => "نمط التشكيل الكامل",
            StyleId::ThuluthDeveloped => "نمط الثلث المطور",
        }
    }

    pub fn recipe(self) -> Recipe {
        const WRAP: &[Step] = &[];
        const KASHIDA: &[Step] = &[Step::Connect(KASHIDA_RUN)];
        const SHORT_KASHIDA: &[Step] = &[Step::Connect(3)];
        const WINGED_KASHIDA: &[Step] = &[Step::Connect(5)];
        const LIGHT: &[Step] = &[Step::Overlay(0.4)];
        const CLASSIC: &[Step] = &[Step::Overlay(0.5)];
        const ORNATE: &[Step] = &[Step::Overlay(0.6)];
        const CALLIGRAPHIC: &[Step] = &[Step::Overlay(0.7), Step::Connect(4)];
        const FULL: &[Step] = &[Step::Overlay(0.9)];
        const THULUTH: &[Step] = &[Step::Connect(1)];

        let (steps, frame) = match self {
            StyleId::RoyalCrown => (WRAP, Some(("♛ ", " ♛"))),
            StyleId::FancyBracket => (WRAP, Some(("『 ", " 』"))),
            StyleId::QuranicBracket => (WRAP, Some(("﴿ ", " ﴾"))),
            StyleId::IslamicOrnament => (WRAP, Some(("۞ ", " ۞"))),
            StyleId::StarFrame => (WRAP, Some(("★ ", " ★"))),
            StyleId::CornerBracket => (WRAP, Some(("「 ", " 」"))),
            StyleId::DoubleAngle => (WRAP, Some(("《 ", " 》"))),
            StyleId::LenticularBracket => (WRAP, Some(("【 ", " 】"))),
            StyleId::FlowerFrame => (WRAP, Some(("❀ ", " ❀"))),
            StyleId::ElongatedKashida => (KASHIDA, Some(("★ ", " ★"))),
            StyleId::ShortKashida => (SHORT_KASHIDA, None),
            StyleId::WingedKashida => (WINGED_KASHIDA, Some(("𓆩 ", " 𓆪"))),
            StyleId::LightDiacritization => (LIGHT, None),
            StyleId::ClassicDiacritization => (CLASSIC, None),
            StyleId::OrnateDiacritization => (ORNATE, Some(("۞ ", " ۞"))),
            StyleId::CalligraphicDiacritization => (CALLIGRAPHIC, None),
            StyleId::FullDiacritization => (FULL, None),
            StyleId::ThuluthDeveloped => (THULUTH, Some(("★ـ", "ـ★"))),
        };
        Recipe { steps, frame }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style: {0}")]
pub struct UnknownStyle(pub String);

impl FromStr for StyleId {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StyleId::ALL
            .iter()
            .copied()
            .find(|style| style.id() == wanted)
            .ok_or_else(|| UnknownStyle(wanted.to_string()))
    }
}

/// Parses a comma-separated list of style ids, skipping blanks.
pub fn parse_menu(list: &str) -> Result<Vec<StyleId>, UnknownStyle> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
