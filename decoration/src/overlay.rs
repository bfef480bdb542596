//! Randomized diacritic overlay.

use rand::Rng;

/// Marks drawn for the main overlay pass.
pub const OVERLAY_MARKS: &[char] = &[
    '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0651}', '\u{0652}',
];

/// Rare calligraphic and Quranic annotation glyphs for the ornament pass.
pub const ORNAMENT_MARKS: &[char] = &[
    '\u{0610}', '\u{0611}', '\u{0612}', '\u{0613}', '\u{0614}', '\u{0615}', '\u{06D6}',
    '\u{06D7}', '\u{06D8}', '\u{06DA}', '\u{06DB}', '\u{06DC}', '\u{06DF}', '\u{06E0}',
    '\u{06E2}', '\u{06E3}', '\u{06E4}', '\u{06E7}', '\u{06E8}', '\u{06EA}', '\u{06EB}',
    '\u{06EC}', '\u{06ED}',
];

/// Probability of the ornament pass per character.
pub const ORNAMENT_CHANCE: f64 = 0.15;

/// Inserts random marks after every character except U+0020 space.
///
/// Two independent draws per character: one against `density` for a mark from [`OVERLAY_MARKS`],
/// one against [`ORNAMENT_CHANCE`] for a mark from [`ORNAMENT_MARKS`].
pub fn apply_marks<R: Rng + ?Sized>(text: &str, density: f64, rng: &mut R) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        out.push(c);
        if c == ' ' {
            continue;
        }
        if rng.gen::<f64>() < density {
            out.push(pick(OVERLAY_MARKS, rng));
        }
        if rng.gen::<f64>() < ORNAMENT_CHANCE {
            out.push(pick(ORNAMENT_MARKS, rng));
        }
    }
    out
}

fn pick<R: Rng + ?Sized>(marks: &[char], rng: &mut R) -> char {
    marks[rng.gen_range(0..marks.len())]
}
