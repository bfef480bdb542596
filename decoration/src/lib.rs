//! # decoration
//!
//! Arabic text decoration engine. Pure string transformations with no I/O:
//!
//! - [`normalize`] strips the fixed diacritic set.
//! - [`apply_style`] runs a [`StyleId`]'s recipe: static frames, kashida connectors, randomized diacritic overlay.
//! - [`apply_named`] resolves a style id string; unknown ids echo the text.
//! - [`check_length`] accepts or rejects raw input.
//!
//! Randomized styles take any [`rand::Rng`], so callers can seed them.

mod diacritics;
mod engine;
mod input;
mod overlay;
mod style;

pub use diacritics::{is_diacritic, normalize, NormalizedText, DIACRITICS, TATWEEL};
pub use engine::{apply_named, apply_style, connect_words, decorate, DecoratedText};
pub use input::{check_length, InputError};
pub use overlay::{apply_marks, ORNAMENT_CHANCE, ORNAMENT_MARKS, OVERLAY_MARKS};
pub use style::{
    parse_menu, Recipe, Step, StyleId, UnknownStyle, DEFAULT_MENU, KASHIDA_RUN, MAX_MENU_LEN,
};
