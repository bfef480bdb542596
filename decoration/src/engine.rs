//! Applying styles to normalized text.

use std::fmt;

use rand::Rng;
use tracing::{debug, warn};

use crate::diacritics::{NormalizedText, TATWEEL};
use crate::overlay::apply_marks;
use crate::style::{Step, StyleId};

/// Output of a style. Plain text; escape it for the transport when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecoratedText(String);

impl DecoratedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for DecoratedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecoratedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replaces every U+0020 space with `run` tatweels.
pub fn connect_words(text: &str, run: usize) -> String {
    let connector: String = std::iter::repeat(TATWEEL).take(run).collect();
    text.replace(' ', &connector)
}

/// Runs the style's body steps in order, then wraps the result in its frame.
pub fn apply_style<R: Rng + ?Sized>(
    text: &NormalizedText,
    style: StyleId,
    rng: &mut R,
) -> DecoratedText {
    let recipe = style.recipe();
    let mut body = text.as_str().to_owned();
    for step in recipe.steps {
        body = match *step {
            Step::Connect(run) => connect_words(&body, run),
            Step::Overlay(density) => apply_marks(&body, density, rng),
        };
    }
    let out = match recipe.frame {
        Some((open, close)) => format!("{open}{body}{close}"),
        None => body,
    };
    debug!(style = %style, input_chars = text.char_count(), "style applied");
    DecoratedText(out)
}

/// Resolves `name` and applies it. An unknown name echoes the normalized text unchanged.
pub fn apply_named<R: Rng + ?Sized>(text: &NormalizedText, name: &str, rng: &mut R) -> DecoratedText {
    match name.parse::<StyleId>() {
        Ok(style) => apply_style(text, style, rng),
        Err(e) => {
            warn!(error = %e, "unknown style, echoing text");
            DecoratedText(text.as_str().to_owned())
        }
    }
}

/// [`apply_style`] with the thread-local generator.
pub fn decorate(text: &NormalizedText, style: StyleId) -> DecoratedText {
    apply_style(text, style, &mut rand::thread_rng())
}
