//! Raw input acceptance.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,
    #[error("input has {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// Accepts `text` when it is non-blank and at most `max_chars` Unicode scalar values long.
pub fn check_length(text: &str, max_chars: usize) -> Result<(), InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    let len = text.chars().count();
    if len > max_chars {
        return Err(InputError::TooLong {
            len,
            max: max_chars,
        });
    }
    Ok(())
}
