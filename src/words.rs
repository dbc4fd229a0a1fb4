//! Words module: the fixed digit-to-word bijection
//!
//! Maps each base-4 digit to one of four code words. The tables are
//! process-wide constants, identical in both directions, never mutated.

use thiserror::Error;

/// Code words indexed by digit: `0 -> "i"`, `1 -> "use"`, `2 -> "arch"`,
/// `3 -> "btw"`.
pub const WORDS: [&str; 4] = ["i", "use", "arch", "btw"];

/// Raised during decode when a token is not one of the four code words.
///
/// `position` is the index of the offending token within the token
/// sequence handed to the decoder: the whole stream for v1, the current
/// line for v2.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown word {word:?} at token {position}")]
pub struct UnknownWordError {
    /// The unrecognized token, verbatim.
    pub word: String,
    /// Zero-based token index.
    pub position: usize,
}

/// Look up the code word for a digit. Total for digits 0..=3.
pub fn digit_to_word(digit: u8) -> &'static str {
    debug_assert!(digit < 4, "quaternary digit out of range: {digit}");
    WORDS[(digit & 0b11) as usize]
}

/// Inverse lookup. Case-sensitive, no trimming; callers hand in exact
/// whitespace-split tokens.
pub fn word_to_digit(word: &str) -> Option<u8> {
    match word {
        "i" => Some(0),
        "use" => Some(1),
        "arch" => Some(2),
        "btw" => Some(3),
        _ => None,
    }
}
