//! Protocol module: the two wire formats over the shared codec pipeline
//!
//! v1 encodes the whole input as one continuous space-separated word
//! stream. v2 encodes each line independently, preserving line breaks, so
//! the output stays scannable and single lines can be re-encoded without
//! re-flowing the document.

use crate::quaternary;
use crate::words::{self, UnknownWordError};

use std::fmt;
use std::str::FromStr;

/// Protocol selector for [`crate::encode`] and [`crate::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// Continuous: one unbroken word stream for the whole input.
    V1,
    /// Line-oriented: each input line encoded independently.
    V2,
}

impl Version {
    /// Encode `text` with this protocol.
    pub fn encode(self, text: &str) -> String {
        match self {
            Version::V1 => encode_v1(text),
            Version::V2 => encode_v2(text),
        }
    }

    /// Decode a word stream with this protocol.
    pub fn decode(self, text: &str) -> Result<String, UnknownWordError> {
        match self {
            Version::V1 => decode_v1(text),
            Version::V2 => decode_v2(text),
        }
    }

    /// Conventional file extension for encoded output (cosmetic only).
    pub fn extension(self) -> &'static str {
        match self {
            Version::V1 => "bin",
            Version::V2 => "arch",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1 => write!(f, "v1"),
            Version::V2 => write!(f, "v2"),
        }
    }
}

/// Error parsing a protocol selector from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown protocol version {0:?}, expected \"v1\" or \"v2\"")]
pub struct ParseVersionError(pub String);

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Version::V1),
            "v2" => Ok(Version::V2),
            other => Err(ParseVersionError(other.to_string())),
        }
    }
}

/// Encode one block of text as a space-joined word sequence.
fn encode_block(text: &str) -> String {
    let digits = quaternary::to_quaternary(text.as_bytes());
    let code_words: Vec<&str> = digits.iter().map(|&d| words::digit_to_word(d)).collect();
    code_words.join(" ")
}

/// Decode a token sequence back to text, aborting on the first token that
/// is not a code word.
fn decode_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<String, UnknownWordError> {
    let mut digits = Vec::new();
    for (position, token) in tokens.enumerate() {
        let digit = words::word_to_digit(token).ok_or_else(|| UnknownWordError {
            word: token.to_string(),
            position,
        })?;
        digits.push(digit);
    }
    let bytes = quaternary::from_quaternary(&digits);
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// v1: whole input as one continuous word stream.
pub fn encode_v1(text: &str) -> String {
    encode_block(text)
}

/// v1 decode: whitespace-split the whole input and reverse the pipeline.
pub fn decode_v1(arch_text: &str) -> Result<String, UnknownWordError> {
    decode_tokens(arch_text.split_whitespace())
}

/// v2: encode each line independently, empty lines pass through.
pub fn encode_v2(text: &str) -> String {
    let lines: Vec<String> = text.split('\n').map(encode_block).collect();
    lines.join("\n")
}

/// v2 decode: per-line tokenize and decode, blank lines pass through.
/// The whole decode aborts on the first unknown token on any line.
pub fn decode_v2(arch_text: &str) -> Result<String, UnknownWordError> {
    let mut lines = Vec::new();
    for line in arch_text.split('\n') {
        lines.push(decode_tokens(line.split_whitespace())?);
    }
    Ok(lines.join("\n"))
}
