//! text2arch: reversible text obfuscation
//!
//! Encodes arbitrary UTF-8 text as a stream of four code words
//! (`i`, `use`, `arch`, `btw`) and decodes it back, byte-exact.
//!
//! ## How it works
//!
//! 1. **Bytes**: UTF-8 encode the input text
//! 2. **Quaternary**: expand each byte into four base-4 digits
//! 3. **Words**: replace each digit with its code word
//! 4. **Protocol**: v1 emits one continuous stream, v2 encodes per line

pub mod protocol;
pub mod quaternary;
pub mod words;

pub use protocol::Version;
pub use words::UnknownWordError;

/// Encode `text` with the selected protocol. Never fails.
pub fn encode(version: Version, text: &str) -> String {
    version.encode(text)
}

/// Decode a word stream produced by [`encode`] with the same protocol.
///
/// Fails on the first token that is not one of the four code words; no
/// partial result is returned.
pub fn decode(version: Version, text: &str) -> Result<String, UnknownWordError> {
    version.decode(text)
}
