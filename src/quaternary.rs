//! Quaternary module: byte stream to base-4 digit stream and back
//!
//! Each byte splits into four 2-bit groups, most significant first, so the
//! digit stream is always exactly four times the byte count.

/// Expand bytes into base-4 digits (values 0..=3), MSB-first.
pub fn to_quaternary(bytes: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(bytes.len() * 4);
    for &byte in bytes {
        digits.push(byte >> 6);
        digits.push((byte >> 4) & 0b11);
        digits.push((byte >> 2) & 0b11);
        digits.push(byte & 0b11);
    }
    digits
}

/// Pack base-4 digits back into bytes, four digits per byte.
///
/// A trailing group of fewer than four digits does not form a whole byte
/// and is dropped. Digit streams produced by [`to_quaternary`] always have
/// a length divisible by four, so the drop only affects hand-built input.
pub fn from_quaternary(digits: &[u8]) -> Vec<u8> {
    digits
        .chunks_exact(4)
        .map(|group| group[0] << 6 | group[1] << 4 | group[2] << 2 | group[3])
        .collect()
}
