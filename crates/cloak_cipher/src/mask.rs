//! Repeating additive key stream.
//!
//! Both directions index the key cyclically (`key[i % key_len]`) and do
//! byte arithmetic mod 256:
//!
//!   forward:  c_i = (p_i + k_i) mod 256
//!   backward: p_i = (256 + c_i - k_i) mod 256
//!
//! The mask operates on codepoints, not UTF-8 bytes: a character like
//! `é` (U+00E9) is one mask position, even though it is two bytes on the
//! wire. Codepoints above U+00FF do not survive the mod-256 arithmetic
//! and are rejected up front by [`byte_points`].

use crate::error::CipherError;

/// Validate a key and lower it to its codepoint stream.
pub fn key_stream(key: &str) -> Result<Vec<u8>, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    byte_points(key)
}

/// Lower text to one byte per character, rejecting anything above U+00FF.
pub fn byte_points(text: &str) -> Result<Vec<u8>, CipherError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(character as u32)
                .map_err(|_| CipherError::UnsupportedCharacter { position, character })
        })
        .collect()
}

/// Raise a codepoint stream back to text (each byte is one character).
pub fn to_text(points: &[u8]) -> String {
    points.iter().map(|&p| char::from(p)).collect()
}

/// Apply the forward mask.
pub fn forward(key: &[u8], plain: &[u8]) -> Vec<u8> {
    plain
        .iter()
        .enumerate()
        .map(|(i, &p)| p.wrapping_add(key[i % key.len()]))
        .collect()
}

/// Invert the mask.
pub fn backward(key: &[u8], masked: &[u8]) -> Vec<u8> {
    masked
        .iter()
        .enumerate()
        .map(|(i, &c)| c.wrapping_sub(key[i % key.len()]))
        .collect()
}
