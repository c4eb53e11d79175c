//! URL-safe base64 wire encoding of the masked text.
//!
//! Ciphertext wire format:
//!   base64url( UTF-8 bytes of the masked text ), `=`-padded to a
//!   multiple of 4, alphabet `A-Z a-z 0-9 - _`.
//!
//! The masked text contains only byte-range characters, so its UTF-8
//! form is at most two bytes per character. On the way back in, anything
//! that is not valid base64, not valid UTF-8, or that contains a
//! character the mask could never have produced is malformed.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};

use crate::error::CipherError;
use crate::mask;

/// Encode a masked codepoint stream for transport.
pub fn wrap(masked: &[u8]) -> String {
    let text = mask::to_text(masked);
    URL_SAFE.encode(text.as_bytes())
}

/// Decode transport text back to the masked codepoint stream.
pub fn unwrap(ciphertext: &str) -> Result<Vec<u8>, CipherError> {
    let raw = URL_SAFE.decode(ciphertext)?;
    let text = String::from_utf8(raw)
        .map_err(|e| CipherError::MalformedCiphertext(e.to_string()))?;
    text.chars()
        .map(|c| {
            u8::try_from(c as u32).map_err(|_| {
                CipherError::MalformedCiphertext(format!(
                    "character {c:?} cannot appear in masked text"
                ))
            })
        })
        .collect()
}
