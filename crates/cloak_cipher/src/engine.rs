//! Encode/decode composition and the caller-facing transform boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;
use crate::{mask, transport};

/// Transform direction, parsed from the operator-supplied flag.
///
/// The flag grammar is closed: `e`/`E` encrypts, `d`/`D` decrypts, and
/// anything else is an error. There is no silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    pub fn from_flag(flag: &str) -> Result<Self, CipherError> {
        match flag {
            "e" | "E" => Ok(Self::Encrypt),
            "d" | "D" => Ok(Self::Decrypt),
            other => Err(CipherError::UnknownModeFlag(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Encrypt => "Encrypt",
            Mode::Decrypt => "Decrypt",
        })
    }
}

/// Mask `plaintext` with `key` and encode the result for transport.
///
/// Every key and plaintext character must be within U+0000..=U+00FF;
/// the round-trip guarantee `decode(k, encode(k, m)) == m` holds for
/// exactly that domain.
pub fn encode(key: &str, plaintext: &str) -> Result<String, CipherError> {
    let key = mask::key_stream(key)?;
    let plain = mask::byte_points(plaintext)?;
    Ok(transport::wrap(&mask::forward(&key, &plain)))
}

/// Decode transport text and strip the mask, recovering the plaintext.
pub fn decode(key: &str, ciphertext: &str) -> Result<String, CipherError> {
    let key = mask::key_stream(key)?;
    let masked = transport::unwrap(ciphertext)?;
    Ok(mask::to_text(&mask::backward(&key, &masked)))
}

/// Run one transform in the given direction.
///
/// This is the single entry point presentation layers call; on success
/// the caller is expected to record `(name, mode, message, result)` in
/// its history ledger.
pub fn transform(key: &str, message: &str, mode: Mode) -> Result<String, CipherError> {
    match mode {
        Mode::Encrypt => encode(key, message),
        Mode::Decrypt => decode(key, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        // 'H' + 'k' = 179, 'I' + 'e' = 174; UTF-8 of the masked text is
        // C2 B3 C2 AE, which base64urls to "wrPCrg==".
        assert_eq!(encode("key", "HI").unwrap(), "wrPCrg==");
        assert_eq!(decode("key", "wrPCrg==").unwrap(), "HI");
    }

    #[test]
    fn round_trip_ascii() {
        let ct = encode("lemon", "Attack at dawn").unwrap();
        assert_eq!(ct, "wq3DmcOhw5DDkcOXwoXDjsOjwo7DkMOGw6TDnQ==");
        assert_eq!(decode("lemon", &ct).unwrap(), "Attack at dawn");
    }

    #[test]
    fn round_trip_latin1() {
        let ct = encode("clé", "café").unwrap();
        assert_eq!(ct, "w4bDjU9M");
        assert_eq!(decode("clé", &ct).unwrap(), "café");
    }

    #[test]
    fn round_trip_every_byte_value() {
        let plain: String = (0u8..=255).map(char::from).collect();
        let ct = encode("K", &plain).unwrap();
        assert_eq!(decode("K", &ct).unwrap(), plain);
    }

    #[test]
    fn encode_is_deterministic() {
        assert_eq!(
            encode("secret", "hello world").unwrap(),
            encode("secret", "hello world").unwrap()
        );
        assert_eq!(
            encode("key", "hello").unwrap(),
            "w5PDisOlw5fDlA=="
        );
    }

    #[test]
    fn keys_with_different_periods_diverge_past_the_first_character() {
        // Same first key character: single-character messages agree...
        assert_eq!(encode("AB", "x").unwrap(), encode("AZ", "x").unwrap());
        // ...but the second position sees a different key byte.
        assert_ne!(encode("AB", "xy").unwrap(), encode("A", "xy").unwrap());
    }

    #[test]
    fn empty_message_is_the_empty_ciphertext() {
        assert_eq!(encode("key", "").unwrap(), "");
        assert_eq!(decode("key", "").unwrap(), "");
    }

    #[test]
    fn empty_key_fails_both_directions() {
        assert!(matches!(encode("", "hello"), Err(CipherError::EmptyKey)));
        assert!(matches!(decode("", "anything"), Err(CipherError::EmptyKey)));
    }

    #[test]
    fn wide_plaintext_character_is_rejected() {
        let err = encode("key", "snow ☃").unwrap_err();
        assert!(matches!(
            err,
            CipherError::UnsupportedCharacter { position: 5, character: '☃' }
        ));
    }

    #[test]
    fn transform_dispatches_on_mode() {
        let ct = transform("key", "HI", Mode::Encrypt).unwrap();
        assert_eq!(ct, "wrPCrg==");
        assert_eq!(transform("key", &ct, Mode::Decrypt).unwrap(), "HI");
    }

    #[test]
    fn mode_flag_grammar() {
        assert_eq!(Mode::from_flag("e").unwrap(), Mode::Encrypt);
        assert_eq!(Mode::from_flag("E").unwrap(), Mode::Encrypt);
        assert_eq!(Mode::from_flag("d").unwrap(), Mode::Decrypt);
        assert_eq!(Mode::from_flag("D").unwrap(), Mode::Decrypt);
        for bad in ["", "x", "encrypt", "ed"] {
            assert!(matches!(
                Mode::from_flag(bad),
                Err(CipherError::UnknownModeFlag(_))
            ));
        }
    }

    #[test]
    fn mode_renders_as_the_operation_kind() {
        assert_eq!(Mode::Encrypt.to_string(), "Encrypt");
        assert_eq!(Mode::Decrypt.to_string(), "Decrypt");
    }
}
