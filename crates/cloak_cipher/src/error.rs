use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Character {character:?} at position {position} is outside U+0000..=U+00FF")]
    UnsupportedCharacter { position: usize, character: char },

    #[error("Ciphertext is not valid URL-safe base64: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    #[error("Unknown mode flag {0:?}, expected \"e\" or \"d\"")]
    UnknownModeFlag(String),
}
