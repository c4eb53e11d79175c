//! cloak_cipher — keyed obfuscation transform for short text messages
//!
//! # Design principles
//! - This is an OBFUSCATION mask, not cryptography: the key stream is a
//!   trivial repeating additive mask. Do not use it to protect anything
//!   against a real adversary.
//! - The engine is stateless and pure; every call either returns a fully
//!   computed result or fails before producing one.
//! - The contract is byte-range end to end: every key and message
//!   character must fit in U+0000..=U+00FF. Out-of-range input is
//!   rejected, never silently reduced mod 256.
//!
//! # Module layout
//! - `mask`      — repeating additive key stream over byte-range codepoints
//! - `transport` — URL-safe base64 wire encoding of the masked text
//! - `engine`    — encode/decode composition + the caller-facing `transform`
//! - `error`     — unified error type

pub mod engine;
pub mod error;
pub mod mask;
pub mod transport;

pub use engine::{decode, encode, transform, Mode};
pub use error::CipherError;
