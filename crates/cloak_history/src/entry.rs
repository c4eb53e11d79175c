//! History record model.

use chrono::{DateTime, Utc};
use cloak_cipher::Mode;
use serde::{Deserialize, Serialize};

/// One recorded transform invocation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Operator-supplied name, free text.
    pub name: String,
    /// Which direction the engine ran.
    pub operation: Mode,
    /// The message exactly as supplied: plaintext for Encrypt,
    /// ciphertext for Decrypt.
    pub input: String,
    /// What the engine returned: ciphertext for Encrypt, plaintext
    /// for Decrypt.
    pub result: String,
    pub recorded_at: DateTime<Utc>,
}
