//! Append-only, clearable ledger of transform invocations.

use chrono::Utc;
use cloak_cipher::Mode;
use parking_lot::Mutex;

use crate::entry::HistoryEntry;

/// Process-scoped audit ledger. Construct one at startup and share it;
/// the lock around the entry list is the only synchronization a
/// concurrent host needs.
pub struct Ledger {
    inner: Mutex<Vec<HistoryEntry>>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Append an entry for a successful transform and return it.
    /// Cannot fail; O(1) amortized.
    pub fn record(&self, name: &str, operation: Mode, input: &str, result: &str) -> HistoryEntry {
        let entry = HistoryEntry {
            name: name.to_string(),
            operation,
            input: input.to_string(),
            result: result.to_string(),
            recorded_at: Utc::now(),
        };
        self.inner.lock().push(entry.clone());
        entry
    }

    /// Snapshot of all entries, most recently recorded first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.inner.lock().iter().rev().cloned().collect()
    }

    /// Discard every entry. Idempotent.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
