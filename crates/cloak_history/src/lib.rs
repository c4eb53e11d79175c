//! cloak_history — in-memory audit history for transform invocations
//!
//! Every successful encode/decode is recorded as an immutable entry
//! (operator name, operation kind, input, result, timestamp). Entries
//! live for the lifetime of the process; there is no persistence, and
//! the only mutations are append and clear-all.
//!
//! The ledger guards its entry list with a single mutex, so one
//! instance can be shared freely between threads. It never invokes the
//! transform engine — callers run the transform first and record the
//! outcome here.

pub mod entry;
pub mod ledger;

pub use entry::HistoryEntry;
pub use ledger::Ledger;
