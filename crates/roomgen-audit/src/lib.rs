//! # Roomgen Audit
//!
//! Journal of transaction boundaries and the mutations inside them.

mod transaction_journal;

pub use transaction_journal::{JournalEntry, JournalEventType, JournalStats, TransactionJournal};
