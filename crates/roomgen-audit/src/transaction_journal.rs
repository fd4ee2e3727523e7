//! TransactionJournal - Audit trail of transaction boundaries
//!
//! Every begin, mutation, commit and rollback the host performs is
//! recorded here, so a run can be checked afterwards for "nothing
//! committed outside a transaction" and "failed batches were rolled back".

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub timestamp: String,
    pub transaction_id: Uuid,
    pub event_type: JournalEventType,
    /// Transaction label as given to `begin`
    pub label: String,
    /// Mutation description
    pub detail: Option<String>,
    /// Mutations contained in the transaction (commit/rollback only)
    pub mutations: Option<usize>,
}

/// Types of journal events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalEventType {
    Begin,
    Mutation,
    Commit,
    Rollback,
}

/// Transaction journal
#[derive(Debug)]
pub struct TransactionJournal {
    entries: VecDeque<JournalEntry>,
    max_entries: usize,
}

impl TransactionJournal {
    /// Create a new journal keeping at most `max_entries`
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(1024)),
            max_entries,
        }
    }

    fn log(&mut self, entry: JournalEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    fn entry(
        transaction_id: Uuid,
        event_type: JournalEventType,
        label: &str,
        detail: Option<String>,
        mutations: Option<usize>,
    ) -> JournalEntry {
        JournalEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            transaction_id,
            event_type,
            label: label.to_string(),
            detail,
            mutations,
        }
    }

    /// Record a transaction start and return its id
    pub fn log_begin(&mut self, label: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.log(Self::entry(id, JournalEventType::Begin, label, None, None));
        id
    }

    /// Record a mutation inside transaction `id`
    pub fn log_mutation(&mut self, id: Uuid, label: &str, detail: impl Into<String>) {
        self.log(Self::entry(
            id,
            JournalEventType::Mutation,
            label,
            Some(detail.into()),
            None,
        ));
    }

    /// Record a commit
    pub fn log_commit(&mut self, id: Uuid, label: &str, mutations: usize) {
        self.log(Self::entry(
            id,
            JournalEventType::Commit,
            label,
            None,
            Some(mutations),
        ));
    }

    /// Record a rollback
    pub fn log_rollback(&mut self, id: Uuid, label: &str, mutations: usize) {
        self.log(Self::entry(
            id,
            JournalEventType::Rollback,
            label,
            None,
            Some(mutations),
        ));
    }

    /// All entries in order
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    /// Labels of committed transactions, oldest first
    pub fn committed_labels(&self) -> Vec<&str> {
        self.labels_of(JournalEventType::Commit)
    }

    /// Labels of rolled back transactions, oldest first
    pub fn rolled_back_labels(&self) -> Vec<&str> {
        self.labels_of(JournalEventType::Rollback)
    }

    fn labels_of(&self, event_type: JournalEventType) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .map(|e| e.label.as_str())
            .collect()
    }

    /// Get statistics
    pub fn get_stats(&self) -> JournalStats {
        let count = |t: JournalEventType| self.entries.iter().filter(|e| e.event_type == t).count();
        let mutations_committed = self
            .entries
            .iter()
            .filter(|e| e.event_type == JournalEventType::Commit)
            .filter_map(|e| e.mutations)
            .sum();

        JournalStats {
            total_entries: self.entries.len(),
            begun: count(JournalEventType::Begin),
            committed: count(JournalEventType::Commit),
            rolled_back: count(JournalEventType::Rollback),
            mutations_committed,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

/// Journal statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalStats {
    pub total_entries: usize,
    pub begun: usize,
    pub committed: usize,
    pub rolled_back: usize,
    pub mutations_committed: usize,
}

impl Default for TransactionJournal {
    fn default() -> Self {
        Self::new(10000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_counted() {
        let mut journal = TransactionJournal::new(100);

        let id = journal.log_begin("Create rooms");
        journal.log_mutation(id, "Create rooms", "room r1");
        journal.log_mutation(id, "Create rooms", "room r2");
        journal.log_commit(id, "Create rooms", 2);

        let stats = journal.get_stats();
        assert_eq!(stats.total_entries, 4);
        assert_eq!(stats.committed, 1);
        assert_eq!(stats.rolled_back, 0);
        assert_eq!(stats.mutations_committed, 2);
    }

    #[test]
    fn test_rollback_does_not_count_mutations() {
        let mut journal = TransactionJournal::new(100);

        let id = journal.log_begin("Create rooms");
        journal.log_mutation(id, "Create rooms", "room r1");
        journal.log_rollback(id, "Create rooms", 1);

        let stats = journal.get_stats();
        assert_eq!(stats.rolled_back, 1);
        assert_eq!(stats.mutations_committed, 0);
        assert_eq!(journal.rolled_back_labels(), vec!["Create rooms"]);

        let last = journal.entries().last().unwrap();
        assert_eq!(last.mutations, Some(1));
        assert_eq!(last.detail, None);
    }

    #[test]
    fn test_entries_share_transaction_id() {
        let mut journal = TransactionJournal::new(100);

        let first = journal.log_begin("Activate room tag type");
        journal.log_commit(first, "Activate room tag type", 1);
        let second = journal.log_begin("Create rooms");

        assert_ne!(first, second);
        let ids: Vec<_> = journal.entries().map(|e| e.transaction_id).collect();
        assert_eq!(ids, vec![first, first, second]);
    }

    #[test]
    fn test_max_entries_limit() {
        let mut journal = TransactionJournal::new(3);

        for label in ["a", "b", "c", "d"] {
            journal.log_begin(label);
        }

        let stats = journal.get_stats();
        assert_eq!(stats.total_entries, 3);
        assert!(journal.entries().all(|e| e.label != "a"));
    }

    #[test]
    fn test_export_json() {
        let mut journal = TransactionJournal::new(100);

        let id = journal.log_begin("Load tag family");
        journal.log_rollback(id, "Load tag family", 0);

        let json = journal.export_json();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[1]["eventType"], "rollback");
    }

    #[test]
    fn test_default_max_entries() {
        let journal = TransactionJournal::default();
        assert_eq!(journal.max_entries, 10000);
    }
}
