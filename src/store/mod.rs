//! In-memory vector record store
//!
//! A flat, unbounded collection of documents keyed by id. Records live for
//! the process lifetime or until cleared; there is no expiry or eviction.
//! A coarse reader/writer lock guards the map, so concurrent searches and
//! inserts interleave safely and every read sees fully-constructed records.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::types::DocumentRecord;

/// A record plus its insertion sequence number.
///
/// The sequence number is the documented tie-break for equal similarity
/// scores: earlier-inserted records rank first. Re-inserting an id assigns
/// a fresh sequence number, so an overwritten record counts as newly
/// inserted for ordering purposes.
#[derive(Debug, Clone)]
pub(crate) struct StoredRecord {
    pub record: DocumentRecord,
    pub seq: u64,
}

/// In-memory store for document embeddings
#[derive(Debug, Default)]
pub struct VectorStore {
    records: RwLock<HashMap<String, StoredRecord>>,
    next_seq: AtomicU64,
}

impl VectorStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any existing record with the same id.
    ///
    /// Fails with `InvalidRecord` if the id, content, or embedding is empty.
    pub fn insert(&self, record: DocumentRecord) -> Result<()> {
        if record.id.is_empty() {
            return Err(Error::invalid_record("record must have a non-empty id"));
        }
        if record.content.is_empty() {
            return Err(Error::invalid_record(format!(
                "record '{}' must have non-empty content",
                record.id
            )));
        }
        if record.embedding.is_empty() {
            return Err(Error::invalid_record(format!(
                "record '{}' must have a non-empty embedding",
                record.id
            )));
        }

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let id = record.id.clone();
        self.records
            .write()
            .insert(id.clone(), StoredRecord { record, seq });

        tracing::debug!(id = %id, "Added document to vector store");
        Ok(())
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<DocumentRecord> {
        self.records.read().get(id).map(|s| s.record.clone())
    }

    /// Snapshot of all records, in insertion order.
    ///
    /// Mutations after the call do not affect an already-returned snapshot.
    pub fn all(&self) -> Vec<DocumentRecord> {
        let mut stored: Vec<StoredRecord> = self.records.read().values().cloned().collect();
        stored.sort_by_key(|s| s.seq);
        stored.into_iter().map(|s| s.record).collect()
    }

    /// Snapshot of all records with their sequence numbers, for search
    pub(crate) fn snapshot(&self) -> Vec<StoredRecord> {
        self.records.read().values().cloned().collect()
    }

    /// Number of distinct ids currently stored
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Remove all records; idempotent
    pub fn clear(&self) {
        self.records.write().clear();
        tracing::info!("Cleared all documents from vector store");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, content: &str, embedding: Vec<f32>) -> DocumentRecord {
        DocumentRecord::new(id, content, embedding)
    }

    #[test]
    fn insert_then_get_round_trips() {
        let store = VectorStore::new();
        store
            .insert(record("doc-1", "cats are mammals", vec![1.0, 0.0]))
            .unwrap();

        let found = store.get("doc-1").unwrap();
        assert_eq!(found.content, "cats are mammals");
        assert_eq!(found.embedding, vec![1.0, 0.0]);
    }

    #[test]
    fn get_missing_id_returns_none() {
        let store = VectorStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn last_insert_wins_for_duplicate_ids() {
        let store = VectorStore::new();
        store.insert(record("doc-1", "old", vec![1.0, 0.0])).unwrap();
        store.insert(record("doc-1", "new", vec![0.0, 1.0])).unwrap();

        assert_eq!(store.len(), 1);
        let found = store.get("doc-1").unwrap();
        assert_eq!(found.content, "new");
        assert_eq!(found.embedding, vec![0.0, 1.0]);
    }

    #[test]
    fn rejects_empty_id_content_and_embedding() {
        let store = VectorStore::new();

        assert!(matches!(
            store.insert(record("", "content", vec![1.0])),
            Err(Error::InvalidRecord(_))
        ));
        assert!(matches!(
            store.insert(record("doc-1", "", vec![1.0])),
            Err(Error::InvalidRecord(_))
        ));
        assert!(matches!(
            store.insert(record("doc-1", "content", vec![])),
            Err(Error::InvalidRecord(_))
        ));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn all_returns_insertion_ordered_snapshot() {
        let store = VectorStore::new();
        store.insert(record("b", "second", vec![1.0])).unwrap();
        store.insert(record("a", "first", vec![1.0])).unwrap();

        let snapshot = store.all();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, "b");
        assert_eq!(snapshot[1].id, "a");

        // Mutating after the call must not change the snapshot already taken
        store.clear();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = VectorStore::new();
        store.insert(record("doc-1", "content", vec![1.0])).unwrap();
        store.clear();
        store.clear();
        assert!(store.is_empty());
    }
}
