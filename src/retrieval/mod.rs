//! Cosine-similarity search over the vector store
//!
//! A brute-force O(n * D) scan with no index structure, acceptable for a
//! small in-memory corpus. This is the scalability ceiling of the design:
//! a production-scale corpus would need an approximate nearest-neighbor
//! index, which is out of scope here.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::store::VectorStore;
use crate::types::RetrievedDocument;

/// Similarity search engine over a shared vector store.
///
/// Searches never mutate the store and are safe to run concurrently with
/// other searches and with inserts: each search scores a snapshot taken
/// under the store's read lock.
pub struct SearchEngine {
    store: Arc<VectorStore>,
}

impl SearchEngine {
    /// Create a search engine over the given store
    pub fn new(store: Arc<VectorStore>) -> Self {
        Self { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &Arc<VectorStore> {
        &self.store
    }

    /// Find the most similar stored records for a query embedding.
    ///
    /// Scores every stored record by cosine similarity, drops results with
    /// similarity strictly below `min_similarity`, sorts the remainder by
    /// descending similarity (ties break by insertion order, earliest
    /// first), then truncates to `top_k`. Filtering always happens before
    /// truncation, so a low-scoring candidate can never displace one that
    /// passed the threshold.
    ///
    /// A stored record whose embedding dimension differs from the query's
    /// aborts the whole search with `DimensionMismatch`. Skipping the
    /// record instead would silently hide corrupted ingestion.
    pub fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
        min_similarity: f32,
    ) -> Result<Vec<RetrievedDocument>> {
        if query_embedding.is_empty() {
            return Err(Error::invalid_query("query embedding cannot be empty"));
        }

        tracing::debug!(
            top_k,
            min_similarity,
            store_size = self.store.len(),
            "Performing similarity search"
        );

        let snapshot = self.store.snapshot();
        let mut scored = Vec::with_capacity(snapshot.len());

        for stored in snapshot {
            let record = stored.record;
            if record.embedding.len() != query_embedding.len() {
                return Err(Error::DimensionMismatch {
                    id: record.id,
                    expected: query_embedding.len(),
                    actual: record.embedding.len(),
                });
            }

            let similarity = cosine_similarity(query_embedding, &record.embedding);
            if similarity >= min_similarity {
                scored.push((stored.seq, RetrievedDocument::new(record.id, record.content, similarity)));
            }
        }

        scored.sort_by(|(seq_a, a), (seq_b, b)| {
            b.similarity
                .total_cmp(&a.similarity)
                .then_with(|| seq_a.cmp(seq_b))
        });
        scored.truncate(top_k);

        Ok(scored.into_iter().map(|(_, doc)| doc).collect())
    }
}

/// Cosine similarity of two same-length vectors.
///
/// Returns 0.0 when either vector has a zero norm, keeping the ranking
/// total and well-ordered instead of producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentRecord;

    fn engine_with(records: Vec<(&str, &str, Vec<f32>)>) -> SearchEngine {
        let store = Arc::new(VectorStore::new());
        for (id, content, embedding) in records {
            store
                .insert(DocumentRecord::new(id, content, embedding))
                .unwrap();
        }
        SearchEngine::new(store)
    }

    #[test]
    fn identical_vectors_score_one() {
        let sim = cosine_similarity(&[0.3, 0.4, 0.5], &[0.3, 0.4, 0.5]);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn zero_norm_vectors_score_zero_not_nan() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn retrieves_matching_record_above_threshold() {
        let engine = engine_with(vec![
            ("a", "cats are mammals", vec![1.0, 0.0]),
            ("b", "the stock market fell", vec![0.0, 1.0]),
        ]);

        let results = engine.search(&[1.0, 0.0], 2, 0.5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document_id, "a");
        assert!((results[0].similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_store_yields_empty_results() {
        let engine = engine_with(vec![]);
        let results = engine.search(&[1.0, 0.0], 5, 0.0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn empty_query_embedding_is_rejected() {
        let engine = engine_with(vec![("a", "content", vec![1.0, 0.0])]);
        assert!(matches!(
            engine.search(&[], 5, 0.0),
            Err(Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn dimension_mismatch_aborts_the_search() {
        let engine = engine_with(vec![("a", "two dims", vec![1.0, 0.0])]);
        let err = engine.search(&[1.0, 0.0, 0.0], 5, 0.0).unwrap_err();
        match err {
            Error::DimensionMismatch { id, expected, actual } => {
                assert_eq!(id, "a");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn top_k_zero_yields_empty_results() {
        let engine = engine_with(vec![("a", "content", vec![1.0, 0.0])]);
        let results = engine.search(&[1.0, 0.0], 0, 0.0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn results_are_sorted_descending_and_capped() {
        let engine = engine_with(vec![
            ("far", "far", vec![0.0, 1.0]),
            ("close", "close", vec![1.0, 0.1]),
            ("exact", "exact", vec![1.0, 0.0]),
            ("mid", "mid", vec![1.0, 1.0]),
        ]);

        let results = engine.search(&[1.0, 0.0], 3, -1.0).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].document_id, "exact");
        assert_eq!(results[1].document_id, "close");
        assert_eq!(results[2].document_id, "mid");
        for window in results.windows(2) {
            assert!(window[0].similarity >= window[1].similarity);
        }
    }

    #[test]
    fn filtering_happens_before_truncation() {
        // Three candidates pass the threshold; the below-threshold record
        // must not occupy a top_k slot even though its raw rank is higher
        // than nothing - and the cap applies to survivors only.
        let engine = engine_with(vec![
            ("low", "low", vec![0.0, 1.0]),
            ("a", "a", vec![1.0, 0.0]),
            ("b", "b", vec![1.0, 0.05]),
            ("c", "c", vec![1.0, 0.1]),
        ]);

        let results = engine.search(&[1.0, 0.0], 2, 0.5).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.similarity >= 0.5));
        assert!(results.iter().all(|r| r.document_id != "low"));
    }

    #[test]
    fn ties_break_by_insertion_order() {
        // Both records are identical to the query, so similarity ties at
        // 1.0 and the earlier insertion must rank first.
        let engine = engine_with(vec![
            ("first", "first", vec![1.0, 0.0]),
            ("second", "second", vec![2.0, 0.0]),
        ]);

        let results = engine.search(&[1.0, 0.0], 2, 0.0).unwrap();
        assert_eq!(results[0].document_id, "first");
        assert_eq!(results[1].document_id, "second");
    }

    #[test]
    fn search_observes_last_write_for_overwritten_ids() {
        let store = Arc::new(VectorStore::new());
        store
            .insert(DocumentRecord::new("doc", "old", vec![0.0, 1.0]))
            .unwrap();
        store
            .insert(DocumentRecord::new("doc", "new", vec![1.0, 0.0]))
            .unwrap();

        let engine = SearchEngine::new(store);
        let results = engine.search(&[1.0, 0.0], 1, 0.5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].content, "new");
    }

    #[test]
    fn never_returns_below_threshold_or_past_cap() {
        let engine = engine_with(vec![
            ("a", "a", vec![1.0, 0.0]),
            ("b", "b", vec![0.9, 0.1]),
            ("c", "c", vec![0.0, 1.0]),
        ]);

        let results = engine.search(&[1.0, 0.0], 1, 0.3).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].similarity >= 0.3);
    }
}
