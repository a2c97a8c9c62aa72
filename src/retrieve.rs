//! Retrieval: scoring the corpus and selecting ranked documents
//!
//! Two modes. Standard retrieval keeps the best `top_k` scoring documents.
//! Enumerate-all retrieval, used for list-style queries, returns every
//! event document so downstream category filters never lose candidates to
//! an early cut.

use crate::config::{RetrievalConfig, ScorerWeights};
use crate::corpus::{Corpus, Document};
use crate::score::score_document;

/// A document paired with its relevance score
#[derive(Debug, Clone, Copy)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub score: u32,
}

/// Scores and ranks documents for one query
#[derive(Debug, Clone)]
pub struct Retriever<'a> {
    corpus: &'a Corpus,
    weights: &'a ScorerWeights,
    config: &'a RetrievalConfig,
}

impl<'a> Retriever<'a> {
    /// Create a retriever over a corpus
    #[must_use]
    pub const fn new(
        corpus: &'a Corpus,
        weights: &'a ScorerWeights,
        config: &'a RetrievalConfig,
    ) -> Self {
        Self {
            corpus,
            weights,
            config,
        }
    }

    /// Retrieve ranked documents for a query
    ///
    /// `list_mode` switches to enumerate-all over the event documents;
    /// when the corpus has no event documents at all, it falls back
    /// silently to a widened standard retrieval so list-shaped queries
    /// still get recall.
    #[must_use]
    pub fn retrieve(&self, query: &str, list_mode: bool) -> Vec<ScoredDocument<'a>> {
        if list_mode {
            let events = self.enumerate_events(query);
            if events.is_empty() {
                tracing::debug!("no event documents, widening standard retrieval");
                return self.top_k(query, self.config.widened_top_k);
            }
            return events;
        }
        self.top_k(query, self.config.top_k)
    }

    /// Standard mode: positive scores only, best `k` documents
    fn top_k(&self, query: &str, k: usize) -> Vec<ScoredDocument<'a>> {
        let mut scored: Vec<ScoredDocument<'a>> = self
            .corpus
            .documents()
            .iter()
            .map(|document| ScoredDocument {
                document,
                score: score_document(query, document, self.weights),
            })
            .filter(|sd| sd.score > 0)
            .collect();

        // stable sort keeps corpus order for equal scores
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(k);

        tracing::debug!(hits = scored.len(), k, "standard retrieval complete");
        scored
    }

    /// Enumerate-all mode: every event document, ranked
    ///
    /// Zero-score events stay in — the full enumerable set is the point.
    fn enumerate_events(&self, query: &str) -> Vec<ScoredDocument<'a>> {
        let mut scored: Vec<ScoredDocument<'a>> = self
            .corpus
            .documents()
            .iter()
            .filter(|document| document.is_event())
            .map(|document| ScoredDocument {
                document,
                score: score_document(query, document, self.weights),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(hits = scored.len(), "enumerate-all retrieval complete");
        scored
    }
}
