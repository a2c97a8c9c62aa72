//! Usher - Retrieval-and-answer engine for event platform support assistants
//!
//! This library answers free-text support questions against a static
//! knowledge corpus using deterministic heuristics:
//! - Query classification (greeting / personal / list)
//! - Keyword-weighted relevance scoring and ranking
//! - Enumerate-all retrieval for list-style queries
//! - Structured answer synthesis with extractive formatting
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   raw query                          │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │  Classifier  →  Retriever  →  Context  →  Synthesizer│
//! │                     │                                │
//! │               Corpus Store (read-only)               │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │   Answer { text, sources, is_from_knowledge_base }   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is pure and synchronous; the corpus is built once and
//! shared read-only across calls. No embeddings, no model calls, no
//! persistence.

pub mod answer;
pub mod classify;
pub mod config;
pub mod context;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod loader;
pub mod profile;
pub mod retrieve;
pub mod score;

pub use answer::Answer;
pub use classify::{Classification, QueryClassifier};
pub use config::{ClassifierConfig, EngineConfig, GreetingGroup, RetrievalConfig, ScorerWeights};
pub use context::{RetrievalContext, SourceRef, build_context};
pub use corpus::{
    Corpus, Document, DocumentBody, EVENT_SECTION_PREFIX, EventEntry, EventRecord, FaqEntry,
    RuleEntry,
};
pub use engine::AssistEngine;
pub use error::{Error, Result};
pub use loader::{CorpusBundle, load_bundle, load_profile};
pub use profile::{Certificate, UserProfile};
pub use retrieve::{Retriever, ScoredDocument};
