//! Engine facade: the one-call surface over the whole pipeline
//!
//! Owns the corpus, the config tables and the greeting RNG. Each call to
//! [`AssistEngine::answer`] is an independent, synchronous pass —
//! classify, retrieve, build context, synthesize — over immutable state;
//! concurrent callers share nothing but the read-only corpus.

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::answer::{self, Answer};
use crate::classify::QueryClassifier;
use crate::config::EngineConfig;
use crate::context::build_context;
use crate::corpus::Corpus;
use crate::profile::UserProfile;
use crate::retrieve::Retriever;

/// The retrieval-and-answer engine
pub struct AssistEngine {
    corpus: Arc<Corpus>,
    config: EngineConfig,
    rng: Mutex<StdRng>,
}

impl AssistEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self::with_config(corpus, EngineConfig::default())
    }

    /// Create an engine with explicit configuration
    #[must_use]
    pub fn with_config(corpus: Corpus, config: EngineConfig) -> Self {
        Self {
            corpus: Arc::new(corpus),
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create an engine with a seeded RNG for reproducible greetings
    #[must_use]
    pub fn with_seed(corpus: Corpus, config: EngineConfig, seed: u64) -> Self {
        Self {
            corpus: Arc::new(corpus),
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Answer a query, optionally against a user profile
    ///
    /// Total over any input: malformed queries and missing profiles
    /// resolve to fallback answers, never to errors.
    #[must_use]
    pub fn answer(&self, query: &str, profile: Option<&UserProfile>) -> Answer {
        let classification = {
            let classifier = QueryClassifier::new(&self.config.classifier);
            let mut rng = self.rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            classifier.classify(query, &mut *rng)
        };

        // A greeting skips retrieval entirely.
        let ranked = if classification.is_greeting() {
            Vec::new()
        } else {
            let retriever = Retriever::new(
                &self.corpus,
                &self.config.scorer,
                &self.config.retrieval,
            );
            retriever.retrieve(query, classification.is_list)
        };

        tracing::debug!(
            hits = ranked.len(),
            personal = classification.is_personal,
            list = classification.is_list,
            "answering query"
        );

        let ctx = build_context(classification, ranked, profile, query);
        tracing::trace!(context = %ctx.general_context, "assembled retrieval context");
        answer::synthesize(&ctx, query, &self.config)
    }

    /// Answer after the configured "thinking" pause
    ///
    /// Pure pacing for interactive callers; a zero delay makes this
    /// equivalent to [`Self::answer`].
    pub async fn answer_after_delay(
        &self,
        query: &str,
        profile: Option<&UserProfile>,
    ) -> Answer {
        let delay = self.config.response_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.answer(query, profile)
    }

    /// The corpus this engine answers from
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl std::fmt::Debug for AssistEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistEngine")
            .field("documents", &self.corpus.len())
            .finish_non_exhaustive()
    }
}
