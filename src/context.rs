//! Retrieval context: everything the synthesizer needs for one query
//!
//! Built fresh per call from the classification flags, the ranked
//! documents and the optional user profile; never cached or shared.

use crate::answer::personal;
use crate::classify::Classification;
use crate::profile::UserProfile;
use crate::retrieve::ScoredDocument;

/// How many sources are surfaced for citation
const TOP_SOURCES: usize = 3;

/// Separator between document blocks in the general context text
const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Citation reference to a retrieved document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub section: String,
    pub id: String,
}

/// Transient aggregate handed to the answer synthesizer
#[derive(Debug, Clone)]
pub struct RetrievalContext<'a> {
    /// Pre-selected greeting response, when the query was a greeting
    pub greeting: Option<String>,

    /// Query uses first-person/possessive phrasing
    pub is_personal: bool,

    /// Query asks for an enumeration
    pub is_list: bool,

    /// Whether retrieval produced anything
    pub has_relevant_docs: bool,

    /// Ranked documents, best first
    pub relevant_docs: Vec<ScoredDocument<'a>>,

    /// Rank-and-score-prefixed concatenation of the retrieved content
    pub general_context: String,

    /// Personalized context, present only for personal queries with a
    /// profile available
    pub personal_context: Option<String>,

    /// Up to three citation references, best first
    pub top_sources: Vec<SourceRef>,
}

impl RetrievalContext<'_> {
    /// Whether a greeting group matched
    #[must_use]
    pub const fn is_greeting(&self) -> bool {
        self.greeting.is_some()
    }
}

/// Assemble the retrieval context for one query
#[must_use]
pub fn build_context<'a>(
    classification: Classification,
    ranked: Vec<ScoredDocument<'a>>,
    profile: Option<&UserProfile>,
    query: &str,
) -> RetrievalContext<'a> {
    let general_context = format_general_context(&ranked);

    let personal_context = if classification.is_personal {
        profile.map(|p| personal::profile_context(p, query))
    } else {
        None
    };

    let top_sources = ranked
        .iter()
        .take(TOP_SOURCES)
        .map(|sd| SourceRef {
            section: sd.document.section.clone(),
            id: sd.document.id.clone(),
        })
        .collect();

    RetrievalContext {
        greeting: classification.greeting,
        is_personal: classification.is_personal,
        is_list: classification.is_list,
        has_relevant_docs: !ranked.is_empty(),
        relevant_docs: ranked,
        general_context,
        personal_context,
        top_sources,
    }
}

/// Each document's content prefixed with its rank and score
fn format_general_context(ranked: &[ScoredDocument<'_>]) -> String {
    let blocks: Vec<String> = ranked
        .iter()
        .enumerate()
        .map(|(i, sd)| {
            format!(
                "[{rank}] {section} (score {score})\n{content}",
                rank = i + 1,
                section = sd.document.section,
                score = sd.score,
                content = sd.document.content,
            )
        })
        .collect();
    blocks.join(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, RuleEntry};

    fn corpus() -> Corpus {
        Corpus::build(
            (0..5)
                .map(|i| RuleEntry {
                    id: format!("rule-{i}"),
                    section: format!("Section {i}"),
                    content: format!("Body of section {i}."),
                    keywords: vec![],
                })
                .collect(),
            vec![],
            vec![],
        )
    }

    fn ranked(corpus: &Corpus) -> Vec<ScoredDocument<'_>> {
        corpus
            .documents()
            .iter()
            .enumerate()
            .map(|(i, document)| ScoredDocument {
                document,
                score: u32::try_from(10 - i).unwrap(),
            })
            .collect()
    }

    #[test]
    fn general_context_prefixes_rank_and_score() {
        let corpus = corpus();
        let ctx = build_context(Classification::default(), ranked(&corpus), None, "q");

        assert!(ctx.has_relevant_docs);
        assert!(ctx.general_context.starts_with("[1] Section 0 (score 10)\nBody of section 0."));
        assert!(ctx.general_context.contains("\n\n---\n\n[2] Section 1 (score 9)"));
    }

    #[test]
    fn top_sources_cap_at_three() {
        let corpus = corpus();
        let ctx = build_context(Classification::default(), ranked(&corpus), None, "q");

        assert_eq!(ctx.top_sources.len(), 3);
        assert_eq!(ctx.top_sources[0].id, "rule-0");
        assert_eq!(ctx.top_sources[2].id, "rule-2");
    }

    #[test]
    fn empty_ranking_leaves_context_empty() {
        let ctx = build_context(Classification::default(), vec![], None, "q");

        assert!(!ctx.has_relevant_docs);
        assert!(ctx.general_context.is_empty());
        assert!(ctx.top_sources.is_empty());
    }

    #[test]
    fn personal_context_requires_profile_and_flag() {
        let profile = UserProfile {
            name: "Dana".to_string(),
            ..UserProfile::default()
        };

        let personal = Classification {
            is_personal: true,
            ..Classification::default()
        };
        let ctx = build_context(personal.clone(), vec![], Some(&profile), "my stuff");
        assert!(ctx.personal_context.is_some());

        // flag without profile: context stays empty (MissingProfile)
        let ctx = build_context(personal, vec![], None, "my stuff");
        assert!(ctx.personal_context.is_none());

        // profile without flag: profile is ignored
        let ctx = build_context(Classification::default(), vec![], Some(&profile), "events");
        assert!(ctx.personal_context.is_none());
    }
}
