//! Relevance scoring between a query and a single document
//!
//! Deterministic keyword-overlap arithmetic — no embeddings, no model.
//! The weights are configurable but the shape of the computation is fixed
//! and intentionally matches the platform's historical behavior, including
//! the stacking of the keyword bonus with the per-token overlap bonus.

use std::collections::HashSet;

use crate::config::ScorerWeights;
use crate::corpus::Document;

/// Normalize a query: lowercase, strip non-alphanumeric characters,
/// collapse whitespace
#[must_use]
pub fn normalize(query: &str) -> String {
    let mut cleaned = String::with_capacity(query.len());
    for c in query.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokens of a normalized query that survive the length filter
#[must_use]
pub fn query_tokens<'a>(normalized: &'a str, weights: &ScorerWeights) -> Vec<&'a str> {
    normalized
        .split_whitespace()
        .filter(|t| t.len() > weights.min_token_len)
        .collect()
}

/// Score one document against a query
///
/// Total function over any well-typed document: empty content, empty
/// keyword lists and empty sections all contribute zero rather than
/// failing.
#[must_use]
pub fn score_document(query: &str, document: &Document, weights: &ScorerWeights) -> u32 {
    let raw_lower = query.to_lowercase();
    let normalized = normalize(query);
    let mut score = 0;

    // High-weight trigger: a document keyword appearing anywhere in the
    // raw (case-folded) query.
    for keyword in &document.keywords {
        if !keyword.is_empty() && raw_lower.contains(keyword.as_str()) {
            score += weights.keyword_hit;
        }
    }

    let tokens = query_tokens(&normalized, weights);
    if !tokens.is_empty() {
        let content_lower = document.content.to_lowercase();
        let content_words: HashSet<&str> = content_lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        for token in &tokens {
            if content_words.contains(token) {
                score += weights.content_word_hit;
            }
            let overlaps = document
                .keywords
                .iter()
                .any(|k| !k.is_empty() && (k.contains(token) || token.contains(k.as_str())));
            if overlaps {
                score += weights.keyword_overlap;
            }
        }
    }

    // Section label inside the query is a strong topical signal.
    let section_lower = document.section.to_lowercase();
    if !section_lower.is_empty() && raw_lower.contains(&section_lower) {
        score += weights.section_hit;
    }

    score
}
