//! Content extraction: mining answer material from one document's text
//!
//! Lines are scored against the query keywords and grouped into steps,
//! bulleted items and free sentences so the synthesizer can present them
//! in a structured order. When nothing scores, everything is kept —
//! ranking degrades to "show it all", never to "show nothing".

use std::sync::LazyLock;

use regex::Regex;

/// Leading `1.`-style numbering
static STEP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("valid regex"));

const KEYWORD_LINE_BONUS: u32 = 5;
const STEP_LINE_BONUS: u32 = 2;
const BULLET_LINE_BONUS: u32 = 1;

const MAX_STEPS: usize = 10;
const MAX_BULLETS: usize = 8;
const MAX_SENTENCES: usize = 5;
const MIN_SENTENCE_LEN: usize = 10;

/// Structured material extracted from one document
#[derive(Debug, Clone, Default)]
pub struct ExtractedContent {
    /// Numbered lines, original numbering kept
    pub steps: Vec<String>,

    /// Bulleted lines, marker stripped
    pub bullets: Vec<String>,

    /// Plain sentences long enough to stand alone
    pub sentences: Vec<String>,

    /// The unprocessed content, for the everything-empty fallback
    pub raw: String,
}

impl ExtractedContent {
    /// Whether any numbered steps were found
    #[must_use]
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Whether any bulleted items were found
    #[must_use]
    pub fn has_bullets(&self) -> bool {
        !self.bullets.is_empty()
    }

    /// Whether all three groups came up empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.bullets.is_empty() && self.sentences.is_empty()
    }
}

/// Extract structured content from a document
///
/// `normalized_query` must already be lowercased and punctuation-free
/// (see [`crate::score::normalize`]); tokens longer than `min_token_len`
/// become the line-scoring keywords.
#[must_use]
pub fn extract(content: &str, normalized_query: &str, min_token_len: usize) -> ExtractedContent {
    let keywords: Vec<&str> = normalized_query
        .split_whitespace()
        .filter(|t| t.len() > min_token_len)
        .collect();

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut scored: Vec<(&str, u32)> = lines
        .iter()
        .map(|line| (*line, score_line(line, &keywords)))
        .collect();

    // Keep only scoring lines when anything scored at all.
    if scored.iter().any(|(_, s)| *s > 0) {
        scored.retain(|(_, s)| *s > 0);
    }
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut extracted = ExtractedContent {
        raw: content.to_string(),
        ..ExtractedContent::default()
    };

    for (line, _) in scored {
        if STEP_PATTERN.is_match(line) {
            if extracted.steps.len() < MAX_STEPS {
                extracted.steps.push(line.to_string());
            }
        } else if let Some(item) = strip_bullet(line) {
            if extracted.bullets.len() < MAX_BULLETS {
                extracted.bullets.push(item.to_string());
            }
        } else if line.len() > MIN_SENTENCE_LEN && extracted.sentences.len() < MAX_SENTENCES {
            extracted.sentences.push(line.to_string());
        }
    }

    extracted
}

fn score_line(line: &str, keywords: &[&str]) -> u32 {
    let line_lower = line.to_lowercase();
    let mut score = 0;

    for keyword in keywords {
        if line_lower.contains(keyword) {
            score += KEYWORD_LINE_BONUS;
        }
    }
    if STEP_PATTERN.is_match(line) {
        score += STEP_LINE_BONUS;
    }
    if strip_bullet(line).is_some() {
        score += BULLET_LINE_BONUS;
    }

    score
}

/// The line's text without its bullet marker, if it has one
fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(str::trim_start)
}
