//! Query classification: greeting, personal and list-query detection
//!
//! Pure containment heuristics over fixed tables from
//! [`ClassifierConfig`]. The only randomness in the whole engine lives
//! here — picking a greeting response — and it is injected as an `Rng`
//! so tests can seed it.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::ClassifierConfig;
use crate::score::normalize;

/// Result of classifying one query
///
/// The flags are not mutually exclusive: a query can be personal and a
/// list query at the same time. A matched greeting short-circuits the
/// rest of the pipeline downstream.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Pre-selected greeting response when the query matched a greeting
    /// group
    pub greeting: Option<String>,

    /// Query uses first-person/possessive phrasing
    pub is_personal: bool,

    /// Query asks for an enumeration
    pub is_list: bool,
}

impl Classification {
    /// Whether a greeting group matched
    #[must_use]
    pub const fn is_greeting(&self) -> bool {
        self.greeting.is_some()
    }
}

/// Classifies raw query text against the configured tables
#[derive(Debug, Clone)]
pub struct QueryClassifier<'a> {
    config: &'a ClassifierConfig,
}

impl<'a> QueryClassifier<'a> {
    /// Create a classifier over a config table set
    #[must_use]
    pub const fn new(config: &'a ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a query
    ///
    /// Greeting groups are checked in table order and the first matching
    /// group wins; its response is drawn uniformly at random from the
    /// group's response list via the supplied `rng`.
    pub fn classify(&self, query: &str, rng: &mut impl Rng) -> Classification {
        let normalized = normalize(query);

        let greeting = self
            .config
            .greeting_groups
            .iter()
            .find(|group| group.patterns.iter().any(|p| contains_phrase(&normalized, p)))
            .and_then(|group| group.responses.choose(rng).cloned());

        let is_personal = self
            .config
            .personal_markers
            .iter()
            .any(|m| normalized.contains(m.as_str()));

        let is_list = self
            .config
            .list_markers
            .iter()
            .any(|m| normalized.contains(m.as_str()));

        let classification = Classification {
            greeting,
            is_personal,
            is_list,
        };
        tracing::debug!(
            greeting = classification.is_greeting(),
            personal = classification.is_personal,
            list = classification.is_list,
            "classified query"
        );
        classification
    }
}

/// Whole-word containment: `phrase` must appear bounded by word edges
///
/// Plain substring matching would let "hi" fire inside "which"; padding
/// both sides with spaces keeps single-word greetings honest while still
/// matching multi-word phrases like "good morning".
fn contains_phrase(normalized: &str, phrase: &str) -> bool {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return false;
    }
    format!(" {normalized} ").contains(&format!(" {phrase} "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn classify(query: &str) -> Classification {
        let config = ClassifierConfig::default();
        let classifier = QueryClassifier::new(&config);
        let mut rng = StdRng::seed_from_u64(7);
        classifier.classify(query, &mut rng)
    }

    #[test]
    fn plain_greeting_matches_first_group() {
        let config = ClassifierConfig::default();
        let c = classify("hi");
        assert!(c.is_greeting());
        assert!(
            config.greeting_groups[0]
                .responses
                .contains(c.greeting.as_ref().unwrap())
        );
    }

    #[test]
    fn greeting_with_punctuation_still_matches() {
        assert!(classify("Hello!!!").is_greeting());
        assert!(classify("good morning :)").is_greeting());
    }

    #[test]
    fn greeting_does_not_fire_inside_words() {
        // "which" contains "hi" but must not read as a greeting
        let c = classify("which events are free");
        assert!(!c.is_greeting());
    }

    #[test]
    fn thanks_group_matches() {
        let config = ClassifierConfig::default();
        let c = classify("thanks a lot");
        assert!(c.is_greeting());
        assert!(
            config.greeting_groups[1]
                .responses
                .contains(c.greeting.as_ref().unwrap())
        );
    }

    #[test]
    fn seeded_rng_makes_greeting_deterministic() {
        let config = ClassifierConfig::default();
        let classifier = QueryClassifier::new(&config);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = classifier.classify("hello", &mut rng_a);
        let b = classifier.classify("hello", &mut rng_b);
        assert_eq!(a.greeting, b.greeting);
    }

    #[test]
    fn personal_markers_flag_personal_queries() {
        assert!(classify("how many certificates do I have").is_personal);
        assert!(classify("which events am i registered for").is_personal);
        assert!(classify("what is my attendance rate").is_personal);
    }

    #[test]
    fn list_markers_flag_list_queries() {
        assert!(classify("give me all the events list").is_list);
        assert!(classify("what events are coming up").is_list);
        assert!(classify("show events please").is_list);
    }

    #[test]
    fn flags_are_not_exclusive() {
        let c = classify("which events am i registered for");
        assert!(c.is_personal);
        // "which events" is a personal marker; the phrasing is not in the
        // list tables, so is_list stays false here
        assert!(!c.is_greeting());
    }

    #[test]
    fn neutral_query_sets_no_flags() {
        let c = classify("cancellation policy");
        assert!(!c.is_greeting());
        assert!(!c.is_personal);
        assert!(!c.is_list);
    }
}
