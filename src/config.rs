//! Engine configuration: heuristic tables and tuning knobs
//!
//! Every table the pipeline consults (greeting groups, personal/list
//! markers, scoring weights, top-K limits) lives here as an immutable
//! config struct passed by reference into the relevant component. A TOML
//! file can partially override the defaults — only the sections present in
//! the file replace the built-ins.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::{Error, Result};

/// Full engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Query classification tables
    pub classifier: ClassifierConfig,

    /// Relevance scoring weights
    pub scorer: ScorerWeights,

    /// Retrieval mode settings
    pub retrieval: RetrievalConfig,

    /// Artificial "thinking" pause before an answer is returned.
    /// Zero disables the pause entirely; it is pacing, not correctness.
    pub response_delay_ms: u64,
}

impl EngineConfig {
    /// The response delay as a [`Duration`]
    #[must_use]
    pub const fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Load configuration from a TOML file, overlaying defaults
    ///
    /// Sections absent from the file keep their built-in values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: EngineConfigFile = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "loaded engine config file");
        Ok(Self::default().overlay(file))
    }

    /// Load from the default config path if it exists, otherwise defaults
    #[must_use]
    pub fn load_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to load config file, using defaults"
            );
            Self::default()
        })
    }

    fn overlay(mut self, file: EngineConfigFile) -> Self {
        if let Some(classifier) = file.classifier {
            if let Some(groups) = classifier.greeting_groups {
                self.classifier.greeting_groups = groups;
            }
            if let Some(markers) = classifier.personal_markers {
                self.classifier.personal_markers = markers;
            }
            if let Some(markers) = classifier.list_markers {
                self.classifier.list_markers = markers;
            }
        }
        if let Some(scorer) = file.scorer {
            self.scorer = scorer;
        }
        if let Some(retrieval) = file.retrieval {
            self.retrieval = retrieval;
        }
        if let Some(delay) = file.response_delay_ms {
            self.response_delay_ms = delay;
        }
        self
    }
}

/// Return the default config file path: `~/.config/usher/config.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("usher").join("config.toml"))
}

/// Partial TOML overlay schema — all sections optional
#[derive(Debug, Default, Deserialize)]
struct EngineConfigFile {
    #[serde(default)]
    classifier: Option<ClassifierFileConfig>,

    #[serde(default)]
    scorer: Option<ScorerWeights>,

    #[serde(default)]
    retrieval: Option<RetrievalConfig>,

    #[serde(default)]
    response_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ClassifierFileConfig {
    greeting_groups: Option<Vec<GreetingGroup>>,
    personal_markers: Option<Vec<String>>,
    list_markers: Option<Vec<String>>,
}

/// Query classification tables
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Greeting pattern groups, checked in order; first match wins
    pub greeting_groups: Vec<GreetingGroup>,

    /// First-person/possessive markers flagging a personal query
    pub personal_markers: Vec<String>,

    /// Enumeration phrases flagging a list query
    pub list_markers: Vec<String>,
}

/// One greeting group: trigger patterns plus candidate responses
///
/// Patterns match as whole words against the normalized query; the
/// response is picked uniformly at random from `responses`.
#[derive(Debug, Clone, Deserialize)]
pub struct GreetingGroup {
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            greeting_groups: default_greeting_groups(),
            personal_markers: to_strings(&[
                "my",
                "i ",
                "am i",
                "do i",
                "have i",
                "how many",
                "which events",
            ]),
            list_markers: to_strings(&[
                "all events",
                "all the events",
                "list events",
                "events list",
                "list of events",
                "what events",
                "show events",
                "show me events",
                "upcoming events",
                "available events",
            ]),
        }
    }
}

fn default_greeting_groups() -> Vec<GreetingGroup> {
    vec![
        GreetingGroup {
            patterns: to_strings(&[
                "hello",
                "hi",
                "hey",
                "good morning",
                "good afternoon",
                "good evening",
                "greetings",
            ]),
            responses: to_strings(&[
                "Hello! 👋 I'm Usher, your event assistant. Ask me about registration, fees, certificates, or upcoming events!",
                "Hi there! How can I help you today? I know all about our events, registration rules, and certificates.",
                "Hey! 😊 Need help with an event? I can walk you through registration, fees, and more.",
            ]),
        },
        GreetingGroup {
            patterns: to_strings(&["thank", "thanks", "appreciate"]),
            responses: to_strings(&[
                "You're welcome! Happy to help anytime. 😊",
                "Glad I could help! Let me know if anything else comes up.",
                "Anytime! That's what I'm here for.",
            ]),
        },
        GreetingGroup {
            patterns: to_strings(&["bye", "goodbye", "see you", "farewell", "good night"]),
            responses: to_strings(&[
                "Goodbye! See you at the next event! 👋",
                "Take care! Come back whenever you have a question.",
                "Bye! Don't forget to check the upcoming events list.",
            ]),
        },
    ]
}

/// Relevance scoring weights
///
/// The defaults reproduce the platform's canonical arithmetic: +5 per
/// matched document keyword, +1 per query token found among the content
/// words, +2 per token overlapping a keyword as a substring (either
/// direction — this stacks with the keyword bonus), +3 when the section
/// label occurs inside the query. Tokens of `min_token_len` characters or
/// fewer are discarded before the token passes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScorerWeights {
    pub keyword_hit: u32,
    pub content_word_hit: u32,
    pub keyword_overlap: u32,
    pub section_hit: u32,
    pub min_token_len: usize,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            keyword_hit: 5,
            content_word_hit: 1,
            keyword_overlap: 2,
            section_hit: 3,
            min_token_len: 3,
        }
    }
}

/// Retrieval mode settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Ranked results returned in standard mode
    pub top_k: usize,

    /// Widened cut used when a list query finds no event documents
    pub widened_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            widened_top_k: 15,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Validate a config before handing it to an engine
///
/// # Errors
///
/// Returns [`Error::Config`] when a table that must be non-empty is empty.
pub fn validate(config: &EngineConfig) -> Result<()> {
    if config.retrieval.top_k == 0 {
        return Err(Error::Config("retrieval.top_k must be at least 1".into()));
    }
    for (i, group) in config.classifier.greeting_groups.iter().enumerate() {
        if group.patterns.is_empty() || group.responses.is_empty() {
            return Err(Error::Config(format!(
                "greeting group {i} needs at least one pattern and one response"
            )));
        }
    }
    Ok(())
}
