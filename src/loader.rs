//! Corpus bundle and profile loading
//!
//! The engine core never touches the filesystem; this module is the
//! loading collaborator that reads JSON exports from the platform and
//! hands typed entries to [`Corpus::build`].

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::corpus::{Corpus, EventEntry, FaqEntry, RuleEntry};
use crate::profile::UserProfile;
use crate::{Error, Result};

/// A corpus export: the three source groups in one file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusBundle {
    #[serde(default)]
    pub rules: Vec<RuleEntry>,

    #[serde(default)]
    pub faqs: Vec<FaqEntry>,

    #[serde(default)]
    pub events: Vec<EventEntry>,
}

impl CorpusBundle {
    /// Validate the bundle and assemble the corpus
    ///
    /// # Errors
    ///
    /// Returns [`Error::Corpus`] when two entries share an id.
    pub fn into_corpus(self) -> Result<Corpus> {
        let mut seen = HashSet::new();
        let ids = self
            .rules
            .iter()
            .map(|r| &r.id)
            .chain(self.faqs.iter().map(|f| &f.id))
            .chain(self.events.iter().map(|e| &e.id));
        for id in ids {
            if !seen.insert(id.clone()) {
                return Err(Error::Corpus(format!("duplicate document id: {id}")));
            }
        }

        if self.rules.is_empty() && self.faqs.is_empty() && self.events.is_empty() {
            tracing::warn!("corpus bundle is empty, every query will hit the fallback");
        }

        Ok(Corpus::build(self.rules, self.faqs, self.events))
    }
}

/// Load a corpus bundle from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_bundle(path: &Path) -> Result<CorpusBundle> {
    let content = std::fs::read_to_string(path)?;
    let bundle: CorpusBundle = serde_json::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        rules = bundle.rules.len(),
        faqs = bundle.faqs.len(),
        events = bundle.events.len(),
        "loaded corpus bundle"
    );
    Ok(bundle)
}

/// Load a user profile from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    let content = std::fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    tracing::info!(path = %path.display(), name = %profile.name, "loaded user profile");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BUNDLE_JSON: &str = r#"{
        "rules": [
            {"id": "rule-reg", "section": "Registration",
             "content": "1. Sign in\n2. Register", "keywords": ["register"]}
        ],
        "faqs": [
            {"id": "faq-fee", "topic": "Fees",
             "question": "Is there a fee?", "answer": "Some events charge one.",
             "keywords": ["fee"]}
        ],
        "events": [
            {"id": "evt-1", "name": "Rust Days", "eventType": "Workshop",
             "date": "2026-03-15", "fee": "Free", "availableSeats": 40,
             "registrationStatus": "Open"}
        ]
    }"#;

    #[test]
    fn bundle_round_trips_into_a_corpus() {
        let bundle: CorpusBundle = serde_json::from_str(BUNDLE_JSON).unwrap();
        let corpus = bundle.into_corpus().unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get("evt-1").unwrap().section, "Event: Rust Days");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let bundle = CorpusBundle {
            rules: vec![
                RuleEntry {
                    id: "dup".to_string(),
                    section: "A".to_string(),
                    content: String::new(),
                    keywords: vec![],
                },
                RuleEntry {
                    id: "dup".to_string(),
                    section: "B".to_string(),
                    content: String::new(),
                    keywords: vec![],
                },
            ],
            ..CorpusBundle::default()
        };

        let err = bundle.into_corpus().unwrap_err();
        assert!(err.to_string().contains("duplicate document id: dup"));
    }

    #[test]
    fn load_bundle_reads_json_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUNDLE_JSON.as_bytes()).unwrap();

        let bundle = load_bundle(file.path()).unwrap();
        assert_eq!(bundle.events.len(), 1);
    }

    #[test]
    fn load_bundle_missing_file_is_an_io_error() {
        let err = load_bundle(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
