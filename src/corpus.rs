//! Corpus store: the immutable, in-memory collection of knowledge documents
//!
//! A corpus is assembled once at startup from three source groups —
//! rulebook sections, FAQ entries and event records — and never mutated
//! afterwards. Event records keep their structured fields (the body
//! variant) alongside a rendered `Key: Value` text form so the scorer and
//! the content extractor can treat every document uniformly.

use chrono::NaiveDate;
use serde::Deserialize;

/// Section label prefix shared by all event documents
pub const EVENT_SECTION_PREFIX: &str = "Event: ";

/// A rulebook section as authored on the platform
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleEntry {
    pub id: String,
    pub section: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A frequently-asked question with its canned answer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: String,
    pub topic: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// An event record as exported by the events service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub available_seats: Option<u32>,
    #[serde(default)]
    pub registration_status: Option<String>,
    #[serde(default)]
    pub prizes: Option<String>,
    #[serde(default)]
    pub includes: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Structured fields of an event document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub name: String,
    pub event_type: Option<String>,
    pub date: Option<NaiveDate>,
    pub fee: Option<String>,
    pub available_seats: Option<u32>,
    pub registration_status: Option<String>,
    pub prizes: Option<String>,
    pub includes: Option<String>,
}

impl EventRecord {
    /// Whether the event charges no fee
    ///
    /// An event with no fee field is neither free nor paid.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.fee
            .as_ref()
            .is_some_and(|f| f.to_lowercase().contains("free") || f.trim() == "0")
    }

    /// Whether the event charges a fee
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.fee.is_some() && !self.is_free()
    }

    /// Case-insensitive check against the event type field
    #[must_use]
    pub fn type_matches(&self, needle: &str) -> bool {
        self.event_type
            .as_ref()
            .is_some_and(|t| t.to_lowercase().contains(needle))
    }
}

/// What kind of knowledge a document carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBody {
    /// A rulebook section
    Rule,
    /// A question/answer pair
    Faq,
    /// A structured event record
    Event(EventRecord),
}

/// One retrievable unit of knowledge
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique identifier within the corpus
    pub id: String,

    /// Human-readable label, also a scoring signal
    pub section: String,

    /// Multi-line free text searched by the scorer and mined by the
    /// content extractor
    pub content: String,

    /// Lowercase high-weight match triggers
    pub keywords: Vec<String>,

    /// Structured body variant
    pub body: DocumentBody,
}

impl Document {
    /// Whether this document is an event record
    #[must_use]
    pub const fn is_event(&self) -> bool {
        matches!(self.body, DocumentBody::Event(_))
    }

    /// The structured event record, if this is an event document
    #[must_use]
    pub const fn event(&self) -> Option<&EventRecord> {
        match &self.body {
            DocumentBody::Event(record) => Some(record),
            _ => None,
        }
    }
}

/// The static, read-only document collection
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Assemble a corpus from the three source groups
    ///
    /// Source order is preserved (rules, then FAQs, then events) and acts
    /// as the tie-breaker for equal relevance scores. Keywords are
    /// lowercased and de-duplicated here so scoring never has to care.
    #[must_use]
    pub fn build(rules: Vec<RuleEntry>, faqs: Vec<FaqEntry>, events: Vec<EventEntry>) -> Self {
        let mut documents =
            Vec::with_capacity(rules.len() + faqs.len() + events.len());

        for rule in rules {
            documents.push(Document {
                id: rule.id,
                section: rule.section,
                content: rule.content,
                keywords: normalize_keywords(rule.keywords),
                body: DocumentBody::Rule,
            });
        }

        for faq in faqs {
            documents.push(Document {
                id: faq.id,
                section: faq.topic,
                content: format!("Q: {}\nA: {}", faq.question, faq.answer),
                keywords: normalize_keywords(faq.keywords),
                body: DocumentBody::Faq,
            });
        }

        for event in events {
            let record = EventRecord {
                name: event.name,
                event_type: event.event_type,
                date: event.date,
                fee: event.fee,
                available_seats: event.available_seats,
                registration_status: event.registration_status,
                prizes: event.prizes,
                includes: event.includes,
            };
            documents.push(Document {
                id: event.id,
                section: format!("{EVENT_SECTION_PREFIX}{}", record.name),
                content: render_event_content(&record),
                keywords: normalize_keywords(event.keywords),
                body: DocumentBody::Event(record),
            });
        }

        tracing::info!(total = documents.len(), "corpus assembled");
        Self { documents }
    }

    /// All documents in corpus order
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Number of documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus holds no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Render an event record as `Key: Value` lines
///
/// This text form is what the scorer and content extractor see; absent
/// fields produce no line at all.
fn render_event_content(record: &EventRecord) -> String {
    let mut lines = Vec::new();
    if let Some(event_type) = &record.event_type {
        lines.push(format!("Type: {event_type}"));
    }
    if let Some(date) = record.date {
        lines.push(format!("Date: {date}"));
    }
    if let Some(fee) = &record.fee {
        lines.push(format!("Fee: {fee}"));
    }
    if let Some(seats) = record.available_seats {
        lines.push(format!("Available Seats: {seats}"));
    }
    if let Some(status) = &record.registration_status {
        lines.push(format!("Registration Status: {status}"));
    }
    if let Some(prizes) = &record.prizes {
        lines.push(format!("Prizes: {prizes}"));
    }
    if let Some(includes) = &record.includes {
        lines.push(format!("Includes: {includes}"));
    }
    lines.join("\n")
}

fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let lowered = keyword.trim().to_lowercase();
        if !lowered.is_empty() && !out.contains(&lowered) {
            out.push(lowered);
        }
    }
    out
}
