//! Shared fixtures for engine integration tests

use chrono::NaiveDate;
use usher_assist::{Certificate, Corpus, EventEntry, FaqEntry, RuleEntry, UserProfile};

/// A small but representative corpus: rulebook, FAQ and events
#[must_use]
pub fn sample_corpus() -> Corpus {
    Corpus::build(sample_rules(), sample_faqs(), sample_events(3))
}

#[must_use]
pub fn sample_rules() -> Vec<RuleEntry> {
    vec![
        RuleEntry {
            id: "rule-registration".to_string(),
            section: "Registration".to_string(),
            content: "To register for an event:\n\
                      1. Sign in to your account\n\
                      2. Open the event page\n\
                      3. Click Register and confirm your seat\n\
                      Registration closes 24 hours before the event starts."
                .to_string(),
            keywords: vec!["register".to_string(), "registration".to_string(), "signup".to_string()],
        },
        RuleEntry {
            id: "rule-cancellation".to_string(),
            section: "Cancellation".to_string(),
            content: "You may cancel a registration up to 24 hours before the event.\n\
                      - Open your registrations\n\
                      - Choose the event and confirm the cancellation"
                .to_string(),
            keywords: vec!["cancel".to_string(), "cancellation".to_string()],
        },
        RuleEntry {
            id: "rule-refunds".to_string(),
            section: "Refunds".to_string(),
            content: "Paid events are refundable if cancelled in time.\n\
                      Refunds are processed within 5-7 business days."
                .to_string(),
            keywords: vec!["refund".to_string(), "payment".to_string()],
        },
    ]
}

#[must_use]
pub fn sample_faqs() -> Vec<FaqEntry> {
    vec![FaqEntry {
        id: "faq-certificates".to_string(),
        topic: "Certificates".to_string(),
        question: "When do I receive my certificate?".to_string(),
        answer: "Certificates are issued within 48 hours of the event ending.".to_string(),
        keywords: vec!["certificate".to_string(), "certificates".to_string()],
    }]
}

/// `count` events alternating free/paid and workshop/seminar
#[must_use]
pub fn sample_events(count: usize) -> Vec<EventEntry> {
    (0..count)
        .map(|i| EventEntry {
            id: format!("evt-{i}"),
            name: format!("Sample Event {i}"),
            event_type: Some(if i % 2 == 0 { "Workshop" } else { "Seminar" }.to_string()),
            date: NaiveDate::from_ymd_opt(2026, 3, 1)
                .map(|d| d + chrono::Days::new(u64::try_from(i).unwrap())),
            fee: Some(if i % 2 == 0 { "Free".to_string() } else { format!("${}", 10 + i) }),
            available_seats: Some(30),
            registration_status: Some("Open".to_string()),
            prizes: None,
            includes: None,
            keywords: vec![],
        })
        .collect()
}

#[must_use]
pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Dana".to_string(),
        registered_events: vec!["Sample Event 0".to_string(), "Sample Event 1".to_string()],
        attended_events: vec!["Sample Event 0".to_string()],
        certificates: vec![
            Certificate {
                title: "Sample Event 0".to_string(),
                issued_on: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            },
            Certificate {
                title: "Safety Training".to_string(),
                issued_on: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            },
        ],
        attendance_rate: 0.5,
    }
}
