//! Event-list rendering for enumerate-all answers
//!
//! Takes the full set of retrieved event documents, applies at most one
//! query-derived category filter, and renders a numbered list with a
//! summary footer. Filtering something down to nothing is reported, never
//! silently swallowed.

use std::fmt::Write;

use crate::corpus::EventRecord;
use crate::retrieve::ScoredDocument;

/// Mutually exclusive category filters, in detection precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryFilter {
    Free,
    Paid,
    Workshop,
    Seminar,
    Hackathon,
}

impl CategoryFilter {
    /// First filter whose trigger appears in the query wins
    fn detect(query_lower: &str) -> Option<Self> {
        const TRIGGERS: &[(&str, CategoryFilter)] = &[
            ("free", CategoryFilter::Free),
            ("paid", CategoryFilter::Paid),
            ("workshop", CategoryFilter::Workshop),
            ("seminar", CategoryFilter::Seminar),
            ("hackathon", CategoryFilter::Hackathon),
        ];
        TRIGGERS
            .iter()
            .find(|(trigger, _)| query_lower.contains(trigger))
            .map(|(_, filter)| *filter)
    }

    fn matches(self, record: &EventRecord) -> bool {
        match self {
            Self::Free => record.is_free(),
            Self::Paid => record.is_paid(),
            Self::Workshop => record.type_matches("workshop"),
            Self::Seminar => record.type_matches("seminar"),
            Self::Hackathon => record.type_matches("hackathon"),
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
            Self::Workshop => "workshop",
            Self::Seminar => "seminar",
            Self::Hackathon => "hackathon",
        }
    }
}

/// Render the enumerated event list for a query
///
/// `events` is expected to contain only event documents; anything else in
/// the slice is skipped.
#[must_use]
pub fn render(events: &[ScoredDocument<'_>], query: &str) -> String {
    let query_lower = query.to_lowercase();
    let records: Vec<&EventRecord> = events
        .iter()
        .filter_map(|sd| sd.document.event())
        .collect();

    let filter = CategoryFilter::detect(&query_lower);
    let filtered: Vec<&EventRecord> = filter.map_or_else(
        || records.clone(),
        |f| records.iter().copied().filter(|r| f.matches(r)).collect(),
    );

    // Filtered everything away: report the total instead of going quiet.
    if filtered.is_empty() {
        let label = filter.map_or("matching", CategoryFilter::label);
        return format!(
            "I couldn't find any {label} events right now, but we do have {total} \
             event{s} in total. Try asking for the full events list or a different \
             category! 🔍",
            total = records.len(),
            s = plural(records.len()),
        );
    }

    let mut text = match filter {
        Some(f) => format!(
            "🎯 Here are the **{}** events I found — {} in total:\n",
            f.label(),
            filtered.len()
        ),
        None => format!(
            "📅 Here's everything on the calendar — {} event{}:\n",
            filtered.len(),
            plural(filtered.len())
        ),
    };

    for (i, record) in filtered.iter().enumerate() {
        let _ = write!(text, "\n{}. **{}**", i + 1, record.name);
        if let Some(event_type) = &record.event_type {
            let _ = write!(text, "\n   Type: {event_type}");
        }
        if let Some(date) = record.date {
            let _ = write!(text, "\n   Date: {date}");
        }
        if let Some(fee) = &record.fee {
            let _ = write!(text, "\n   Fee: {fee}");
        }
        if let Some(seats) = record.available_seats {
            let _ = write!(text, "\n   Available Seats: {seats}");
        }
        if let Some(status) = &record.registration_status {
            let _ = write!(text, "\n   Registration Status: {status}");
        }
        text.push('\n');
    }

    if let Some(footer) = footer(&filtered) {
        let _ = write!(text, "\n{footer}");
    }

    text.push_str("\nWant details on any of these? Just ask about it by name!");
    text
}

/// Summary line: distinct event types, plus a free/paid split when both
/// sides are represented
fn footer(records: &[&EventRecord]) -> Option<String> {
    let mut types: Vec<&str> = Vec::new();
    for record in records {
        if let Some(event_type) = &record.event_type
            && !types.contains(&event_type.as_str())
        {
            types.push(event_type);
        }
    }

    let free = records.iter().filter(|r| r.is_free()).count();
    let paid = records.iter().filter(|r| r.is_paid()).count();

    let mut parts = Vec::new();
    if !types.is_empty() {
        parts.push(format!("Event types: {}", types.join(", ")));
    }
    if free > 0 && paid > 0 {
        parts.push(format!("{free} free / {paid} paid"));
    }

    if parts.is_empty() {
        return None;
    }
    Some(format!("📊 {}.\n", parts.join(" · ")))
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
