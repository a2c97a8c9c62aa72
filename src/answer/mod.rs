//! Answer synthesis: from retrieval context to final response text
//!
//! - **extract**: line-level content mining for extractive answers
//! - **events**: enumerated event-list rendering
//! - **personal**: profile-templated personal answers

pub mod events;
pub mod extract;
pub mod personal;

use std::fmt::Write;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::context::RetrievalContext;
use crate::score::normalize;

/// The final response value surfaced to the caller
///
/// `text` may contain markdown-ish markers and emoji; the UI renders them
/// verbatim. `is_from_knowledge_base` is true only when the text was
/// derived from at least one retrieved document.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<String>,
    pub is_from_knowledge_base: bool,
}

impl Answer {
    fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
            is_from_knowledge_base: false,
        }
    }
}

/// Fixed menu shown when nothing matched and the query is not personal
const TOPIC_MENU: &str = "\
I can help with questions about:

• Event registration and cancellation
• Fees and refunds
• Certificates
• Attendance tracking
• Upcoming events and schedules

Try asking something like \"How do I register for an event?\"";

/// Last-resort response when no other state applies
const REPHRASE_PROMPT: &str = "Hmm, I didn't quite catch that. Could you rephrase \
your question? You can also ask for the events list to browse everything coming up.";

/// Fixed closing appended to extractive answers
const CLOSING_PROMPT: &str = "Is there anything else you'd like to know?";

/// Topic-keyed suggestion lines, first section-substring match wins
const TOPIC_TIPS: &[(&str, &str)] = &[
    (
        "certificate",
        "💡 Tip: certificates are usually issued within 48 hours of an event ending.",
    ),
    (
        "registration",
        "💡 Tip: seats are confirmed the moment your registration completes.",
    ),
    (
        "attendance",
        "💡 Tip: check in with the organizer at the venue so your attendance gets recorded.",
    ),
    (
        "cancellation",
        "💡 Tip: cancelling at least 24 hours ahead keeps your account in good standing.",
    ),
    (
        "refund",
        "💡 Tip: approved refunds land back on the original payment method within 5–7 business days.",
    ),
];

/// Produce the final answer for a query
///
/// States are evaluated in strict priority order; the first match wins:
/// greeting, topic-menu fallback, personal, knowledge-based, rephrase.
#[must_use]
pub fn synthesize(ctx: &RetrievalContext<'_>, query: &str, config: &EngineConfig) -> Answer {
    // 1. Greeting passthrough.
    if let Some(greeting) = &ctx.greeting {
        return Answer::fallback(greeting.clone());
    }

    // 2. Nothing retrieved and no personal context to lean on. A personal
    //    query without a profile lands here too (MissingProfile).
    if !ctx.has_relevant_docs && ctx.personal_context.is_none() {
        return Answer::fallback(TOPIC_MENU);
    }

    // 3. Personal answer from the profile; outranks document hits.
    if let Some(personal_context) = &ctx.personal_context {
        return Answer::fallback(personal_context.clone());
    }

    // 4. Knowledge-based generation.
    if ctx.has_relevant_docs {
        return knowledge_answer(ctx, query, config);
    }

    // 5. Shouldn't be reachable given the states above, but never leave
    //    the caller empty-handed.
    Answer::fallback(REPHRASE_PROMPT)
}

fn knowledge_answer(ctx: &RetrievalContext<'_>, query: &str, config: &EngineConfig) -> Answer {
    let sources: Vec<String> = ctx.top_sources.iter().map(|s| s.section.clone()).collect();

    let event_count = ctx
        .relevant_docs
        .iter()
        .filter(|sd| sd.document.is_event())
        .count();
    let all_events = event_count == ctx.relevant_docs.len();

    // A list query over a pure event hit set gets the enumerated list;
    // a single event still reads better as an extractive answer.
    let text = if ctx.is_list && all_events && event_count > 1 {
        events::render(&ctx.relevant_docs, query)
    } else {
        extractive_answer(ctx, query, config)
    };

    Answer {
        text,
        sources,
        is_from_knowledge_base: true,
    }
}

/// Extractive answer over the highest-scored document
fn extractive_answer(ctx: &RetrievalContext<'_>, query: &str, config: &EngineConfig) -> String {
    let top = &ctx.relevant_docs[0];
    let extracted = extract::extract(
        &top.document.content,
        &normalize(query),
        config.scorer.min_token_len,
    );

    let mut text = if is_question(query) {
        format!(
            "Great question! Here's what I found about **{}**:",
            top.document.section
        )
    } else {
        format!(
            "Here's what I can tell you about **{}**:",
            top.document.section
        )
    };

    if extracted.has_steps() {
        text.push_str("\n\nFollow these steps:\n");
        text.push_str(&extracted.steps.join("\n"));
    }
    if extracted.has_bullets() {
        text.push_str("\n\nKey points:\n");
        let items: Vec<String> = extracted.bullets.iter().map(|b| format!("• {b}")).collect();
        text.push_str(&items.join("\n"));
    }
    if !extracted.sentences.is_empty() {
        text.push_str("\n\n");
        text.push_str(&extracted.sentences.join("\n"));
    }
    if extracted.is_empty() {
        text.push_str("\n\n");
        text.push_str(&extracted.raw);
    }

    let related = related_sections(ctx);
    if !related.is_empty() {
        let _ = write!(text, "\n\n📚 Related topics: {}", related.join(", "));
    }

    if let Some(tip) = topic_tip(&top.document.section) {
        let _ = write!(text, "\n\n{tip}");
    }

    let _ = write!(text, "\n\n{CLOSING_PROMPT}");
    text
}

/// Up to two other distinct retrieved sections
fn related_sections(ctx: &RetrievalContext<'_>) -> Vec<String> {
    let top_section = &ctx.relevant_docs[0].document.section;
    let mut related = Vec::new();
    for sd in &ctx.relevant_docs[1..] {
        let section = &sd.document.section;
        if section != top_section && !related.contains(section) {
            related.push(section.clone());
            if related.len() == 2 {
                break;
            }
        }
    }
    related
}

/// Suggestion line keyed by substring on the section label
fn topic_tip(section: &str) -> Option<&'static str> {
    let section_lower = section.to_lowercase();
    TOPIC_TIPS
        .iter()
        .find(|(key, _)| section_lower.contains(key))
        .map(|(_, tip)| *tip)
}

/// Whether the query reads as a question
fn is_question(query: &str) -> bool {
    const QUESTION_WORDS: &[&str] = &[
        "how", "what", "when", "where", "why", "who", "which", "can", "could", "do", "does",
        "is", "are", "will",
    ];
    let trimmed = query.trim();
    if trimmed.ends_with('?') {
        return true;
    }
    trimmed
        .split_whitespace()
        .next()
        .is_some_and(|first| QUESTION_WORDS.contains(&first.to_lowercase().as_str()))
}
