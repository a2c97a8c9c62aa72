//! Personal answers rendered from the caller-supplied profile
//!
//! These templates never touch the corpus — everything comes from the
//! [`UserProfile`]. The branch is picked by substring on the query:
//! certificates, then registrations, then attendance, then a generic
//! activity snapshot.

use std::fmt::Write;

use crate::profile::UserProfile;

/// Render the personalized context block for a query
#[must_use]
pub fn profile_context(profile: &UserProfile, query: &str) -> String {
    let query_lower = query.to_lowercase();

    if query_lower.contains("certificate") {
        certificates(profile)
    } else if query_lower.contains("registered") || query_lower.contains("registration") {
        registrations(profile)
    } else if query_lower.contains("attended") || query_lower.contains("attendance") {
        attendance(profile)
    } else {
        snapshot(profile)
    }
}

fn certificates(profile: &UserProfile) -> String {
    if profile.certificates.is_empty() {
        return format!(
            "Hi {}! You haven't earned any certificates yet — attend an event to \
             completion and your first one will show up here. 🎓",
            profile.name
        );
    }

    let mut text = format!(
        "Hi {}! You've earned **{}** certificate{} so far:\n",
        profile.name,
        profile.certificates.len(),
        plural(profile.certificates.len()),
    );
    for (i, cert) in profile.certificates.iter().enumerate() {
        let _ = write!(text, "\n{}. {} — issued {}", i + 1, cert.title, cert.issued_on);
    }
    text.push_str("\n\nKeep attending events to earn more!");
    text
}

fn registrations(profile: &UserProfile) -> String {
    if profile.registered_events.is_empty() {
        return format!(
            "Hi {}! You're not registered for any events at the moment. Ask me for \
             the events list to find your next one! 📅",
            profile.name
        );
    }

    let mut text = format!(
        "Hi {}! You're currently registered for **{}** event{}:\n",
        profile.name,
        profile.registered_events.len(),
        plural(profile.registered_events.len()),
    );
    for event in &profile.registered_events {
        let _ = write!(text, "\n• {event}");
    }
    text.push_str("\n\nSee you there!");
    text
}

fn attendance(profile: &UserProfile) -> String {
    let mut text = if profile.attended_events.is_empty() {
        format!("Hi {}! You haven't attended any events yet.", profile.name)
    } else {
        let mut t = format!(
            "Hi {}! You've attended **{}** event{}:\n",
            profile.name,
            profile.attended_events.len(),
            plural(profile.attended_events.len()),
        );
        for event in &profile.attended_events {
            let _ = write!(t, "\n• {event}");
        }
        t
    };
    let _ = write!(
        text,
        "\n\nYour attendance rate is **{}**.",
        profile.attendance_percent()
    );
    text
}

fn snapshot(profile: &UserProfile) -> String {
    format!(
        "Hi {}! Here's a quick snapshot of your activity:\n\n\
         • Registered events: {}\n\
         • Attended events: {}\n\
         • Certificates: {}\n\
         • Attendance rate: {}\n\n\
         Ask about any of these for the details!",
        profile.name,
        profile.registered_events.len(),
        profile.attended_events.len(),
        profile.certificates.len(),
        profile.attendance_percent(),
    )
}

const fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Certificate;
    use chrono::NaiveDate;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Dana".to_string(),
            registered_events: vec!["Rust Days".to_string(), "Cloud Seminar".to_string()],
            attended_events: vec!["Intro Workshop".to_string()],
            certificates: vec![
                Certificate {
                    title: "Intro Workshop".to_string(),
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

    #[test]
    fn certificate_branch_counts_and_names_each_certificate() {
        let text = profile_context(&profile(), "how many certificates do I have");
        assert!(text.contains("**2** certificates"));
        assert!(text.contains("Intro Workshop — issued 2026-01-10"));
        assert!(text.contains("Safety Training — issued 2026-02-02"));
    }

    #[test]
    fn registration_branch_lists_event_names() {
        let text = profile_context(&profile(), "which events am I registered for");
        assert!(text.contains("**2** events"));
        assert!(text.contains("• Rust Days"));
        assert!(text.contains("• Cloud Seminar"));
    }

    #[test]
    fn attendance_branch_includes_rounded_rate() {
        let text = profile_context(&profile(), "what is my attendance like");
        assert!(text.contains("**1** event"));
        assert!(text.contains("• Intro Workshop"));
        assert!(text.contains("**50%**"));
    }

    #[test]
    fn generic_branch_renders_snapshot() {
        let text = profile_context(&profile(), "tell me about my account");
        assert!(text.contains("Registered events: 2"));
        assert!(text.contains("Attended events: 1"));
        assert!(text.contains("Certificates: 2"));
        assert!(text.contains("Attendance rate: 50%"));
    }

    #[test]
    fn empty_profile_branches_stay_friendly() {
        let empty = UserProfile {
            name: "Sam".to_string(),
            ..UserProfile::default()
        };
        assert!(profile_context(&empty, "my certificates").contains("haven't earned any"));
        assert!(profile_context(&empty, "my registrations").contains("not registered"));
    }
}
