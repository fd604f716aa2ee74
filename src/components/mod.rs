//! UI Components
//!
//! Reusable Leptos components for the dashboards.

pub mod event_card;
pub mod feedback;
pub mod loading;
pub mod mentor_card;
pub mod nav;
pub mod team;
pub mod toast;

pub use event_card::EventCard;
pub use feedback::FeedbackList;
pub use loading::Loading;
pub use mentor_card::MentorCard;
pub use nav::Nav;
pub use team::{MatchingStudentsTable, TeamRequestsTable, TeammatesList};
pub use toast::Toast;

/// Render a server-provided date for display.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; anything else is
/// shown as received.
pub fn format_date(raw: &str) -> String {
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%b %d, %Y").to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_handles_rfc3339() {
        assert_eq!(format_date("2025-09-01T00:00:00Z"), "Sep 01, 2025");
    }

    #[test]
    fn format_date_handles_plain_dates() {
        assert_eq!(format_date("2025-09-01"), "Sep 01, 2025");
    }

    #[test]
    fn format_date_falls_back_to_raw_input() {
        assert_eq!(format_date("soon"), "soon");
    }
}
