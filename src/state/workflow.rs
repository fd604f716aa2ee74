//! Dashboard Workflow State
//!
//! Plain view-state types behind the student dashboard's event cards and
//! registration flow. Kept free of reactive wrappers so the single-slot
//! invariants can be tested directly.

/// Flip/expand and registration-form state for the event card grid.
///
/// Invariants: at most one card is expanded at a time, and at most one
/// registration form is open at a time. Expanding a card (or collapsing the
/// current one) always closes the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCardState {
    expanded: Option<String>,
    form: Option<String>,
}

impl EventCardState {
    /// Flip the card for `event_id`: expand it (collapsing any other card)
    /// or collapse it if it is the one currently expanded.
    pub fn toggle(&mut self, event_id: &str) {
        if self.expanded.as_deref() == Some(event_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(event_id.to_string());
        }
        self.form = None;
    }

    pub fn is_expanded(&self, event_id: &str) -> bool {
        self.expanded.as_deref() == Some(event_id)
    }

    /// Open the registration form for `event_id`, replacing any open form.
    pub fn open_form(&mut self, event_id: &str) {
        self.form = Some(event_id.to_string());
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Event the registration form is currently open for, if any.
    pub fn form_target(&self) -> Option<&str> {
        self.form.as_deref()
    }
}

/// Registration form fields, reset to empty strings after a successful
/// registration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationDraft {
    pub name: String,
    pub college: String,
    pub degree: String,
    pub study_year: String,
    pub end_year: String,
}

impl RegistrationDraft {
    /// A registration may only be submitted once every field is filled in.
    pub fn is_complete(&self) -> bool {
        !(self.name.trim().is_empty()
            || self.college.trim().is_empty()
            || self.degree.trim().is_empty()
            || self.study_year.trim().is_empty()
            || self.end_year.trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Minimum introduction length for a mentorship request.
pub const MIN_INTRODUCTION_LEN: usize = 10;

/// Validate a mentorship-request introduction before any network call.
pub fn validate_introduction(introduction: &str) -> Result<(), &'static str> {
    if introduction.trim().chars().count() < MIN_INTRODUCTION_LEN {
        Err("Please write an introduction with at least 10 characters")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanding_a_card_collapses_the_previous_one() {
        let mut cards = EventCardState::default();
        cards.toggle("a");
        assert!(cards.is_expanded("a"));

        cards.toggle("b");
        assert!(cards.is_expanded("b"));
        assert!(!cards.is_expanded("a"));
    }

    #[test]
    fn toggling_the_expanded_card_collapses_it() {
        let mut cards = EventCardState::default();
        cards.toggle("a");
        cards.toggle("a");
        assert!(!cards.is_expanded("a"));
    }

    #[test]
    fn flipping_closes_any_open_form() {
        let mut cards = EventCardState::default();
        cards.open_form("a");
        cards.toggle("b");
        assert_eq!(cards.form_target(), None);
    }

    #[test]
    fn opening_a_form_replaces_the_previous_one() {
        let mut cards = EventCardState::default();
        cards.open_form("a");
        cards.open_form("b");
        assert_eq!(cards.form_target(), Some("b"));
    }

    #[test]
    fn draft_is_complete_only_with_every_field_filled() {
        let mut draft = RegistrationDraft {
            name: "Asha".to_string(),
            college: "IIT".to_string(),
            degree: "BTech".to_string(),
            study_year: "3".to_string(),
            end_year: String::new(),
        };
        assert!(!draft.is_complete());

        draft.end_year = "2026".to_string();
        assert!(draft.is_complete());

        draft.college = "   ".to_string();
        assert!(!draft.is_complete());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut draft = RegistrationDraft {
            name: "Asha".to_string(),
            college: "IIT".to_string(),
            degree: "BTech".to_string(),
            study_year: "3".to_string(),
            end_year: "2026".to_string(),
        };
        draft.reset();
        assert_eq!(draft, RegistrationDraft::default());
    }

    #[test]
    fn short_introduction_is_rejected() {
        assert!(validate_introduction("hi there").is_err());
        assert!(validate_introduction("         a").is_err());
    }

    #[test]
    fn long_enough_introduction_passes() {
        assert!(validate_introduction("I build robots and love AI").is_ok());
    }
}
