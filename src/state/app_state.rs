//! Application state definitions

use super::form::LeadForm;
use super::submission::SubmissionState;

/// Mutable state owned by the application
#[derive(Debug, Default)]
pub struct AppState {
    /// The signup form and its field focus
    pub form: LeadForm,
    /// Where the current submission attempt stands
    pub submission: SubmissionState,
    /// Scroll offset into the page content above the form
    pub page_scroll: u16,
    /// Hint for the required field that blocked the last dispatch
    pub field_hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.page_scroll, 0);
        assert!(state.field_hint.is_none());
        assert!(state.form.name.is_empty());
    }
}
