//! Contact form feedback
//!
//! The form posts natively to an external endpoint which redirects back with
//! `?success=true`. Only the client-side decoration lives here: border colors
//! on required fields, the busy submit button, and detection of the redirect.

use derive_more::Display;

/// Border color shown on a required field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FieldFeedback {
    #[display("var(--danger)")]
    Danger,
    #[display("var(--success)")]
    Success,
}

/// Selector for fields that receive feedback
pub const REQUIRED_FIELDS: &str = "input[required], textarea[required], select[required]";

/// Submit button content while the native submission is in flight
pub const SENDING_BUTTON_HTML: &str = r#"<span style="display: inline-flex; align-items: center; gap: 0.5rem;">Sending... <span class="spinner"></span></span>"#;

/// Field lost focus
pub fn on_blur(value: &str) -> FieldFeedback {
    if value.trim().is_empty() {
        FieldFeedback::Danger
    } else {
        FieldFeedback::Success
    }
}

/// Field edited; an empty value leaves the current border alone
pub fn on_input(value: &str) -> Option<FieldFeedback> {
    (!value.trim().is_empty()).then_some(FieldFeedback::Success)
}

/// Whether the query string marks a completed submission
pub fn submission_succeeded(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == "success")
        .is_some_and(|(_, value)| value == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_feedback() {
        assert_eq!(on_blur(""), FieldFeedback::Danger);
        assert_eq!(on_blur("   \n"), FieldFeedback::Danger);
        assert_eq!(on_blur("jane@example.com"), FieldFeedback::Success);
    }

    #[test]
    fn test_input_feedback() {
        assert_eq!(on_input("a"), Some(FieldFeedback::Success));
        assert_eq!(on_input("  "), None);
    }

    #[test]
    fn test_feedback_css() {
        assert_eq!(FieldFeedback::Danger.to_string(), "var(--danger)");
        assert_eq!(FieldFeedback::Success.to_string(), "var(--success)");
    }

    #[test]
    fn test_success_param() {
        assert!(submission_succeeded("?success=true"));
        assert!(submission_succeeded("ref=mail&success=true"));
        assert!(!submission_succeeded("?success=false"));
        assert!(!submission_succeeded("?success"));
        assert!(!submission_succeeded(""));
        assert!(!submission_succeeded("?unsuccess=true"));
    }

    #[test]
    fn test_first_success_param_wins() {
        assert!(submission_succeeded("?success=true&success=false"));
        assert!(!submission_succeeded("?success=no&success=true"));
    }
}
