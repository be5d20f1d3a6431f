//! Toast notifications
//!
//! A single toast is shown at a time in the top right corner. It slides out
//! after a fixed delay or when its close button is pressed.

use std::cell::Cell;

use derive_more::Display;

pub const MESSAGE_SENT: &str = "Message sent successfully! We'll get back to you soon.";
pub const COMING_SOON: &str = "Coming Soon! This feature is under development.";
pub const SOCIAL_COMING_SOON: &str = "Social media links coming soon!";

/// Notification kind; the display form is the CSS modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum NotificationType {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
    #[default]
    #[display("info")]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, message)
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.notification_type)
    }

    /// Inner markup of the toast, with the message escaped
    pub fn inner_html(&self) -> String {
        format!(
            r#"<span>{}</span><button class="notification-close" aria-label="Close">&times;</button>"#,
            escape_html(&self.message)
        )
    }
}

thread_local! {
    static CLOSE_HANDLER_CLAIMED: Cell<bool> = const { Cell::new(false) };
}

/// `true` for the first caller on this thread only, which then owns the
/// single close-button handler shared by every toast
pub fn claim_close_handler() -> bool {
    CLOSE_HANDLER_CLAIMED.with(|claimed| !claimed.replace(true))
}

/// Animation applied when a toast leaves
pub fn exit_animation(exit_ms: u32) -> String {
    format!("slideOutTop {}ms ease forwards", exit_ms)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(
            Notification::warning(COMING_SOON).class_name(),
            "notification notification-warning"
        );
        assert_eq!(
            Notification::success(MESSAGE_SENT).class_name(),
            "notification notification-success"
        );
        assert_eq!(NotificationType::default(), NotificationType::Info);
    }

    #[test]
    fn test_markup_escapes_message() {
        let html = Notification::error("<b>bad</b> & \"worse\"").inner_html();
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt; &amp; &quot;worse&quot;"));
        assert!(html.contains(r#"class="notification-close""#));
    }

    #[test]
    fn test_apostrophe_escaped() {
        assert_eq!(escape_html("We'll"), "We&#39;ll");
    }

    #[test]
    fn test_exit_animation() {
        assert_eq!(exit_animation(300), "slideOutTop 300ms ease forwards");
    }

    #[test]
    fn test_close_handler_claimed_once() {
        assert!(claim_close_handler());
        for _ in 0..5 {
            assert!(!claim_close_handler());
        }
    }
}
