//! In-page link handling: placeholder links, smooth anchor scrolling and
//! highlighting the nav link of the section currently in view.

use super::config::NavHighlightConfig;
use super::notification::{COMING_SOON, SOCIAL_COMING_SOON};

/// What a click on a link should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Placeholder link: cancel navigation and show this message
    ComingSoon(&'static str),
    /// Anchor link: cancel navigation and scroll to the element matching this selector
    ScrollTo(String),
    /// Let the browser handle it
    Follow,
}

/// Classify a link by its `href` attribute and whether it sits in the
/// social links block
pub fn classify_link(href: Option<&str>, social: bool) -> LinkAction {
    match href {
        Some("#") if social => LinkAction::ComingSoon(SOCIAL_COMING_SOON),
        Some("#") => LinkAction::ComingSoon(COMING_SOON),
        Some(anchor) if anchor.starts_with('#') => LinkAction::ScrollTo(anchor.to_string()),
        _ => LinkAction::Follow,
    }
}

/// Document scroll position that puts the target just below the fixed navbar
pub fn scroll_target_top(rect_top: f64, page_y: f64, navbar_height: f64) -> f64 {
    rect_top + page_y - navbar_height
}

/// Section position as measured on the page
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub offset_top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// Tracks which section the reader is in
#[derive(Debug, Clone)]
pub struct SectionTracker {
    lead_px: f64,
    excluded_paths: Vec<String>,
}

impl SectionTracker {
    pub fn new(config: &NavHighlightConfig) -> Self {
        Self {
            lead_px: config.section_lead_px,
            excluded_paths: config.excluded_paths.clone(),
        }
    }

    /// Highlighting only runs on the long-form home page
    pub fn enabled_for(&self, path: &str) -> bool {
        !self
            .excluded_paths
            .iter()
            .any(|fragment| path.contains(fragment.as_str()))
    }

    /// Id of the last section whose top, less the lead, has been scrolled past
    pub fn current<'a>(&self, sections: &'a [SectionOffset], scroll_y: f64) -> Option<&'a str> {
        sections
            .iter()
            .filter(|s| scroll_y >= s.offset_top - self.lead_px)
            .last()
            .map(|s| s.id.as_str())
    }
}

/// Whether a nav link with `href` should carry the active class
pub fn is_active_link(href: Option<&str>, current: Option<&str>) -> bool {
    match (href.and_then(|h| h.strip_prefix('#')), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_placeholders() {
        assert_eq!(classify_link(Some("#"), false), LinkAction::ComingSoon(COMING_SOON));
        assert_eq!(
            classify_link(Some("#"), true),
            LinkAction::ComingSoon(SOCIAL_COMING_SOON)
        );
    }

    #[test]
    fn test_classify_anchors_and_pages() {
        assert_eq!(
            classify_link(Some("#features"), false),
            LinkAction::ScrollTo("#features".into())
        );
        assert_eq!(classify_link(Some("/about.html"), false), LinkAction::Follow);
        assert_eq!(classify_link(Some("https://x.com/a"), true), LinkAction::Follow);
        assert_eq!(classify_link(None, false), LinkAction::Follow);
    }

    #[test]
    fn test_scroll_target_accounts_for_navbar() {
        assert_eq!(scroll_target_top(300.0, 1200.0, 80.0), 1420.0);
        assert_eq!(scroll_target_top(-100.0, 500.0, 0.0), 400.0);
    }

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("features", 800.0),
            SectionOffset::new("download", 1600.0),
        ]
    }

    #[test]
    fn test_current_section() {
        let tracker = SectionTracker::new(&NavHighlightConfig::default());
        let sections = sections();
        assert_eq!(tracker.current(&sections, 0.0), Some("home"));
        assert_eq!(tracker.current(&sections, 599.0), Some("home"));
        assert_eq!(tracker.current(&sections, 600.0), Some("features"));
        assert_eq!(tracker.current(&sections, 5000.0), Some("download"));
    }

    #[test]
    fn test_no_section_reached() {
        let tracker = SectionTracker::new(&NavHighlightConfig::default());
        let sections = vec![SectionOffset::new("late", 1000.0)];
        assert_eq!(tracker.current(&sections, 0.0), None);
        assert_eq!(tracker.current(&[], 100.0), None);
    }

    #[test]
    fn test_enabled_for_home_only() {
        let tracker = SectionTracker::new(&NavHighlightConfig::default());
        assert!(tracker.enabled_for("/"));
        assert!(tracker.enabled_for("/index.html"));
        assert!(!tracker.enabled_for("/tutorial.html"));
        assert!(!tracker.enabled_for("/privacy"));
    }

    #[test]
    fn test_active_link() {
        assert!(is_active_link(Some("#features"), Some("features")));
        assert!(!is_active_link(Some("#home"), Some("features")));
        assert!(!is_active_link(Some("#"), None));
        assert!(!is_active_link(None, Some("features")));
    }
}
