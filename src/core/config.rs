//! Site configuration.
//!
//! Every setting has a compiled-in default matching the production pages.
//! Pages may pass a partial options object to the entry points to override
//! individual values; anything omitted keeps its default.

use std::cell::RefCell;

use serde::Deserialize;

use super::error::Result;

/// Class names marking elements that fade in on scroll
pub const DEFAULT_REVEAL_ROLES: [&str; 5] = [
    ".feature-card",
    ".step",
    ".stat-item",
    ".team-member",
    ".content-card",
];

/// Fraction of an element that must be visible before it is revealed
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.05;

/// Pixels trimmed from the bottom of the viewport trigger zone
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: u32 = 20;

/// Delay added per element within a group
pub const DEFAULT_STAGGER_STEP_MS: u32 = 30;

/// Upper bound for the per-element delay
pub const DEFAULT_STAGGER_CAP_MS: u32 = 150;

/// Opacity/transform transition length
pub const DEFAULT_REVEAL_DURATION_MS: u32 = 300;

/// Initial downward offset of hidden elements
pub const DEFAULT_REVEAL_OFFSET_PX: u32 = 20;

/// Class that moves a hidden element into its final state
pub const DEFAULT_REVEAL_CLASS: &str = "animate-in";

pub const DEFAULT_COUNTER_SELECTOR: &str = ".stat-number";
pub const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;

pub const DEFAULT_NAVBAR_SELECTOR: &str = ".navbar";
pub const DEFAULT_SCROLLED_CLASS: &str = "scrolled";
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const DEFAULT_NOTIFICATION_DISMISS_MS: u32 = 4000;
pub const DEFAULT_NOTIFICATION_EXIT_MS: u32 = 300;

pub const DEFAULT_SECTION_LEAD_PX: f64 = 200.0;

/// Path fragments of sub-pages where scroll highlighting is disabled
pub const DEFAULT_HIGHLIGHT_EXCLUDED_PATHS: [&str; 5] =
    ["tutorial", "help", "about", "contact", "privacy"];

pub const DEFAULT_PARTICLE_COUNT: usize = 50;
pub const DEFAULT_DATA_CHAR_COUNT: usize = 30;
pub const DEFAULT_STEP_THRESHOLD: f64 = 0.2;
pub const DEFAULT_STEP_BOTTOM_MARGIN_PX: u32 = 50;

/// Top-level configuration for all page behaviors
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub navbar: NavbarConfig,
    pub notification: NotificationConfig,
    pub nav_highlight: NavHighlightConfig,
    pub effects: EffectsConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON options document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

thread_local! {
    static ACTIVE: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
}

/// Make `config` the configuration seen by later [`active`] calls on this
/// thread, e.g. by toasts raised from page script after `initSite`
pub fn install(config: SiteConfig) {
    ACTIVE.with(|active| *active.borrow_mut() = config);
}

/// The configuration last passed to [`install`], or the defaults
pub fn active() -> SiteConfig {
    ACTIVE.with(|active| active.borrow().clone())
}

/// Settings for the scroll reveal orchestrator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub roles: Vec<String>,
    pub threshold: f64,
    pub bottom_margin_px: u32,
    pub stagger_step_ms: u32,
    pub stagger_cap_ms: u32,
    pub duration_ms: u32,
    pub offset_px: u32,
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            roles: DEFAULT_REVEAL_ROLES.iter().map(|r| r.to_string()).collect(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
            bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            stagger_cap_ms: DEFAULT_STAGGER_CAP_MS,
            duration_ms: DEFAULT_REVEAL_DURATION_MS,
            offset_px: DEFAULT_REVEAL_OFFSET_PX,
            visible_class: DEFAULT_REVEAL_CLASS.to_string(),
        }
    }
}

impl RevealConfig {
    /// Combined selector matching every reveal role
    pub fn selector(&self) -> String {
        self.roles.join(", ")
    }

    /// Root margin in CSS shorthand, shrinking only the bottom edge
    pub fn root_margin(&self) -> String {
        bottom_margin(self.bottom_margin_px)
    }
}

/// Settings for the animated stat counters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    pub selector: String,
    pub threshold: f64,
    pub duration_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_COUNTER_SELECTOR.to_string(),
            threshold: DEFAULT_COUNTER_THRESHOLD,
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavbarConfig {
    pub selector: String,
    pub scrolled_class: String,
    pub threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_NAVBAR_SELECTOR.to_string(),
            scrolled_class: DEFAULT_SCROLLED_CLASS.to_string(),
            threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    pub auto_dismiss_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: DEFAULT_NOTIFICATION_DISMISS_MS,
            exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavHighlightConfig {
    /// How far above a section's top the scroll position counts as inside it
    pub section_lead_px: f64,
    pub excluded_paths: Vec<String>,
}

impl Default for NavHighlightConfig {
    fn default() -> Self {
        Self {
            section_lead_px: DEFAULT_SECTION_LEAD_PX,
            excluded_paths: DEFAULT_HIGHLIGHT_EXCLUDED_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Settings for the tutorial page decorations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsConfig {
    pub particle_count: usize,
    pub data_char_count: usize,
    pub step_threshold: f64,
    pub step_bottom_margin_px: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            data_char_count: DEFAULT_DATA_CHAR_COUNT,
            step_threshold: DEFAULT_STEP_THRESHOLD,
            step_bottom_margin_px: DEFAULT_STEP_BOTTOM_MARGIN_PX,
        }
    }
}

impl EffectsConfig {
    pub fn step_root_margin(&self) -> String {
        bottom_margin(self.step_bottom_margin_px)
    }
}

fn bottom_margin(px: u32) -> String {
    if px == 0 {
        "0px".to_string()
    } else {
        format!("0px 0px -{}px 0px", px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.reveal.roles.len(), 5);
        assert_eq!(config.reveal.threshold, 0.05);
        assert_eq!(config.reveal.root_margin(), "0px 0px -20px 0px");
        assert_eq!(config.counter.duration_ms, 2000);
        assert_eq!(config.navbar.threshold_px, 50.0);
        assert_eq!(config.effects.step_root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn test_selector_joins_roles() {
        let config = RevealConfig::default();
        assert_eq!(
            config.selector(),
            ".feature-card, .step, .stat-item, .team-member, .content-card"
        );
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"reveal": {"staggerCapMs": 300}, "counter": {"durationMs": 500}}"#)
                .unwrap();
        assert_eq!(config.reveal.stagger_cap_ms, 300);
        assert_eq!(config.reveal.stagger_step_ms, 30);
        assert_eq!(config.counter.duration_ms, 500);
        assert_eq!(config.counter.selector, ".stat-number");
        assert_eq!(config.navbar, NavbarConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(SiteConfig::from_json(r#"{"reveal": {"threshold": "high"}}"#).is_err());
    }

    #[test]
    fn test_zero_margin() {
        let config = RevealConfig {
            bottom_margin_px: 0,
            ..Default::default()
        };
        assert_eq!(config.root_margin(), "0px");
    }

    #[test]
    fn test_installed_config_is_active() {
        assert_eq!(active(), SiteConfig::default());

        let config = SiteConfig::from_json(
            r#"{"notification": {"autoDismissMs": 1000, "exitMs": 150}}"#,
        )
        .unwrap();
        install(config.clone());
        assert_eq!(active().notification.auto_dismiss_ms, 1000);
        assert_eq!(active().notification.exit_ms, 150);
        assert_eq!(active(), config);

        install(SiteConfig::default());
        assert_eq!(active().notification, NotificationConfig::default());
    }
}
