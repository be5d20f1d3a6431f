//! Link interception and scroll-linked nav highlighting

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use super::dom;
use super::notifications::show_notification;
use crate::core::config::{NavHighlightConfig, NavbarConfig, NotificationConfig};
use crate::core::links::{
    LinkAction, SectionOffset, SectionTracker, classify_link, is_active_link, scroll_target_top,
};
use crate::core::notification::Notification;
use crate::core::Result;

/// Handle clicks on every `#`-link: placeholders announce "coming soon",
/// anchors scroll smoothly below the fixed navbar
pub fn init_anchor_links(navbar: &NavbarConfig, notifications: &NotificationConfig) -> Result<()> {
    let document = dom::document()?;
    let anchors = dom::query_document(&document, r##"a[href^="#"]"##)?;

    for anchor in &anchors {
        let href = anchor.get_attribute("href");
        let social = anchor.closest(".social-links").ok().flatten().is_some();
        let action = classify_link(href.as_deref(), social);

        match action {
            LinkAction::ComingSoon(message) => {
                let notifications = notifications.clone();
                dom::listen(anchor, "click", move |event| {
                    event.prevent_default();
                    let notification = Notification::warning(message);
                    if let Err(err) = show_notification(&notification, &notifications) {
                        tracing::debug!("coming soon: {}", err);
                    }
                })?;
            }
            LinkAction::ScrollTo(selector) => {
                let navbar_selector = navbar.selector.clone();
                dom::listen(anchor, "click", move |event| {
                    event.prevent_default();
                    if let Err(err) = scroll_to(&selector, &navbar_selector) {
                        tracing::debug!("smooth scroll to {}: {}", selector, err);
                    }
                })?;
            }
            LinkAction::Follow => {}
        }
    }

    tracing::debug!("anchor links: {} wired", anchors.len());
    Ok(())
}

fn scroll_to(selector: &str, navbar_selector: &str) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    // Hrefs that are not valid selectors simply have no target
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        return Ok(());
    };

    let navbar_height = document
        .query_selector(navbar_selector)?
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);

    let top = scroll_target_top(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(&window),
        navbar_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Mark the nav link of the section currently in view as active
pub fn init_nav_highlight(config: &NavHighlightConfig) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    let tracker = SectionTracker::new(config);

    if !tracker.enabled_for(&window.location().pathname()?) {
        return Ok(());
    }
    let sections: Vec<HtmlElement> = dom::query_document(&document, "section[id]")?
        .into_iter()
        .filter_map(|s| s.dyn_into::<HtmlElement>().ok())
        .collect();
    if sections.is_empty() {
        return Ok(());
    }
    let links = dom::query_document(&document, r##".nav-links a[href^="#"]"##)?;

    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_| {
        // Layout may have shifted since the last event
        let offsets: Vec<SectionOffset> = sections
            .iter()
            .map(|s| SectionOffset::new(s.id(), s.offset_top() as f64))
            .collect();
        let current = tracker.current(&offsets, dom::scroll_y(&scroll_window));

        for link in &links {
            let active = is_active_link(link.get_attribute("href").as_deref(), current);
            let _ = dom::set_class(link, "active", active);
        }
    })
}
