//! Browser bindings
//!
//! Each module attaches one behavior to the live page and delegates its
//! decisions to `crate::core`. Initializers are independent: a page missing
//! the markup for one behavior still gets all the others.

pub mod contact_form;
pub mod counters;
pub mod dom;
pub mod faq;
pub mod links;
pub mod navbar;
pub mod notifications;
pub mod observer;
pub mod reveal;
pub mod styles;
pub mod tutorial;

pub use notifications::show_notification;
pub use reveal::{DomReveal, init_reveal};

use crate::core::error::isolated;
use crate::core::{Result, SiteConfig};

/// Run one initializer, logging instead of propagating its failure
pub(crate) fn run(name: &str, init: impl FnOnce() -> Result<()>) {
    isolated(name, init);
}

/// Attach every main-site behavior to the current document.
///
/// Returns the scroll reveal handle when it could be set up.
pub fn init_site(config: &SiteConfig) -> Option<DomReveal> {
    run("navbar", || navbar::init_navbar(&config.navbar));
    run("mobile menu", navbar::init_mobile_menu);
    run("faq", faq::init_faq);
    run("counters", || counters::init_counters(&config.counter));
    run("placeholder and anchor links", || {
        links::init_anchor_links(&config.navbar, &config.notification)
    });
    run("contact form", || {
        contact_form::init_contact_form(&config.notification)
    });
    run("nav highlight", || links::init_nav_highlight(&config.nav_highlight));

    let reveal = dom::document().and_then(|document| {
        let root = document
            .body()
            .ok_or_else(|| crate::core::SiteError::MissingElement("body".to_string()))?;
        init_reveal(&root, &config.reveal)
    });
    let reveal = match reveal {
        Ok(reveal) => Some(reveal),
        Err(err) => {
            tracing::warn!("scroll reveal not initialized: {}", err);
            None
        }
    };

    if let Ok(document) = dom::document() {
        run("spinner styles", || {
            dom::inject_style(&document, styles::SPINNER_STYLE_ID, styles::SPINNER_CSS)
        });
    }

    reveal
}
