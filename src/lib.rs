//! MobInspect website scripts
//!
//! Client-side behavior for the MobInspect marketing pages, compiled to
//! WebAssembly: scroll reveal with per-section stagger, navbar and mobile
//! menu, FAQ accordion, count-up stats, contact form feedback, toasts,
//! placeholder and anchor links, and the tutorial page effects.
//!
//! The `core` module holds all decisions and builds natively; the `ui`
//! module (feature `browser`) binds them to the DOM.

pub mod core;
#[cfg(feature = "browser")]
pub mod logging;
#[cfg(feature = "browser")]
pub mod ui;

#[cfg(feature = "browser")]
pub use browser::*;

#[cfg(feature = "browser")]
mod browser {
    use wasm_bindgen::prelude::*;

    use crate::core::SiteConfig;
    use crate::core::config;
    use crate::core::notification::{Notification, NotificationType};
    use crate::{logging, ui};

    /// Options object passed from the page, e.g.
    /// `init_site({ logLevel: "debug", reveal: { staggerCapMs: 200 } })`
    fn read_options(options: JsValue) -> SiteConfig {
        if options.is_undefined() || options.is_null() {
            return SiteConfig::default();
        }
        match serde_wasm_bindgen::from_value::<SiteConfig>(options) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring invalid options: {}", err);
                SiteConfig::default()
            }
        }
    }

    fn init_logging(options: &JsValue) {
        let level = js_sys::Reflect::get(options, &JsValue::from_str("logLevel"))
            .ok()
            .and_then(|v| v.as_string());
        logging::init(logging::parse_level(level.as_deref()));
    }

    /// Handle returned to the page.
    ///
    /// Every behavior keeps running for the life of the page even if the
    /// handle is dropped or garbage collected; `dispose()` stops the scroll
    /// reveal.
    #[wasm_bindgen]
    pub struct SiteHandle {
        reveal: Option<ui::DomReveal>,
    }

    #[wasm_bindgen]
    impl SiteHandle {
        /// Number of elements revealed so far
        #[wasm_bindgen(js_name = revealedCount)]
        pub fn revealed_count(&self) -> usize {
            self.reveal.as_ref().map(|r| r.revealed_count()).unwrap_or(0)
        }

        pub fn dispose(self) {
            if let Some(reveal) = self.reveal {
                reveal.dispose();
            }
        }
    }

    /// Attach the main site behaviors. Call once the DOM is ready.
    #[wasm_bindgen(js_name = initSite)]
    pub fn init_site(options: JsValue) -> SiteHandle {
        init_logging(&options);
        let config = read_options(options);
        config::install(config.clone());
        SiteHandle {
            reveal: ui::init_site(&config),
        }
    }

    /// Attach the tutorial page effects. Call once the DOM is ready.
    #[wasm_bindgen(js_name = initTutorial)]
    pub fn init_tutorial(options: JsValue) {
        init_logging(&options);
        let config = read_options(options);
        ui::run("tutorial", || ui::tutorial::init_tutorial(&config.effects));
    }

    /// Show a toast from page script; `kind` is success, error, warning or info.
    /// Timing follows the options last passed to `initSite`.
    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(message: &str, kind: Option<String>) {
        let notification_type = match kind.as_deref() {
            Some("success") => NotificationType::Success,
            Some("error") => NotificationType::Error,
            Some("warning") => NotificationType::Warning,
            _ => NotificationType::Info,
        };
        let notification = Notification::new(notification_type, message);
        ui::run("notification", || {
            ui::show_notification(&notification, &config::active().notification)
        });
    }
}
