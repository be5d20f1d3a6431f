//! Toast notifications rendered straight into the page body

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::{dom, styles};
use crate::core::config::{self, NotificationConfig};
use crate::core::notification::{Notification, claim_close_handler, exit_animation};
use crate::core::{Result, SiteError};

/// Show a toast, replacing any toast already on screen
pub fn show_notification(notification: &Notification, config: &NotificationConfig) -> Result<()> {
    let document = dom::document()?;
    if let Some(existing) = document.query_selector(".notification")? {
        existing.remove();
    }
    dom::inject_style(&document, styles::NOTIFICATION_STYLE_ID, styles::NOTIFICATION_CSS)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(&notification.class_name());
    toast.set_attribute("role", "status")?;
    toast.set_inner_html(&notification.inner_html());

    let body = document
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))?;
    body.append_child(&toast)?;

    if claim_close_handler() {
        listen_for_close(&document)?;
    }

    let exit_ms = config.exit_ms;
    let auto_dismiss_ms = config.auto_dismiss_ms;
    spawn_local(async move {
        TimeoutFuture::new(auto_dismiss_ms).await;
        // Already closed or replaced by a newer toast
        if toast.parent_element().is_some() {
            dismiss(toast, exit_ms);
        }
    });

    tracing::debug!("notification shown: {}", notification.notification_type);
    Ok(())
}

/// One document-level listener closes whichever toast's close button was hit
fn listen_for_close(document: &Document) -> Result<()> {
    dom::listen(document, "click", |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if target.closest(".notification-close").ok().flatten().is_none() {
            return;
        }
        if let Some(toast) = target.closest(".notification").ok().flatten() {
            dismiss(toast, config::active().notification.exit_ms);
        }
    })
}

/// Slide the toast out, then remove it
fn dismiss(toast: Element, exit_ms: u32) {
    let _ = dom::set_style(&toast, "animation", &exit_animation(exit_ms));
    spawn_local(async move {
        TimeoutFuture::new(exit_ms).await;
        toast.remove();
    });
}
