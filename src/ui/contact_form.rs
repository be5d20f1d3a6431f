//! Contact form decoration
//!
//! Submission itself is a native form post; this only adds field feedback,
//! a busy submit button, and the success toast after the redirect back.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::notifications::show_notification;
use super::{dom, run};
use crate::core::config::NotificationConfig;
use crate::core::form::{self, FieldFeedback};
use crate::core::notification::{MESSAGE_SENT, Notification};
use crate::core::Result;

pub fn init_contact_form(notifications: &NotificationConfig) -> Result<()> {
    run("contact form redirect", || announce_redirect(notifications));

    let document = dom::document()?;
    let Some(form) = document.query_selector(".contact-form")? else {
        return Ok(());
    };

    {
        let form_el = form.clone();
        dom::listen(&form, "submit", move |_| {
            if let Ok(Some(button)) = form_el.query_selector(r#"button[type="submit"]"#) {
                button.set_inner_html(form::SENDING_BUTTON_HTML);
                if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
                    button.set_disabled(true);
                }
            }
        })?;
    }

    let fields = dom::query_all(&form, form::REQUIRED_FIELDS)?;
    for field in &fields {
        let blur_field = field.clone();
        dom::listen(field, "blur", move |_| {
            apply_feedback(&blur_field, form::on_blur(&field_value(&blur_field)));
        })?;

        let input_field = field.clone();
        dom::listen(field, "input", move |_| {
            if let Some(feedback) = form::on_input(&field_value(&input_field)) {
                apply_feedback(&input_field, feedback);
            }
        })?;
    }

    tracing::debug!("contact form: {} required fields", fields.len());
    Ok(())
}

/// Show the success toast after the form endpoint redirects back, then
/// drop the query string so a reload does not repeat it
fn announce_redirect(notifications: &NotificationConfig) -> Result<()> {
    let window = dom::window()?;
    let location = window.location();
    if !form::submission_succeeded(&location.search()?) {
        return Ok(());
    }

    show_notification(&Notification::success(MESSAGE_SENT), notifications)?;

    let title = dom::document()?.title();
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, &title, Some(&location.pathname()?))?;
    Ok(())
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn apply_feedback(field: &Element, feedback: FieldFeedback) {
    let _ = dom::set_style(field, "border-color", &feedback.to_string());
}
