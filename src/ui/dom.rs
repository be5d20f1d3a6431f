//! Small helpers over `web_sys` shared by the behavior modules

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::core::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// All elements under `root` matching `selector`, in document order
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Same as [`query_all`] but searching the whole document
pub fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_one(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_string()))
}

/// Set an inline style property; non-HTML elements are skipped
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    let classes = element.class_list();
    if on {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Keep the closure alive
    closure.forget();
    Ok(())
}

/// Current vertical scroll offset of the page
pub fn scroll_y(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

/// Inject a `<style>` block once per document, keyed by element id
pub fn inject_style(document: &Document, id: &str, css: &str) -> Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| SiteError::MissingElement("head".to_string()))?;
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}
