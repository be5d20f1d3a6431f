//! Scroll reveal bound to the live DOM

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, IntersectionObserver};

use super::dom;
use super::observer::Intersections;
use super::styles;
use crate::core::config::RevealConfig;
use crate::core::reveal::{HiddenStyle, RevealHandle, RevealHost, RevealOrchestrator};
use crate::core::Result;

/// Container tags that bound a stagger group, innermost first
const GROUP_CONTAINERS: [&str; 2] = ["section", ".container"];

type SharedHandle = Rc<RefCell<Option<RevealHandle<DomRevealHost>>>>;

/// [`RevealHost`] over a DOM subtree.
///
/// The observer is created on demand once there is something to watch, and
/// lives until the host is disconnected.
pub struct DomRevealHost {
    root: Element,
    threshold: f64,
    root_margin: String,
    handle: SharedHandle,
    observer: Option<IntersectionObserver>,
}

impl DomRevealHost {
    fn new(root: Element, config: &RevealConfig, handle: SharedHandle) -> Self {
        Self {
            root,
            threshold: config.threshold,
            root_margin: config.root_margin(),
            handle,
            observer: None,
        }
    }
}

impl RevealHost for DomRevealHost {
    type Element = Element;
    /// `None` groups everything outside any container into one page-wide group
    type GroupKey = Option<Element>;

    fn targets(&self, selector: &str) -> Vec<Element> {
        match dom::query_all(&self.root, selector) {
            Ok(elements) => elements,
            Err(err) => {
                tracing::warn!("scroll reveal: selector {:?} failed: {}", selector, err);
                Vec::new()
            }
        }
    }

    fn group_key(&self, element: &Element) -> Option<Element> {
        GROUP_CONTAINERS
            .iter()
            .find_map(|selector| element.closest(selector).ok().flatten())
    }

    fn prepare_watch(&mut self, count: usize) {
        let handle = self.handle.clone();
        let intersections = Intersections::new(
            self.threshold,
            &self.root_margin,
            move |target, is_intersecting, _| {
                let Ok(mut guard) = handle.try_borrow_mut() else {
                    return;
                };
                if let Some(handle) = guard.as_mut() {
                    handle.on_intersection(target, is_intersecting);
                }
            },
        );

        match intersections {
            Ok(intersections) => {
                self.observer = Some(intersections.observer().clone());
                // Torn down by `disconnect`, never by dropping a handle
                intersections.keep_alive();
            }
            Err(err) => {
                tracing::warn!(
                    "scroll reveal: IntersectionObserver unavailable for {} elements: {}",
                    count,
                    err
                );
            }
        }
    }

    fn hide(&mut self, element: &Element, style: &HiddenStyle) {
        let result = dom::set_style(element, "opacity", HiddenStyle::OPACITY)
            .and_then(|_| dom::set_style(element, "transform", &style.transform()))
            .and_then(|_| dom::set_style(element, "transition", &style.transition()));
        if let Err(err) = result {
            tracing::debug!("scroll reveal: could not style element: {}", err);
        }
    }

    fn watch(&mut self, element: &Element) -> bool {
        match &self.observer {
            Some(observer) => {
                observer.observe(element);
                true
            }
            None => false,
        }
    }

    fn reveal(&mut self, element: &Element, class: &str) {
        if let Err(err) = dom::set_class(element, class, true) {
            tracing::debug!("scroll reveal: could not add {}: {}", class, err);
        }
    }

    fn unwatch(&mut self, element: &Element) {
        if let Some(observer) = &self.observer {
            observer.unobserve(element);
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// Live scroll reveal.
///
/// Keeps running for the rest of the page whether or not this value is
/// kept; [`DomReveal::dispose`] is the only way to stop it.
pub struct DomReveal {
    handle: SharedHandle,
}

impl DomReveal {
    /// Number of elements revealed so far
    pub fn revealed_count(&self) -> usize {
        self.handle
            .borrow()
            .as_ref()
            .map(|h| h.elements().iter().filter(|w| w.revealed).count())
            .unwrap_or(0)
    }

    pub fn dispose(self) {
        let handle = self.handle.borrow_mut().take();
        if let Some(handle) = handle {
            handle.dispose();
        }
    }
}

/// Set up scroll reveal for every role element under `root`.
///
/// No observer is created when nothing matches. When `IntersectionObserver`
/// is missing the elements are still hidden and never revealed.
pub fn init_reveal(root: &Element, config: &RevealConfig) -> Result<DomReveal> {
    let document = dom::document()?;
    dom::inject_style(
        &document,
        styles::REVEAL_STYLE_ID,
        &styles::reveal_css(&config.visible_class),
    )?;

    let handle: SharedHandle = Rc::new(RefCell::new(None));
    let host = DomRevealHost::new(root.clone(), config, handle.clone());
    let reveal = RevealOrchestrator::init(host, config);
    *handle.borrow_mut() = Some(reveal);

    Ok(DomReveal { handle })
}
