//! `IntersectionObserver` wrapper owning its Rust callback

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::core::Result;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An observer together with the closure it calls back into.
///
/// Dropping this disconnects the observer and frees the closure; call
/// [`Intersections::keep_alive`] for observers that live as long as the page.
pub struct Intersections {
    observer: IntersectionObserver,
    callback: Option<EntriesCallback>,
}

impl Intersections {
    /// Create an observer calling `on_entry(target, is_intersecting, observer)`
    /// for every entry it delivers
    pub fn new<F>(threshold: f64, root_margin: &str, mut on_entry: F) -> Result<Self>
    where
        F: FnMut(&Element, bool, &IntersectionObserver) + 'static,
    {
        let callback: EntriesCallback = Closure::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    on_entry(&entry.target(), entry.is_intersecting(), &observer);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            callback: Some(callback),
        })
    }

    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Leak the callback so the observer keeps working for the page lifetime
    pub fn keep_alive(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Intersections {
    fn drop(&mut self) {
        if self.callback.is_some() {
            self.observer.disconnect();
        }
    }
}
