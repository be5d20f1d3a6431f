//! Stat counters counting up when scrolled into view

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;

use super::dom;
use super::observer::Intersections;
use crate::core::config::CounterConfig;
use crate::core::counter::{CounterAnimation, CounterFrame};
use crate::core::{Result, SiteError};

pub fn init_counters(config: &CounterConfig) -> Result<()> {
    let document = dom::document()?;
    let counters = dom::query_document(&document, &config.selector)?;
    if counters.is_empty() {
        return Ok(());
    }

    let duration = Duration::from_millis(config.duration_ms as u64);
    let intersections = Intersections::new(
        config.threshold,
        "0px",
        move |target, is_intersecting, observer| {
            if !is_intersecting {
                return;
            }
            observer.unobserve(target);
            if let Err(err) = animate_counter(target.clone(), duration) {
                tracing::debug!("counter: {}", err);
            }
        },
    )?;

    for counter in &counters {
        intersections.observe(counter);
    }
    intersections.keep_alive();

    tracing::debug!("counters: {} observed", counters.len());
    Ok(())
}

/// Run the count-up animation on one element, one step per animation frame
fn animate_counter(element: Element, duration: Duration) -> Result<()> {
    let text = element.text_content().unwrap_or_default();
    let Some(animation) = CounterAnimation::from_text(&text, duration) else {
        return Ok(());
    };

    let window = dom::window()?;
    let start = window
        .performance()
        .ok_or_else(|| SiteError::Js("performance API unavailable".to_string()))?
        .now();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let elapsed = Duration::from_secs_f64((now - start).max(0.0) / 1000.0);
        let CounterFrame { text, finished } = animation.frame(elapsed);
        element.set_text_content(Some(&text));

        if finished {
            // Drop our own closure to end the loop
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            let _ = frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
