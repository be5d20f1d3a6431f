//! Navbar scroll state and mobile menu

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use super::dom;
use crate::core::config::NavbarConfig;
use crate::core::menu::MobileMenu;
use crate::core::navbar::{NavbarScroll, ScrolledClass};
use crate::core::Result;

/// Toggle the navbar's scrolled class as the page scrolls
pub fn init_navbar(config: &NavbarConfig) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    let Some(navbar) = document.query_selector(&config.selector)? else {
        tracing::debug!("navbar: {} not found", config.selector);
        return Ok(());
    };

    let initially_scrolled = navbar.class_list().contains(&config.scrolled_class);
    let state = NavbarScroll::new(config, initially_scrolled);
    let class = config.scrolled_class.clone();
    let scroll_window = window.clone();

    dom::listen(&window, "scroll", move |_| {
        let result = match state.on_scroll(dom::scroll_y(&scroll_window)) {
            ScrolledClass::Add => dom::set_class(&navbar, &class, true),
            ScrolledClass::Remove => dom::set_class(&navbar, &class, false),
            ScrolledClass::Keep => Ok(()),
        };
        if let Err(err) = result {
            tracing::debug!("navbar: {}", err);
        }
    })
}

/// Wire the hamburger toggle, outside-click and link-click closing
pub fn init_mobile_menu() -> Result<()> {
    let document = dom::document()?;
    let (Some(toggle), Some(links)) = (
        document.query_selector(".menu-toggle")?,
        document.query_selector(".nav-links")?,
    ) else {
        return Ok(());
    };

    let menu = Rc::new(Cell::new(MobileMenu::new()));

    {
        let menu = menu.clone();
        let (toggle_el, links_el) = (toggle.clone(), links.clone());
        dom::listen(&toggle, "click", move |_| {
            let mut state = menu.get();
            state.toggle();
            menu.set(state);
            apply_menu(&toggle_el, &links_el, state);
        })?;
    }

    {
        let menu = menu.clone();
        let (toggle_el, links_el) = (toggle.clone(), links.clone());
        dom::listen(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = toggle_el.contains(target.as_ref()) || links_el.contains(target.as_ref());
            if !inside {
                let mut state = menu.get();
                state.close();
                menu.set(state);
                apply_menu(&toggle_el, &links_el, state);
            }
        })?;
    }

    for link in dom::query_all(&links, "a")? {
        let menu = menu.clone();
        let (toggle_el, links_el) = (toggle.clone(), links.clone());
        dom::listen(&link, "click", move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            apply_menu(&toggle_el, &links_el, state);
        })?;
    }

    Ok(())
}

fn apply_menu(toggle: &Element, links: &Element, menu: MobileMenu) {
    let open = menu.is_open();
    let _ = dom::set_class(links, "active", open);
    let _ = dom::set_class(toggle, "active", open);

    let Ok(spans) = dom::query_all(toggle, "span") else {
        return;
    };
    for (span, bar) in spans.iter().zip(menu.bars()) {
        if let Some(transform) = bar.transform {
            let _ = dom::set_style(span, "transform", transform);
        }
        if let Some(opacity) = bar.opacity {
            let _ = dom::set_style(span, "opacity", opacity);
        }
    }
}
