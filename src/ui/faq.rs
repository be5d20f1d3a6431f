//! FAQ accordion

use std::cell::RefCell;
use std::rc::Rc;

use super::dom;
use crate::core::accordion::Accordion;
use crate::core::Result;

const ACTIVE: &str = "active";

pub fn init_faq() -> Result<()> {
    let document = dom::document()?;
    let items = Rc::new(dom::query_document(&document, ".faq-item")?);
    if items.is_empty() {
        return Ok(());
    }

    let accordion = Rc::new(RefCell::new(Accordion::new(
        items
            .iter()
            .map(|item| item.class_list().contains(ACTIVE))
            .collect(),
    )));

    for (index, item) in items.iter().enumerate() {
        let Some(question) = item.query_selector(".faq-question")? else {
            continue;
        };
        let items = items.clone();
        let accordion = accordion.clone();
        dom::listen(&question, "click", move |_| {
            let mut accordion = accordion.borrow_mut();
            accordion.click(index);
            for (item, open) in items.iter().zip(accordion.states()) {
                let _ = dom::set_class(item, ACTIVE, *open);
            }
        })?;
    }

    tracing::debug!("faq: {} items", items.len());
    Ok(())
}
