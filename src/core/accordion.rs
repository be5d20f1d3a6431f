//! FAQ accordion: at most one item open at a time

/// Open state of every item in an accordion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    /// Build from the items' current open flags, as found in the markup
    pub fn new(open: Vec<bool>) -> Self {
        Self { open }
    }

    pub fn closed(len: usize) -> Self {
        Self::new(vec![false; len])
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Question at `index` clicked: close the others, toggle this one.
    ///
    /// Out of range indexes are ignored.
    pub fn click(&mut self, index: usize) {
        if index >= self.open.len() {
            return;
        }
        for (i, open) in self.open.iter_mut().enumerate() {
            if i != index {
                *open = false;
            }
        }
        self.open[index] = !self.open[index];
    }

    pub fn states(&self) -> &[bool] {
        &self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_opens_and_closes() {
        let mut faq = Accordion::closed(3);
        faq.click(1);
        assert_eq!(faq.states(), &[false, true, false]);
        faq.click(1);
        assert_eq!(faq.states(), &[false, false, false]);
    }

    #[test]
    fn test_only_one_open() {
        let mut faq = Accordion::closed(3);
        faq.click(0);
        faq.click(2);
        assert_eq!(faq.states(), &[false, false, true]);
    }

    #[test]
    fn test_collapses_multiple_preopened_items() {
        let mut faq = Accordion::new(vec![true, true, false]);
        faq.click(2);
        assert_eq!(faq.states(), &[false, false, true]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut faq = Accordion::new(vec![true]);
        faq.click(5);
        assert!(faq.is_open(0));
        assert!(!faq.is_open(5));
    }
}
