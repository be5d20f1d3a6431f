//! Navbar scroll state

use super::config::NavbarConfig;

/// What to do with the navbar's scrolled class after a scroll event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrolledClass {
    Add,
    Remove,
    Keep,
}

/// Scroll behavior of the top navigation bar.
///
/// Inner pages render the navbar already in its scrolled style; those never
/// lose the class when scrolled back to the top.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarScroll {
    threshold_px: f64,
    inner_page: bool,
}

impl NavbarScroll {
    /// `initially_scrolled` is whether the markup shipped with the class set
    pub fn new(config: &NavbarConfig, initially_scrolled: bool) -> Self {
        Self {
            threshold_px: config.threshold_px,
            inner_page: initially_scrolled,
        }
    }

    pub fn is_inner_page(&self) -> bool {
        self.inner_page
    }

    pub fn on_scroll(&self, scroll_y: f64) -> ScrolledClass {
        if scroll_y > self.threshold_px {
            ScrolledClass::Add
        } else if self.inner_page {
            ScrolledClass::Keep
        } else {
            ScrolledClass::Remove
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_toggles() {
        let navbar = NavbarScroll::new(&NavbarConfig::default(), false);
        assert_eq!(navbar.on_scroll(0.0), ScrolledClass::Remove);
        assert_eq!(navbar.on_scroll(50.0), ScrolledClass::Remove);
        assert_eq!(navbar.on_scroll(50.5), ScrolledClass::Add);
        assert_eq!(navbar.on_scroll(900.0), ScrolledClass::Add);
    }

    #[test]
    fn test_inner_page_never_removes() {
        let navbar = NavbarScroll::new(&NavbarConfig::default(), true);
        assert!(navbar.is_inner_page());
        assert_eq!(navbar.on_scroll(0.0), ScrolledClass::Keep);
        assert_eq!(navbar.on_scroll(120.0), ScrolledClass::Add);
    }
}
