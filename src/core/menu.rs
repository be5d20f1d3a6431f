//! Mobile navigation menu

/// Inline styles for one bar of the hamburger icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle {
        transform: Some("rotate(45deg) translate(5px, 5px)"),
        opacity: None,
    },
    BarStyle {
        transform: None,
        opacity: Some("0"),
    },
    BarStyle {
        transform: Some("rotate(-45deg) translate(5px, -5px)"),
        opacity: None,
    },
];

const CLOSED_BARS: [BarStyle; 3] = [
    BarStyle {
        transform: Some("none"),
        opacity: None,
    },
    BarStyle {
        transform: None,
        opacity: Some("1"),
    },
    BarStyle {
        transform: Some("none"),
        opacity: None,
    },
];

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button pressed; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Click outside the menu or on one of its links
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Hamburger bar styles for the current state (X when open)
    pub fn bars(&self) -> &'static [BarStyle; 3] {
        if self.open { &OPEN_BARS } else { &CLOSED_BARS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut menu = MobileMenu::new();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_bars_form_an_x_when_open() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.bars()[1].opacity, Some("1"));
        menu.toggle();
        let bars = menu.bars();
        assert_eq!(bars[0].transform, Some("rotate(45deg) translate(5px, 5px)"));
        assert_eq!(bars[1].opacity, Some("0"));
        assert_eq!(bars[2].transform, Some("rotate(-45deg) translate(5px, -5px)"));
    }
}
