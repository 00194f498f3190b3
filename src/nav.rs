//! Mobile navigation menu state and in-page anchor navigation.
//!
//! The menu is a single open/closed flag. Opening locks page scroll; closing
//! releases it. Closing is forced by Escape and by a completed in-page jump.
//! There is deliberately no outside-click dismissal.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Key name reported by the browser for the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Side effects to apply after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavVisual {
    /// `active` class on both the toggle control and the menu panel.
    pub open: bool,
    /// `overflow: hidden` on `<body>` while open.
    pub lock_scroll: bool,
}

impl NavVisual {
    fn for_state(open: bool) -> Self {
        Self { open, lock_scroll: open }
    }
}

#[derive(Debug, Default)]
pub struct NavController {
    open: bool,
}

impl NavController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Always returns the visual to apply.
    pub fn toggle(&mut self) -> NavVisual {
        self.open = !self.open;
        NavVisual::for_state(self.open)
    }

    /// Force closed. `None` when already closed (nothing to apply).
    pub fn close(&mut self) -> Option<NavVisual> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(NavVisual::for_state(false))
    }

    /// Keyboard handler: Escape closes an open menu.
    pub fn on_key(&mut self, key: &str) -> Option<NavVisual> {
        if key == ESCAPE_KEY { self.close() } else { None }
    }
}

// ── In-page anchors ─────────────────────────────────────────────

/// The element id an in-page link points at, or `None` for links the
/// browser should follow normally.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Whether activating `href` should be intercepted (default navigation cancelled).
#[must_use]
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Scroll destination for a target whose document top is `element_top`.
#[must_use]
pub fn scroll_destination(element_top: f64, header_offset: f64) -> f64 {
    element_top - header_offset
}
