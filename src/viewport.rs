//! Scroll-driven UI state: navbar look, back-to-top visibility, active link.
//!
//! DESIGN
//! ======
//! [`ScrollState`] is recomputed from scratch on every scroll event from the
//! current offset and the section boundaries measured in that same tick.
//! The only state carried between events is which link is currently shown
//! as active, because with the default [`ActiveLinkPolicy::Sticky`] a scroll
//! position that matches no section leaves the previous highlight in place.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::Deserialize;

use crate::consts::{BACK_TO_TOP_THRESHOLD_PX, NAV_SCROLLED_THRESHOLD_PX, SECTION_ACTIVATION_OFFSET_PX};

/// What happens to the highlighted link when no section matches the offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveLinkPolicy {
    /// Keep whatever link was last marked active.
    #[default]
    Sticky,
    /// Clear every link.
    ClearOnMiss,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    pub nav_scrolled_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub section_activation_offset_px: f64,
    pub active_link_policy: ActiveLinkPolicy,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_threshold_px: NAV_SCROLLED_THRESHOLD_PX,
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            section_activation_offset_px: SECTION_ACTIVATION_OFFSET_PX,
            active_link_policy: ActiveLinkPolicy::Sticky,
        }
    }
}

/// Layout of one `section[id]`, measured in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBoundary {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBoundary {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether `offset` falls in `(top - activation, top - activation + height]`.
    #[must_use]
    pub fn contains(&self, offset: f64, activation_offset: f64) -> bool {
        let start = self.top - activation_offset;
        offset > start && offset <= start + self.height
    }
}

/// Everything derived from a single scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub past_nav_threshold: bool,
    pub past_top_button_threshold: bool,
    pub active_section_id: Option<String>,
}

impl ScrollState {
    /// Derive the state for `offset`. Sections are scanned in document order
    /// and the last match wins.
    #[must_use]
    pub fn compute(offset: f64, sections: &[SectionBoundary], config: &ViewportConfig) -> Self {
        let offset = offset.max(0.0);
        let active_section_id = sections
            .iter()
            .rev()
            .find(|section| section.contains(offset, config.section_activation_offset_px))
            .map(|section| section.id.clone());
        Self {
            offset,
            past_nav_threshold: offset > config.nav_scrolled_threshold_px,
            past_top_button_threshold: offset > config.back_to_top_threshold_px,
            active_section_id,
        }
    }
}

/// Instruction for the navigation links after a scroll tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkHighlight {
    /// Leave links as they are.
    Keep,
    /// Clear all links, then mark the one pointing at this section id.
    Activate(String),
    /// Clear all links.
    ClearAll,
}

/// Presentation to apply after a scroll tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollView {
    pub nav_scrolled: bool,
    pub back_to_top_visible: bool,
    pub highlight: LinkHighlight,
}

/// Turns scroll offsets into [`ScrollView`]s.
#[derive(Debug, Default)]
pub struct ViewportObserver {
    config: ViewportConfig,
    active_link: Option<String>,
}

impl ViewportObserver {
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self { config, active_link: None }
    }

    /// Handle one scroll event (or the eager startup pass).
    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionBoundary]) -> ScrollView {
        let state = ScrollState::compute(offset, sections, &self.config);
        let highlight = match state.active_section_id {
            Some(id) => {
                self.active_link = Some(id.clone());
                LinkHighlight::Activate(id)
            }
            None => match self.config.active_link_policy {
                ActiveLinkPolicy::Sticky => LinkHighlight::Keep,
                ActiveLinkPolicy::ClearOnMiss => {
                    self.active_link = None;
                    LinkHighlight::ClearAll
                }
            },
        };
        ScrollView {
            nav_scrolled: state.past_nav_threshold,
            back_to_top_visible: state.past_top_button_threshold,
            highlight,
        }
    }

    /// Section id whose link is currently shown as active.
    #[must_use]
    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }
}

/// Whether a navigation link's `href` points at `section_id`.
#[must_use]
pub fn link_targets_section(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}
