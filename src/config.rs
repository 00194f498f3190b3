//! Site configuration with built-in defaults.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tunable defaults to the values in [`crate::consts`]. A page may
//! override any subset through a JSON block
//! (`<script type="application/json" id="site-config">`); absent fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    BACK_TO_TOP_THRESHOLD_PX, COUNTER_DURATION_MS, COUNTER_VISIBILITY_RATIO, FORM_RESET_DELAY_MS, HEADER_OFFSET_PX,
    IMAGE_VISIBILITY_RATIO, NAV_SCROLLED_THRESHOLD_PX, PARTICLE_COUNT, SECTION_ACTIVATION_OFFSET_PX,
};
use crate::error::ConfigError;
use crate::vendor::{RevealOptions, TypedOptions};
use crate::viewport::{ActiveLinkPolicy, ViewportConfig};

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_SHOWCASE_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos/1";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub nav_scrolled_threshold_px: f64,
    pub back_to_top_threshold_px: f64,
    pub section_activation_offset_px: f64,
    pub header_offset_px: f64,
    pub counter_duration_ms: f64,
    pub counter_visibility_ratio: f64,
    pub image_visibility_ratio: f64,
    pub form_reset_delay_ms: u32,
    pub particle_count: usize,
    pub active_link_policy: ActiveLinkPolicy,
    pub typed: TypedOptions,
    pub reveal: RevealOptions,
    pub showcase_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_scrolled_threshold_px: NAV_SCROLLED_THRESHOLD_PX,
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            section_activation_offset_px: SECTION_ACTIVATION_OFFSET_PX,
            header_offset_px: HEADER_OFFSET_PX,
            counter_duration_ms: COUNTER_DURATION_MS,
            counter_visibility_ratio: COUNTER_VISIBILITY_RATIO,
            image_visibility_ratio: IMAGE_VISIBILITY_RATIO,
            form_reset_delay_ms: FORM_RESET_DELAY_MS,
            particle_count: PARTICLE_COUNT,
            active_link_policy: ActiveLinkPolicy::default(),
            typed: TypedOptions::default(),
            reveal: RevealOptions::default(),
            showcase_endpoint: DEFAULT_SHOWCASE_ENDPOINT.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no feature could sensibly act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("nav_scrolled_threshold_px", self.nav_scrolled_threshold_px),
            ("back_to_top_threshold_px", self.back_to_top_threshold_px),
            ("section_activation_offset_px", self.section_activation_offset_px),
            ("header_offset_px", self.header_offset_px),
            ("counter_duration_ms", self.counter_duration_ms),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be a non-negative number, got {value}")));
            }
        }

        let ratios = [
            ("counter_visibility_ratio", self.counter_visibility_ratio),
            ("image_visibility_ratio", self.image_visibility_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{name} must be within [0, 1], got {value}")));
            }
        }

        if self.showcase_endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("showcase_endpoint must not be empty".into()));
        }
        Ok(())
    }

    /// Scroll-related subset consumed by the viewport observer.
    #[must_use]
    pub fn viewport(&self) -> ViewportConfig {
        ViewportConfig {
            nav_scrolled_threshold_px: self.nav_scrolled_threshold_px,
            back_to_top_threshold_px: self.back_to_top_threshold_px,
            section_activation_offset_px: self.section_activation_offset_px,
            active_link_policy: self.active_link_policy,
        }
    }
}

/// Resolve the effective config from an optional override block.
///
/// A missing block yields defaults. A malformed or invalid block is logged and
/// also yields defaults so the rest of the page still wires up.
#[must_use]
pub fn resolve(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring site config override: {e}");
            SiteConfig::default()
        }
    }
}
