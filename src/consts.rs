//! Shared constants for the portfolio client.

// ── Scroll thresholds ───────────────────────────────────────────

/// Scroll offset past which the navbar switches to its compact "scrolled" look.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Scroll offset past which the back-to-top control becomes visible.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 500.0;

/// How far above a section's top edge it already counts as the active section.
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;

/// Fixed header height subtracted from anchor destinations.
pub const HEADER_OFFSET_PX: f64 = 80.0;

// ── Animation ───────────────────────────────────────────────────

/// Duration of the 0 → target counter ramp.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Minimum intersection ratio before a counter starts.
pub const COUNTER_VISIBILITY_RATIO: f64 = 0.5;

/// Minimum intersection ratio before a deferred image loads (any pixel).
pub const IMAGE_VISIBILITY_RATIO: f64 = 0.0;

/// Delay before the contact form's submit button is restored.
pub const FORM_RESET_DELAY_MS: u32 = 3000;

/// Number of decorative particles generated at startup.
pub const PARTICLE_COUNT: usize = 50;

// ── Storage / markup ────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` reflecting the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query for the system dark-mode signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Attribute holding a counter's target value.
pub const COUNT_ATTRIBUTE: &str = "data-count";

/// Attribute holding an image's deferred source URL.
pub const DEFERRED_SRC_ATTRIBUTE: &str = "data-src";

pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_PARTICLE: &str = "particle";

// ── Markup contract ─────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const TYPED_ID: &str = "typed";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const PARTICLES_ID: &str = "particles";

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;
