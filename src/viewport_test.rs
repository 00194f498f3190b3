#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn two_sections() -> Vec<SectionBoundary> {
    vec![SectionBoundary::new("a", 0.0, 300.0), SectionBoundary::new("b", 300.0, 300.0)]
}

fn flush_config() -> ViewportConfig {
    ViewportConfig { section_activation_offset_px: 0.0, ..ViewportConfig::default() }
}

fn active_at(offset: f64, sections: &[SectionBoundary], config: &ViewportConfig) -> Option<String> {
    ScrollState::compute(offset, sections, config).active_section_id
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn nav_threshold_is_strictly_greater_than() {
    let config = ViewportConfig::default();
    assert!(!ScrollState::compute(100.0, &[], &config).past_nav_threshold);
    assert!(ScrollState::compute(101.0, &[], &config).past_nav_threshold);
}

#[test]
fn back_to_top_threshold_is_strictly_greater_than() {
    let config = ViewportConfig::default();
    assert!(!ScrollState::compute(500.0, &[], &config).past_top_button_threshold);
    assert!(ScrollState::compute(501.0, &[], &config).past_top_button_threshold);
}

#[test]
fn negative_offset_is_clamped_to_zero() {
    let state = ScrollState::compute(-40.0, &[], &ViewportConfig::default());
    assert_eq!(state.offset, 0.0);
    assert!(!state.past_nav_threshold);
}

// =============================================================
// Active section resolution
// =============================================================

#[test]
fn active_section_resolves_by_offset() {
    let sections = two_sections();
    let config = flush_config();
    assert_eq!(active_at(350.0, &sections, &config).as_deref(), Some("b"));
    assert_eq!(active_at(250.0, &sections, &config).as_deref(), Some("a"));
    assert_eq!(active_at(650.0, &sections, &config), None);
}

#[test]
fn activation_offset_shifts_the_window_up() {
    let sections = two_sections();
    let config = ViewportConfig::default();
    // With 100px of lead, "b" already owns (200, 500].
    assert_eq!(active_at(250.0, &sections, &config).as_deref(), Some("b"));
    assert_eq!(active_at(150.0, &sections, &config).as_deref(), Some("a"));
    assert_eq!(active_at(500.0, &sections, &config).as_deref(), Some("b"));
    assert_eq!(active_at(501.0, &sections, &config), None);
}

#[test]
fn window_excludes_lower_edge_and_includes_upper_edge() {
    let section = SectionBoundary::new("s", 300.0, 300.0);
    assert!(!section.contains(200.0, 100.0));
    assert!(section.contains(200.5, 100.0));
    assert!(section.contains(500.0, 100.0));
    assert!(!section.contains(500.5, 100.0));
}

#[test]
fn later_section_wins_when_ranges_overlap() {
    let sections = vec![SectionBoundary::new("outer", 0.0, 1000.0), SectionBoundary::new("inner", 200.0, 100.0)];
    let config = flush_config();
    assert_eq!(active_at(250.0, &sections, &config).as_deref(), Some("inner"));
    assert_eq!(active_at(500.0, &sections, &config).as_deref(), Some("outer"));
}

#[test]
fn no_sections_means_no_active_section() {
    assert_eq!(active_at(120.0, &[], &ViewportConfig::default()), None);
}

// =============================================================
// Observer
// =============================================================

#[test]
fn observer_keeps_stale_link_when_nothing_matches() {
    let sections = two_sections();
    let mut observer = ViewportObserver::new(flush_config());

    let view = observer.on_scroll(350.0, &sections);
    assert_eq!(view.highlight, LinkHighlight::Activate("b".into()));

    let view = observer.on_scroll(650.0, &sections);
    assert_eq!(view.highlight, LinkHighlight::Keep);
    assert_eq!(observer.active_link(), Some("b"));
    assert!(view.nav_scrolled);
    assert!(view.back_to_top_visible);
}

#[test]
fn observer_clears_on_miss_when_configured() {
    let sections = two_sections();
    let config = ViewportConfig { active_link_policy: ActiveLinkPolicy::ClearOnMiss, ..flush_config() };
    let mut observer = ViewportObserver::new(config);

    observer.on_scroll(350.0, &sections);
    let view = observer.on_scroll(650.0, &sections);
    assert_eq!(view.highlight, LinkHighlight::ClearAll);
    assert_eq!(observer.active_link(), None);
}

#[test]
fn observer_eager_pass_reflects_restored_scroll() {
    let sections = two_sections();
    let mut observer = ViewportObserver::default();
    let view = observer.on_scroll(520.0, &sections);
    assert!(view.nav_scrolled);
    assert!(view.back_to_top_visible);
    assert_eq!(view.highlight, LinkHighlight::Keep);
    assert_eq!(observer.active_link(), None);
}

#[test]
fn observer_recomputes_thresholds_every_tick() {
    let mut observer = ViewportObserver::default();
    assert!(observer.on_scroll(600.0, &[]).back_to_top_visible);
    let view = observer.on_scroll(50.0, &[]);
    assert!(!view.back_to_top_visible);
    assert!(!view.nav_scrolled);
}

#[test]
fn link_targets_section_requires_exact_anchor() {
    assert!(link_targets_section("#about", "about"));
    assert!(!link_targets_section("about", "about"));
    assert!(!link_targets_section("#about-me", "about"));
    assert!(!link_targets_section("/page#about", "about"));
}
