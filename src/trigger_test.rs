use super::*;

// =============================================================
// Helpers
// =============================================================

fn hit(target: TargetId, ratio: f64) -> IntersectionEntry {
    IntersectionEntry { target, is_intersecting: true, ratio }
}

fn miss(target: TargetId) -> IntersectionEntry {
    IntersectionEntry { target, is_intersecting: false, ratio: 0.0 }
}

/// Run a started counter to completion with frames every `step_ms`.
fn run_to_end(counter: &mut Counter, step_ms: f64) -> Vec<u64> {
    let mut values = Vec::new();
    let mut now = 1_000.0;
    while let Some(frame) = counter.frame(now) {
        values.push(frame.value);
        if frame.done {
            break;
        }
        now += step_ms;
    }
    values
}

// =============================================================
// TriggerSet
// =============================================================

#[test]
fn trigger_fires_once_and_stops_watching() {
    let mut set = TriggerSet::new(0.0);
    let id = set.register("img");
    assert!(set.is_watching(id));

    assert_eq!(set.on_intersection(&[hit(id, 0.1)]), vec![id]);
    assert!(!set.is_watching(id));
    assert!(set.on_intersection(&[hit(id, 1.0)]).is_empty());
}

#[test]
fn trigger_ignores_non_intersecting_entries() {
    let mut set = TriggerSet::new(0.0);
    let id = set.register(());
    assert!(set.on_intersection(&[miss(id)]).is_empty());
    assert!(set.is_watching(id));
}

#[test]
fn counter_threshold_requires_half_visibility() {
    let mut set = TriggerSet::new(0.5);
    let id = set.register(());
    assert!(set.on_intersection(&[hit(id, 0.49)]).is_empty());
    assert_eq!(set.on_intersection(&[hit(id, 0.5)]), vec![id]);
}

#[test]
fn image_threshold_accepts_any_visible_pixel() {
    let mut set = TriggerSet::new(0.0);
    let id = set.register(());
    assert_eq!(set.on_intersection(&[hit(id, 0.0)]), vec![id]);
}

#[test]
fn duplicate_entries_in_one_batch_fire_once() {
    let mut set = TriggerSet::new(0.0);
    let a = set.register('a');
    let b = set.register('b');
    let fired = set.on_intersection(&[hit(a, 0.3), hit(a, 0.6), hit(b, 0.2)]);
    assert_eq!(fired, vec![a, b]);
    assert_eq!(set.watching_count(), 0);
}

#[test]
fn unknown_target_is_ignored() {
    let mut set: TriggerSet<()> = TriggerSet::new(0.0);
    assert!(set.on_intersection(&[hit(7, 1.0)]).is_empty());
    assert!(set.is_empty());
    assert!(!set.is_watching(7));
}

#[test]
fn targets_are_addressable_after_registration() {
    let mut set = TriggerSet::new(0.5);
    let id = set.register(Counter::new(10, 2000.0));
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(id).map(Counter::target), Some(10));
    assert!(set.get_mut(id).is_some_and(Counter::start));
}

// =============================================================
// Counter
// =============================================================

#[test]
fn counter_value_is_linear_and_floored() {
    assert_eq!(counter_value(0.0, 2000.0, 150), 0);
    assert_eq!(counter_value(1000.0, 2000.0, 150), 75);
    assert_eq!(counter_value(1999.0, 2000.0, 3), 2);
    assert_eq!(counter_value(2000.0, 2000.0, 150), 150);
    assert_eq!(counter_value(5000.0, 2000.0, 150), 150);
}

#[test]
fn counter_value_zero_duration_shows_target() {
    assert_eq!(counter_value(0.0, 0.0, 42), 42);
}

#[test]
fn counter_ends_exactly_on_target() {
    for target in [0, 1, 7, 50, 999, 12_345] {
        let mut counter = Counter::new(target, 2000.0);
        assert!(counter.start());
        let values = run_to_end(&mut counter, 16.7);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&target));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(counter.phase(), CounterPhase::Done);
    }
}

#[test]
fn counter_first_frame_anchors_start_time() {
    let mut counter = Counter::new(100, 2000.0);
    counter.start();
    assert_eq!(counter.frame(5_000.0), Some(CounterFrame { value: 0, done: false }));
    assert_eq!(counter.phase(), CounterPhase::Animating { started_at_ms: Some(5_000.0) });
    assert_eq!(counter.frame(6_000.0), Some(CounterFrame { value: 50, done: false }));
    assert_eq!(counter.frame(7_000.0), Some(CounterFrame { value: 100, done: true }));
}

#[test]
fn counter_does_not_retrigger_after_done() {
    let mut counter = Counter::new(20, 2000.0);
    counter.start();
    run_to_end(&mut counter, 500.0);
    assert!(!counter.start());
    assert_eq!(counter.frame(99_999.0), None);
    assert_eq!(counter.phase(), CounterPhase::Done);
}

#[test]
fn counter_ignores_frames_before_start() {
    let mut counter = Counter::new(20, 2000.0);
    assert_eq!(counter.frame(0.0), None);
    assert_eq!(counter.phase(), CounterPhase::Idle);
}

#[test]
fn counter_start_while_animating_is_noop() {
    let mut counter = Counter::new(20, 2000.0);
    assert!(counter.start());
    counter.frame(0.0);
    assert!(!counter.start());
    assert_eq!(counter.phase(), CounterPhase::Animating { started_at_ms: Some(0.0) });
}

#[test]
fn parse_target_accepts_non_negative_integers() {
    assert_eq!(Counter::parse_target("250"), Ok(250));
    assert_eq!(Counter::parse_target(" 5 "), Ok(5));
    assert_eq!(Counter::parse_target("0"), Ok(0));
}

#[test]
fn parse_target_rejects_garbage() {
    assert_eq!(Counter::parse_target("-3"), Err(WireError::InvalidCount { raw: "-3".into() }));
    assert!(Counter::parse_target("").is_err());
    assert!(Counter::parse_target("12k").is_err());
}

// =============================================================
// LazyImage
// =============================================================

#[test]
fn lazy_image_promotes_once() {
    let mut image = LazyImage::new("/img/hero.webp");
    assert_eq!(image.phase(), ImagePhase::Pending);
    assert_eq!(image.promote(), Some("/img/hero.webp"));
    assert_eq!(image.phase(), ImagePhase::Loaded);
    assert_eq!(image.promote(), None);
}

#[test]
fn lazy_image_in_trigger_set_loads_on_first_intersection_only() {
    let mut set = TriggerSet::new(0.0);
    let id = set.register(LazyImage::new("a.png"));
    let mut promoted = Vec::new();
    for _ in 0..3 {
        for fired in set.on_intersection(&[hit(id, 1.0)]) {
            if let Some(src) = set.get_mut(fired).and_then(LazyImage::promote) {
                promoted.push(src.to_owned());
            }
        }
    }
    assert_eq!(promoted, vec!["a.png".to_owned()]);
}
