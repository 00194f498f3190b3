//! Viewport-triggered one-shot effects: counter ramps and deferred images.
//!
//! [`TriggerSet`] mirrors an intersection observer: targets are registered
//! once, the first qualifying intersection fires them, and they are never
//! watched again. The effects themselves ([`Counter`], [`LazyImage`]) are
//! explicit state machines whose terminal states ignore further triggers, so
//! a target fires at most once even if the platform re-delivers an entry.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use crate::error::WireError;

/// Index of a target within its [`TriggerSet`].
pub type TargetId = usize;

/// One intersection report for a registered target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: TargetId,
    pub is_intersecting: bool,
    /// Visible fraction of the target, `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug)]
struct Slot<T> {
    target: T,
    watching: bool,
}

/// A set of watched targets sharing one visibility threshold.
#[derive(Debug)]
pub struct TriggerSet<T> {
    threshold: f64,
    slots: Vec<Slot<T>>,
}

impl<T> TriggerSet<T> {
    /// `threshold` is the minimum intersection ratio; `0.0` means any pixel.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, slots: Vec::new() }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `target`.
    pub fn register(&mut self, target: T) -> TargetId {
        self.slots.push(Slot { target, watching: true });
        self.slots.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn is_watching(&self, id: TargetId) -> bool {
        self.slots.get(id).is_some_and(|slot| slot.watching)
    }

    #[must_use]
    pub fn watching_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.watching).count()
    }

    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&T> {
        self.slots.get(id).map(|slot| &slot.target)
    }

    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut T> {
        self.slots.get_mut(id).map(|slot| &mut slot.target)
    }

    /// Process a batch of entries. Returns the targets that fired, each of
    /// which is unwatched before returning.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<TargetId> {
        let mut fired = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || entry.ratio < self.threshold {
                continue;
            }
            let Some(slot) = self.slots.get_mut(entry.target) else {
                continue;
            };
            if slot.watching {
                slot.watching = false;
                fired.push(entry.target);
            }
        }
        fired
    }
}

// ── Counter ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    Idle,
    /// `started_at_ms` is set by the first frame after the trigger.
    Animating { started_at_ms: Option<f64> },
    Done,
}

/// Display produced by one animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

/// Numeric 0 → target ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: u64,
    duration_ms: f64,
    phase: CounterPhase,
}

impl Counter {
    #[must_use]
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { target, duration_ms, phase: CounterPhase::Idle }
    }

    /// Parse a `data-count` attribute value.
    pub fn parse_target(raw: &str) -> Result<u64, WireError> {
        raw.trim().parse::<u64>().map_err(|_| WireError::InvalidCount { raw: raw.to_owned() })
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Idle → animating. Returns `false` (and does nothing) in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Animating { started_at_ms: None };
        true
    }

    /// Advance to timestamp `now_ms`. `None` unless animating.
    pub fn frame(&mut self, now_ms: f64) -> Option<CounterFrame> {
        let CounterPhase::Animating { started_at_ms } = self.phase else {
            return None;
        };
        let started = started_at_ms.unwrap_or(now_ms);
        let elapsed = (now_ms - started).max(0.0);
        let value = counter_value(elapsed, self.duration_ms, self.target);
        let done = elapsed >= self.duration_ms;
        self.phase = if done { CounterPhase::Done } else { CounterPhase::Animating { started_at_ms: Some(started) } };
        Some(CounterFrame { value, done })
    }
}

/// Linear `floor(progress * target)`, exactly `target` once `elapsed >= duration`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn counter_value(elapsed_ms: f64, duration_ms: f64, target: u64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    ((progress * target as f64).floor() as u64).min(target)
}

// ── Lazy image ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImagePhase {
    Pending,
    Loaded,
}

/// Image whose real source waits in a deferred attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyImage {
    deferred_src: String,
    phase: ImagePhase,
}

impl LazyImage {
    #[must_use]
    pub fn new(deferred_src: impl Into<String>) -> Self {
        Self { deferred_src: deferred_src.into(), phase: ImagePhase::Pending }
    }

    #[must_use]
    pub fn phase(&self) -> ImagePhase {
        self.phase
    }

    /// Pending → loaded. Returns the URL to promote, only on the first call.
    pub fn promote(&mut self) -> Option<&str> {
        if self.phase == ImagePhase::Loaded {
            return None;
        }
        self.phase = ImagePhase::Loaded;
        Some(&self.deferred_src)
    }
}
