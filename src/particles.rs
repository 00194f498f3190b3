//! Decorative floating particles for the hero background.
//!
//! Each particle draws six independent uniform values once at startup and
//! never changes afterwards. No reproducibility is required, so callers pass
//! whatever [`rand::Rng`] they have.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use std::ops::Range;

use rand::Rng;

pub const SIZE_PX: Range<f64> = 2.0..12.0;
pub const OPACITY: Range<f64> = 0.1..0.4;
pub const POSITION_PCT: Range<f64> = 0.0..100.0;
pub const DURATION_SEC: Range<f64> = 10.0..20.0;
pub const DELAY_SEC: Range<f64> = 0.0..5.0;

/// Base color of every particle; alpha comes from [`Particle::opacity`].
const RGB: (u8, u8, u8) = (37, 99, 235);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub opacity: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_sec: f64,
    pub delay_sec: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size_px: rng.random_range(SIZE_PX),
            opacity: rng.random_range(OPACITY),
            left_pct: rng.random_range(POSITION_PCT),
            top_pct: rng.random_range(POSITION_PCT),
            duration_sec: rng.random_range(DURATION_SEC),
            delay_sec: rng.random_range(DELAY_SEC),
        }
    }

    /// Inline style for the particle's `<div>`.
    #[must_use]
    pub fn css_text(&self) -> String {
        let (r, g, b) = RGB;
        format!(
            "position: absolute; width: {size}px; height: {size}px; \
             background: rgba({r}, {g}, {b}, {alpha}); border-radius: 50%; \
             left: {left}%; top: {top}%; \
             animation: float {duration}s ease-in-out infinite; animation-delay: {delay}s;",
            size = self.size_px,
            alpha = self.opacity,
            left = self.left_pct,
            top = self.top_pct,
            duration = self.duration_sec,
            delay = self.delay_sec,
        )
    }
}

/// Draw `count` particles.
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
