//! Sub-phase scale calculations
//!
//! Pure functions that split one global progress value into the staggered
//! sub-progress values used by the scene (line draw, ball scale, travel).

use std::f32::consts::PI;

/// Portion of `value` remaining once sub-phase `i` of `n` has begun.
///
/// `n` must be nonzero; it is validated at configuration time.
pub fn max_scale(value: f32, i: u32, n: u32) -> f32 {
    (value - i as f32 / n as f32).max(0.0)
}

/// Progress of sub-phase `i` of `n`, clamped to [0, 1].
///
/// Sub-phase `i` sits idle at 0 until `value` reaches `i / n`, rises
/// linearly, and saturates at 1 once `value` passes `(i + 1) / n`.
pub fn divide_scale(value: f32, i: u32, n: u32) -> f32 {
    max_scale(value, i, n).min(1.0 / n as f32) * n as f32
}

/// Map a linear 0..1 progress onto a symmetric 0..1..0 curve.
///
/// Used so a unit step eases out and back in within one cycle.
pub fn sinify(value: f32) -> f32 {
    (value * PI).sin()
}
