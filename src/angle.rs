//! Angle utilities used by the orientation sweep.

use nalgebra::Vector2;
use std::f64::consts::TAU;

/// Direction components with a magnitude below this are treated as zero when
/// classifying a heading.
pub const AXIS_EPS: f64 = 1e-5;

/// Tolerance on the full turn: an orientation at `2π - TURN_EPS` or beyond is
/// considered equal to the starting one.
pub const TURN_EPS: f64 = 1e-5;

/// Smallest accepted angular step (about 6.3 million orientations per turn).
pub const MIN_ANGLE_STEP: f64 = 1e-6;

/// Unit direction vector `(cos θ, sin θ)`.
#[inline]
pub fn unit_direction(theta: f64) -> Vector2<f64> {
    Vector2::new(theta.cos(), theta.sin())
}

/// True when a direction component should be treated as zero.
#[inline]
pub fn is_negligible(component: f64) -> bool {
    component.abs() < AXIS_EPS
}

/// Angle of the `index`-th orientation of a sweep with step `step`.
///
/// Computed multiplicatively so long sweeps do not accumulate drift.
#[inline]
pub fn orientation_angle(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// True once `theta` has swept the full turn.
#[inline]
pub fn is_full_turn(theta: f64) -> bool {
    theta >= TAU - TURN_EPS
}

/// Number of orientations `0, step, 2·step, …` strictly before the full turn.
pub fn orientation_count(step: f64) -> usize {
    if !(step.is_finite() && step >= MIN_ANGLE_STEP) {
        return 0;
    }
    let mut n = ((TAU - TURN_EPS) / step).ceil().max(0.0) as usize;
    // Guard the ceil against representation error on either side.
    while n > 0 && is_full_turn(orientation_angle(n - 1, step)) {
        n -= 1;
    }
    while !is_full_turn(orientation_angle(n, step)) {
        n += 1;
    }
    n
}
