//! Clamping, interpolation and the two easing curves the loader uses.

/// Clamp to `[0, 1]`. NaN maps to 0 so a bad timestamp never produces a stroke.
#[must_use]
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    let t = clamp01(t);
    from + (to - from) * t
}

/// Decelerating cubic: fast start, soft landing.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - clamp01(t);
    1.0 - inv * inv * inv
}

/// Accelerate-then-decelerate cubic.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp01(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let k = -2.0 * t + 2.0;
        1.0 - k * k * k / 2.0
    }
}
