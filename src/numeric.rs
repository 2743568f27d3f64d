//! Numeric helpers used by the wander controller.
//!
//! Angles are kept in degrees throughout the crate and normalised into the
//! half-open range `(-180, 180]`. Durations cross the boundary between
//! [`Duration`] and floating-point milliseconds here so call-sites stay free
//! of casts.

use std::time::Duration;

/// Normalise an angle in degrees into `(-180, 180]`.
///
/// Non-finite input collapses to `0.0`.
///
/// # Examples
/// ```
/// use whiskers::numeric::normalize_degrees;
/// assert!((normalize_degrees(270.0) + 90.0).abs() < 1e-4);
/// assert!((normalize_degrees(-180.0) - 180.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn normalize_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Signed sweep in degrees taking `from` to `to` the short way round.
///
/// A half turn resolves to `+180`.
#[must_use]
pub fn shortest_sweep(from: f32, to: f32) -> f32 {
    normalize_degrees(to - from)
}

/// Symmetric ease-in-out quadratic over `t` in `[0, 1]`.
///
/// Inputs outside the unit interval are clamped first.
///
/// # Examples
/// ```
/// use whiskers::numeric::ease_in_out_quad;
/// assert!((ease_in_out_quad(0.25) - 0.125).abs() < f32::EPSILON);
/// assert!((ease_in_out_quad(0.5) - 0.5).abs() < f32::EPSILON);
/// assert!((ease_in_out_quad(1.0) - 1.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let clamped = t.clamp(0.0, 1.0);
    if clamped < 0.5 {
        2.0 * clamped * clamped
    } else {
        -1.0 + (4.0 - 2.0 * clamped) * clamped
    }
}

/// Progress of `elapsed` through `total`, clamped into `[0, 1]`.
///
/// An empty (or negative) total counts as already complete.
#[must_use]
pub fn progress(elapsed: f32, total: f32) -> f32 {
    if total <= 0.0 {
        return 1.0;
    }
    (elapsed / total).min(1.0)
}

/// Express a [`Duration`] as floating-point milliseconds.
#[must_use]
pub fn millis_f32(duration: Duration) -> f32 {
    duration.as_secs_f32() * 1_000.0
}

/// Convert floating-point milliseconds into a [`Duration`].
///
/// Negative and non-finite values saturate to zero.
#[must_use]
pub fn duration_from_millis(millis: f32) -> Duration {
    if millis.is_finite() && millis > 0.0 {
        Duration::from_secs_f32(millis / 1_000.0)
    } else {
        Duration::ZERO
    }
}
