//! Overscroll damping curve.
//!
//! Converts a raw overscroll distance into the offset that is actually
//! shown. Small drags move the surface almost one-to-one (scaled by the
//! damp factor); large drags flatten out so the visible travel never
//! exceeds `DAMP_FACTOR * max_extent`.
//!
//! # Example
//!
//! ```rust
//! use overscroll::damp;
//!
//! assert_eq!(damp(0.0, 1000), 0);
//! assert_eq!(damp(30_000.0, 1000), 70);
//! assert_eq!(damp(-30_000.0, 1000), -70);
//! ```

/// Fraction of the scrollable extent the surface may travel at most.
pub const DAMP_FACTOR: f32 = 0.07;

/// Cubic ease-out, `(x - 1)^3 + 1`.
#[inline]
fn influence_curve(x: f32) -> f32 {
    let t = x - 1.0;
    t * t * t + 1.0
}

/// Maps a raw overscroll `amount` to a damped offset, using [`DAMP_FACTOR`].
///
/// Returns 0 for a zero or NaN amount and for a non-positive `max_extent`.
#[inline]
pub fn damp(amount: f32, max_extent: i32) -> i32 {
    damp_with_factor(amount, max_extent, DAMP_FACTOR)
}

/// Same as [`damp`] with an explicit damp factor.
///
/// The normalized ratio `amount / max_extent` is shaped by the ease-out
/// curve, clamped to a magnitude of 1, then scaled by `factor` and
/// `max_extent`. Rounding is half-up.
pub fn damp_with_factor(amount: f32, max_extent: i32, factor: f32) -> i32 {
    if amount == 0.0 || amount.is_nan() || max_extent <= 0 {
        return 0;
    }

    let max = max_extent as f32;
    let ratio = amount / max;
    let shaped = ratio.signum() * influence_curve(ratio.abs());
    let clamped = shaped.clamp(-1.0, 1.0);

    (factor * clamped * max + 0.5).floor() as i32
}
