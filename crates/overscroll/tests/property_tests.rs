#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

use std::time::Duration;

use overscroll::{SpringAnimation, SpringForce, damp};
use proptest::prelude::*;

// =============================================================================
// Damping curve properties
// =============================================================================

fn bound(max_extent: i32) -> i32 {
    (0.07 * max_extent as f32).round() as i32
}

proptest! {
    #[test]
    fn damp_zero_is_zero(max_extent in 1i32..100_000) {
        prop_assert_eq!(damp(0.0, max_extent), 0);
    }

    #[test]
    fn damp_zero_extent_is_zero(amount in -1e9f32..1e9) {
        prop_assert_eq!(damp(amount, 0), 0);
    }

    #[test]
    fn damp_negative_extent_is_zero(amount in -1e9f32..1e9, max_extent in -100_000i32..0) {
        prop_assert_eq!(damp(amount, max_extent), 0);
    }

    #[test]
    fn damp_never_exceeds_bound(amount in -1e9f32..1e9, max_extent in 1i32..100_000) {
        let out = damp(amount, max_extent);
        prop_assert!(
            out.abs() <= bound(max_extent),
            "damp({}, {}) = {} exceeds {}",
            amount, max_extent, out, bound(max_extent)
        );
    }

    #[test]
    fn damp_preserves_sign(amount in -1e9f32..1e9, max_extent in 1i32..100_000) {
        let out = damp(amount, max_extent);
        if amount > 0.0 {
            prop_assert!(out >= 0, "damp({}, {}) = {}", amount, max_extent, out);
        } else if amount < 0.0 {
            prop_assert!(out <= 0, "damp({}, {}) = {}", amount, max_extent, out);
        }
    }

    #[test]
    fn damp_monotonic_in_magnitude(
        a in 0.0f32..1e7,
        b in 0.0f32..1e7,
        max_extent in 1i32..100_000,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(damp(lo, max_extent) <= damp(hi, max_extent));
        prop_assert!(damp(-lo, max_extent) >= damp(-hi, max_extent));
    }

    #[test]
    fn damp_saturates_past_extent(ratio in 1.0f32..1000.0, max_extent in 1i32..100_000) {
        let out = damp(ratio * max_extent as f32, max_extent);
        let expected = (0.07 * max_extent as f32 + 0.5).floor() as i32;
        prop_assert!((out - expected).abs() <= 1, "got {}, expected {}", out, expected);
    }
}

// =============================================================================
// Spring animation properties
// =============================================================================

proptest! {
    #[test]
    fn release_settles_to_rest(start in -500.0f32..500.0, fps in 30u32..144) {
        let mut anim = SpringAnimation::new(SpringForce::default(), 1.0);
        anim.start(start, 0.0);

        let frame = Duration::from_secs_f64(1.0 / f64::from(fps));
        let mut frames = 0;
        while anim.is_running() {
            anim.advance(frame);
            frames += 1;
            prop_assert!(frames < 2000, "never settled from {}", start);
        }
        prop_assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn absorb_settles_to_rest(velocity in -20_000.0f32..20_000.0) {
        let mut anim = SpringAnimation::new(SpringForce::default(), 1.0);
        anim.start(0.0, velocity);

        let frame = Duration::from_millis(16);
        for _ in 0..600 {
            if anim.advance(frame).is_none() {
                break;
            }
            prop_assert!(anim.value().is_finite());
        }
        prop_assert!(!anim.is_running());
        prop_assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn step_stays_finite(
        stiffness in 0.0f32..5000.0,
        damping in 0.0f32..5.0,
        pos in -1e5f32..1e5,
        vel in -1e5f32..1e5,
    ) {
        let force = SpringForce::new(stiffness, damping);
        let (mut p, mut v) = (pos, vel);
        for _ in 0..120 {
            (p, v) = force.step(p, v, 1.0 / 60.0);
            prop_assert!(p.is_finite() && v.is_finite(), "p={} v={}", p, v);
        }
    }
}
