//! Integration tests for tweening and easing.

use std::time::Duration;

use dragsort_core::animation::{Easing, Tween, ease_in, ease_in_out, ease_out, linear};
use proptest::prelude::*;
use web_time::Instant;

const MS_100: Duration = Duration::from_millis(100);

#[test]
fn easing_functions_are_monotonic() {
    for easing in [linear, ease_in, ease_out, ease_in_out] {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = easing(t);
            assert!(v >= prev - 0.001, "easing should be monotonic at t={t}");
            prev = v;
        }
    }
}

#[test]
fn tween_settles_after_frames() {
    let t0 = Instant::now();
    let tween = Tween::new(0.0, -48.0, t0, MS_100).easing(Easing::EaseInOut.function());
    let mut now = t0;
    for _ in 0..7 {
        now += Duration::from_millis(16);
    }
    assert!(tween.is_complete_at(now), "7 frames of 16ms exceed 100ms");
    assert_eq!(tween.sample_at(now), -48.0);
}

#[test]
fn chained_retargets_never_jump() {
    let t0 = Instant::now();
    let mut tween = Tween::new(0.0, 48.0, t0, MS_100);
    let mut now = t0;
    let mut last = tween.sample_at(now);
    for (step, target) in [96.0, 0.0, 48.0, -48.0].into_iter().enumerate() {
        now += Duration::from_millis(30 + step as u64 * 5);
        let before = tween.sample_at(now);
        tween.retarget(target, now, MS_100);
        let after = tween.sample_at(now);
        assert!((before - after).abs() < 1e-3, "retarget must be continuous");
        assert!((after - last).abs() <= 96.0 + 1e-3);
        last = after;
    }
}

proptest! {
    #[test]
    fn tween_stays_between_endpoints(
        from in -500.0f32..500.0,
        to in -500.0f32..500.0,
        elapsed_ms in 0u64..400,
        easing in prop_oneof![
            Just(Easing::Linear),
            Just(Easing::EaseIn),
            Just(Easing::EaseOut),
            Just(Easing::EaseInOut),
        ],
    ) {
        let t0 = Instant::now();
        let tween = Tween::new(from, to, t0, MS_100).easing(easing.function());
        let v = tween.sample(Duration::from_millis(elapsed_ms));
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        prop_assert!(v >= lo - 1e-3 && v <= hi + 1e-3, "v={} outside [{}, {}]", v, lo, hi);
    }
}
