// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for scale and step invariants.
//!
//! 1. Round trip: a value read back through its own position is unchanged.
//! 2. Snap distance: a snapped value lies within half a step of the raw value.
//! 3. Snap grid: a snapped value is a multiple of the step (up to requantization).
//! 4. Clamp: clamped positions always land in `[0, 1]`; slider-level placement is
//!    covered in `understory_slider/tests/drag_properties.rs`.

use proptest::prelude::*;
use understory_scale::{LinearScale, SNAP_DECIMALS, Step, clamp_unit};

/// Slack for requantizing to three decimal places.
const QUANTUM: f64 = 1e-3;

fn arb_domain() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0..1000.0_f64, 1.0..1000.0_f64).prop_map(|(lower, span)| (lower, lower + span))
}

fn arb_step() -> impl Strategy<Value = f64> {
    (1..=500_u32).prop_map(|n| f64::from(n) / 100.0)
}

proptest! {
    #[test]
    fn round_trip_through_position(
        (lower, upper) in arb_domain(),
        p in 0.0..=1.0_f64,
    ) {
        let scale = LinearScale::new(lower, upper);
        let value = scale.value_at(p);
        let back = scale.value_at(scale.position_of(value));
        let tolerance = 1e-9 * (upper - lower).abs().max(1.0);
        prop_assert!((back - value).abs() <= tolerance, "{back} vs {value}");
    }

    #[test]
    fn snapped_value_is_within_half_a_step(
        size in arb_step(),
        value in -1000.0..1000.0_f64,
    ) {
        let step = Step::new(size).unwrap();
        let snapped = step.snap(value);
        prop_assert!(
            (snapped - value).abs() <= size / 2.0 + QUANTUM,
            "snap({value}) = {snapped} with step {size}"
        );
    }

    #[test]
    fn snapped_value_sits_on_the_step_grid(
        size in arb_step(),
        value in -1000.0..1000.0_f64,
    ) {
        let step = Step::new(size).unwrap();
        let snapped = step.snap(value);
        let multiples = (snapped / size).round();
        prop_assert!(
            (multiples * size - snapped).abs() <= QUANTUM,
            "{snapped} is not a multiple of {size}"
        );
        // Requantized to SNAP_DECIMALS places.
        let scaled = snapped * 10.0_f64.powi(SNAP_DECIMALS);
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn clamped_positions_stay_in_unit_range(raw in -10.0..10.0_f64) {
        let p = clamp_unit(raw);
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
