// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Scale: linear domain scales and step snapping for value controls.
//!
//! ## Overview
//!
//! A value control (slider, scrubber, knob) tracks a *normalized position* in `[0, 1]`
//! along some extent and reports a *value* in a configured domain. This crate holds the
//! numeric half of that contract and nothing else:
//!
//! - [`LinearScale`]: maps a normalized position to a domain value and back.
//! - [`Step`]: snaps a domain value to the nearest multiple of a step size, then
//!   requantizes to [`SNAP_DECIMALS`] places so repeated snapping does not drift.
//! - [`clamp_unit`] and [`quantize`]: the small helpers the two above are built from.
//!
//! It does not know about pointers, tracks, or handles. Callers convert pointer
//! coordinates into a normalized position first (see `understory_slider`).
//!
//! ## Minimal example
//!
//! ```
//! use understory_scale::{LinearScale, Step, clamp_unit};
//!
//! let scale = LinearScale::new(0.0, 10.0);
//! let step = Step::new(2.0).unwrap();
//!
//! let raw = scale.value_at(0.47);
//! assert!((raw - 4.7).abs() < 1e-9);
//!
//! let snapped = step.snap(raw);
//! assert_eq!(snapped, 4.0);
//!
//! // Where the handle goes once snapped.
//! assert_eq!(clamp_unit(scale.position_of(snapped)), 0.4);
//! ```
//!
//! ## Degenerate domains
//!
//! [`LinearScale::new`] accepts any pair of bounds. A domain with `lower == upper` has no
//! inverse, so [`LinearScale::position_of`] yields a non-finite result for it. Use
//! [`LinearScale::try_new`] to reject such domains up front.
//!
//! ## Features
//!
//! - `std` (default): use `std` float intrinsics.
//! - `libm`: `no_std` float math through `kurbo`'s `libm` support.
//! - `serde`: derive `Serialize`/`Deserialize` for [`LinearScale`] and [`Step`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Number of decimal places a snapped value is requantized to.
pub const SNAP_DECIMALS: i32 = 3;

/// Errors reported by [`LinearScale::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// One of the bounds is NaN or infinite.
    #[error("domain bounds must be finite, got ({lower}, {upper})")]
    NonFiniteBound {
        /// Lower bound as given.
        lower: f64,
        /// Upper bound as given.
        upper: f64,
    },
    /// Both bounds are equal, so positions cannot be recovered from values.
    #[error("domain collapses to the single value {value}")]
    DegenerateDomain {
        /// The shared bound.
        value: f64,
    },
}

/// A linear mapping between a domain `(lower, upper)` and normalized positions in `[0, 1]`.
///
/// `lower` may be greater than `upper`; the mapping simply runs in reverse.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearScale {
    lower: f64,
    upper: f64,
}

impl LinearScale {
    /// Create a scale over `(lower, upper)` without validation.
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Create a scale, rejecting non-finite bounds and degenerate domains.
    pub fn try_new(lower: f64, upper: f64) -> Result<Self, ScaleError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(ScaleError::NonFiniteBound { lower, upper });
        }
        if lower == upper {
            return Err(ScaleError::DegenerateDomain { value: lower });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound of the domain.
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the domain.
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// The domain as a `(lower, upper)` pair.
    pub const fn domain(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Domain value at normalized `position`.
    ///
    /// `position` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn value_at(&self, position: f64) -> f64 {
        self.lower + position * (self.upper - self.lower)
    }

    /// Normalized position of a domain `value`.
    ///
    /// The result is not clamped. Callers placing a handle should pass it through
    /// [`clamp_unit`] first.
    pub fn position_of(&self, value: f64) -> f64 {
        (value - self.lower) / (self.upper - self.lower)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Snapping granularity for domain values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(f64);

impl Step {
    /// Create a step of `size`.
    ///
    /// Returns `None` unless `size` is finite and strictly positive.
    pub fn new(size: f64) -> Option<Self> {
        (size.is_finite() && size > 0.0).then_some(Self(size))
    }

    /// The step size.
    pub const fn size(&self) -> f64 {
        self.0
    }

    /// Round `value` to the nearest multiple of the step, requantized to
    /// [`SNAP_DECIMALS`] places.
    ///
    /// Multiples are taken from zero, not from the lower bound of any domain.
    pub fn snap(&self, value: f64) -> f64 {
        quantize((value / self.0).round() * self.0, SNAP_DECIMALS)
    }
}

/// Round `value` to `decimals` decimal places.
pub fn quantize(value: f64, decimals: i32) -> f64 {
    let factor = 10.0_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Clamp `position` into `[0, 1]`.
///
/// NaN is returned unchanged.
pub fn clamp_unit(position: f64) -> f64 {
    position.clamp(0.0, 1.0)
}
