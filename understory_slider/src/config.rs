// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration: explicit options, declarative attributes, and their merge.
//!
//! Explicit [`SliderOptions`] always win. Fields left unset fall back to the
//! container's declarative [`Attributes`], then to defaults: domain `(0, 1)`, no
//! step, initial value at the lower bound, horizontal axis, snapping while
//! dragging, no transitions.
//!
//! Malformed attribute text is handled according to [`AttributePolicy`].

use alloc::string::{String, ToString};
use core::str::FromStr;

use kurbo::{Point, Rect};
use understory_scale::{LinearScale, ScaleError, Step};

use crate::host::{Edge, SliderElement};

/// Attribute names read from the container.
pub mod attr {
    /// Initial value.
    pub const VALUE: &str = "value";
    /// Lower domain bound.
    pub const MIN: &str = "min";
    /// Upper domain bound.
    pub const MAX: &str = "max";
    /// Step size.
    pub const STEP: &str = "step";
    /// Axis, `x` or `y`.
    pub const AXIS: &str = "axis";
}

/// Errors from [`SliderConfig::resolve`] and [`Axis::from_str`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An attribute did not parse as a number.
    #[error("attribute `{name}` is not a number: {raw:?}")]
    InvalidNumber {
        /// Attribute name.
        name: &'static str,
        /// Attribute text as read.
        raw: String,
    },
    /// A numeric setting was NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NonFinite {
        /// Setting name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Axis text was neither `x` nor `y`.
    #[error("unknown axis {0:?}, expected `x` or `y`")]
    InvalidAxis(String),
    /// Only one of the `min` / `max` attributes was given.
    #[error("attribute `{present}` needs its counterpart `{missing}`")]
    IncompleteRange {
        /// Attribute that was present.
        present: &'static str,
        /// Attribute that was absent.
        missing: &'static str,
    },
    /// Step size was zero, negative, or not finite.
    #[error("step must be a positive finite number, got {0}")]
    InvalidStep(f64),
    /// The domain cannot be inverted.
    #[error("invalid range: {0}")]
    Range(#[from] ScaleError),
}

/// How malformed configuration is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributePolicy {
    /// Malformed numbers become NaN and propagate into computed values; an
    /// unusable step is dropped and an unknown axis falls back to [`Axis::X`].
    /// A lone `min` or `max` is ignored.
    #[default]
    Lenient,
    /// Malformed numbers, unknown axes, unusable steps, a lone `min` or `max`,
    /// and degenerate or non-finite domains are rejected.
    Strict,
}

/// Direction of travel along the track. Fixed for a slider's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal: pointer x, track left edge and width, `left` offset.
    #[default]
    X,
    /// Vertical: pointer y, track top edge and height, `top` offset.
    Y,
}

impl Axis {
    /// Style edge the handle offset is written to.
    pub const fn edge(self) -> Edge {
        match self {
            Self::X => Edge::Left,
            Self::Y => Edge::Top,
        }
    }

    /// Pointer coordinate along this axis.
    pub const fn coordinate(self, point: Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// Leading edge of `bounds` along this axis.
    pub const fn origin(self, bounds: Rect) -> f64 {
        match self {
            Self::X => bounds.x0,
            Self::Y => bounds.y0,
        }
    }

    /// Extent of `bounds` along this axis.
    pub fn extent(self, bounds: Rect) -> f64 {
        match self {
            Self::X => bounds.width(),
            Self::Y => bounds.height(),
        }
    }
}

impl FromStr for Axis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            other => Err(ConfigError::InvalidAxis(other.to_string())),
        }
    }
}

/// Which sub-elements may start a drag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandleFilter<K> {
    /// Only presses on exactly this element.
    Element(K),
    /// Only presses on elements the host matches against this rule.
    Selector(String),
}

impl<K: PartialEq> HandleFilter<K> {
    /// Whether a press on `target` passes the filter.
    pub fn accepts<E>(&self, element: &E, target: &K) -> bool
    where
        E: SliderElement<K> + ?Sized,
    {
        match self {
            Self::Element(handle) => handle == target,
            Self::Selector(selector) => element.target_matches(target, selector),
        }
    }
}

/// Explicit configuration. Unset fields fall back to [`Attributes`].
#[derive(Clone, Debug)]
pub struct SliderOptions<K> {
    /// Domain `(lower, upper)`.
    pub range: Option<(f64, f64)>,
    /// Snapping granularity.
    pub step: Option<f64>,
    /// Initial value.
    pub value: Option<f64>,
    /// Axis of travel.
    pub axis: Option<Axis>,
    /// Restricts which sub-element may start a drag.
    pub handle: Option<HandleFilter<K>>,
    /// Whether the handle follows the step grid while dragging (`true`) or only
    /// snaps into place on release (`false`).
    pub snap: Option<bool>,
    /// Whether to suspend transitions during a drag and restore them on release.
    pub animate: Option<bool>,
}

impl<K> Default for SliderOptions<K> {
    fn default() -> Self {
        Self {
            range: None,
            step: None,
            value: None,
            axis: None,
            handle: None,
            snap: None,
            animate: None,
        }
    }
}

/// Raw declarative attributes read once from the container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    /// `value` attribute.
    pub value: Option<String>,
    /// `min` attribute.
    pub min: Option<String>,
    /// `max` attribute.
    pub max: Option<String>,
    /// `step` attribute.
    pub step: Option<String>,
    /// `axis` attribute.
    pub axis: Option<String>,
}

impl Attributes {
    /// Read all known attributes through a host lookup.
    ///
    /// ```
    /// use understory_slider::config::{Attributes, attr};
    ///
    /// let attrs = Attributes::read(|name| (name == attr::MAX).then(|| "50".into()));
    /// assert_eq!(attrs.max.as_deref(), Some("50"));
    /// assert!(attrs.min.is_none());
    /// ```
    pub fn read(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            value: lookup(attr::VALUE),
            min: lookup(attr::MIN),
            max: lookup(attr::MAX),
            step: lookup(attr::STEP),
            axis: lookup(attr::AXIS),
        }
    }
}

/// Fully resolved configuration.
#[derive(Clone, Debug)]
pub struct SliderConfig<K> {
    /// Domain mapping.
    pub scale: LinearScale,
    /// Snapping granularity, if any.
    pub step: Option<Step>,
    /// Initial value.
    pub value: f64,
    /// Axis of travel.
    pub axis: Axis,
    /// Handle filter, if any.
    pub handle: Option<HandleFilter<K>>,
    /// Snap the handle while dragging.
    pub snap: bool,
    /// Toggle transitions around a drag.
    pub animate: bool,
}

impl<K> Default for SliderConfig<K> {
    fn default() -> Self {
        Self {
            scale: LinearScale::default(),
            step: None,
            value: 0.0,
            axis: Axis::X,
            handle: None,
            snap: true,
            animate: false,
        }
    }
}

impl<K> SliderConfig<K> {
    /// Merge explicit options over declarative attributes.
    ///
    /// ```
    /// use understory_slider::config::{AttributePolicy, Attributes, SliderConfig, SliderOptions};
    ///
    /// let attrs = Attributes {
    ///     min: Some("0".into()),
    ///     max: Some("10".into()),
    ///     step: Some("2".into()),
    ///     ..Attributes::default()
    /// };
    /// let options = SliderOptions::<u32> { value: Some(4.0), ..SliderOptions::default() };
    ///
    /// let config = SliderConfig::resolve(options, &attrs, AttributePolicy::Strict).unwrap();
    /// assert_eq!(config.scale.domain(), (0.0, 10.0));
    /// assert_eq!(config.step.map(|s| s.size()), Some(2.0));
    /// assert_eq!(config.value, 4.0);
    /// ```
    pub fn resolve(
        options: SliderOptions<K>,
        attributes: &Attributes,
        policy: AttributePolicy,
    ) -> Result<Self, ConfigError> {
        let (lower, upper) = match options.range {
            Some(range) => range,
            None => attribute_range(attributes, policy)?.unwrap_or((0.0, 1.0)),
        };
        let scale = match policy {
            AttributePolicy::Strict => LinearScale::try_new(lower, upper)?,
            AttributePolicy::Lenient => LinearScale::new(lower, upper),
        };

        let step_size = match options.step {
            Some(size) => Some(size),
            None => number(attr::STEP, attributes.step.as_deref(), policy)?,
        };
        let step = match step_size {
            None => None,
            Some(size) => match (Step::new(size), policy) {
                (Some(step), _) => Some(step),
                (None, AttributePolicy::Strict) => return Err(ConfigError::InvalidStep(size)),
                (None, AttributePolicy::Lenient) => {
                    if size != 0.0 {
                        log::warn!("slider step {size} is unusable, snapping disabled");
                    }
                    None
                }
            },
        };

        let value = match options.value {
            Some(value) => value,
            None => number(attr::VALUE, attributes.value.as_deref(), policy)?
                .unwrap_or_else(|| scale.lower()),
        };
        if policy == AttributePolicy::Strict && !value.is_finite() {
            return Err(ConfigError::NonFinite {
                name: attr::VALUE,
                value,
            });
        }

        let axis_attr = attributes.axis.as_deref().filter(|raw| !raw.trim().is_empty());
        let axis = match (options.axis, axis_attr) {
            (Some(axis), _) => axis,
            (None, None) => Axis::X,
            (None, Some(raw)) => match (raw.parse::<Axis>(), policy) {
                (Ok(axis), _) => axis,
                (Err(err), AttributePolicy::Strict) => return Err(err),
                (Err(_), AttributePolicy::Lenient) => {
                    log::warn!("slider axis {raw:?} is unknown, using x");
                    Axis::X
                }
            },
        };

        Ok(Self {
            scale,
            step,
            value,
            axis,
            handle: options.handle,
            snap: options.snap.unwrap_or(true),
            animate: options.animate.unwrap_or(false),
        })
    }
}

/// Domain from the `min` / `max` attributes, only when both are present.
fn attribute_range(
    attributes: &Attributes,
    policy: AttributePolicy,
) -> Result<Option<(f64, f64)>, ConfigError> {
    let min = number(attr::MIN, attributes.min.as_deref(), policy)?;
    let max = number(attr::MAX, attributes.max.as_deref(), policy)?;
    let (present, missing) = match (min, max) {
        (Some(lower), Some(upper)) => return Ok(Some((lower, upper))),
        (None, None) => return Ok(None),
        (Some(_), None) => (attr::MIN, attr::MAX),
        (None, Some(_)) => (attr::MAX, attr::MIN),
    };
    match policy {
        AttributePolicy::Strict => Err(ConfigError::IncompleteRange { present, missing }),
        AttributePolicy::Lenient => {
            log::warn!("slider attribute `{present}` ignored without `{missing}`");
            Ok(None)
        }
    }
}

/// Parse an optional numeric attribute. Blank text counts as absent.
fn number(
    name: &'static str,
    raw: Option<&str>,
    policy: AttributePolicy,
) -> Result<Option<f64>, ConfigError> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => match policy {
            AttributePolicy::Strict => Err(ConfigError::InvalidNumber {
                name,
                raw: raw.to_string(),
            }),
            AttributePolicy::Lenient => {
                log::warn!("slider attribute `{name}` is not a number: {raw:?}");
                Ok(Some(f64::NAN))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(min: &str, max: &str) -> Attributes {
        Attributes {
            min: Some(min.into()),
            max: Some(max.into()),
            ..Attributes::default()
        }
    }

    #[test]
    fn defaults_without_configuration() {
        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &Attributes::default(), AttributePolicy::Lenient)
                .unwrap();

        assert_eq!(config.scale.domain(), (0.0, 1.0));
        assert!(config.step.is_none());
        assert_eq!(config.value, 0.0);
        assert_eq!(config.axis, Axis::X);
        assert!(config.handle.is_none());
        assert!(config.snap);
        assert!(!config.animate);
    }

    #[test]
    fn attributes_fill_unset_options() {
        let attributes = Attributes {
            value: Some("30".into()),
            step: Some("5".into()),
            axis: Some("y".into()),
            ..attrs("10", "90")
        };

        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &attributes, AttributePolicy::Strict).unwrap();

        assert_eq!(config.scale.domain(), (10.0, 90.0));
        assert_eq!(config.step.map(|s| s.size()), Some(5.0));
        assert_eq!(config.value, 30.0);
        assert_eq!(config.axis, Axis::Y);
    }

    #[test]
    fn options_override_attributes() {
        let attributes = Attributes {
            value: Some("30".into()),
            step: Some("5".into()),
            ..attrs("10", "90")
        };
        let options = SliderOptions::<u32> {
            range: Some((0.0, 100.0)),
            step: Some(10.0),
            value: Some(70.0),
            axis: Some(Axis::Y),
            snap: Some(false),
            animate: Some(true),
            ..SliderOptions::default()
        };

        let config = SliderConfig::resolve(options, &attributes, AttributePolicy::Strict).unwrap();

        assert_eq!(config.scale.domain(), (0.0, 100.0));
        assert_eq!(config.step.map(|s| s.size()), Some(10.0));
        assert_eq!(config.value, 70.0);
        assert_eq!(config.axis, Axis::Y);
        assert!(!config.snap);
        assert!(config.animate);
    }

    #[test]
    fn initial_value_defaults_to_lower_bound() {
        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &attrs("-5", "5"), AttributePolicy::Strict)
                .unwrap();
        assert_eq!(config.value, -5.0);
    }

    #[test]
    fn lenient_propagates_nan() {
        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &attrs("abc", "10"), AttributePolicy::Lenient)
                .unwrap();

        assert!(config.scale.lower().is_nan());
        assert_eq!(config.scale.upper(), 10.0);
        assert!(config.value.is_nan());
    }

    #[test]
    fn lenient_drops_unusable_step_and_axis() {
        let attributes = Attributes {
            step: Some("0".into()),
            axis: Some("diagonal".into()),
            ..Attributes::default()
        };
        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &attributes, AttributePolicy::Lenient).unwrap();

        assert!(config.step.is_none());
        assert_eq!(config.axis, Axis::X);

        // A malformed step parses to NaN, which is equally unusable.
        let attributes = Attributes {
            step: Some("two".into()),
            ..Attributes::default()
        };
        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &attributes, AttributePolicy::Lenient).unwrap();
        assert!(config.step.is_none());
    }

    #[test]
    fn strict_rejects_malformed_numbers() {
        let err = SliderConfig::<u32>::resolve(
            SliderOptions::default(),
            &attrs("abc", "10"),
            AttributePolicy::Strict,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: attr::MIN,
                raw: "abc".into(),
            }
        );
    }

    #[test]
    fn strict_rejects_degenerate_range() {
        let err = SliderConfig::<u32>::resolve(
            SliderOptions::default(),
            &attrs("3", "3"),
            AttributePolicy::Strict,
        )
        .unwrap_err();

        assert_eq!(err, ConfigError::Range(ScaleError::DegenerateDomain { value: 3.0 }));
    }

    #[test]
    fn strict_rejects_bad_step_axis_and_value() {
        let options = SliderOptions::<u32> {
            step: Some(-1.0),
            ..SliderOptions::default()
        };
        let err = SliderConfig::resolve(options, &Attributes::default(), AttributePolicy::Strict).unwrap_err();
        assert_eq!(err, ConfigError::InvalidStep(-1.0));

        let attributes = Attributes {
            axis: Some("z".into()),
            ..Attributes::default()
        };
        let err = SliderConfig::<u32>::resolve(SliderOptions::default(), &attributes, AttributePolicy::Strict)
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidAxis("z".into()));

        let options = SliderOptions::<u32> {
            value: Some(f64::INFINITY),
            ..SliderOptions::default()
        };
        let err = SliderConfig::resolve(options, &Attributes::default(), AttributePolicy::Strict).unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { name: "value", .. }));
    }

    #[test]
    fn lone_bound_keeps_default_domain() {
        let only_min = Attributes {
            min: Some("50".into()),
            ..Attributes::default()
        };
        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &only_min, AttributePolicy::Lenient).unwrap();
        assert_eq!(config.scale.domain(), (0.0, 1.0));
        assert_eq!(config.value, 0.0);

        let only_max = Attributes {
            max: Some("50".into()),
            ..Attributes::default()
        };
        let config: SliderConfig<u32> =
            SliderConfig::resolve(SliderOptions::default(), &only_max, AttributePolicy::Lenient).unwrap();
        assert_eq!(config.scale.domain(), (0.0, 1.0));
    }

    #[test]
    fn strict_rejects_lone_bound() {
        let only_min = Attributes {
            min: Some("50".into()),
            ..Attributes::default()
        };
        let err = SliderConfig::<u32>::resolve(SliderOptions::default(), &only_min, AttributePolicy::Strict)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::IncompleteRange {
                present: attr::MIN,
                missing: attr::MAX,
            }
        );

        // An explicit range makes the attributes irrelevant.
        let options = SliderOptions::<u32> {
            range: Some((0.0, 100.0)),
            ..SliderOptions::default()
        };
        let config = SliderConfig::resolve(options, &only_min, AttributePolicy::Strict).unwrap();
        assert_eq!(config.scale.domain(), (0.0, 100.0));
    }

    #[test]
    fn blank_attributes_count_as_absent() {
        let attributes = Attributes {
            value: Some(String::new()),
            step: Some("  ".into()),
            axis: Some(String::new()),
            ..attrs("10", "20")
        };
        for policy in [AttributePolicy::Lenient, AttributePolicy::Strict] {
            let config: SliderConfig<u32> =
                SliderConfig::resolve(SliderOptions::default(), &attributes, policy).unwrap();
            assert_eq!(config.value, 10.0);
            assert!(config.step.is_none());
            assert_eq!(config.axis, Axis::X);
        }

        // A blank bound leaves the other one alone, which is a lone bound.
        let err = SliderConfig::<u32>::resolve(SliderOptions::default(), &attrs("", "5"), AttributePolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, ConfigError::IncompleteRange { present: "max", .. }));
    }

    #[test]
    fn axis_parses_and_maps_geometry() {
        assert_eq!(" x ".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("Y".parse::<Axis>(), Ok(Axis::Y));
        assert!("horizontal".parse::<Axis>().is_err());

        let bounds = Rect::new(10.0, 20.0, 110.0, 60.0);
        let point = Point::new(35.0, 45.0);
        assert_eq!(Axis::X.edge(), Edge::Left);
        assert_eq!(Axis::X.coordinate(point), 35.0);
        assert_eq!(Axis::X.origin(bounds), 10.0);
        assert_eq!(Axis::X.extent(bounds), 100.0);
        assert_eq!(Axis::Y.edge(), Edge::Top);
        assert_eq!(Axis::Y.coordinate(point), 45.0);
        assert_eq!(Axis::Y.origin(bounds), 20.0);
        assert_eq!(Axis::Y.extent(bounds), 40.0);
    }
}
