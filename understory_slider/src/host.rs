// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities consumed by the slider.
//!
//! The slider never touches a scene, a style system, or an event loop directly. Each
//! concern it needs from its environment is a small trait:
//!
//! - [`TrackGeometry`]: where the track is, in the same space as pointer positions.
//! - [`ListenerRegistry`]: paired add/remove of press, move, and release listeners.
//! - [`FrameScheduler`]: optional once-per-refresh scheduling for handle writes.
//! - [`SliderElement`]: the visible side effects (handle offset, active marker,
//!   transition toggle, reflected value) and target matching for handle filters.
//!
//! [`SliderHost`] is implemented for any type that provides all four.
//!
//! ## Expected element structure
//!
//! Hosts mapping a slider onto a class-based scene usually look for a sub-element
//! with [`TRACK_CLASS`] (falling back to the container itself) and a handle with one
//! of [`HANDLE_CLASSES`]. [`ACTIVE_CLASS`] is the conventional marker for
//! [`SliderElement::set_active`].

use kurbo::Rect;

/// Class of the optional track sub-element.
pub const TRACK_CLASS: &str = "track";

/// Classes identifying the handle sub-element, in lookup order.
pub const HANDLE_CLASSES: [&str; 2] = ["nub", "handle"];

/// Class marking the container while a drag is in progress.
pub const ACTIVE_CLASS: &str = "active";

/// Which listener a registration is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Press on the track, registered for the slider's lifetime.
    Press,
    /// Document-level pointer move, registered per drag session.
    Move,
    /// Document-level pointer release, registered per drag session.
    Release,
}

/// Opaque handle for a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Opaque handle for a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Positional style property that carries the handle offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Horizontal offset from the track's left edge.
    Left,
    /// Vertical offset from the track's top edge.
    Top,
}

impl Edge {
    /// Style property name.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
        }
    }
}

/// Geometry lookup for the track.
pub trait TrackGeometry {
    /// Bounds of the track in the coordinate space pointer events are reported in.
    fn track_bounds(&self) -> Rect;
}

/// Listener registration with explicit release.
///
/// Every id returned from [`add_listener`](Self::add_listener) is passed to
/// [`remove_listener`](Self::remove_listener) exactly once by the slider.
pub trait ListenerRegistry {
    /// Register a listener and return its id.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;
    /// Unregister a listener previously returned by [`add_listener`](Self::add_listener).
    fn remove_listener(&mut self, id: ListenerId);
}

/// Once-per-refresh scheduling for handle writes.
///
/// The default implementation schedules nothing, which makes every write immediate.
pub trait FrameScheduler {
    /// Request a callback on the next refresh.
    ///
    /// Return `None` to have the caller apply its work immediately instead.
    fn request_frame(&mut self) -> Option<FrameToken> {
        None
    }

    /// Cancel a callback returned by [`request_frame`](Self::request_frame).
    fn cancel_frame(&mut self, _token: FrameToken) {}
}

/// Visible side effects of a slider and target matching for handle filters.
pub trait SliderElement<K> {
    /// Whether `target` matches a host-defined `selector`.
    fn target_matches(&self, target: &K, selector: &str) -> bool;

    /// Write the handle offset as a percentage of the track extent.
    fn write_handle_offset(&mut self, edge: Edge, percent: f64);

    /// Add or remove the active marker on the container.
    fn set_active(&mut self, active: bool);

    /// Enable or disable smooth handle transitions.
    fn set_transition(&mut self, _enabled: bool) {}

    /// Reflect the current value back onto the container.
    fn reflect_value(&mut self, value: f64);
}

/// Everything a [`Slider`](crate::Slider) needs from its host.
pub trait SliderHost<K>: TrackGeometry + ListenerRegistry + FrameScheduler + SliderElement<K> {}

impl<K, T> SliderHost<K> for T where
    T: TrackGeometry + ListenerRegistry + FrameScheduler + SliderElement<K> + ?Sized
{
}
