// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input fed to a slider and lifecycle events emitted by it.

use kurbo::Point;
use understory_event_state::drag::{PointerButton, PointerId};

/// A pointer press, move, or release, as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Pointer identifier; `None` means the default pointer.
    pub pointer_id: Option<PointerId>,
    /// Button involved. Ignored for moves and releases.
    pub button: PointerButton,
    /// Element under the pointer.
    pub target: K,
    /// Pointer position, in the same space as
    /// [`TrackGeometry::track_bounds`](crate::host::TrackGeometry::track_bounds).
    pub position: Point,
}

impl<K> PointerEvent<K> {
    /// A primary-button event from the default pointer.
    pub fn primary(target: K, position: impl Into<Point>) -> Self {
        Self {
            pointer_id: None,
            button: PointerButton::Primary,
            target,
            position: position.into(),
        }
    }

    /// Replace the button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Replace the pointer id.
    #[must_use]
    pub fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = Some(pointer_id);
        self
    }
}

/// Whether the slider consumed a pointer event.
///
/// On [`Handled`](Self::Handled) hosts should prevent the default action and stop
/// propagation, the way a native control would.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// The slider acted on the event.
    Handled,
    /// The event did not concern the slider.
    Ignored,
}

impl EventResult {
    /// `true` for [`Handled`](Self::Handled).
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Name of a lifecycle event, for subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A drag started.
    Start,
    /// The dragged value changed.
    Change,
    /// A drag ended.
    End,
}

impl EventKind {
    /// Event name as used by string-keyed notification hubs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Change => "change",
            Self::End => "end",
        }
    }
}

/// Lifecycle event emitted by a slider.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderEvent<K> {
    /// A drag started on `target`.
    Start {
        /// Element the press landed on.
        target: K,
    },
    /// A drag produced a new value.
    Change {
        /// Normalized pointer position along the track, clamped to `[0, 1]`.
        position: f64,
        /// New value, snapped if a step is configured.
        value: f64,
    },
    /// A drag ended.
    End {
        /// Final value.
        value: f64,
    },
}

impl<K> SliderEvent<K> {
    /// Which kind of event this is.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Start { .. } => EventKind::Start,
            Self::Change { .. } => EventKind::Change,
            Self::End { .. } => EventKind::End,
        }
    }
}
