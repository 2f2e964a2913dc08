// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-session drag state for one-dimensional value controls.
//!
//! A drag begins with a primary-button press, follows the pointer that started it,
//! and ends on release. Only one session exists at a time; presses that arrive while
//! a session is active are ignored rather than replacing it.
//!
//! ## Usage
//!
//! ```
//! use understory_event_state::drag::{DownResult, DragState, PointerButton};
//! use kurbo::Point;
//!
//! let mut state: DragState<u32> = DragState::new();
//!
//! // Primary press on element 7 starts a session.
//! let started = state.on_down(None, PointerButton::Primary, 7, Point::new(10.0, 5.0));
//! assert_eq!(started, DownResult::Started);
//!
//! // Moves update the tracked position.
//! let press = state.on_move(None, Point::new(40.0, 5.0)).unwrap();
//! assert_eq!(press.last_position, Point::new(40.0, 5.0));
//!
//! // Release hands back the finished press.
//! let done = state.on_up(None, Point::new(42.0, 6.0)).unwrap();
//! assert_eq!(done.target, 7);
//! assert!(!state.is_dragging());
//! ```
//!
//! ## Rules
//!
//! 1. **Primary only**: secondary (right) presses are ignored entirely, as are
//!    auxiliary and other buttons.
//! 2. **One session**: a press during an active session is ignored.
//! 3. **Owning pointer**: moves and releases from other pointers are ignored.
//! 4. **Idempotent release**: releasing while idle returns `None`.

use core::num::NonZeroU64;
use kurbo::Point;

/// Pointer identifier, shared with the other state helpers.
pub type PointerId = NonZeroU64;

const DEFAULT_POINTER: PointerId = NonZeroU64::MIN;

/// Which button produced a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button or a touch contact.
    Primary,
    /// Secondary button, usually the right mouse button.
    Secondary,
    /// Auxiliary button, usually the wheel.
    Auxiliary,
    /// Any other button, by host-specific code.
    Other(u8),
}

impl PointerButton {
    /// Map a legacy `which` code (1 = left, 2 = middle, 3 = right).
    pub fn from_which(which: u8) -> Self {
        match which {
            1 => Self::Primary,
            2 => Self::Auxiliary,
            3 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Why a press did not start a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The press did not use the primary button.
    Button(PointerButton),
    /// A session is already active.
    Busy,
}

/// Outcome of [`DragState::on_down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownResult {
    /// A new session started.
    Started,
    /// The press was ignored.
    Ignored(IgnoreReason),
}

/// The press that owns the active session.
#[derive(Clone, Debug, PartialEq)]
pub struct DragPress<K> {
    /// Pointer that started the session.
    pub pointer_id: PointerId,
    /// Element the press landed on.
    pub target: K,
    /// Position at press time.
    pub down_position: Point,
    /// Position of the most recent down, move, or up.
    pub last_position: Point,
}

/// Drag state machine: idle, or dragging with exactly one press.
#[derive(Clone, Debug)]
pub struct DragState<K> {
    active: Option<DragPress<K>>,
}

impl<K> DragState<K> {
    /// Create an idle state.
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Record a press.
    ///
    /// `pointer_id` defaults to 1 if `None`.
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        button: PointerButton,
        target: K,
        position: Point,
    ) -> DownResult {
        if button != PointerButton::Primary {
            return DownResult::Ignored(IgnoreReason::Button(button));
        }
        if self.active.is_some() {
            return DownResult::Ignored(IgnoreReason::Busy);
        }
        self.active = Some(DragPress {
            pointer_id: pointer_id.unwrap_or(DEFAULT_POINTER),
            target,
            down_position: position,
            last_position: position,
        });
        DownResult::Started
    }

    /// Track a move of the owning pointer.
    ///
    /// Returns the updated press, or `None` when idle or when the move came from a
    /// different pointer.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<&DragPress<K>> {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        let press = self.active.as_mut().filter(|p| p.pointer_id == pointer_id)?;
        press.last_position = position;
        Some(press)
    }

    /// End the session on release of the owning pointer.
    ///
    /// Returns the finished press, or `None` if nothing was active for that pointer.
    pub fn on_up(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<DragPress<K>> {
        let pointer_id = pointer_id.unwrap_or(DEFAULT_POINTER);
        if self.active.as_ref()?.pointer_id != pointer_id {
            return None;
        }
        let mut press = self.active.take()?;
        press.last_position = position;
        Some(press)
    }

    /// Drop the active session, if any.
    ///
    /// Returns `true` if a session was canceled.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Whether a session is active.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The press owning the active session.
    pub fn press(&self) -> Option<&DragPress<K>> {
        self.active.as_ref()
    }
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        Self::new()
    }
}
