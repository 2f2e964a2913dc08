// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider control.
//!
//! ## States
//!
//! - **Idle**: only the track press listener is registered.
//! - **Dragging**: entered on an accepted primary press. Move and release listeners are
//!   registered for the duration of the drag.
//! - **Released**: the release performs a final update, drains the session's listeners,
//!   settles the handle, and returns to Idle.
//!
//! ## Value pipeline
//!
//! ```text
//! pointer ──track bounds──▶ position ∈ [0, 1] ──scale──▶ raw value ──step──▶ value
//!                               │                                              │
//!                               └──── (snap off) ─────▶ handle ◀── (snap on) ───┘
//! ```
//!
//! The handle offset is always clamped into `[0, 1]` before it is written. A value
//! with no finite position (NaN configuration, degenerate domain) keeps the handle at
//! the start of the track.

use understory_event_state::drag::{DownResult, DragState};
use understory_scale::{LinearScale, Step, clamp_unit};

use crate::config::{Axis, HandleFilter, SliderConfig};
use crate::event::{EventKind, EventResult, PointerEvent, SliderEvent};
use crate::host::{FrameToken, ListenerId, ListenerKind, SliderHost};
use crate::notify::{Callback, NoNotifier, Notifier, SubscriptionId};
use crate::placement::Placement;
use crate::session::DragSession;

/// A draggable slider bound to a host.
///
/// `K` identifies elements (press targets and handle filters), `H` provides the host
/// capabilities, and `N` receives lifecycle events.
#[derive(Debug)]
pub struct Slider<K, H, N = NoNotifier> {
    host: H,
    notifier: N,
    scale: LinearScale,
    step: Option<Step>,
    axis: Axis,
    handle: Option<HandleFilter<K>>,
    snap: bool,
    animate: bool,
    value: f64,
    last_emitted: Option<f64>,
    drag: DragState<K>,
    session: DragSession,
    placement: Placement,
    press_listener: Option<ListenerId>,
}

impl<K, H> Slider<K, H, NoNotifier>
where
    K: Clone + PartialEq,
    H: SliderHost<K>,
{
    /// Create a slider that emits no events.
    pub fn without_notifier(host: H, config: SliderConfig<K>) -> Self {
        Self::new(host, NoNotifier, config)
    }
}

impl<K, H, N> Slider<K, H, N>
where
    K: Clone + PartialEq,
    H: SliderHost<K>,
    N: Notifier<K>,
{
    /// Create a slider.
    ///
    /// Registers the track press listener and places the handle for the initial value
    /// without emitting any event.
    pub fn new(mut host: H, notifier: N, config: SliderConfig<K>) -> Self {
        let press_listener = host.add_listener(ListenerKind::Press);
        let mut slider = Self {
            host,
            notifier,
            scale: config.scale,
            step: config.step,
            axis: config.axis,
            handle: config.handle,
            snap: config.snap,
            animate: config.animate,
            value: config.value,
            last_emitted: None,
            drag: DragState::new(),
            session: DragSession::new(),
            placement: Placement::new(),
            press_listener: Some(press_listener),
        };
        slider.set_value(config.value);
        log::debug!(
            "slider attached: domain {:?}, step {:?}, axis {:?}",
            slider.scale.domain(),
            slider.step.map(|s| s.size()),
            slider.axis
        );
        slider
    }

    /// Handle a press on the track.
    ///
    /// Starts a drag for a primary press whose target passes the handle filter.
    /// Everything else, including right-button presses and presses during an active
    /// drag, is ignored without side effects.
    pub fn on_pointer_down(&mut self, event: &PointerEvent<K>) -> EventResult {
        if let Some(filter) = &self.handle
            && !filter.accepts(&self.host, &event.target)
        {
            log::debug!("slider press ignored: target does not match handle filter");
            return EventResult::Ignored;
        }
        let started = self.drag.on_down(
            event.pointer_id,
            event.button,
            event.target.clone(),
            event.position,
        );
        if let DownResult::Ignored(reason) = started {
            log::debug!("slider press ignored: {reason:?}");
            return EventResult::Ignored;
        }

        self.host.set_active(true);
        if self.animate {
            self.host.set_transition(false);
        }
        self.track(event);
        self.session.open(&mut self.host);
        log::debug!("slider drag started at value {}", self.value);

        self.notifier.trigger(&SliderEvent::Start {
            target: event.target.clone(),
        });
        EventResult::Handled
    }

    /// Handle a pointer move during a drag.
    pub fn on_pointer_move(&mut self, event: &PointerEvent<K>) -> EventResult {
        if self.drag.on_move(event.pointer_id, event.position).is_none() {
            return EventResult::Ignored;
        }
        self.track(event);
        EventResult::Handled
    }

    /// Handle a pointer release.
    ///
    /// Ends the drag: final update, listeners drained, handle settled on the value's
    /// resting position, `end` emitted. A release with no drag in progress is ignored.
    pub fn on_pointer_up(&mut self, event: &PointerEvent<K>) -> EventResult {
        if self.drag.on_up(event.pointer_id, event.position).is_none() {
            if !self.drag.is_dragging() {
                let stale = self.session.drain(&mut self.host);
                if stale > 0 {
                    log::warn!("slider drained {stale} listeners outside a drag");
                }
            }
            return EventResult::Ignored;
        }

        self.host.set_active(false);
        self.track(event);
        self.session.drain(&mut self.host);

        self.placement.cancel(&mut self.host);
        if self.animate {
            self.host.set_transition(true);
        }
        self.write_handle(self.position());
        log::debug!("slider drag ended at value {}", self.value);

        self.notifier.trigger(&SliderEvent::End { value: self.value });
        EventResult::Handled
    }

    /// Apply a coalesced handle write scheduled for `token`.
    ///
    /// Tokens that were superseded or canceled are ignored.
    pub fn on_frame(&mut self, token: FrameToken) {
        if let Some(position) = self.placement.take_ready(token) {
            log::trace!("slider frame {token:?} places handle at {position}");
            self.write_handle(position);
        }
    }

    /// The last computed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value programmatically.
    ///
    /// The handle moves to the value's clamped position. No `change` event is emitted.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.host.reflect_value(value);
        self.place_handle(self.position());
    }

    /// Resting handle position for the current value, clamped to `[0, 1]`.
    pub fn position(&self) -> f64 {
        handle_position(self.scale.position_of(self.value))
    }

    /// Handle position waiting for the next frame, if any.
    pub fn pending_position(&self) -> Option<f64> {
        self.placement.pending_position()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Axis of travel.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Domain mapping.
    pub fn scale(&self) -> LinearScale {
        self.scale
    }

    /// Snapping granularity, if any.
    pub fn step(&self) -> Option<Step> {
        self.step
    }

    /// Subscribe to lifecycle events.
    ///
    /// Returns `None` when the notifier does not support subscriptions.
    pub fn on(&mut self, kind: EventKind, callback: Callback<K>) -> Option<SubscriptionId> {
        self.notifier.on(kind, callback)
    }

    /// Drop every subscription for `kind`.
    pub fn off(&mut self, kind: EventKind) {
        self.notifier.off(kind);
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The notifier, mutably.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Unregister every listener the slider holds and hand back the host.
    ///
    /// A drag in progress is abandoned without emitting `end`.
    pub fn detach(mut self) -> H {
        if self.session.is_open() {
            log::debug!("slider detached mid-drag");
        }
        self.drag.cancel();
        self.session.drain(&mut self.host);
        self.placement.cancel(&mut self.host);
        if let Some(id) = self.press_listener.take() {
            self.host.remove_listener(id);
        }
        self.host
    }

    /// Recompute value and handle placement from a pointer event.
    fn track(&mut self, event: &PointerEvent<K>) {
        let position = self.relative_position(event);
        let raw = self.scale.value_at(position);
        let (value, display) = match self.step {
            Some(step) => {
                let snapped = step.snap(raw);
                let display = if self.snap {
                    self.scale.position_of(snapped)
                } else {
                    position
                };
                (snapped, display)
            }
            None => (raw, position),
        };

        self.place_handle(handle_position(display));
        self.value = value;
        self.host.reflect_value(value);
        log::trace!("slider tracked position {position} -> value {value}");

        if self.last_emitted.is_none_or(|last| !same_value(last, value)) {
            self.last_emitted = Some(value);
            self.notifier.trigger(&SliderEvent::Change { position, value });
        }
    }

    /// Pointer position along the track, clamped to `[0, 1]`.
    ///
    /// A track with no extent maps every pointer to `0`.
    fn relative_position(&self, event: &PointerEvent<K>) -> f64 {
        let bounds = self.host.track_bounds();
        let extent = self.axis.extent(bounds);
        if extent.is_nan() || extent <= 0.0 {
            return 0.0;
        }
        let offset = self.axis.coordinate(event.position) - self.axis.origin(bounds);
        clamp_unit(offset / extent)
    }

    fn place_handle(&mut self, position: f64) {
        if let Some(position) = self.placement.schedule(&mut self.host, position) {
            self.write_handle(position);
        }
    }

    fn write_handle(&mut self, position: f64) {
        self.host.write_handle_offset(self.axis.edge(), position * 100.0);
    }
}

/// Clamp a position for the handle style; NaN maps to the track start.
fn handle_position(position: f64) -> f64 {
    let position = clamp_unit(position);
    if position.is_nan() { 0.0 } else { position }
}

/// Value equality for change deduplication; NaN matches NaN.
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
