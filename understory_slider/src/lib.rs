// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Slider: a headless draggable slider control.
//!
//! ## Overview
//!
//! The user drags a handle along a track to pick a value in a configured domain,
//! optionally snapped to a step. This crate implements the pointer-to-value mapping
//! and the drag lifecycle. It does not render, lay out, or own an event loop.
//!
//! A [`Slider`] is built from three pieces:
//!
//! - A **host** implementing [`SliderHost`](host::SliderHost): track geometry,
//!   listener registration, optional frame scheduling, and the visible side effects
//!   (handle offset, active marker, transition toggle, reflected value).
//! - A **notifier** implementing [`Notifier`](notify::Notifier) that receives
//!   `start`, `change`, and `end` events. Use [`NoNotifier`](notify::NoNotifier) when
//!   nothing listens, or [`Reactive`](notify::Reactive) for a small in-process hub.
//! - A resolved [`SliderConfig`](config::SliderConfig), merged from explicit
//!   [`SliderOptions`](config::SliderOptions) and the container's declarative
//!   [`Attributes`](config::Attributes).
//!
//! Numeric mapping lives in [`understory_scale`]; press/move/release bookkeeping lives
//! in [`understory_event_state::drag`].
//!
//! ## Lifecycle
//!
//! 1) Construction registers a press listener on the track and places the handle for
//!    the initial value.
//! 2) A primary press routed to [`Slider::on_pointer_down`] starts a drag: the
//!    container is marked active, the value is computed from the press position, and
//!    move/release listeners are registered.
//! 3) [`Slider::on_pointer_move`] recomputes the value and handle placement. `change`
//!    fires only when the value actually changes.
//! 4) [`Slider::on_pointer_up`] performs a final update, unregisters exactly the
//!    listeners from step 2, settles the handle, and emits `end`.
//!
//! [`Slider::set_value`] moves the handle without emitting `change`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_slider::config::{AttributePolicy, Attributes, SliderConfig, SliderOptions};
//! use understory_slider::event::PointerEvent;
//! use understory_slider::host::{
//!     Edge, FrameScheduler, ListenerId, ListenerKind, ListenerRegistry, SliderElement,
//!     TrackGeometry,
//! };
//! use understory_slider::Slider;
//!
//! #[derive(Default)]
//! struct Host {
//!     next: u64,
//!     live: usize,
//!     handle_left: f64,
//! }
//!
//! impl TrackGeometry for Host {
//!     fn track_bounds(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 200.0, 20.0)
//!     }
//! }
//!
//! impl ListenerRegistry for Host {
//!     fn add_listener(&mut self, _kind: ListenerKind) -> ListenerId {
//!         self.next += 1;
//!         self.live += 1;
//!         ListenerId(self.next)
//!     }
//!     fn remove_listener(&mut self, _id: ListenerId) {
//!         self.live -= 1;
//!     }
//! }
//!
//! impl FrameScheduler for Host {}
//!
//! impl SliderElement<u32> for Host {
//!     fn target_matches(&self, _target: &u32, _selector: &str) -> bool {
//!         false
//!     }
//!     fn write_handle_offset(&mut self, _edge: Edge, percent: f64) {
//!         self.handle_left = percent;
//!     }
//!     fn set_active(&mut self, _active: bool) {}
//!     fn reflect_value(&mut self, _value: f64) {}
//! }
//!
//! let options = SliderOptions::<u32> {
//!     range: Some((0.0, 10.0)),
//!     step: Some(2.0),
//!     ..SliderOptions::default()
//! };
//! let config = SliderConfig::resolve(options, &Attributes::default(), AttributePolicy::Strict)?;
//! let mut slider = Slider::without_notifier(Host::default(), config);
//!
//! // 94px into a 200px track is 4.7 in the domain, which snaps to 4.
//! slider.on_pointer_down(&PointerEvent::primary(1, (94.0, 10.0)));
//! assert_eq!(slider.value(), 4.0);
//! assert_eq!(slider.host().handle_left, 40.0);
//! assert_eq!(slider.host().live, 3);
//!
//! slider.on_pointer_up(&PointerEvent::primary(1, (94.0, 10.0)));
//! assert_eq!(slider.host().live, 1);
//! # Ok::<(), understory_slider::config::ConfigError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` float math via `libm`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Axis`](config::Axis),
//!   [`AttributePolicy`](config::AttributePolicy), and the scale types.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: drag start/end and ignored presses at
//! `debug`, per-move tracking and frame flushes at `trace`, and leniently accepted
//! malformed configuration at `warn`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod event;
pub mod host;
pub mod notify;
mod placement;
mod session;
mod slider;

pub use slider::Slider;
