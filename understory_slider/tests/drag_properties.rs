// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests driving a slider with arbitrary pointer paths.
//!
//! 1. Clamp: every handle offset written to the host lies in `[0, 100]` percent.
//! 2. Dedup: no two consecutive `change` events carry the same value.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use proptest::prelude::*;
use understory_slider::Slider;
use understory_slider::config::{AttributePolicy, Attributes, SliderConfig, SliderOptions};
use understory_slider::event::{EventKind, PointerEvent, SliderEvent};
use understory_slider::host::{
    Edge, FrameScheduler, ListenerId, ListenerKind, ListenerRegistry, SliderElement, TrackGeometry,
};
use understory_slider::notify::Reactive;

/// Host with a 200px track at x = 100..300 that records every handle write.
#[derive(Debug, Default)]
struct Recorder {
    next_listener: u64,
    writes: Vec<f64>,
}

impl TrackGeometry for Recorder {
    fn track_bounds(&self) -> Rect {
        Rect::new(100.0, 0.0, 300.0, 20.0)
    }
}

impl ListenerRegistry for Recorder {
    fn add_listener(&mut self, _kind: ListenerKind) -> ListenerId {
        self.next_listener += 1;
        ListenerId(self.next_listener)
    }

    fn remove_listener(&mut self, _id: ListenerId) {}
}

impl FrameScheduler for Recorder {}

impl SliderElement<u32> for Recorder {
    fn target_matches(&self, _target: &u32, _selector: &str) -> bool {
        false
    }

    fn write_handle_offset(&mut self, _edge: Edge, percent: f64) {
        self.writes.push(percent);
    }

    fn set_active(&mut self, _active: bool) {}

    fn reflect_value(&mut self, _value: f64) {}
}

fn arb_options() -> impl Strategy<Value = SliderOptions<u32>> {
    (
        -500.0..500.0_f64,
        1.0..1000.0_f64,
        prop::option::of(1..=50_u32),
        any::<bool>(),
        -2000.0..2000.0_f64,
    )
        .prop_map(|(lower, span, step_percent, snap, value)| SliderOptions {
            range: Some((lower, lower + span)),
            step: step_percent.map(|n| span * f64::from(n) / 100.0),
            value: Some(value),
            snap: Some(snap),
            ..SliderOptions::default()
        })
}

/// Pointer x coordinates, reaching well outside the track on both sides.
fn arb_path() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-400.0..800.0_f64, 1..40)
}

proptest! {
    #[test]
    fn handle_stays_on_track_and_changes_are_distinct(
        options in arb_options(),
        path in arb_path(),
        programmatic in -5000.0..5000.0_f64,
    ) {
        let config = SliderConfig::resolve(options, &Attributes::default(), AttributePolicy::Strict)
            .map_err(|err| TestCaseError::fail(format!("{err}")))?;
        let mut slider = Slider::new(Recorder::default(), Reactive::new(), config);

        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        slider.on(
            EventKind::Change,
            Box::new(move |ev: &SliderEvent<u32>| {
                if let SliderEvent::Change { value, .. } = ev {
                    sink.borrow_mut().push(*value);
                }
            }),
        );

        let (first, rest) = path.split_first().unwrap();
        slider.on_pointer_down(&PointerEvent::primary(1, (*first, 10.0)));
        for x in rest {
            slider.on_pointer_move(&PointerEvent::primary(1, (*x, 10.0)));
        }
        let last = path.last().copied().unwrap_or(*first);
        slider.on_pointer_up(&PointerEvent::primary(1, (last, 10.0)));
        slider.set_value(programmatic);

        for percent in &slider.host().writes {
            prop_assert!((0.0..=100.0).contains(percent), "handle written at {percent}%");
        }
        for pair in changes.borrow().windows(2) {
            prop_assert!(pair[0] != pair[1], "repeated change {}", pair[0]);
        }
    }
}
