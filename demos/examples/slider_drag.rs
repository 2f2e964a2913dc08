// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a slider from a scripted pointer gesture over a small class-based scene.
//!
//! This example shows how a host:
//! - resolves the track and handle sub-elements by class,
//! - reads declarative attributes into a `SliderConfig`,
//! - routes pointer events only while the matching listeners are registered,
//! - flushes coalesced handle writes once per frame.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_drag`

use std::collections::HashMap;

use kurbo::{Point, Rect};
use simplelog::{Config, LevelFilter, SimpleLogger};
use understory_slider::Slider;
use understory_slider::config::{AttributePolicy, Attributes, HandleFilter, SliderConfig, SliderOptions};
use understory_slider::event::{EventKind, PointerEvent, SliderEvent};
use understory_slider::host::{
    ACTIVE_CLASS, Edge, FrameScheduler, FrameToken, HANDLE_CLASSES, ListenerId, ListenerKind,
    ListenerRegistry, SliderElement, TRACK_CLASS, TrackGeometry,
};
use understory_slider::notify::Reactive;

type ElementId = usize;

#[derive(Debug)]
struct Element {
    classes: Vec<&'static str>,
    bounds: Rect,
    attributes: HashMap<&'static str, String>,
    style: HashMap<&'static str, String>,
}

impl Element {
    fn new(classes: &[&'static str], bounds: Rect) -> Self {
        Self {
            classes: classes.to_vec(),
            bounds,
            attributes: HashMap::new(),
            style: HashMap::new(),
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

/// A flat scene: the container is element 0, everything else is its child.
#[derive(Debug)]
struct Scene {
    elements: Vec<Element>,
    track: ElementId,
    handle: ElementId,
    /// Style property the handle offset is written to, fixed by the slider's axis.
    edge: Edge,
    listeners: HashMap<ListenerId, ListenerKind>,
    next_listener: u64,
    pending_frame: Option<FrameToken>,
    next_frame: u64,
}

impl Scene {
    fn new(elements: Vec<Element>) -> Self {
        let find = |class: &str| elements.iter().position(|e| e.has_class(class));
        let track = find(TRACK_CLASS).unwrap_or(0);
        let handle = HANDLE_CLASSES.into_iter().find_map(find).unwrap_or(0);
        Self {
            elements,
            track,
            handle,
            edge: Edge::Left,
            listeners: HashMap::new(),
            next_listener: 0,
            pending_frame: None,
            next_frame: 0,
        }
    }

    fn attributes(&self) -> Attributes {
        let container = &self.elements[0];
        Attributes::read(|name| container.attributes.get(name).cloned())
    }

    fn listening(&self, kind: ListenerKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    fn hit(&self, point: Point) -> ElementId {
        // Last element wins: children are painted over the container.
        self.elements
            .iter()
            .rposition(|e| e.bounds.contains(point))
            .unwrap_or(0)
    }
}

impl TrackGeometry for Scene {
    fn track_bounds(&self) -> Rect {
        self.elements[self.track].bounds
    }
}

impl ListenerRegistry for Scene {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, kind);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}

impl FrameScheduler for Scene {
    fn request_frame(&mut self) -> Option<FrameToken> {
        self.next_frame += 1;
        let token = FrameToken(self.next_frame);
        self.pending_frame = Some(token);
        Some(token)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.pending_frame == Some(token) {
            self.pending_frame = None;
        }
    }
}

impl SliderElement<ElementId> for Scene {
    /// Supports comma-separated class selectors such as `.track, .nub`.
    fn target_matches(&self, target: &ElementId, selector: &str) -> bool {
        let Some(element) = self.elements.get(*target) else {
            return false;
        };
        selector
            .split(',')
            .map(|part| part.trim().trim_start_matches('.'))
            .any(|class| element.has_class(class))
    }

    fn write_handle_offset(&mut self, edge: Edge, percent: f64) {
        let handle = self.handle;
        self.elements[handle]
            .style
            .insert(edge.property(), format!("{percent:.1}%"));
    }

    fn set_active(&mut self, active: bool) {
        let container = &mut self.elements[0];
        container.classes.retain(|c| *c != ACTIVE_CLASS);
        if active {
            container.classes.push(ACTIVE_CLASS);
        }
    }

    fn set_transition(&mut self, enabled: bool) {
        let handle = self.handle;
        let transition = if enabled {
            format!("{} 120ms ease-out", self.edge.property())
        } else {
            "none".to_string()
        };
        self.elements[handle].style.insert("transition", transition);
    }

    fn reflect_value(&mut self, value: f64) {
        self.elements[0].attributes.insert("value", value.to_string());
    }
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).ok();

    let mut container = Element::new(&["slider"], Rect::new(0.0, 0.0, 240.0, 40.0));
    container.attributes.insert("min", "0".into());
    container.attributes.insert("max", "100".into());
    container.attributes.insert("step", "5".into());
    container.attributes.insert("value", "20".into());
    let mut scene = Scene::new(vec![
        container,
        Element::new(&[TRACK_CLASS], Rect::new(20.0, 10.0, 220.0, 30.0)),
        Element::new(&["nub"], Rect::new(55.0, 5.0, 65.0, 35.0)),
    ]);

    let options = SliderOptions {
        handle: Some(HandleFilter::Selector(".track, .nub".into())),
        animate: Some(true),
        ..SliderOptions::default()
    };
    let config = match SliderConfig::resolve(options, &scene.attributes(), AttributePolicy::Strict) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad slider configuration: {err}");
            return;
        }
    };

    scene.edge = config.axis.edge();
    let mut slider = Slider::new(scene, Reactive::new(), config);
    for kind in [EventKind::Start, EventKind::Change, EventKind::End] {
        slider.on(
            kind,
            Box::new(|event: &SliderEvent<ElementId>| match event {
                SliderEvent::Start { target } => println!("start on element {target}"),
                SliderEvent::Change { position, value } => {
                    println!("change: position {position:.3}, value {value}");
                }
                SliderEvent::End { value } => println!("end at {value}"),
            }),
        );
    }
    flush_frame(&mut slider);
    println!("initial value {}", slider.value());

    // Press on the track, drag right past its end, come back, release.
    let gesture = [
        (ListenerKind::Press, Point::new(80.0, 20.0)),
        (ListenerKind::Move, Point::new(82.0, 20.0)),
        (ListenerKind::Move, Point::new(131.0, 22.0)),
        (ListenerKind::Move, Point::new(300.0, 25.0)),
        (ListenerKind::Move, Point::new(171.0, 25.0)),
        (ListenerKind::Release, Point::new(171.0, 25.0)),
    ];
    for (kind, point) in gesture {
        if !slider.host().listening(kind) {
            println!("no {kind:?} listener, dropping event");
            continue;
        }
        let event = PointerEvent::primary(slider.host().hit(point), point);
        let result = match kind {
            ListenerKind::Press => slider.on_pointer_down(&event),
            ListenerKind::Move => slider.on_pointer_move(&event),
            ListenerKind::Release => slider.on_pointer_up(&event),
        };
        log::debug!("{kind:?} at ({:.0}, {:.0}) -> {result:?}", point.x, point.y);
        flush_frame(&mut slider);
    }

    // A release after the drag finds no listener and never reaches the slider.
    assert!(!slider.host().listening(ListenerKind::Release));

    slider.set_value(35.0);
    flush_frame(&mut slider);

    let scene = slider.detach();
    let handle = &scene.elements[scene.handle];
    assert_eq!(
        handle.style.get("transition").map(String::as_str),
        Some("left 120ms ease-out")
    );
    println!(
        "final: value attr {:?}, handle left {:?}, listeners left {}",
        scene.elements[0].attributes.get("value"),
        handle.style.get("left"),
        scene.listeners.len()
    );
}

fn flush_frame(slider: &mut Slider<ElementId, Scene, Reactive<ElementId>>) {
    if let Some(token) = slider.host_mut().pending_frame.take() {
        slider.on_frame(token);
    }
}
