// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Publish/subscribe for slider lifecycle events.
//!
//! A slider is handed a [`Notifier`] at construction and never builds one itself.
//! [`NoNotifier`] stands in when nothing listens: subscriptions return `None` and
//! triggers go nowhere. [`Reactive`] is a small in-process hub for hosts that do not
//! bring their own.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_slider::event::{EventKind, SliderEvent};
//! use understory_slider::notify::{Notifier, Reactive};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut hub: Reactive<u32> = Reactive::new();
//!
//! let sink = Rc::clone(&seen);
//! let id = hub.on(EventKind::End, Box::new(move |ev: &SliderEvent<u32>| sink.borrow_mut().push(ev.clone())));
//! assert!(id.is_some());
//!
//! hub.trigger(&SliderEvent::End { value: 3.0 });
//! hub.trigger(&SliderEvent::Change { position: 0.5, value: 5.0 });
//! assert_eq!(*seen.borrow(), vec![SliderEvent::End { value: 3.0 }]);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::event::{EventKind, SliderEvent};

/// Callback invoked for each matching event.
pub type Callback<K> = Box<dyn FnMut(&SliderEvent<K>)>;

/// Handle for one subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Notification collaborator injected into a slider.
pub trait Notifier<K> {
    /// Deliver `event` to subscribers of its kind.
    fn trigger(&mut self, event: &SliderEvent<K>);

    /// Subscribe to events of `kind`.
    ///
    /// Returns `None` when the notifier does not support subscriptions.
    fn on(&mut self, kind: EventKind, callback: Callback<K>) -> Option<SubscriptionId>;

    /// Drop every subscription for `kind`.
    fn off(&mut self, kind: EventKind);

    /// Drop a single subscription. Returns `true` if it existed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// The absent notifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoNotifier;

impl<K> Notifier<K> for NoNotifier {
    fn trigger(&mut self, _event: &SliderEvent<K>) {}

    fn on(&mut self, _kind: EventKind, _callback: Callback<K>) -> Option<SubscriptionId> {
        None
    }

    fn off(&mut self, _kind: EventKind) {}

    fn unsubscribe(&mut self, _id: SubscriptionId) -> bool {
        false
    }
}

/// In-process publish/subscribe hub keyed by [`EventKind`].
///
/// Callbacks for a kind run in subscription order.
pub struct Reactive<K> {
    subscribers: HashMap<EventKind, Vec<(SubscriptionId, Callback<K>)>>,
    next_id: u64,
}

impl<K> Reactive<K> {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of live subscriptions for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}

impl<K> Default for Reactive<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Reactive<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts = f.debug_map();
        for (kind, subs) in &self.subscribers {
            counts.entry(kind, &subs.len());
        }
        counts.finish()
    }
}

impl<K> Notifier<K> for Reactive<K> {
    fn trigger(&mut self, event: &SliderEvent<K>) {
        if let Some(subs) = self.subscribers.get_mut(&event.kind()) {
            for (_, callback) in subs.iter_mut() {
                callback(event);
            }
        }
    }

    fn on(&mut self, kind: EventKind, callback: Callback<K>) -> Option<SubscriptionId> {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.entry(kind).or_default().push((id, callback));
        Some(id)
    }

    fn off(&mut self, kind: EventKind) {
        self.subscribers.remove(&kind);
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for subs in self.subscribers.values_mut() {
            if let Some(index) = subs.iter().position(|(sub, _)| *sub == id) {
                drop(subs.remove(index));
                return true;
            }
        }
        false
    }
}
