// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener set owned by one drag session.

use smallvec::SmallVec;

use crate::host::{ListenerId, ListenerKind, ListenerRegistry};

/// Move and release listeners registered for the current drag.
///
/// [`open`](Self::open) registers exactly one move and one release listener;
/// [`drain`](Self::drain) unregisters exactly what was registered and leaves the
/// set empty, so draining twice is harmless.
#[derive(Clone, Debug, Default)]
pub(crate) struct DragSession {
    listeners: SmallVec<[ListenerId; 2]>,
}

impl DragSession {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register the move and release listeners for a new session.
    pub(crate) fn open<R: ListenerRegistry + ?Sized>(&mut self, registry: &mut R) {
        if !self.listeners.is_empty() {
            log::warn!("drag session opened while {} listeners were live", self.listeners.len());
            self.drain(registry);
        }
        self.listeners.push(registry.add_listener(ListenerKind::Move));
        self.listeners.push(registry.add_listener(ListenerKind::Release));
    }

    /// Unregister every listener in the set. Returns how many were removed.
    pub(crate) fn drain<R: ListenerRegistry + ?Sized>(&mut self, registry: &mut R) -> usize {
        let count = self.listeners.len();
        while let Some(id) = self.listeners.pop() {
            registry.remove_listener(id);
        }
        count
    }

    pub(crate) fn is_open(&self) -> bool {
        !self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Registry {
        next: u64,
        live: Vec<(ListenerId, ListenerKind)>,
    }

    impl ListenerRegistry for Registry {
        fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
            self.next += 1;
            let id = ListenerId(self.next);
            self.live.push((id, kind));
            id
        }

        fn remove_listener(&mut self, id: ListenerId) {
            let before = self.live.len();
            self.live.retain(|(live, _)| *live != id);
            assert_eq!(before, self.live.len() + 1, "removed unknown listener {id:?}");
        }
    }

    #[test]
    fn open_registers_move_and_release() {
        let mut registry = Registry::default();
        let mut session = DragSession::new();

        session.open(&mut registry);

        assert!(session.is_open());
        let kinds: Vec<_> = registry.live.iter().map(|(_, kind)| *kind).collect();
        assert_eq!(kinds, [ListenerKind::Move, ListenerKind::Release]);
    }

    #[test]
    fn drain_removes_exactly_what_was_added() {
        let mut registry = Registry::default();
        let mut session = DragSession::new();

        session.open(&mut registry);
        assert_eq!(session.drain(&mut registry), 2);
        assert!(registry.live.is_empty());
        assert!(!session.is_open());

        // Draining again touches nothing.
        assert_eq!(session.drain(&mut registry), 0);
    }

    #[test]
    fn reopening_does_not_leak() {
        let mut registry = Registry::default();
        let mut session = DragSession::new();

        session.open(&mut registry);
        session.open(&mut registry);

        assert_eq!(registry.live.len(), 2);
        session.drain(&mut registry);
        assert!(registry.live.is_empty());
    }
}
