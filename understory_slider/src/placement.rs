// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescing of handle writes onto the host's refresh cycle.

use crate::host::{FrameScheduler, FrameToken};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    token: FrameToken,
    position: f64,
}

/// At most one pending handle write.
///
/// Scheduling cancels whatever was pending before requesting a new frame, so the
/// last position scheduled before a refresh wins.
#[derive(Clone, Debug, Default)]
pub(crate) struct Placement {
    pending: Option<Pending>,
}

impl Placement {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Schedule a write of `position`.
    ///
    /// Returns `Some(position)` when the host does not schedule frames and the write
    /// must be applied now.
    pub(crate) fn schedule<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        position: f64,
    ) -> Option<f64> {
        self.cancel(scheduler);
        match scheduler.request_frame() {
            Some(token) => {
                self.pending = Some(Pending { token, position });
                None
            }
            None => Some(position),
        }
    }

    /// Take the pending write if `token` is the frame it was scheduled for.
    pub(crate) fn take_ready(&mut self, token: FrameToken) -> Option<f64> {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                Some(pending.position)
            }
            _ => None,
        }
    }

    /// Cancel the pending write, if any, and return the position it would have written.
    pub(crate) fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> Option<f64> {
        let pending = self.pending.take()?;
        scheduler.cancel_frame(pending.token);
        Some(pending.position)
    }

    pub(crate) fn pending_position(&self) -> Option<f64> {
        self.pending.map(|p| p.position)
    }
}
