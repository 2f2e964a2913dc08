// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: small pointer interaction state machines.
//!
//! These helpers sit between raw pointer input and widget logic. They track what a
//! gesture is doing without knowing anything about the widget it targets.
//!
//! - [`drag`]: single-session press → move → release tracking with primary-button
//!   filtering, used by value controls such as sliders.
//!
//! Targets are generic (`K`), so callers can use whatever small handle identifies an
//! element in their scene (a box tree `NodeId`, an application id, and so on).
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
