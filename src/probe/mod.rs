// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host capability probing for adaptive behavior
//!
//! Produces a one-shot `Capabilities` snapshot from host introspection.
//! Every signal that cannot be read falls back to a documented default,
//! so downstream consumers always receive a fully-populated value.

pub mod capabilities;
pub mod source;

pub use capabilities::*;
pub use source::*;
