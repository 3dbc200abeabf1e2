// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Quality tier ladder, settings derivation, and feedback adjustment
//!
//! `derive` maps a capability snapshot to an initial settings bundle;
//! `adjust` nudges the live bundle one step at a time from sampled metrics.

pub mod adjust;
pub mod derive;
pub mod settings;
pub mod tier;

pub use adjust::*;
pub use derive::*;
pub use settings::*;
pub use tier::*;
