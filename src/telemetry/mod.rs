// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Live performance telemetry
//!
//! A background sampler closes a ~1 second window over host-reported frame
//! ticks and process memory, producing one `PerformanceMetrics` value per
//! window. Only the latest window is retained.

pub mod metrics;
pub mod sampler;

pub use metrics::*;
pub use sampler::*;
