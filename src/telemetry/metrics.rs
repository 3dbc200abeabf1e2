// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sampled performance metrics

use serde::{Deserialize, Serialize};

/// Metrics aggregated over the most recent completed sampling window.
///
/// `memory_used_mb == 0.0` means the host provided no memory introspection;
/// consumers must not treat it as pressure evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Frames observed per second over the last window.
    pub frames_per_second: u32,
    /// Process memory usage in MB, 0.0 when unknown.
    pub memory_used_mb: f64,
    /// Duration of the most recently reported load, in milliseconds.
    pub last_load_time_ms: f64,
}

impl PerformanceMetrics {
    /// Whether the host reported a usable memory reading.
    pub fn memory_known(&self) -> bool {
        self.memory_used_mb > 0.0
    }
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            frames_per_second: 0,
            memory_used_mb: 0.0,
            last_load_time_ms: 0.0,
        }
    }
}
