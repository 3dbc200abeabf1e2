// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Feedback adjustment of live settings from sampled metrics
//!
//! Pure decision logic: one invocation per completed sampling window, at
//! most one rule fires, and tier moves are single-step so a noisy window
//! cannot swing quality across the whole ladder.

use crate::probe::Capabilities;
use crate::telemetry::PerformanceMetrics;

use super::settings::OptimizationSettings;
use super::tier::QualityTier;

/// Below this frame rate the active tier is stepped down.
pub const MIN_SMOOTH_FPS: u32 = 30;

/// At or above this frame rate an upgrade becomes eligible.
pub const UPGRADE_FPS: u32 = 55;

/// Fraction of the memory ceiling that counts as pressure.
pub const MEMORY_PRESSURE_RATIO: f64 = 0.8;

/// Fraction of the memory ceiling below which there is upgrade headroom.
pub const MEMORY_HEADROOM_RATIO: f64 = 0.5;

/// The worker pool never shrinks below this.
pub const MIN_WORKER_POOL: usize = 2;

/// Why an adjustment fired, for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustReason {
    LowFrameRate,
    MemoryPressure,
    Headroom,
}

impl std::fmt::Display for AdjustReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustReason::LowFrameRate => write!(f, "low frame rate"),
            AdjustReason::MemoryPressure => write!(f, "memory pressure"),
            AdjustReason::Headroom => write!(f, "performance headroom"),
        }
    }
}

/// A settings change produced by one adjustment window.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub settings: OptimizationSettings,
    pub reason: AdjustReason,
}

/// Evaluate the adjustment rules against one window of metrics.
///
/// Precedence is fixed: frame-rate downgrade, then memory pool shrink, then
/// headroom upgrade. The first matching rule fires and the rest are
/// skipped. Returns `None` when nothing changed, so callers know whether
/// observers need to be notified.
pub fn adjust(
    current: &OptimizationSettings,
    metrics: &PerformanceMetrics,
    caps: &Capabilities,
) -> Option<Adjustment> {
    // Rule 1: render cadence below the smoothness floor.
    if metrics.frames_per_second < MIN_SMOOTH_FPS {
        if let Some(lower) = current.video_quality_tier.step_down() {
            let mut settings = current.clone();
            settings.video_quality_tier = lower;
            return Some(Adjustment {
                settings,
                reason: AdjustReason::LowFrameRate,
            });
        }
    }

    // Rule 2: memory pressure shrinks the worker pool. A 0.0 reading means
    // the host has no memory introspection and never counts as pressure.
    let pressure_floor_mb = caps.memory_ceiling_mb() * MEMORY_PRESSURE_RATIO;
    if metrics.memory_known()
        && metrics.memory_used_mb > pressure_floor_mb
        && current.worker_pool_size > MIN_WORKER_POOL
    {
        let mut settings = current.clone();
        settings.worker_pool_size -= 1;
        return Some(Adjustment {
            settings,
            reason: AdjustReason::MemoryPressure,
        });
    }

    // Rule 3: sustained headroom steps the tier up. Low never upgrades
    // automatically; a device that derived (or was forced) low re-enters
    // the ladder only through a fresh derivation.
    let headroom_ceiling_mb = caps.memory_ceiling_mb() * MEMORY_HEADROOM_RATIO;
    if metrics.frames_per_second >= UPGRADE_FPS
        && metrics.memory_used_mb < headroom_ceiling_mb
        && matches!(
            current.video_quality_tier,
            QualityTier::Medium | QualityTier::High
        )
    {
        if let Some(higher) = current.video_quality_tier.step_up() {
            let mut settings = current.clone();
            settings.video_quality_tier = higher;
            return Some(Adjustment {
                settings,
                reason: AdjustReason::Headroom,
            });
        }
    }

    None
}
