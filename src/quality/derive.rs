// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Initial settings derivation from a capability snapshot

use crate::probe::{Capabilities, ConnectionClass};

use super::settings::{CacheStrategy, OptimizationSettings};
use super::tier::QualityTier;

/// Worker pool ceiling regardless of core count.
pub const MAX_WORKER_POOL: usize = 8;

/// Memory budget per concurrent task in GB.
const TASK_MEMORY_BUDGET_GB: f64 = 0.5;

/// Map a capability snapshot to an initial settings bundle.
///
/// Pure and idempotent: the same snapshot always yields the same settings.
pub fn derive(caps: &Capabilities) -> OptimizationSettings {
    let tier = derive_tier(caps);

    let worker_pool_size = caps.logical_cores.min(MAX_WORKER_POOL);
    let max_concurrent_tasks =
        ((caps.memory_ceiling_gb / TASK_MEMORY_BUDGET_GB).floor() as usize).max(1);
    let parallel_processing_enabled = caps.logical_cores >= 4 && caps.memory_ceiling_gb >= 2.0;

    let cache_strategy = if caps.memory_ceiling_gb >= 8.0 {
        CacheStrategy::Aggressive
    } else if caps.memory_ceiling_gb >= 4.0 {
        CacheStrategy::Moderate
    } else {
        CacheStrategy::Minimal
    };

    OptimizationSettings {
        video_quality_tier: tier,
        worker_pool_size,
        max_concurrent_tasks,
        chunk_size_bytes: tier.chunk_size_bytes(),
        parallel_processing_enabled,
        cache_strategy,
        image_compression_quality: tier.image_compression_quality(),
    }
}

/// Tier selection: hardware ladder first, then connection overrides.
fn derive_tier(caps: &Capabilities) -> QualityTier {
    let raw = if caps.memory_ceiling_gb >= 8.0 && caps.logical_cores >= 8 {
        QualityTier::Ultra
    } else if caps.memory_ceiling_gb >= 4.0 && caps.logical_cores >= 4 {
        QualityTier::High
    } else if caps.memory_ceiling_gb >= 2.0 && caps.logical_cores >= 2 {
        QualityTier::Medium
    } else {
        QualityTier::Low
    };

    if caps.connection_class.is_constrained() {
        return QualityTier::Low;
    }

    // 3g can't sustain ultra bitrates; one step down, never below high.
    if caps.connection_class == ConnectionClass::Cell3g && raw == QualityTier::Ultra {
        return QualityTier::High;
    }

    raw
}
