// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The live settings bundle read by render subsystems

use serde::{Deserialize, Serialize};

use super::tier::QualityTier;

/// How aggressively downstream consumers should cache rendered assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStrategy {
    Minimal,
    Moderate,
    Aggressive,
}

impl std::fmt::Display for CacheStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheStrategy::Minimal => write!(f, "minimal"),
            CacheStrategy::Moderate => write!(f, "moderate"),
            CacheStrategy::Aggressive => write!(f, "aggressive"),
        }
    }
}

/// Tunable parameters that render subsystems read from the optimizer.
///
/// Created once by derivation, then mutated only by the feedback adjuster.
/// Observers receive snapshots and must not mutate them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSettings {
    /// Active render quality tier.
    pub video_quality_tier: QualityTier,
    /// Worker pool size, never above 8 or the logical core count.
    pub worker_pool_size: usize,
    /// Concurrent task ceiling, derived from the memory ceiling.
    pub max_concurrent_tasks: usize,
    /// Transfer chunk size in bytes, keyed to the quality tier.
    pub chunk_size_bytes: usize,
    /// Whether parallel processing paths are enabled at all.
    pub parallel_processing_enabled: bool,
    /// Asset cache aggressiveness.
    pub cache_strategy: CacheStrategy,
    /// Image compression quality (0-100), keyed to the quality tier.
    pub image_compression_quality: u8,
}

impl OptimizationSettings {
    /// Target render resolution for the active tier.
    pub fn resolution(&self) -> (u32, u32) {
        self.video_quality_tier.resolution()
    }

    /// Target frame rate for the active tier.
    pub fn frame_rate(&self) -> u32 {
        self.video_quality_tier.frame_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptimizationSettings {
        OptimizationSettings {
            video_quality_tier: QualityTier::High,
            worker_pool_size: 4,
            max_concurrent_tasks: 8,
            chunk_size_bytes: 4096,
            parallel_processing_enabled: true,
            cache_strategy: CacheStrategy::Moderate,
            image_compression_quality: 85,
        }
    }

    #[test]
    fn test_tier_lookups_follow_active_tier() {
        let settings = sample();
        assert_eq!(settings.resolution(), (1280, 720));
        assert_eq!(settings.frame_rate(), 30);

        let ultra = OptimizationSettings {
            video_quality_tier: QualityTier::Ultra,
            ..settings
        };
        assert_eq!(ultra.resolution(), (1920, 1080));
        assert_eq!(ultra.frame_rate(), 60);
    }

    #[test]
    fn test_cache_strategy_display() {
        assert_eq!(format!("{}", CacheStrategy::Minimal), "minimal");
        assert_eq!(format!("{}", CacheStrategy::Moderate), "moderate");
        assert_eq!(format!("{}", CacheStrategy::Aggressive), "aggressive");
    }

    #[test]
    fn test_serialization_round_trip() {
        let settings = sample();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: OptimizationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"video_quality_tier\":\"high\""));
        assert!(json.contains("\"cache_strategy\":\"moderate\""));
    }
}
