// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use proptest::prelude::*;

use revo::probe::{Capabilities, ConnectionClass};
use revo::quality::{adjust, derive, AdjustReason, QualityTier, MIN_WORKER_POOL};
use revo::telemetry::PerformanceMetrics;

fn caps(cores: usize, memory_gb: f64) -> Capabilities {
    Capabilities {
        logical_cores: cores,
        memory_ceiling_gb: memory_gb,
        pixel_ratio: 1.0,
        connection_class: ConnectionClass::Cell4g,
        gpu_descriptor: "test".to_string(),
    }
}

fn metrics(fps: u32, memory_mb: f64) -> PerformanceMetrics {
    PerformanceMetrics {
        frames_per_second: fps,
        memory_used_mb: memory_mb,
        last_load_time_ms: 0.0,
    }
}

#[test]
fn test_low_fps_downgrades_from_ultra() {
    let capabilities = caps(8, 8.0);
    let current = derive(&capabilities);
    assert_eq!(current.video_quality_tier, QualityTier::Ultra);

    let adjustment = adjust(&current, &metrics(20, 1000.0), &capabilities).unwrap();
    assert_eq!(adjustment.settings.video_quality_tier, QualityTier::High);
    assert_eq!(adjustment.settings.worker_pool_size, current.worker_pool_size);
}

#[test]
fn test_memory_pressure_shrinks_pool_without_touching_tier() {
    let capabilities = caps(8, 4.0);
    let mut current = derive(&capabilities);
    current.video_quality_tier = QualityTier::High;
    current.worker_pool_size = 6;

    // 3500MB > 80% of 4096MB
    let adjustment = adjust(&current, &metrics(45, 3500.0), &capabilities).unwrap();
    assert_eq!(adjustment.reason, AdjustReason::MemoryPressure);
    assert_eq!(adjustment.settings.worker_pool_size, 5);
    assert_eq!(adjustment.settings.video_quality_tier, QualityTier::High);
}

#[test]
fn test_idle_band_never_adjusts() {
    let capabilities = caps(8, 4.0);
    let current = derive(&capabilities);

    for fps in 30..55 {
        let result = adjust(&current, &metrics(fps, 1000.0), &capabilities);
        assert!(result.is_none(), "unexpected adjustment at fps={}", fps);
    }
}

#[test]
fn test_convergence_from_ultra_to_low() {
    // A persistently slow device walks the whole ladder one step at a time.
    let capabilities = caps(8, 8.0);
    let mut current = derive(&capabilities);
    let mut transitions = Vec::new();

    while let Some(adjustment) = adjust(&current, &metrics(10, 1000.0), &capabilities) {
        transitions.push(adjustment.settings.video_quality_tier);
        current = adjustment.settings;
    }

    assert_eq!(
        transitions,
        vec![QualityTier::High, QualityTier::Medium, QualityTier::Low]
    );
    // Once at low, the same metrics are a no-op forever.
    assert!(adjust(&current, &metrics(10, 1000.0), &capabilities).is_none());
}

#[test]
fn test_upgrade_stops_at_ultra() {
    let capabilities = caps(8, 8.0);
    let mut current = derive(&capabilities);
    current.video_quality_tier = QualityTier::Medium;

    let mut steps = 0;
    while let Some(adjustment) = adjust(&current, &metrics(60, 1000.0), &capabilities) {
        current = adjustment.settings;
        steps += 1;
        assert!(steps <= 2, "upgrade loop did not converge");
    }
    assert_eq!(current.video_quality_tier, QualityTier::Ultra);
}

fn tier_index(tier: QualityTier) -> i32 {
    match tier {
        QualityTier::Low => 0,
        QualityTier::Medium => 1,
        QualityTier::High => 2,
        QualityTier::Ultra => 3,
    }
}

proptest! {
    // Tiers never move more than one ordinal step per invocation.
    #[test]
    fn prop_single_step_tiers(
        cores in 1usize..=32,
        memory in 0.5f64..64.0,
        fps in 0u32..240,
        memory_mb in 0.0f64..100_000.0,
    ) {
        let capabilities = caps(cores, memory);
        let current = derive(&capabilities);
        if let Some(adjustment) = adjust(&current, &metrics(fps, memory_mb), &capabilities) {
            let delta = tier_index(adjustment.settings.video_quality_tier)
                - tier_index(current.video_quality_tier);
            prop_assert!(delta.abs() <= 1);
        }
    }

    // The worker pool stays within its bounds through repeated adjustment.
    #[test]
    fn prop_worker_pool_bounds(
        cores in 2usize..=32,
        memory in 0.5f64..64.0,
        windows in proptest::collection::vec((0u32..240, 0.0f64..100_000.0), 1..50),
    ) {
        let capabilities = caps(cores, memory);
        let mut current = derive(&capabilities);
        for (fps, memory_mb) in windows {
            if let Some(adjustment) = adjust(&current, &metrics(fps, memory_mb), &capabilities) {
                current = adjustment.settings;
            }
            prop_assert!(current.worker_pool_size >= MIN_WORKER_POOL);
            prop_assert!(current.worker_pool_size <= capabilities.logical_cores.min(8));
        }
    }

    // At most one rule fires: an adjustment changes the tier or the pool,
    // never both.
    #[test]
    fn prop_one_rule_per_invocation(
        cores in 1usize..=32,
        memory in 0.5f64..64.0,
        fps in 0u32..240,
        memory_mb in 0.0f64..100_000.0,
    ) {
        let capabilities = caps(cores, memory);
        let current = derive(&capabilities);
        if let Some(adjustment) = adjust(&current, &metrics(fps, memory_mb), &capabilities) {
            let tier_changed =
                adjustment.settings.video_quality_tier != current.video_quality_tier;
            let pool_changed =
                adjustment.settings.worker_pool_size != current.worker_pool_size;
            prop_assert!(tier_changed != pool_changed);
        }
    }

    // Unknown memory (0.0) never produces a memory-pressure adjustment.
    #[test]
    fn prop_unknown_memory_never_shrinks_pool(
        cores in 2usize..=32,
        memory in 0.5f64..64.0,
        fps in 30u32..55,
    ) {
        let capabilities = caps(cores, memory);
        let current = derive(&capabilities);
        let result = adjust(&current, &metrics(fps, 0.0), &capabilities);
        prop_assert!(result.is_none());
    }
}
