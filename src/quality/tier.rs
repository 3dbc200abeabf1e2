// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Quality tier ladder and per-tier parameter tables

use serde::{Deserialize, Serialize};

/// Ordered render quality tier.
///
/// Transitions only happen between adjacent tiers, one step per adjustment
/// window, so the derived ordering doubles as the upgrade/downgrade ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
    Ultra,
}

impl QualityTier {
    /// The next tier up, or `None` at the top of the ladder.
    pub fn step_up(&self) -> Option<QualityTier> {
        match self {
            QualityTier::Low => Some(QualityTier::Medium),
            QualityTier::Medium => Some(QualityTier::High),
            QualityTier::High => Some(QualityTier::Ultra),
            QualityTier::Ultra => None,
        }
    }

    /// The next tier down, or `None` at the bottom of the ladder.
    pub fn step_down(&self) -> Option<QualityTier> {
        match self {
            QualityTier::Low => None,
            QualityTier::Medium => Some(QualityTier::Low),
            QualityTier::High => Some(QualityTier::Medium),
            QualityTier::Ultra => Some(QualityTier::High),
        }
    }

    /// Transfer chunk size in bytes for this tier.
    pub fn chunk_size_bytes(&self) -> usize {
        match self {
            QualityTier::Low => 1024,
            QualityTier::Medium => 2048,
            QualityTier::High => 4096,
            QualityTier::Ultra => 8192,
        }
    }

    /// Image compression quality (0-100) for this tier.
    pub fn image_compression_quality(&self) -> u8 {
        match self {
            QualityTier::Low => 65,
            QualityTier::Medium => 75,
            QualityTier::High => 85,
            QualityTier::Ultra => 95,
        }
    }

    /// Target render resolution (width, height) for this tier.
    pub fn resolution(&self) -> (u32, u32) {
        match self {
            QualityTier::Low => (640, 360),
            QualityTier::Medium => (854, 480),
            QualityTier::High => (1280, 720),
            QualityTier::Ultra => (1920, 1080),
        }
    }

    /// Target frame rate for this tier.
    pub fn frame_rate(&self) -> u32 {
        match self {
            QualityTier::Low => 15,
            QualityTier::Medium => 24,
            QualityTier::High => 30,
            QualityTier::Ultra => 60,
        }
    }

    /// All tiers, lowest first.
    pub fn ladder() -> [QualityTier; 4] {
        [
            QualityTier::Low,
            QualityTier::Medium,
            QualityTier::High,
            QualityTier::Ultra,
        ]
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityTier::Low => write!(f, "low"),
            QualityTier::Medium => write!(f, "medium"),
            QualityTier::High => write!(f, "high"),
            QualityTier::Ultra => write!(f, "ultra"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_up() {
        assert_eq!(QualityTier::Low.step_up(), Some(QualityTier::Medium));
        assert_eq!(QualityTier::Medium.step_up(), Some(QualityTier::High));
        assert_eq!(QualityTier::High.step_up(), Some(QualityTier::Ultra));
        assert_eq!(QualityTier::Ultra.step_up(), None);
    }

    #[test]
    fn test_step_down() {
        assert_eq!(QualityTier::Ultra.step_down(), Some(QualityTier::High));
        assert_eq!(QualityTier::High.step_down(), Some(QualityTier::Medium));
        assert_eq!(QualityTier::Medium.step_down(), Some(QualityTier::Low));
        assert_eq!(QualityTier::Low.step_down(), None);
    }

    #[test]
    fn test_chunk_size_bytes() {
        assert_eq!(QualityTier::Low.chunk_size_bytes(), 1024);
        assert_eq!(QualityTier::Medium.chunk_size_bytes(), 2048);
        assert_eq!(QualityTier::High.chunk_size_bytes(), 4096);
        assert_eq!(QualityTier::Ultra.chunk_size_bytes(), 8192);
    }

    #[test]
    fn test_image_compression_quality() {
        assert_eq!(QualityTier::Low.image_compression_quality(), 65);
        assert_eq!(QualityTier::Medium.image_compression_quality(), 75);
        assert_eq!(QualityTier::High.image_compression_quality(), 85);
        assert_eq!(QualityTier::Ultra.image_compression_quality(), 95);
    }

    #[test]
    fn test_resolution() {
        assert_eq!(QualityTier::Low.resolution(), (640, 360));
        assert_eq!(QualityTier::Medium.resolution(), (854, 480));
        assert_eq!(QualityTier::High.resolution(), (1280, 720));
        assert_eq!(QualityTier::Ultra.resolution(), (1920, 1080));
    }

    #[test]
    fn test_frame_rate() {
        assert_eq!(QualityTier::Low.frame_rate(), 15);
        assert_eq!(QualityTier::Medium.frame_rate(), 24);
        assert_eq!(QualityTier::High.frame_rate(), 30);
        assert_eq!(QualityTier::Ultra.frame_rate(), 60);
    }

    #[test]
    fn test_ordering_matches_ladder() {
        let ladder = QualityTier::ladder();
        for i in 1..ladder.len() {
            assert!(ladder[i] > ladder[i - 1]);
        }
    }

    #[test]
    fn test_parameters_increase_with_tier() {
        let ladder = QualityTier::ladder();
        for i in 1..ladder.len() {
            assert!(ladder[i].chunk_size_bytes() > ladder[i - 1].chunk_size_bytes());
            assert!(
                ladder[i].image_compression_quality() > ladder[i - 1].image_compression_quality()
            );
            assert!(ladder[i].frame_rate() > ladder[i - 1].frame_rate());
            assert!(ladder[i].resolution().0 > ladder[i - 1].resolution().0);
        }
    }

    #[test]
    fn test_step_round_trip() {
        for tier in QualityTier::ladder() {
            if let Some(up) = tier.step_up() {
                assert_eq!(up.step_down(), Some(tier));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", QualityTier::Low), "low");
        assert_eq!(format!("{}", QualityTier::Medium), "medium");
        assert_eq!(format!("{}", QualityTier::High), "high");
        assert_eq!(format!("{}", QualityTier::Ultra), "ultra");
    }

    #[test]
    fn test_serialization_round_trip() {
        for tier in QualityTier::ladder() {
            let json = serde_json::to_string(&tier).unwrap();
            let parsed: QualityTier = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, tier);
        }
        assert_eq!(
            serde_json::to_string(&QualityTier::Ultra).unwrap(),
            "\"ultra\""
        );
    }
}
