// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability snapshot types and fallback defaults

use serde::{Deserialize, Serialize};

/// Fallback logical core count when the host reports none.
pub const DEFAULT_LOGICAL_CORES: usize = 4;

/// Fallback memory ceiling in GB when the host reports none.
pub const DEFAULT_MEMORY_CEILING_GB: f64 = 4.0;

/// Fallback pixel ratio when the host cannot report one.
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;

/// Fallback GPU descriptor when no adapter can be identified.
pub const UNKNOWN_GPU: &str = "unknown";

/// Network connection classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionClass {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    Cell2g,
    #[serde(rename = "3g")]
    Cell3g,
    #[serde(rename = "4g")]
    Cell4g,
    #[serde(rename = "unknown")]
    Unknown,
}

impl ConnectionClass {
    /// Whether the connection is too constrained for anything above the
    /// lowest quality tier.
    pub fn is_constrained(&self) -> bool {
        matches!(self, ConnectionClass::Slow2g | ConnectionClass::Cell2g)
    }
}

impl Default for ConnectionClass {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for ConnectionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConnectionClass::Slow2g => "slow-2g",
            ConnectionClass::Cell2g => "2g",
            ConnectionClass::Cell3g => "3g",
            ConnectionClass::Cell4g => "4g",
            ConnectionClass::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ConnectionClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "slow-2g" => Ok(ConnectionClass::Slow2g),
            "2g" => Ok(ConnectionClass::Cell2g),
            "3g" => Ok(ConnectionClass::Cell3g),
            "4g" => Ok(ConnectionClass::Cell4g),
            "unknown" => Ok(ConnectionClass::Unknown),
            other => Err(format!("unrecognized connection class: {}", other)),
        }
    }
}

/// Immutable snapshot of host capability signals, computed once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Number of logical CPU cores (at least 1).
    pub logical_cores: usize,
    /// Best-effort total memory estimate in GB.
    pub memory_ceiling_gb: f64,
    /// Display pixel density ratio.
    pub pixel_ratio: f64,
    /// Network connection classification.
    pub connection_class: ConnectionClass,
    /// Free-text GPU adapter identifier.
    pub gpu_descriptor: String,
}

impl Capabilities {
    /// Snapshot built entirely from fallback defaults. Used when every host
    /// signal is unreadable; downstream derivation still yields a valid tier.
    pub fn fallback() -> Self {
        Self {
            logical_cores: DEFAULT_LOGICAL_CORES,
            memory_ceiling_gb: DEFAULT_MEMORY_CEILING_GB,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            connection_class: ConnectionClass::Unknown,
            gpu_descriptor: UNKNOWN_GPU.to_string(),
        }
    }

    /// Memory ceiling expressed in MB, the unit the live sampler reports in.
    pub fn memory_ceiling_mb(&self) -> f64 {
        self.memory_ceiling_gb * 1024.0
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fallback_values() {
        let caps = Capabilities::fallback();
        assert_eq!(caps.logical_cores, 4);
        assert!((caps.memory_ceiling_gb - 4.0).abs() < f64::EPSILON);
        assert!((caps.pixel_ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(caps.connection_class, ConnectionClass::Unknown);
        assert_eq!(caps.gpu_descriptor, "unknown");
    }

    #[test]
    fn test_memory_ceiling_mb() {
        let caps = Capabilities {
            memory_ceiling_gb: 4.0,
            ..Capabilities::fallback()
        };
        assert!((caps.memory_ceiling_mb() - 4096.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_connection_class_constrained() {
        assert!(ConnectionClass::Slow2g.is_constrained());
        assert!(ConnectionClass::Cell2g.is_constrained());
        assert!(!ConnectionClass::Cell3g.is_constrained());
        assert!(!ConnectionClass::Cell4g.is_constrained());
        assert!(!ConnectionClass::Unknown.is_constrained());
    }

    #[test]
    fn test_connection_class_serde_names() {
        assert_eq!(
            serde_json::to_string(&ConnectionClass::Slow2g).unwrap(),
            "\"slow-2g\""
        );
        assert_eq!(
            serde_json::to_string(&ConnectionClass::Cell4g).unwrap(),
            "\"4g\""
        );
        let parsed: ConnectionClass = serde_json::from_str("\"3g\"").unwrap();
        assert_eq!(parsed, ConnectionClass::Cell3g);
    }

    #[test]
    fn test_connection_class_from_str() {
        assert_eq!(
            ConnectionClass::from_str("2g").unwrap(),
            ConnectionClass::Cell2g
        );
        assert_eq!(
            ConnectionClass::from_str("unknown").unwrap(),
            ConnectionClass::Unknown
        );
        assert!(ConnectionClass::from_str("5g").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for class in [
            ConnectionClass::Slow2g,
            ConnectionClass::Cell2g,
            ConnectionClass::Cell3g,
            ConnectionClass::Cell4g,
            ConnectionClass::Unknown,
        ] {
            let parsed = ConnectionClass::from_str(&class.to_string()).unwrap();
            assert_eq!(parsed, class);
        }
    }

    #[test]
    fn test_capabilities_serialization() {
        let caps = Capabilities {
            logical_cores: 8,
            memory_ceiling_gb: 16.0,
            pixel_ratio: 2.0,
            connection_class: ConnectionClass::Cell4g,
            gpu_descriptor: "Apple M2".to_string(),
        };

        let json = serde_json::to_string(&caps).unwrap();
        let parsed: Capabilities = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, caps);
    }
}
