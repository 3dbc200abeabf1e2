// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Revo
//!
//! Handles loading and saving settings from ~/.revo/settings.json

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RevoError};
use crate::optimizer::OptimizerOptions;
use crate::probe::{ConnectionClass, ProbeOverrides};

/// Main settings structure, stored in ~/.revo/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Capability probe overrides
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Sampling loop settings
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// Feedback adjustment settings
    #[serde(default)]
    pub adjust: AdjustConfig,
}

/// Signals the host cannot introspect but the user may know.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProbeConfig {
    /// Pin the connection class instead of defaulting to unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_class: Option<ConnectionClass>,

    /// Pin the display pixel ratio instead of defaulting to 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_ratio: Option<f64>,
}

impl ProbeConfig {
    pub fn to_overrides(&self) -> ProbeOverrides {
        ProbeOverrides {
            connection_class: self.connection_class,
            pixel_ratio: self.pixel_ratio,
        }
    }
}

/// Sampling loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Sampling window length in milliseconds.
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
        }
    }
}

fn default_window_ms() -> u64 {
    1000
}

/// Feedback adjustment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustConfig {
    /// Whether live metrics may adjust the active settings.
    #[serde(default = "default_auto_adjust")]
    pub auto_adjust: bool,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            auto_adjust: default_auto_adjust(),
        }
    }
}

fn default_auto_adjust() -> bool {
    true
}

impl Settings {
    /// Get the Revo home directory (~/.revo).
    pub fn revo_home() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".revo")
    }

    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::revo_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields defaults.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Ensure the Revo home directory exists.
    pub fn ensure_directories() -> Result<()> {
        std::fs::create_dir_all(Self::revo_home())?;
        Ok(())
    }

    /// Range-check configured values.
    pub fn validate(&self) -> Result<()> {
        if self.sampler.window_ms < 100 || self.sampler.window_ms > 10_000 {
            return Err(RevoError::Config(format!(
                "sampler.window_ms must be in [100, 10000], got {}",
                self.sampler.window_ms
            )));
        }
        if let Some(ratio) = self.probe.pixel_ratio {
            if ratio <= 0.0 {
                return Err(RevoError::Config(format!(
                    "probe.pixel_ratio must be positive, got {}",
                    ratio
                )));
            }
        }
        Ok(())
    }

    /// Runtime options for `Optimizer::start()`.
    pub fn optimizer_options(&self) -> OptimizerOptions {
        OptimizerOptions {
            window: Duration::from_millis(self.sampler.window_ms),
            auto_adjust: self.adjust.auto_adjust,
        }
    }
}
