// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability sources: real host introspection and a fixed test double

use sysinfo::System;
use tracing::debug;

use super::capabilities::{
    Capabilities, ConnectionClass, DEFAULT_LOGICAL_CORES, DEFAULT_MEMORY_CEILING_GB,
    DEFAULT_PIXEL_RATIO, UNKNOWN_GPU,
};

/// Signals a host cannot introspect on its own but the embedding
/// application may know (e.g. from a display server or a network stack).
#[derive(Debug, Clone, Default)]
pub struct ProbeOverrides {
    pub connection_class: Option<ConnectionClass>,
    pub pixel_ratio: Option<f64>,
}

/// A source of capability snapshots.
///
/// The derivation and adjustment logic only ever sees `Capabilities`, so a
/// test or an embedding host can swap in a `FixedSource` without touching
/// real hardware.
pub trait CapabilitySource: Send + Sync {
    /// Produce a capability snapshot. Must not fail: unreadable signals
    /// substitute the documented defaults.
    fn snapshot(&self) -> Capabilities;
}

/// Reads capabilities from the running host.
pub struct SystemSource {
    overrides: ProbeOverrides,
}

impl SystemSource {
    pub fn new() -> Self {
        Self {
            overrides: ProbeOverrides::default(),
        }
    }

    pub fn with_overrides(overrides: ProbeOverrides) -> Self {
        Self { overrides }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilitySource for SystemSource {
    fn snapshot(&self) -> Capabilities {
        let mut sys = System::new_all();
        sys.refresh_all();

        let logical_cores = match sys.cpus().len() {
            0 => DEFAULT_LOGICAL_CORES,
            n => n,
        };

        let ram_bytes = sys.total_memory();
        let memory_ceiling_gb = if ram_bytes == 0 {
            DEFAULT_MEMORY_CEILING_GB
        } else {
            ram_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
        };

        let gpu_descriptor = detect_gpu_descriptor();

        // Pixel ratio and connection class have no host-side introspection
        // outside a browser runtime; the embedding application supplies them
        // via overrides or they stay at defaults.
        let pixel_ratio = self
            .overrides
            .pixel_ratio
            .filter(|r| *r > 0.0)
            .unwrap_or(DEFAULT_PIXEL_RATIO);
        let connection_class = self
            .overrides
            .connection_class
            .unwrap_or(ConnectionClass::Unknown);

        let caps = Capabilities {
            logical_cores,
            memory_ceiling_gb,
            pixel_ratio,
            connection_class,
            gpu_descriptor,
        };

        debug!(
            "probed capabilities: cores={}, memory={:.1}GB, connection={}, gpu={}",
            caps.logical_cores, caps.memory_ceiling_gb, caps.connection_class, caps.gpu_descriptor
        );

        caps
    }
}

/// Identify the GPU adapter (heuristic, platform-specific).
fn detect_gpu_descriptor() -> String {
    #[cfg(target_os = "linux")]
    {
        // Walk DRM device nodes and report the first bound kernel driver.
        if let Ok(entries) = std::fs::read_dir("/sys/class/drm") {
            for entry in entries.flatten() {
                let name = entry.file_name();
                let name_str = name.to_string_lossy();
                if !name_str.starts_with("card") || name_str.contains('-') {
                    continue;
                }
                let uevent = entry.path().join("device/uevent");
                if let Ok(content) = std::fs::read_to_string(&uevent) {
                    for line in content.lines() {
                        if let Some(driver) = line.strip_prefix("DRIVER=") {
                            return driver.trim().to_string();
                        }
                    }
                }
            }
        }
        UNKNOWN_GPU.to_string()
    }

    #[cfg(target_os = "macos")]
    {
        use std::process::Command;
        if let Ok(output) = Command::new("system_profiler")
            .arg("SPDisplaysDataType")
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if let Some(model) = parse_macos_chipset_model(&stdout) {
                return model;
            }
        }
        UNKNOWN_GPU.to_string()
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        UNKNOWN_GPU.to_string()
    }
}

#[cfg(target_os = "macos")]
fn parse_macos_chipset_model(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let trimmed = line.trim();
        trimmed
            .strip_prefix("Chipset Model:")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    })
}

/// Returns caller-supplied values. The test double called out in the
/// design notes, also useful for replaying a known device profile.
#[derive(Debug, Clone)]
pub struct FixedSource {
    caps: Capabilities,
}

impl FixedSource {
    pub fn new(caps: Capabilities) -> Self {
        Self { caps }
    }
}

impl CapabilitySource for FixedSource {
    fn snapshot(&self) -> Capabilities {
        self.caps.clone()
    }
}
