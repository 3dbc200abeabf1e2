// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability probe command

use serde::Serialize;

use crate::cli::args::{OutputFormat, ProbeArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::probe::{CapabilitySource, ProbeOverrides, SystemSource};
use crate::quality::derive;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeReport {
    logical_cores: usize,
    memory_ceiling_gb: f64,
    pixel_ratio: f64,
    connection_class: String,
    gpu_descriptor: String,
    video_quality_tier: String,
    worker_pool_size: usize,
    max_concurrent_tasks: usize,
    chunk_size_bytes: usize,
    parallel_processing_enabled: bool,
    cache_strategy: String,
    image_compression_quality: u8,
    resolution: (u32, u32),
    frame_rate: u32,
}

/// Execute the probe command
pub fn execute(args: &ProbeArgs, format: &OutputFormat, settings: &Settings) -> Result<()> {
    // CLI flag wins over the settings file.
    let overrides = ProbeOverrides {
        connection_class: args.connection.or(settings.probe.connection_class),
        pixel_ratio: settings.probe.pixel_ratio,
    };
    let caps = SystemSource::with_overrides(overrides).snapshot();
    let derived = derive(&caps);

    if matches!(format, OutputFormat::Json) {
        let report = ProbeReport {
            logical_cores: caps.logical_cores,
            memory_ceiling_gb: caps.memory_ceiling_gb,
            pixel_ratio: caps.pixel_ratio,
            connection_class: caps.connection_class.to_string(),
            gpu_descriptor: caps.gpu_descriptor.clone(),
            video_quality_tier: derived.video_quality_tier.to_string(),
            worker_pool_size: derived.worker_pool_size,
            max_concurrent_tasks: derived.max_concurrent_tasks,
            chunk_size_bytes: derived.chunk_size_bytes,
            parallel_processing_enabled: derived.parallel_processing_enabled,
            cache_strategy: derived.cache_strategy.to_string(),
            image_compression_quality: derived.image_compression_quality,
            resolution: derived.resolution(),
            frame_rate: derived.frame_rate(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== Revo Capability Probe ===\n");
    println!("Cores: {}", caps.logical_cores);
    println!("Memory: {:.1}GB", caps.memory_ceiling_gb);
    println!("Pixel Ratio: {:.1}", caps.pixel_ratio);
    println!("Connection: {}", caps.connection_class);
    println!("GPU: {}", caps.gpu_descriptor);

    println!("\n=== Derived Settings ===\n");
    println!("Quality Tier: {}", derived.video_quality_tier);
    let (width, height) = derived.resolution();
    println!(
        "Target Output: {}x{} @ {}fps",
        width,
        height,
        derived.frame_rate()
    );
    println!("Worker Pool: {}", derived.worker_pool_size);
    println!("Concurrent Tasks: {}", derived.max_concurrent_tasks);

    if args.detailed {
        println!("\n=== Detailed Configuration ===\n");
        println!("Chunk Size: {} bytes", derived.chunk_size_bytes);
        println!(
            "Parallel Processing: {}",
            if derived.parallel_processing_enabled {
                "Enabled"
            } else {
                "Disabled"
            }
        );
        println!("Cache Strategy: {}", derived.cache_strategy);
        println!(
            "Image Compression Quality: {}",
            derived.image_compression_quality
        );
    } else {
        println!("\nRun 'revo probe --detailed' for the full configuration");
    }

    println!();

    Ok(())
}
