// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Live optimizer command
//!
//! Runs the optimizer against real memory readings while a synthetic pacer
//! feeds the frame recorder at a fixed cadence, so tier transitions can be
//! observed without a real render pipeline.

use std::time::Duration;

use tracing::info;

use crate::cli::args::WatchArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::optimizer::Optimizer;
use crate::probe::{ProbeOverrides, SystemSource};

/// Execute the watch command
pub async fn execute(args: &WatchArgs, settings: &Settings) -> Result<()> {
    let overrides = ProbeOverrides {
        connection_class: args.connection.or(settings.probe.connection_class),
        pixel_ratio: settings.probe.pixel_ratio,
    };
    let source = SystemSource::with_overrides(overrides);
    let handle = Optimizer::start(&source, settings.optimizer_options());

    let initial = handle.settings();
    println!(
        "optimizer running: tier={}, workers={}, pacer={}fps",
        initial.video_quality_tier, initial.worker_pool_size, args.fps
    );

    let _subscription = handle.subscribe(|current| {
        println!(
            "settings: tier={}, workers={}, chunk={}B, compression={}",
            current.video_quality_tier,
            current.worker_pool_size,
            current.chunk_size_bytes,
            current.image_compression_quality
        );
    });

    // Synthetic frame pacer standing in for a render loop.
    let pacer = if args.fps > 0 {
        let recorder = handle.recorder();
        let period = Duration::from_secs_f64(1.0 / args.fps as f64);
        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                recorder.record_frame();
            }
        }))
    } else {
        None
    };

    if args.duration > 0 {
        tokio::time::sleep(Duration::from_secs(args.duration)).await;
    } else {
        tokio::signal::ctrl_c().await?;
        info!("interrupted, shutting down");
    }

    if let Some(pacer) = pacer {
        pacer.abort();
    }

    let metrics = handle.metrics();
    println!(
        "last window: fps={}, memory={:.1}MB",
        metrics.frames_per_second, metrics.memory_used_mb
    );

    handle.stop().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::WatchArgs;

    #[tokio::test]
    async fn test_watch_bounded_duration() {
        let mut settings = Settings::default();
        settings.sampler.window_ms = 100;
        let args = WatchArgs {
            fps: 30,
            duration: 1,
            connection: None,
        };
        execute(&args, &settings).await.unwrap();
    }

    #[tokio::test]
    async fn test_watch_without_pacer() {
        let mut settings = Settings::default();
        settings.sampler.window_ms = 100;
        settings.adjust.auto_adjust = false;
        let args = WatchArgs {
            fps: 0,
            duration: 1,
            connection: None,
        };
        execute(&args, &settings).await.unwrap();
    }
}
