// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Optimizer lifecycle: probe, derive, sample, adjust, publish
//!
//! The optimizer is an explicitly constructed object owned by the host
//! application. `start()` probes capabilities, derives and publishes the
//! initial settings, then runs the sampling loop whose per-window callback
//! is the only place settings mutate.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::Result;
use crate::probe::{Capabilities, CapabilitySource};
use crate::publish::{SettingsPublisher, Subscription};
use crate::quality::{adjust, derive, OptimizationSettings};
use crate::telemetry::{
    FrameRecorder, PerformanceMetrics, PerformanceSampler, SamplerHandle, DEFAULT_WINDOW,
};

/// Runtime options for an optimizer instance.
#[derive(Debug, Clone)]
pub struct OptimizerOptions {
    /// Sampling window length.
    pub window: Duration,
    /// Whether the feedback adjuster runs at all. When off, the derived
    /// settings stay fixed and the sampler only reports metrics.
    pub auto_adjust: bool,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            auto_adjust: true,
        }
    }
}

/// The adaptive quality optimizer.
pub struct Optimizer;

impl Optimizer {
    /// Probe capabilities through `source`, derive and publish initial
    /// settings, and start the sampling loop.
    pub fn start(source: &dyn CapabilitySource, options: OptimizerOptions) -> OptimizerHandle {
        let capabilities = source.snapshot();
        let initial = derive(&capabilities);

        info!(
            "optimizer started: tier={}, workers={}, window={:?}, auto_adjust={}",
            initial.video_quality_tier,
            initial.worker_pool_size,
            options.window,
            options.auto_adjust
        );

        let publisher = SettingsPublisher::new(initial);
        let recorder = FrameRecorder::new();

        let adjuster_publisher = publisher.clone();
        let adjuster_caps = capabilities.clone();
        let auto_adjust = options.auto_adjust;

        let sampler = PerformanceSampler::start(
            recorder.clone(),
            options.window,
            move |metrics: &PerformanceMetrics| {
                if !auto_adjust {
                    return;
                }
                let current = adjuster_publisher.current();
                match adjust(&current, metrics, &adjuster_caps) {
                    Some(adjustment) => {
                        info!(
                            "settings adjusted ({}): tier {} -> {}, workers {} -> {} (fps={}, memory={:.1}MB)",
                            adjustment.reason,
                            current.video_quality_tier,
                            adjustment.settings.video_quality_tier,
                            current.worker_pool_size,
                            adjustment.settings.worker_pool_size,
                            metrics.frames_per_second,
                            metrics.memory_used_mb
                        );
                        adjuster_publisher.publish(adjustment.settings);
                    }
                    None => {
                        debug!(
                            "settings unchanged: tier={} (fps={}, memory={:.1}MB)",
                            current.video_quality_tier,
                            metrics.frames_per_second,
                            metrics.memory_used_mb
                        );
                    }
                }
            },
        );

        OptimizerHandle {
            capabilities,
            publisher,
            recorder,
            sampler,
        }
    }
}

/// Handle returned by `Optimizer::start()`.
pub struct OptimizerHandle {
    capabilities: Capabilities,
    publisher: SettingsPublisher,
    recorder: FrameRecorder,
    sampler: SamplerHandle,
}

impl OptimizerHandle {
    /// The capability snapshot this session derived from.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Current settings value.
    pub fn settings(&self) -> OptimizationSettings {
        self.publisher.current()
    }

    /// Latest completed window's metrics.
    pub fn metrics(&self) -> PerformanceMetrics {
        self.sampler.current_metrics()
    }

    /// Register a settings observer (replay-on-join).
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&OptimizationSettings) + Send + Sync + 'static,
    {
        self.publisher.subscribe(observer)
    }

    /// The publisher itself, for components that want to share it.
    pub fn publisher(&self) -> &SettingsPublisher {
        &self.publisher
    }

    /// Frame/load feed for the host render pipeline.
    pub fn recorder(&self) -> FrameRecorder {
        self.recorder.clone()
    }

    /// Stop the sampling loop and wait for it to finish.
    pub async fn stop(self) -> Result<()> {
        self.sampler.stop().await
    }
}
