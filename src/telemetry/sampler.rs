// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Background sampling loop for frame cadence and memory usage

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use sysinfo::{Pid, ProcessesToUpdate, System};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{Result, RevoError};

use super::metrics::PerformanceMetrics;

/// Default sampling window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);

/// Shared feed the host render pipeline reports into.
///
/// Cloned freely; the sampler drains the frame counter once per window.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    frames: Arc<AtomicU32>,
    last_load_us: Arc<AtomicU64>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report one rendered frame.
    pub fn record_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    /// Report the duration of a completed load (asset fetch, scene build).
    pub fn record_load(&self, elapsed: Duration) {
        self.last_load_us
            .store(elapsed.as_micros() as u64, Ordering::Relaxed);
    }

    /// Drain the frame counter for a closing window.
    fn take_frames(&self) -> u32 {
        self.frames.swap(0, Ordering::Relaxed)
    }

    fn last_load_ms(&self) -> f64 {
        self.last_load_us.load(Ordering::Relaxed) as f64 / 1000.0
    }
}

/// Handle returned by `PerformanceSampler::start()`.
///
/// `stop()` shuts the loop down and joins the task; dropping the handle
/// without stopping signals shutdown so the loop cannot outlive its owner.
pub struct SamplerHandle {
    metrics_rx: watch::Receiver<PerformanceMetrics>,
    shutdown_tx: mpsc::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl SamplerHandle {
    /// Latest completed window's metrics.
    pub fn current_metrics(&self) -> PerformanceMetrics {
        self.metrics_rx.borrow().clone()
    }

    /// Watch receiver for metrics updates, one value per window.
    pub fn subscribe(&self) -> watch::Receiver<PerformanceMetrics> {
        self.metrics_rx.clone()
    }

    /// Stop the sampling loop and wait for it to finish.
    pub async fn stop(mut self) -> Result<()> {
        let _ = self.shutdown_tx.send(()).await;
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|_| RevoError::Sampler("sampler task panicked".into()))?;
        }
        Ok(())
    }
}

impl Drop for SamplerHandle {
    fn drop(&mut self) {
        // Signal shutdown on drop so the loop winds down on its own.
        let _ = self.shutdown_tx.try_send(());
    }
}

/// The sampling loop itself.
pub struct PerformanceSampler;

impl PerformanceSampler {
    /// Start sampling in a background task.
    ///
    /// Each time a window closes, `on_window` runs inside the sampler's own
    /// tick before the next window opens. That callback is the single place
    /// settings adjustment happens, which serializes all mutation without a
    /// lock.
    pub fn start<F>(recorder: FrameRecorder, window: Duration, mut on_window: F) -> SamplerHandle
    where
        F: FnMut(&PerformanceMetrics) + Send + 'static,
    {
        let (metrics_tx, metrics_rx) = watch::channel(PerformanceMetrics::default());
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            let mut sys = System::new();
            let pid = sysinfo::get_current_pid().ok();

            let mut interval = tokio::time::interval(window);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick fires immediately and opens the first window.
            interval.tick().await;
            let mut window_start = Instant::now();

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        debug!("performance sampler stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        // Frame rate comes from counting ticks over the real
                        // elapsed window, not from assuming the timer period.
                        let elapsed = window_start.elapsed();
                        window_start = Instant::now();

                        let frames = recorder.take_frames();
                        let secs = elapsed.as_secs_f64().max(0.001);
                        let frames_per_second = (frames as f64 / secs).round() as u32;

                        let metrics = PerformanceMetrics {
                            frames_per_second,
                            memory_used_mb: sample_process_memory_mb(&mut sys, pid),
                            last_load_time_ms: recorder.last_load_ms(),
                        };

                        debug!(
                            "sampled window: fps={}, memory={:.1}MB",
                            metrics.frames_per_second, metrics.memory_used_mb
                        );

                        let _ = metrics_tx.send(metrics.clone());
                        on_window(&metrics);
                    }
                }
            }
        });

        SamplerHandle {
            metrics_rx,
            shutdown_tx,
            task: Some(task),
        }
    }
}

/// Current process RSS in MB, or 0.0 when the host provides no reading.
fn sample_process_memory_mb(sys: &mut System, pid: Option<Pid>) -> f64 {
    let Some(pid) = pid else {
        return 0.0;
    };
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    match sys.process(pid) {
        Some(process) => process.memory() as f64 / (1024.0 * 1024.0),
        None => 0.0,
    }
}
