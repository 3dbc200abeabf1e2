// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! In-memory fan-out of settings changes to observers
//!
//! Holds the single current `OptimizationSettings` value and a typed
//! observer list. Subscribing replays the current value immediately so a
//! late-joining panel renders correct state without racing the next
//! publish. Dropping the returned `Subscription` unsubscribes.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, Weak};

use tracing::warn;

use crate::quality::OptimizationSettings;

type Observer = Arc<dyn Fn(&OptimizationSettings) + Send + Sync + 'static>;

struct PublisherInner {
    current: OptimizationSettings,
    observers: Vec<(u64, Observer)>,
    next_id: u64,
}

/// Subscription/notification hub for the current settings value.
#[derive(Clone)]
pub struct SettingsPublisher {
    inner: Arc<Mutex<PublisherInner>>,
}

impl SettingsPublisher {
    pub fn new(initial: OptimizationSettings) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PublisherInner {
                current: initial,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Register an observer. It is invoked exactly once with the current
    /// settings before this returns, then again on every publish until the
    /// returned `Subscription` is dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&OptimizationSettings) + Send + Sync + 'static,
    {
        let observer: Observer = Arc::new(observer);
        let (id, current) = {
            let mut inner = lock_inner(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, observer.clone()));
            (id, inner.current.clone())
        };

        // Replay outside the lock so the observer may itself subscribe.
        notify_one(&observer, &current);

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Record a new current value and notify observers in subscription
    /// order. A panicking observer is logged and skipped; the rest still
    /// run.
    pub fn publish(&self, settings: OptimizationSettings) {
        let observers: Vec<Observer> = {
            let mut inner = lock_inner(&self.inner);
            inner.current = settings.clone();
            inner.observers.iter().map(|(_, o)| o.clone()).collect()
        };

        for observer in observers {
            notify_one(&observer, &settings);
        }
    }

    /// Latest published value.
    pub fn current(&self) -> OptimizationSettings {
        lock_inner(&self.inner).current.clone()
    }

    /// Number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        lock_inner(&self.inner).observers.len()
    }
}

/// Observers run outside the lock, so a poisoned mutex can only mean a
/// panic inside one of the short internal critical sections; the data is
/// still coherent and the publisher keeps working.
fn lock_inner(inner: &Arc<Mutex<PublisherInner>>) -> std::sync::MutexGuard<'_, PublisherInner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn notify_one(observer: &Observer, settings: &OptimizationSettings) {
    if catch_unwind(AssertUnwindSafe(|| observer(settings))).is_err() {
        warn!("settings observer panicked; continuing with remaining observers");
    }
}

/// RAII guard for a registered observer; dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<PublisherInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock_inner(&inner).observers.retain(|(id, _)| *id != self.id);
        }
    }
}
