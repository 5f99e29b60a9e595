//! Dispatch counters
//!
//! Thread-safe counters updated on every envelope the notifier sees.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::DispatchOutcome;

/// Counters for notifier dispatch.
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Envelopes handed to dispatch.
    pub received: AtomicU64,
    /// Envelopes whose handler ran to completion.
    pub delivered: AtomicU64,
    /// Host-reserved envelopes dropped silently.
    pub ignored: AtomicU64,
    /// Envelopes with an unknown tag.
    pub unrecognized: AtomicU64,
    /// Envelopes with a payload that did not match the tag.
    pub malformed: AtomicU64,
    /// Handler invocations that panicked.
    pub handler_panics: AtomicU64,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one dispatched envelope by its outcome.
    pub fn record(&self, outcome: &DispatchOutcome) {
        self.received.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome {
            DispatchOutcome::Delivered(_) => &self.delivered,
            DispatchOutcome::Ignored(_) => &self.ignored,
            DispatchOutcome::Unrecognized(_) => &self.unrecognized,
            DispatchOutcome::Malformed(_) => &self.malformed,
            DispatchOutcome::HandlerPanicked(_) => &self.handler_panics,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            received: self.received.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            ignored: self.ignored.load(Ordering::Relaxed),
            unrecognized: self.unrecognized.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
            handler_panics: self.handler_panics.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of `DispatchMetrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub received: u64,
    pub delivered: u64,
    pub ignored: u64,
    pub unrecognized: u64,
    pub malformed: u64,
    pub handler_panics: u64,
}

impl MetricsSnapshot {
    /// Envelopes that were reported as a problem.
    pub fn rejected(&self) -> u64 {
        self.unrecognized + self.malformed + self.handler_panics
    }
}
