//! Basic metrics instrumentation for the lead forms.
//!
//! Counters for relay calls and their duration, plus the outcomes of submit
//! attempts (delivered, rejected by validation, ignored while in flight).

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the relay client and the form sessions.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of relay POSTs made
    relay_requests_total: Arc<AtomicU64>,

    /// Total number of failed relay POSTs
    relay_errors_total: Arc<AtomicU64>,

    /// Total duration of all relay POSTs in milliseconds
    relay_duration_total_ms: Arc<AtomicU64>,

    /// Submissions the relay accepted
    submissions_delivered_total: Arc<AtomicU64>,

    /// Submit attempts stopped by validation
    validation_rejections_total: Arc<AtomicU64>,

    /// Submit attempts ignored because one was already in flight
    submissions_blocked_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            relay_requests_total: Arc::new(AtomicU64::new(0)),
            relay_errors_total: Arc::new(AtomicU64::new(0)),
            relay_duration_total_ms: Arc::new(AtomicU64::new(0)),
            submissions_delivered_total: Arc::new(AtomicU64::new(0)),
            validation_rejections_total: Arc::new(AtomicU64::new(0)),
            submissions_blocked_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a relay request with duration.
    pub fn record_relay_request(&self, duration: Duration) {
        self.relay_requests_total.fetch_add(1, Ordering::Relaxed);
        self.relay_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed relay request.
    pub fn record_relay_error(&self) {
        self.relay_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submission the relay accepted.
    pub fn record_delivered(&self) {
        self.submissions_delivered_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submit stopped by validation.
    pub fn record_validation_rejection(&self) {
        self.validation_rejections_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submit ignored because one was already in flight.
    pub fn record_blocked_submit(&self) {
        self.submissions_blocked_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn relay_requests_total(&self) -> u64 {
        self.relay_requests_total.load(Ordering::Relaxed)
    }

    pub fn relay_errors_total(&self) -> u64 {
        self.relay_errors_total.load(Ordering::Relaxed)
    }

    pub fn relay_duration_total_ms(&self) -> u64 {
        self.relay_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average relay request duration in milliseconds.
    pub fn relay_duration_avg_ms(&self) -> f64 {
        let total = self.relay_duration_total_ms.load(Ordering::Relaxed);
        let count = self.relay_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn submissions_delivered_total(&self) -> u64 {
        self.submissions_delivered_total.load(Ordering::Relaxed)
    }

    pub fn validation_rejections_total(&self) -> u64 {
        self.validation_rejections_total.load(Ordering::Relaxed)
    }

    pub fn submissions_blocked_total(&self) -> u64 {
        self.submissions_blocked_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.relay_requests_total.store(0, Ordering::Relaxed);
        self.relay_errors_total.store(0, Ordering::Relaxed);
        self.relay_duration_total_ms.store(0, Ordering::Relaxed);
        self.submissions_delivered_total.store(0, Ordering::Relaxed);
        self.validation_rejections_total.store(0, Ordering::Relaxed);
        self.submissions_blocked_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            relay_requests_total: self.relay_requests_total(),
            relay_errors_total: self.relay_errors_total(),
            relay_duration_total_ms: self.relay_duration_total_ms(),
            relay_duration_avg_ms: self.relay_duration_avg_ms(),
            submissions_delivered_total: self.submissions_delivered_total(),
            validation_rejections_total: self.validation_rejections_total(),
            submissions_blocked_total: self.submissions_blocked_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub relay_requests_total: u64,
    pub relay_errors_total: u64,
    pub relay_duration_total_ms: u64,
    pub relay_duration_avg_ms: f64,
    pub submissions_delivered_total: u64,
    pub validation_rejections_total: u64,
    pub submissions_blocked_total: u64,
}

/// Helper for timing relay requests.
pub struct RelayTimer {
    start: Instant,
    metrics: Metrics,
}

impl RelayTimer {
    /// Start timing a relay request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_relay_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_relay_request(duration);
        self.metrics.record_relay_error();
    }
}
