//! Metrics hooks for filter operations
//!
//! `InstrumentedFilter` wraps any `MembershipFilter` and reports every store
//! and lookup to a `MetricsRecorder`.
//!
//! ## Usage
//!
//! ```ignore
//! use charset_bloom::metrics::{InstrumentedFilter, Metrics};
//!
//! let metrics = Arc::new(Metrics::new());
//! let mut filter = InstrumentedFilter::new(inner, metrics.clone());
//!
//! filter.store(&Value::from("test"))?;
//! filter.definitely_not_in_set(&Value::from("test"))?;
//!
//! assert_eq!(metrics.snapshot().lookups_performed, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::Value;
use crate::error::FilterError;
use crate::ports::MembershipFilter;

/// Metrics collector for filter operations
///
/// Thread-safe counters for monitoring filter behaviour.
#[derive(Default)]
pub struct Metrics {
    /// Successful stores
    pub values_stored: AtomicU64,
    /// Stores that returned an error
    pub stores_rejected: AtomicU64,
    /// Lookups that completed
    pub lookups_performed: AtomicU64,
    /// Lookups answering "definitely not in set"
    pub lookups_absent: AtomicU64,
    /// Lookups that returned an error
    pub lookups_failed: AtomicU64,
    /// Cumulative store time in nanoseconds
    pub store_time_ns: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful store
    pub fn record_store(&self, duration: Duration) {
        self.values_stored.fetch_add(1, Ordering::Relaxed);
        self.store_time_ns
            .fetch_add(saturating_nanos(duration), Ordering::Relaxed);
    }

    /// Record a store that failed
    pub fn record_store_rejected(&self) {
        self.stores_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed lookup
    ///
    /// # Arguments
    /// * `duration` - Time taken for lookup
    /// * `absent` - Whether the value was reported definitely absent
    pub fn record_lookup(&self, duration: Duration, absent: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(saturating_nanos(duration), Ordering::Relaxed);
        if absent {
            self.lookups_absent.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a lookup that failed
    pub fn record_lookup_failed(&self) {
        self.lookups_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            values_stored: self.values_stored.load(Ordering::Relaxed),
            stores_rejected: self.stores_rejected.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_absent: self.lookups_absent.load(Ordering::Relaxed),
            lookups_failed: self.lookups_failed.load(Ordering::Relaxed),
            avg_store_ns: average(&self.store_time_ns, &self.values_stored),
            avg_lookup_ns: average(&self.lookup_time_ns, &self.lookups_performed),
        }
    }

    /// Share of completed lookups answered "possibly present"
    ///
    /// Includes both true and false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        // Absent count first: a lookup landing between the loads must not
        // leave absent above total.
        let absent = self.lookups_absent.load(Ordering::Relaxed);
        let total = self.lookups_performed.load(Ordering::Relaxed);
        if total > 0 {
            total.saturating_sub(absent) as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        for counter in [
            &self.values_stored,
            &self.stores_rejected,
            &self.lookups_performed,
            &self.lookups_absent,
            &self.lookups_failed,
            &self.store_time_ns,
            &self.lookup_time_ns,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

fn average(total: &AtomicU64, count: &AtomicU64) -> u64 {
    let total = total.load(Ordering::Relaxed);
    let count = count.load(Ordering::Relaxed);
    if count > 0 {
        total / count
    } else {
        0
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub values_stored: u64,
    pub stores_rejected: u64,
    pub lookups_performed: u64,
    pub lookups_absent: u64,
    pub lookups_failed: u64,
    pub avg_store_ns: u64,
    pub avg_lookup_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to integrate with external metrics systems
/// like Prometheus, StatsD, or OpenTelemetry.
pub trait MetricsRecorder: Send + Sync {
    fn record_store(&self, duration: Duration);

    fn record_store_rejected(&self);

    fn record_lookup(&self, duration: Duration, absent: bool);

    fn record_lookup_failed(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_store(&self, _: Duration) {}
    fn record_store_rejected(&self) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
    fn record_lookup_failed(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_store(&self, duration: Duration) {
        Metrics::record_store(self, duration);
    }

    fn record_store_rejected(&self) {
        Metrics::record_store_rejected(self);
    }

    fn record_lookup(&self, duration: Duration, absent: bool) {
        Metrics::record_lookup(self, duration, absent);
    }

    fn record_lookup_failed(&self) {
        Metrics::record_lookup_failed(self);
    }
}

impl<R: MetricsRecorder + ?Sized> MetricsRecorder for Arc<R> {
    fn record_store(&self, duration: Duration) {
        (**self).record_store(duration);
    }

    fn record_store_rejected(&self) {
        (**self).record_store_rejected();
    }

    fn record_lookup(&self, duration: Duration, absent: bool) {
        (**self).record_lookup(duration, absent);
    }

    fn record_lookup_failed(&self) {
        (**self).record_lookup_failed();
    }
}

/// Filter wrapper that reports every operation to a recorder
pub struct InstrumentedFilter<F, R = NoOpMetrics> {
    inner: F,
    recorder: R,
}

impl<F: MembershipFilter, R: MetricsRecorder> InstrumentedFilter<F, R> {
    pub fn new(inner: F, recorder: R) -> Self {
        Self { inner, recorder }
    }

    /// The wrapped filter
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap, dropping the recorder
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: MembershipFilter, R: MetricsRecorder> MembershipFilter for InstrumentedFilter<F, R> {
    fn store(&mut self, value: &Value) -> Result<(), FilterError> {
        let start = Instant::now();
        match self.inner.store(value) {
            Ok(()) => {
                self.recorder.record_store(start.elapsed());
                Ok(())
            }
            Err(err) => {
                self.recorder.record_store_rejected();
                Err(err)
            }
        }
    }

    fn definitely_not_in_set(&self, value: &Value) -> Result<bool, FilterError> {
        let start = Instant::now();
        match self.inner.definitely_not_in_set(value) {
            Ok(absent) => {
                self.recorder.record_lookup(start.elapsed(), absent);
                Ok(absent)
            }
            Err(err) => {
                self.recorder.record_lookup_failed();
                Err(err)
            }
        }
    }
}
