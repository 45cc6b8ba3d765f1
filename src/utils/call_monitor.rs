//! Counts and times repository invocations.
//!
//! The [`CallMonitor`] wraps each data-access future issued by
//! [`crate::application::services::ClinicService`]. While enabled it records
//! the number of calls and their accumulated duration, and publishes both as
//! `metrics` series labelled by operation. Disabled, it only awaits the call.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;

const CALLS_TOTAL: &str = "petclinic_repository_calls_total";
const CALL_DURATION: &str = "petclinic_repository_call_duration_seconds";

#[derive(Debug)]
pub struct CallMonitor {
    enabled: AtomicBool,
    call_count: AtomicU64,
    accumulated_millis: AtomicU64,
}

/// Point-in-time view of the monitor, served on `/manage/monitoring`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSnapshot {
    pub enabled: bool,
    pub call_count: u64,
    /// Average call time in milliseconds.
    pub call_time: u64,
}

impl CallMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            call_count: AtomicU64::new(0),
            accumulated_millis: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Average duration of recorded calls in milliseconds, 0 if none.
    pub fn call_time(&self) -> u64 {
        let count = self.call_count();
        if count == 0 {
            0
        } else {
            self.accumulated_millis.load(Ordering::Relaxed) / count
        }
    }

    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
        self.accumulated_millis.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        MonitorSnapshot {
            enabled: self.is_enabled(),
            call_count: self.call_count(),
            call_time: self.call_time(),
        }
    }

    /// Awaits `call`, recording it under `operation` when enabled.
    ///
    /// The call is counted whatever it returns, errors included.
    pub async fn invoke<F, T>(&self, operation: &'static str, call: F) -> T
    where
        F: Future<Output = T>,
    {
        if !self.is_enabled() {
            return call.await;
        }

        let started = Instant::now();
        let output = call.await;
        let elapsed = started.elapsed();

        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.accumulated_millis
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);

        metrics::counter!(CALLS_TOTAL, "operation" => operation).increment(1);
        metrics::histogram!(CALL_DURATION, "operation" => operation)
            .record(elapsed.as_secs_f64());
        tracing::trace!(operation, elapsed_ms = elapsed.as_millis() as u64, "Repository call");

        output
    }
}

impl Default for CallMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}
