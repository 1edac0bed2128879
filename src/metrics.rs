//! Lead delivery metrics.
//!
//! Counters for contact submissions, exposed on the admin metrics endpoint.
//! One instance lives in the server state; counts reset on restart.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct LeadMetrics {
    /// Submissions that reached the contact endpoint
    received: AtomicUsize,

    /// Submissions rejected for missing fields
    rejected: AtomicUsize,

    /// Leads accepted by the sink
    delivered: AtomicUsize,

    /// Leads the sink failed to deliver
    failed: AtomicUsize,
}

impl LeadMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let delivered = self.delivered();
        let failed = self.failed();
        let attempts = delivered + failed;
        let delivery_success_rate = if attempts > 0 {
            (delivered as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            received: self.received(),
            rejected: self.rejected(),
            delivered,
            failed,
            delivery_success_rate,
        }
    }
}

/// Snapshot of the lead counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub received: usize,
    pub rejected: usize,
    pub delivered: usize,
    pub failed: usize,

    /// Delivered as a percentage (0-100) of delivery attempts
    pub delivery_success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LeadMetrics::new();
        let report = metrics.report();
        assert_eq!(report.received, 0);
        assert_eq!(report.rejected, 0);
        assert_eq!(report.delivered, 0);
        assert_eq!(report.failed, 0);
        assert_eq!(report.delivery_success_rate, 0.0);
    }

    #[test]
    fn test_record_counters() {
        let metrics = LeadMetrics::new();
        metrics.record_received();
        metrics.record_received();
        metrics.record_rejected();
        metrics.record_delivered();

        assert_eq!(metrics.received(), 2);
        assert_eq!(metrics.rejected(), 1);
        assert_eq!(metrics.delivered(), 1);
        assert_eq!(metrics.failed(), 0);
    }

    #[test]
    fn test_success_rate_ignores_rejected() {
        let metrics = LeadMetrics::new();
        for _ in 0..3 {
            metrics.record_delivered();
        }
        metrics.record_failed();
        metrics.record_rejected();

        let report = metrics.report();
        assert_eq!(report.delivery_success_rate, 75.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LeadMetrics::new();
        metrics.record_failed();
        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["failed"], 1);
        assert_eq!(json["delivery_success_rate"], 0.0);
    }

    #[test]
    fn test_concurrent_recording() {
        use std::sync::Arc;
        use std::thread;

        let metrics = Arc::new(LeadMetrics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        metrics.record_received();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.received(), 800);
    }
}
