//! Basic metrics instrumentation for the contact relay.
//!
//! Provides counters for submission outcomes and duration tracking for calls
//! to the email provider.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared between the HTTP handler and the provider client.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of provider HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of provider HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all provider requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Submissions that reached the handler
    submissions_received_total: Arc<AtomicU64>,

    /// Submissions rejected by validation
    submissions_rejected_total: Arc<AtomicU64>,

    /// Requests whose body was not valid JSON
    submissions_malformed_total: Arc<AtomicU64>,

    /// Valid submissions only logged because no API key is configured
    submissions_logged_total: Arc<AtomicU64>,

    emails_delivered_total: Arc<AtomicU64>,

    emails_failed_total: Arc<AtomicU64>,
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
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            submissions_received_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            submissions_malformed_total: Arc::new(AtomicU64::new(0)),
            submissions_logged_total: Arc::new(AtomicU64::new(0)),
            emails_delivered_total: Arc::new(AtomicU64::new(0)),
            emails_failed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a provider HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a provider HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_received(&self) {
        self.submissions_received_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_malformed(&self) {
        self.submissions_malformed_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_logged(&self) {
        self.submissions_logged_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_email_delivered(&self) {
        self.emails_delivered_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_email_failed(&self) {
        self.emails_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total provider HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total provider HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total provider request duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average provider request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn submissions_received_total(&self) -> u64 {
        self.submissions_received_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    pub fn submissions_malformed_total(&self) -> u64 {
        self.submissions_malformed_total.load(Ordering::Relaxed)
    }

    pub fn submissions_logged_total(&self) -> u64 {
        self.submissions_logged_total.load(Ordering::Relaxed)
    }

    pub fn emails_delivered_total(&self) -> u64 {
        self.emails_delivered_total.load(Ordering::Relaxed)
    }

    pub fn emails_failed_total(&self) -> u64 {
        self.emails_failed_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            submissions_received_total: self.submissions_received_total(),
            submissions_rejected_total: self.submissions_rejected_total(),
            submissions_malformed_total: self.submissions_malformed_total(),
            submissions_logged_total: self.submissions_logged_total(),
            emails_delivered_total: self.emails_delivered_total(),
            emails_failed_total: self.emails_failed_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub submissions_received_total: u64,
    pub submissions_rejected_total: u64,
    pub submissions_malformed_total: u64,
    pub submissions_logged_total: u64,
    pub emails_delivered_total: u64,
    pub emails_failed_total: u64,
}

impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received={} rejected={} malformed={} logged_only={} delivered={} failed={} \
             provider_requests={} provider_errors={} provider_avg_ms={:.1}",
            self.submissions_received_total,
            self.submissions_rejected_total,
            self.submissions_malformed_total,
            self.submissions_logged_total,
            self.emails_delivered_total,
            self.emails_failed_total,
            self.http_requests_total,
            self.http_errors_total,
            self.http_duration_avg_ms,
        )
    }
}

/// Helper for timing provider HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.http_errors_total(), 0);
        assert_eq!(metrics.submissions_received_total(), 0);
        assert_eq!(metrics.emails_delivered_total(), 0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_duration_avg_ms(), 0.0);
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));
        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 300);
        assert_eq!(metrics.http_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_submission_counters() {
        let metrics = Metrics::new();
        metrics.record_submission_received();
        metrics.record_submission_received();
        metrics.record_submission_rejected();
        metrics.record_submission_malformed();
        metrics.record_submission_logged();
        metrics.record_email_delivered();
        metrics.record_email_failed();

        let summary = metrics.summary();
        assert_eq!(summary.submissions_received_total, 2);
        assert_eq!(summary.submissions_rejected_total, 1);
        assert_eq!(summary.submissions_malformed_total, 1);
        assert_eq!(summary.submissions_logged_total, 1);
        assert_eq!(summary.emails_delivered_total, 1);
        assert_eq!(summary.emails_failed_total, 1);
    }

    #[test]
    fn test_summary_display() {
        let metrics = Metrics::new();
        metrics.record_submission_received();
        metrics.record_email_delivered();

        let line = metrics.summary().to_string();
        assert!(line.contains("received=1"));
        assert!(line.contains("delivered=1"));
        assert!(line.contains("provider_avg_ms=0.0"));
    }

    #[test]
    fn test_http_timer() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        thread::sleep(Duration::from_millis(10));
        timer.complete();

        assert_eq!(metrics.http_requests_total(), 1);
        assert!(metrics.http_duration_total_ms() >= 10);
    }

    #[test]
    fn test_http_timer_with_error() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.http_requests_total(), 1);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_submission_received();
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_submission_received();
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.submissions_received_total(), 200);
    }
}
