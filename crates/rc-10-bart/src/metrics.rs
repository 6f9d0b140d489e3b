//! Metrics for BART operations
//!
//! Lock-free counters the service bumps on every request. Readers take a
//! [`MetricsSnapshot`].

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for BART operations
#[derive(Debug, Default)]
pub struct BartMetrics {
    /// Successful uploads (including re-uploads of known content)
    pub uploads: AtomicU64,
    /// Total icon bytes accepted by uploads
    pub bytes_uploaded: AtomicU64,
    /// Download replies sent, blank icons included
    pub downloads: AtomicU64,
    /// Download replies served from the blank placeholder
    pub blank_served: AtomicU64,
    /// Retrievals for hashes with nothing stored
    pub not_found: AtomicU64,
    /// Retrievals rejected for non-known flags
    pub unsupported_requests: AtomicU64,
    /// Uploads whose presence announcement failed
    pub notify_failures: AtomicU64,
    /// Store put/get failures
    pub storage_failures: AtomicU64,
}

impl BartMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_upload(&self, size: usize) {
        self.uploads.fetch_add(1, Ordering::Relaxed);
        self.bytes_uploaded.fetch_add(size as u64, Ordering::Relaxed);
    }

    /// Record a download reply
    ///
    /// # Arguments
    /// * `blank` - Whether the payload was the cleared-icon placeholder
    pub fn record_download(&self, blank: bool) {
        self.downloads.fetch_add(1, Ordering::Relaxed);
        if blank {
            self.blank_served.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unsupported(&self) {
        self.unsupported_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notify_failure(&self) {
        self.notify_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_failure(&self) {
        self.storage_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uploads: self.uploads.load(Ordering::Relaxed),
            bytes_uploaded: self.bytes_uploaded.load(Ordering::Relaxed),
            downloads: self.downloads.load(Ordering::Relaxed),
            blank_served: self.blank_served.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            unsupported_requests: self.unsupported_requests.load(Ordering::Relaxed),
            notify_failures: self.notify_failures.load(Ordering::Relaxed),
            storage_failures: self.storage_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`BartMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub uploads: u64,
    pub bytes_uploaded: u64,
    pub downloads: u64,
    pub blank_served: u64,
    pub not_found: u64,
    pub unsupported_requests: u64,
    pub notify_failures: u64,
    pub storage_failures: u64,
}

impl MetricsSnapshot {
    /// Fraction of download replies that were the blank placeholder
    pub fn blank_ratio(&self) -> f64 {
        if self.downloads == 0 {
            0.0
        } else {
            self.blank_served as f64 / self.downloads as f64
        }
    }
}
