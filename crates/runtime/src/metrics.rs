//! Delivery metrics and statistics.
//!
//! Tracks record ownership (allocations vs. releases), item creation and
//! storage writes performed by the [`Postmaster`](crate::Postmaster).

use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery metrics.
///
/// Uses atomics for lock-free access across threads.
#[derive(Debug, Default)]
pub struct DeliveryMetrics {
    /// Player records allocated to be loaded from storage
    records_allocated: AtomicU64,

    /// Player records released after loading
    records_released: AtomicU64,

    /// Items created by the item factory
    items_created: AtomicU64,

    /// Items that reached an inbox
    delivered: AtomicU64,

    /// Deliveries that ended in an error
    failed: AtomicU64,

    /// Successful storage writes
    saves: AtomicU64,

    /// Storage writes that failed (best effort, not reported as delivery errors)
    save_failures: AtomicU64,
}

impl DeliveryMetrics {
    /// Creates a new empty metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_allocation(&self) {
        self.records_allocated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_release(&self) {
        self.records_released.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_item_created(&self) {
        self.items_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivery(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_save(&self) {
        self.saves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_save_failure(&self) {
        self.save_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn records_allocated(&self) -> u64 {
        self.records_allocated.load(Ordering::Relaxed)
    }

    pub fn records_released(&self) -> u64 {
        self.records_released.load(Ordering::Relaxed)
    }

    /// Loaded records not yet released.
    pub fn live_records(&self) -> u64 {
        self.records_allocated().saturating_sub(self.records_released())
    }

    pub fn items_created(&self) -> u64 {
        self.items_created.load(Ordering::Relaxed)
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn saves(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }

    pub fn save_failures(&self) -> u64 {
        self.save_failures.load(Ordering::Relaxed)
    }

    /// Creates a snapshot of all metrics for display/logging.
    ///
    /// Note: individual fields are read atomically but the snapshot as a
    /// whole may be inconsistent if deliveries run concurrently.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_allocated: self.records_allocated(),
            records_released: self.records_released(),
            items_created: self.items_created(),
            delivered: self.delivered(),
            failed: self.failed(),
            saves: self.saves(),
            save_failures: self.save_failures(),
        }
    }
}

/// Snapshot of metrics at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub records_allocated: u64,
    pub records_released: u64,
    pub items_created: u64,
    pub delivered: u64,
    pub failed: u64,
    pub saves: u64,
    pub save_failures: u64,
}
