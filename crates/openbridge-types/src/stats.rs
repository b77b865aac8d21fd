//! Bridge statistics.
//!
//! Monotonic counters, updated exactly once per processed request (success
//! or failure) and never on replays of an id that already finalized.

use serde::{Deserialize, Serialize};

use crate::Amount;

/// Running counters for bridge activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeStats {
    /// Requests that reached processing (success or failure).
    pub total_operations: u64,
    /// Settlements that completed.
    pub successful_operations: u64,
    /// Requests rejected during validation or verification.
    pub failed_operations: u64,
    /// Sum of amounts across successful settlements, both directions.
    pub total_volume: Amount,
}

impl BridgeStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a settled operation of the given amount.
    pub fn record_success(&mut self, amount: Amount) {
        self.total_operations += 1;
        self.successful_operations += 1;
        self.total_volume = self.total_volume.saturating_add(amount);
    }

    /// Record a rejected operation.
    pub fn record_failure(&mut self) {
        self.total_operations += 1;
        self.failed_operations += 1;
    }
}
