//! Operation ledger: the nullifier set preventing replay.
//!
//! Each operation id can be finalized at most once. The set is unbounded
//! on purpose: forgetting a nullifier would reopen the double-mint window
//! for that id, so there is no eviction. Ids are recorded only on
//! successful settlement (and by explicit admin poison), which keeps a
//! failed verification retryable with a corrected proof.

use std::collections::HashSet;

use openbridge_types::{BridgeError, OperationId, Result};

/// Set of operation ids already finalized, with atomic check-then-set.
#[derive(Debug, Clone, Default)]
pub struct OperationLedger {
    processed: HashSet<OperationId>,
}

impl OperationLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this id has already been finalized.
    #[must_use]
    pub fn is_processed(&self, id: &OperationId) -> bool {
        self.processed.contains(id)
    }

    /// Finalize an id. Check-then-set in one call.
    ///
    /// # Errors
    /// Returns [`BridgeError::AlreadyProcessed`] on a duplicate.
    pub fn mark_processed(&mut self, id: OperationId) -> Result<()> {
        if !self.processed.insert(id) {
            return Err(BridgeError::AlreadyProcessed(id));
        }
        Ok(())
    }

    /// Number of ids tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.processed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}
