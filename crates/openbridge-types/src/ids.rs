//! Globally unique identifiers used throughout OpenBridge.
//!
//! Accounts use UUIDv7 for time-ordered lexicographic sorting. Operation
//! identifiers are 32-byte SHA-256 digests derived deterministically from
//! the event they describe, so the same real-world event always collides
//! on the same id. This is the replay defense, never randomize it.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Unique identifier for an account on the destination ledger.
///
/// The nil UUID is the null account: it can never receive a mint and can
/// never be a fee recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// The null account. Not a valid mint recipient.
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// OperationId
// ---------------------------------------------------------------------------

/// 32-byte identifier for a single cross-chain settlement operation.
///
/// Derived deterministically so that retried relays of the same source
/// event produce the same id and are deduplicated by the operation ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OperationId(pub [u8; 32]);

impl OperationId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Deterministic id for an outbound settlement.
    ///
    /// Every retry of the same burn (same sender, amount, nonce, sequence)
    /// produces the **exact same** id; the source side uses it for its own
    /// at-most-once discipline.
    #[must_use]
    pub fn derive_outbound(sender: AccountId, amount: u128, nonce: u64, sequence: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"openbridge:operation_id:out:v1:");
        hasher.update(sender.0.as_bytes());
        hasher.update(amount.to_le_bytes());
        hasher.update(nonce.to_le_bytes());
        hasher.update(sequence.to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Derived id for the fee mint that accompanies an inbound settlement.
    ///
    /// Kept disjoint from every user-facing id so the fee leg can be
    /// nullified independently without colliding with a real operation.
    #[must_use]
    pub fn fee_child(&self) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"openbridge:operation_id:fee:v1:");
        hasher.update(self.0);
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op:{}", hex::encode(&self.0[..8]))
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl OperationId {
    /// Random id for unit tests.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
