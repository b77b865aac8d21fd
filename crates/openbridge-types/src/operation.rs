//! Settlement operation descriptors.
//!
//! [`BridgeOperation`] describes an inbound settlement request (source-side
//! event to be honored here). [`OutboundRecord`] is the durable record
//! emitted when value is burned locally for the reverse direction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, OperationId};

/// An inbound settlement request: mint `amount` to `recipient` on the
/// destination ledger, justified by a source-chain event.
///
/// One `BridgeOperation` maps to at most one successful mint. A rejected
/// operation leaves no ledger trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeOperation {
    /// Destination account to credit.
    pub recipient: AccountId,
    /// Gross amount claimed by the source event (fee comes out of this).
    pub amount: Amount,
    /// Deterministic identifier for the source event.
    pub operation_id: OperationId,
    /// Opaque reference to the originating source transaction. Non-empty.
    pub source_tx_ref: String,
}

/// Durable record of an outbound settlement, emitted at burn time and
/// consumed by the off-chain relayer to prove the burn on the source side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundRecord {
    /// Deterministic id derived from (sender, amount, nonce, sequence).
    pub operation_id: OperationId,
    /// The account whose balance was burned.
    pub sender: AccountId,
    /// Amount burned. No fee is charged on outbound.
    pub amount: Amount,
    /// Target address on the source chain. Non-empty.
    pub destination_address: String,
    /// The sender's per-account nonce consumed by this record.
    pub nonce: u64,
    /// Controller-wide sequence number at burn time.
    pub sequence: u64,
    /// When the burn was executed.
    pub initiated_at: DateTime<Utc>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl BridgeOperation {
    /// Create an inbound operation for unit tests.
    pub fn dummy(recipient: AccountId, amount: Amount) -> Self {
        Self {
            recipient,
            amount,
            operation_id: OperationId::random(),
            source_tx_ref: "srctx:dummy:0".to_string(),
        }
    }
}
