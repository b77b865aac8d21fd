//! Auditable bridge events.
//!
//! Every significant action (settlement, rejection, burn, configuration
//! change) produces a [`BridgeEvent`]. The stream is consumed by the
//! off-chain relayer and by observability tooling; administrative changes
//! always carry both the old and the new values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, OperationId};

/// Why an inbound request was rejected. Validation failures and verifier
/// rejections are deliberately distinguishable; transient verifier outages
/// are a third class so retries can be targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectClass {
    /// Bad recipient / amount out of range / empty reference.
    Validation,
    /// The verifier examined the proof and said no.
    Verification,
    /// The verifier could not be reached; retry the same submission.
    Transient,
}

impl std::fmt::Display for RejectClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::Verification => write!(f, "VERIFICATION"),
            Self::Transient => write!(f, "TRANSIENT"),
        }
    }
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BridgeEventKind {
    /// An inbound settlement minted value.
    InboundSettled {
        operation_id: OperationId,
        recipient: AccountId,
        amount: Amount,
        fee: Amount,
        source_tx_ref: String,
    },
    /// An inbound request was rejected. No ledger trace, no nullifier.
    InboundRejected {
        operation_id: OperationId,
        class: RejectClass,
        reason: String,
    },
    /// An outbound burn was executed and recorded.
    OutboundInitiated {
        operation_id: OperationId,
        sender: AccountId,
        amount: Amount,
        destination_address: String,
        nonce: u64,
    },
    /// Bridge amount bounds changed.
    LimitsUpdated {
        old_min: Amount,
        old_max: Amount,
        new_min: Amount,
        new_max: Amount,
    },
    /// Fee rate and/or fee recipient changed.
    FeeUpdated {
        old_bps: u16,
        new_bps: u16,
        old_recipient: AccountId,
        new_recipient: AccountId,
    },
    /// The proof verifier was swapped.
    VerifierUpdated { old: String, new: String },
    /// The bridge was paused.
    Paused,
    /// The bridge was unpaused.
    Unpaused,
    /// An admin force-marked an operation id as processed.
    OperationForceMarked { operation_id: OperationId },
}

impl BridgeEventKind {
    /// Stable event name for log and metrics labels.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InboundSettled { .. } => "INBOUND_SETTLED",
            Self::InboundRejected { .. } => "INBOUND_REJECTED",
            Self::OutboundInitiated { .. } => "OUTBOUND_INITIATED",
            Self::LimitsUpdated { .. } => "LIMITS_UPDATED",
            Self::FeeUpdated { .. } => "FEE_UPDATED",
            Self::VerifierUpdated { .. } => "VERIFIER_UPDATED",
            Self::Paused => "PAUSED",
            Self::Unpaused => "UNPAUSED",
            Self::OperationForceMarked { .. } => "OPERATION_FORCE_MARKED",
        }
    }
}

/// A timestamped entry in the append-only audit stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeEvent {
    /// What happened.
    pub kind: BridgeEventKind,
    /// When it was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl BridgeEvent {
    /// Record an event now.
    #[must_use]
    pub fn now(kind: BridgeEventKind) -> Self {
        Self {
            kind,
            recorded_at: Utc::now(),
        }
    }
}
