//! Error types for the OpenBridge settlement core.
//!
//! All errors use the `OB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Validation errors (rejected before any side effect)
//! - 2xx: Ledger / capacity errors
//! - 3xx: Verification errors
//! - 4xx: Replay errors
//! - 5xx: Authorization errors
//! - 6xx: Configuration errors
//! - 7xx: Lifecycle / pause errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{Amount, OperationId, Role};

/// Central error enum for all OpenBridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// The recipient (or fee recipient) is the null account.
    #[error("OB_ERR_100: Invalid recipient: null account")]
    InvalidRecipient,

    /// The amount falls outside the configured bridge bounds.
    #[error("OB_ERR_101: Amount {amount} outside bridge bounds [{min}, {max}]")]
    AmountOutOfBounds {
        amount: Amount,
        min: Amount,
        max: Amount,
    },

    /// The inbound operation carries no source transaction reference.
    #[error("OB_ERR_102: Source transaction reference is empty")]
    EmptySourceRef,

    /// The outbound request carries no destination address.
    #[error("OB_ERR_103: Destination address is empty")]
    EmptyDestination,

    /// The operation failed structural validation.
    #[error("OB_ERR_104: Invalid operation: {reason}")]
    InvalidOperation { reason: String },

    // =================================================================
    // Ledger / Capacity Errors (2xx)
    // =================================================================
    /// Minting would push total supply past the hard cap.
    #[error("OB_ERR_200: Supply cap exceeded: supply {supply} + mint {requested} > max {max_supply}")]
    SupplyExceeded {
        supply: Amount,
        requested: Amount,
        max_supply: Amount,
    },

    /// Not enough balance to burn.
    #[error("OB_ERR_201: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    /// A balance or counter operation overflowed u128.
    #[error("OB_ERR_202: Ledger arithmetic overflow")]
    LedgerOverflow,

    // =================================================================
    // Verification Errors (3xx)
    // =================================================================
    /// The verifier examined the proof and rejected it. Definitive for this
    /// call; retryable with a corrected proof since no nullifier is set.
    #[error("OB_ERR_300: Proof rejected for {operation_id}: {reason}")]
    ProofRejected {
        operation_id: OperationId,
        reason: String,
    },

    /// The verifier could not be reached or timed out. Transient; never
    /// conflate with a definitive rejection.
    #[error("OB_ERR_301: Verifier unavailable: {reason}")]
    VerifierUnavailable { reason: String },

    // =================================================================
    // Replay Errors (4xx)
    // =================================================================
    /// The operation id was already finalized. Fatal to this call by design.
    #[error("OB_ERR_400: Operation already processed: {0}")]
    AlreadyProcessed(OperationId),

    // =================================================================
    // Authorization Errors (5xx)
    // =================================================================
    /// The caller does not hold the role required for this entry point.
    #[error("OB_ERR_500: Unauthorized: caller lacks the {required} role")]
    Unauthorized { required: Role },

    // =================================================================
    // Configuration Errors (6xx)
    // =================================================================
    /// Bridge limits are inconsistent (min must be positive and below max).
    #[error("OB_ERR_600: Invalid bridge limits: min {min}, max {max}")]
    InvalidLimits { min: Amount, max: Amount },

    /// The fee rate exceeds the hard ceiling.
    #[error("OB_ERR_601: Fee {bps} bps exceeds maximum {max_bps} bps")]
    FeeTooHigh { bps: u16, max_bps: u16 },

    /// Configuration failed validation for another reason.
    #[error("OB_ERR_602: Configuration error: {0}")]
    Configuration(String),

    // =================================================================
    // Lifecycle Errors (7xx)
    // =================================================================
    /// The bridge is paused; new settlements are rejected uniformly.
    #[error("OB_ERR_700: Bridge is paused")]
    BridgePaused,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OB_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("OB_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = BridgeError::AlreadyProcessed(OperationId::from_bytes([1u8; 32]));
        let msg = format!("{err}");
        assert!(msg.starts_with("OB_ERR_400"), "Got: {msg}");
    }

    #[test]
    fn insufficient_balance_display() {
        let err = BridgeError::InsufficientBalance {
            needed: 100,
            available: 50,
        };
        let msg = format!("{err}");
        assert!(msg.contains("OB_ERR_201"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn unauthorized_names_role() {
        let err = BridgeError::Unauthorized {
            required: Role::Operator,
        };
        let msg = format!("{err}");
        assert!(msg.contains("OB_ERR_500"));
        assert!(msg.contains("OPERATOR"));
    }

    #[test]
    fn all_errors_have_ob_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(BridgeError::InvalidRecipient),
            Box::new(BridgeError::EmptySourceRef),
            Box::new(BridgeError::BridgePaused),
            Box::new(BridgeError::LedgerOverflow),
            Box::new(BridgeError::Internal("test".into())),
            Box::new(BridgeError::VerifierUnavailable {
                reason: "timeout".into(),
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("OB_ERR_"),
                "Error missing OB_ERR_ prefix: {msg}"
            );
        }
    }
}
