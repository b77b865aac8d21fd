//! # openbridge-verifier
//!
//! Pluggable proof verification for the OpenBridge settlement core.
//!
//! The controller holds a [`ProofVerifier`] trait object, not a concrete
//! type, so the verification capability can be swapped at runtime by the
//! verifier-manager role. Implementations must be deterministic for a
//! given `(proof, operation)` pair; the only wall-clock input is the
//! proof's own `proven_at` bounded by a configured maximum age.
//!
//! Two distinct failure shapes, never conflated:
//! - [`Verdict::Rejected`]: the verifier examined the proof and said no
//! - `Err(VerifierUnavailable)`: the verifier could not answer; the same
//!   submission may be retried as-is

pub mod reference;

#[cfg(any(test, feature = "test-helpers"))]
pub mod doubles;

use openbridge_types::{BridgeOperation, BridgeProof, Result};

pub use reference::ReferenceVerifier;

/// Outcome of a completed verification. A definitive answer either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The proof is valid for the claimed operation.
    Accepted,
    /// The proof is not valid for the claimed operation.
    Rejected {
        /// Human-readable reason, propagated into the rejection event.
        reason: String,
    },
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Descriptive metadata about a verifier, surfaced by the read API and in
/// verifier-swap audit events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierInfo {
    /// Short stable name, e.g. `"reference"`.
    pub name: String,
    /// The checks this instance actually performs, for operators to audit.
    pub checks: Vec<String>,
}

/// The verification capability consumed by the bridge controller.
pub trait ProofVerifier: Send + Sync {
    /// Verify `proof` against the claimed `operation`.
    ///
    /// Returns a [`Verdict`] when the verifier reached a decision. Returns
    /// `Err(`[`VerifierUnavailable`]`)` only for transient infrastructure
    /// failure (timeout, unreachable backend), never for a bad proof.
    ///
    /// [`VerifierUnavailable`]: openbridge_types::BridgeError::VerifierUnavailable
    fn verify(&self, proof: &BridgeProof, operation: &BridgeOperation) -> Result<Verdict>;

    /// Metadata describing this verifier instance.
    fn info(&self) -> VerifierInfo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_accepted_predicate() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::Rejected {
            reason: "no".into()
        }
        .is_accepted());
    }
}
