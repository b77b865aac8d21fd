//! Verifier test doubles.
//! **Never use in production.**

use openbridge_types::{BridgeError, BridgeOperation, BridgeProof, Result};

use crate::{ProofVerifier, Verdict, VerifierInfo};

/// Accepts every proof.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ProofVerifier for AcceptAll {
    fn verify(&self, _proof: &BridgeProof, _operation: &BridgeOperation) -> Result<Verdict> {
        Ok(Verdict::Accepted)
    }

    fn info(&self) -> VerifierInfo {
        VerifierInfo {
            name: "accept-all".to_string(),
            checks: Vec::new(),
        }
    }
}

/// Rejects every proof with a fixed reason.
#[derive(Debug, Clone)]
pub struct RejectAll {
    pub reason: String,
}

impl RejectAll {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ProofVerifier for RejectAll {
    fn verify(&self, _proof: &BridgeProof, _operation: &BridgeOperation) -> Result<Verdict> {
        Ok(Verdict::Rejected {
            reason: self.reason.clone(),
        })
    }

    fn info(&self) -> VerifierInfo {
        VerifierInfo {
            name: "reject-all".to_string(),
            checks: Vec::new(),
        }
    }
}

/// Simulates a verifier that cannot be reached: every call fails with the
/// transient [`BridgeError::VerifierUnavailable`], never with a verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unreachable;

impl ProofVerifier for Unreachable {
    fn verify(&self, _proof: &BridgeProof, _operation: &BridgeOperation) -> Result<Verdict> {
        Err(BridgeError::VerifierUnavailable {
            reason: "verification backend timed out".to_string(),
        })
    }

    fn info(&self) -> VerifierInfo {
        VerifierInfo {
            name: "unreachable".to_string(),
            checks: Vec::new(),
        }
    }
}
