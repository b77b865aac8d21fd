//! Reference proof verifier.
//!
//! Checks, in order:
//! 1. Structural non-emptiness (signature, content hash, non-zero root)
//! 2. Proof age: `proven_at` within `max_proof_age`, and not timestamped
//!    further in the future than the allowed clock skew
//! 3. Root commitment against the allow-list, when one is configured
//! 4. Ed25519 signature over the canonical signing payload against the
//!    trusted signer set, when one is configured
//!
//! Checks 3 and 4 only run when configured; production deployments are
//! expected to configure both. Verification is pure per `(proof,
//! operation)` apart from the explicit age window.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use openbridge_types::{constants, BridgeOperation, BridgeProof, Result};

use crate::{ProofVerifier, Verdict, VerifierInfo};

/// The stock production verifier.
pub struct ReferenceVerifier {
    /// Maximum accepted proof age.
    max_proof_age: Duration,
    /// Roots the source side is known to have sealed. `None` = check skipped.
    allowed_roots: Option<HashSet<[u8; 32]>>,
    /// Aggregator keys allowed to sign proofs. `None` = check skipped.
    trusted_signers: Option<Vec<VerifyingKey>>,
}

impl ReferenceVerifier {
    /// Verifier with the default age window and no root/signer sets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_proof_age: Duration::seconds(constants::DEFAULT_MAX_PROOF_AGE_SECS),
            allowed_roots: None,
            trusted_signers: None,
        }
    }

    /// Override the maximum accepted proof age.
    #[must_use]
    pub fn with_max_proof_age(mut self, max_age: Duration) -> Self {
        self.max_proof_age = max_age;
        self
    }

    /// Enable the root allow-list check.
    #[must_use]
    pub fn with_allowed_roots(mut self, roots: impl IntoIterator<Item = [u8; 32]>) -> Self {
        self.allowed_roots = Some(roots.into_iter().collect());
        self
    }

    /// Enable the signature check against a trusted signer set.
    #[must_use]
    pub fn with_trusted_signers(mut self, signers: impl IntoIterator<Item = VerifyingKey>) -> Self {
        self.trusted_signers = Some(signers.into_iter().collect());
        self
    }

    fn check_age(&self, proof: &BridgeProof) -> Option<String> {
        let now = Utc::now();
        let age = proof.age(now);
        if age > self.max_proof_age {
            return Some(format!(
                "proof is stale: age {}s exceeds maximum {}s",
                age.num_seconds(),
                self.max_proof_age.num_seconds()
            ));
        }
        if age < -Duration::seconds(constants::MAX_PROOF_FUTURE_SKEW_SECS) {
            return Some("proof is timestamped in the future".to_string());
        }
        None
    }

    fn check_root(&self, proof: &BridgeProof) -> Option<String> {
        let roots = self.allowed_roots.as_ref()?;
        if roots.contains(&proof.root_commitment) {
            None
        } else {
            Some(format!(
                "root commitment {} is not on the allow-list",
                hex::encode(&proof.root_commitment[..4])
            ))
        }
    }

    fn check_signature(&self, proof: &BridgeProof, operation: &BridgeOperation) -> Option<String> {
        let signers = self.trusted_signers.as_ref()?;
        let Ok(signature) = Signature::from_slice(&proof.signature) else {
            return Some("signature is malformed".to_string());
        };
        let payload = proof.signing_payload(&operation.operation_id);
        if signers
            .iter()
            .any(|key| key.verify(&payload, &signature).is_ok())
        {
            None
        } else {
            Some("signature does not match any trusted signer".to_string())
        }
    }
}

impl Default for ReferenceVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofVerifier for ReferenceVerifier {
    fn verify(&self, proof: &BridgeProof, operation: &BridgeOperation) -> Result<Verdict> {
        if proof.is_empty() {
            return Ok(Verdict::Rejected {
                reason: "proof is structurally empty".to_string(),
            });
        }
        let reason = self
            .check_age(proof)
            .or_else(|| self.check_root(proof))
            .or_else(|| self.check_signature(proof, operation));
        match reason {
            Some(reason) => {
                tracing::debug!(
                    operation_id = %operation.operation_id,
                    %reason,
                    "proof rejected"
                );
                Ok(Verdict::Rejected { reason })
            }
            None => Ok(Verdict::Accepted),
        }
    }

    fn info(&self) -> VerifierInfo {
        let mut checks = vec!["non-empty".to_string(), "proof-age".to_string()];
        if self.allowed_roots.is_some() {
            checks.push("root-allow-list".to_string());
        }
        if self.trusted_signers.is_some() {
            checks.push("ed25519-signature".to_string());
        }
        VerifierInfo {
            name: "reference".to_string(),
            checks,
        }
    }
}
