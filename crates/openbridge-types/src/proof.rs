//! Bridge proof types.
//!
//! A [`BridgeProof`] is a finished attestation that a burn/lock event was
//! observed and sealed on the source chain. The controller consumes it
//! read-only and hands it to the verifier; it is never persisted beyond
//! what the verifier itself records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::OperationId;

/// Proof that a source-chain burn/lock occurred, as delivered by the
/// proof-construction pipeline.
///
/// # Security Properties
/// - Signed by a source-side aggregator key over the canonical payload
/// - Carries the sealed Merkle root commitment for the source batch
/// - Carries `proven_at` so verifiers can bound proof age without relying
///   on any other wall-clock input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeProof {
    /// Merkle root commitment sealed on the source side.
    pub root_commitment: [u8; 32],
    /// Source-chain height at which the event was included.
    pub source_height: u64,
    /// When the proof was produced.
    pub proven_at: DateTime<Utc>,
    /// Signature over the canonical signing payload.
    pub signature: Vec<u8>,
    /// Opaque content hash of the archived proof body.
    pub proof_hash: String,
}

impl BridgeProof {
    /// Construct the canonical bytes that were signed.
    ///
    /// Format: `root(32) || height(8 LE) || proven_at_millis(8 LE) ||
    /// operation_id(32) || proof_hash(utf8)`
    ///
    /// Binding the operation id into the payload ties a proof to exactly one
    /// claimed operation, so a valid proof cannot be replayed under a
    /// different id.
    #[must_use]
    pub fn signing_payload(&self, operation_id: &OperationId) -> Vec<u8> {
        let mut payload = Vec::with_capacity(96 + self.proof_hash.len());
        payload.extend_from_slice(&self.root_commitment);
        payload.extend_from_slice(&self.source_height.to_le_bytes());
        payload.extend_from_slice(&self.proven_at.timestamp_millis().to_le_bytes());
        payload.extend_from_slice(operation_id.as_bytes());
        payload.extend_from_slice(self.proof_hash.as_bytes());
        payload
    }

    /// Age of the proof relative to `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.proven_at
    }

    /// Structural emptiness check: a proof with no signature, no content
    /// hash, or an all-zero root carries nothing worth verifying.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signature.is_empty() || self.proof_hash.is_empty() || self.root_commitment == [0u8; 32]
    }
}

/// A placeholder proof for testing.
/// **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl BridgeProof {
    /// Create a dummy proof for unit tests. Signature is a zero placeholder.
    pub fn dummy() -> Self {
        Self {
            root_commitment: [7u8; 32],
            source_height: 1_000,
            proven_at: Utc::now(),
            signature: vec![0u8; 64],
            proof_hash: "sha256:dummy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signing_payload_deterministic() {
        let proof = BridgeProof::dummy();
        let id = OperationId::from_bytes([3u8; 32]);
        assert_eq!(proof.signing_payload(&id), proof.signing_payload(&id));
    }

    #[test]
    fn signing_payload_binds_operation_id() {
        let proof = BridgeProof::dummy();
        let a = proof.signing_payload(&OperationId::from_bytes([1u8; 32]));
        let b = proof.signing_payload(&OperationId::from_bytes([2u8; 32]));
        assert_ne!(a, b, "Payload must differ per claimed operation");
    }

    #[test]
    fn dummy_is_not_empty() {
        assert!(!BridgeProof::dummy().is_empty());
    }

    #[test]
    fn empty_variants_detected() {
        let mut p = BridgeProof::dummy();
        p.signature.clear();
        assert!(p.is_empty());

        let mut p = BridgeProof::dummy();
        p.proof_hash.clear();
        assert!(p.is_empty());

        let mut p = BridgeProof::dummy();
        p.root_commitment = [0u8; 32];
        assert!(p.is_empty());
    }

    #[test]
    fn age_is_positive_for_past_proofs() {
        let mut proof = BridgeProof::dummy();
        proof.proven_at = Utc::now() - chrono::Duration::seconds(30);
        assert!(proof.age(Utc::now()) >= chrono::Duration::seconds(30));
    }

    #[test]
    fn serde_roundtrip() {
        let proof = BridgeProof::dummy();
        let json = serde_json::to_string(&proof).unwrap();
        let back: BridgeProof = serde_json::from_str(&json).unwrap();
        assert_eq!(proof.root_commitment, back.root_commitment);
        assert_eq!(proof.source_height, back.source_height);
        assert_eq!(proof.proof_hash, back.proof_hash);
    }
}
