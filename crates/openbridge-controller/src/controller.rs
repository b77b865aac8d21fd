//! The bridge controller.
//!
//! Orchestrates both settlement directions against one destination ledger:
//!
//! - **Inbound**: `Received -> BoundsChecked -> Verified|Rejected -> Settled`.
//!   Operator-only, since this is the path that creates new value. The
//!   nullifier is recorded only on success, so a failed verification stays
//!   retryable with a corrected proof.
//! - **Outbound**: `Requested -> Burned -> Emitted`. Any balance holder;
//!   the burn is irreversible from this ledger's point of view and the
//!   emitted record carries a deterministic id for the source side's own
//!   at-most-once discipline.
//!
//! Every mutation flows through `&mut self`, a single-writer serialization
//! point, so the bounds-check / nullifier-check / ledger-mutation sequence
//! for a given operation id can never interleave with another request.
//! Proof verification is read-only and could be offloaded; only the final
//! check-nullifier-then-settle step needs this exclusivity.

use openbridge_ledger::{NonceRegistry, OperationLedger, TokenLedger};
use openbridge_types::{
    AccessControl, AccountId, Amount, BridgeConfig, BridgeError, BridgeEvent, BridgeEventKind,
    BridgeOperation, BridgeProof, BridgeStats, OperationId, OutboundRecord, RejectClass, Result,
    Role,
};
use openbridge_verifier::{ProofVerifier, Verdict, VerifierInfo};

/// Orchestrator for inbound and outbound settlement, administration, and
/// the auditable event stream.
pub struct BridgeController {
    ledger: TokenLedger,
    operations: OperationLedger,
    nonces: NonceRegistry,
    verifier: Box<dyn ProofVerifier>,
    config: BridgeConfig,
    stats: BridgeStats,
    access: AccessControl,
    events: Vec<BridgeEvent>,
    outbound: Vec<OutboundRecord>,
    /// Controller-wide sequence, fed into outbound id derivation.
    sequence: u64,
}

impl std::fmt::Debug for BridgeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeController")
            .field("ledger", &self.ledger)
            .field("operations", &self.operations)
            .field("nonces", &self.nonces)
            .field("config", &self.config)
            .field("stats", &self.stats)
            .field("access", &self.access)
            .field("events", &self.events)
            .field("outbound", &self.outbound)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl BridgeController {
    /// Create a controller with an empty ledger capped at `max_supply`.
    ///
    /// `admin` receives the `Admin` role; further grants go through
    /// [`grant_role`](Self::grant_role).
    ///
    /// # Errors
    /// Returns a configuration error if `config` fails validation.
    pub fn new(
        admin: AccountId,
        config: BridgeConfig,
        max_supply: Amount,
        verifier: Box<dyn ProofVerifier>,
    ) -> Result<Self> {
        config.validate()?;
        let mut access = AccessControl::new();
        access.grant(admin, Role::Admin);
        Ok(Self {
            ledger: TokenLedger::new(max_supply),
            operations: OperationLedger::new(),
            nonces: NonceRegistry::new(),
            verifier,
            config,
            stats: BridgeStats::new(),
            access,
            events: Vec::new(),
            outbound: Vec::new(),
            sequence: 0,
        })
    }

    // =====================================================================
    // Inbound settlement
    // =====================================================================

    /// Settle an inbound operation: verify the proof, mint net-of-fee,
    /// mint the fee, record the nullifier. One atomic unit.
    ///
    /// Operator-only. Authorization, pause, and replay rejections happen
    /// before the request counts as processed; validation and verification
    /// rejections are counted and leave the id retryable.
    pub fn process_bridge_in(
        &mut self,
        caller: AccountId,
        proof: &BridgeProof,
        operation: &BridgeOperation,
    ) -> Result<()> {
        self.access.require(caller, Role::Operator)?;
        if self.config.paused {
            return Err(BridgeError::BridgePaused);
        }

        let id = operation.operation_id;
        let fee_id = id.fee_child();
        // Replay gate: both the user-facing id and its fee child are
        // nullified at settle time, so both block here.
        if self.operations.is_processed(&id) || self.operations.is_processed(&fee_id) {
            return Err(BridgeError::AlreadyProcessed(id));
        }

        if let Err(err) = self.validate_inbound(operation) {
            self.reject_inbound(id, RejectClass::Validation, err.to_string());
            return Err(err);
        }

        match self.verifier.verify(proof, operation) {
            Ok(Verdict::Accepted) => {}
            Ok(Verdict::Rejected { reason }) => {
                self.reject_inbound(id, RejectClass::Verification, reason.clone());
                return Err(BridgeError::ProofRejected {
                    operation_id: id,
                    reason,
                });
            }
            Err(err) => {
                // Transient: the verifier gave no verdict. Counted, logged,
                // and the identical submission may be retried.
                self.reject_inbound(id, RejectClass::Transient, err.to_string());
                return Err(err);
            }
        }

        // Capacity precheck keeps the mark-then-mint sequence below
        // infallible: a supply-cap failure must never poison the id.
        if let Err(err) = self.ledger.check_mint_capacity(operation.amount) {
            self.reject_inbound(id, RejectClass::Validation, err.to_string());
            return Err(err);
        }

        let fee = self.config.fee_for(operation.amount);
        let net = operation.amount - fee;

        self.operations.mark_processed(id)?;
        self.operations.mark_processed(fee_id)?;
        self.ledger.bridge_mint(operation.recipient, net)?;
        if fee > 0 {
            self.ledger.bridge_mint(self.config.fee_recipient, fee)?;
        }

        self.stats.record_success(operation.amount);
        self.events
            .push(BridgeEvent::now(BridgeEventKind::InboundSettled {
                operation_id: id,
                recipient: operation.recipient,
                amount: operation.amount,
                fee,
                source_tx_ref: operation.source_tx_ref.clone(),
            }));
        tracing::info!(
            operation_id = %id,
            recipient = %operation.recipient,
            amount = operation.amount,
            fee,
            "inbound settlement completed"
        );
        Ok(())
    }

    fn validate_inbound(&self, operation: &BridgeOperation) -> Result<()> {
        if operation.recipient.is_nil() {
            return Err(BridgeError::InvalidRecipient);
        }
        if operation.source_tx_ref.is_empty() {
            return Err(BridgeError::EmptySourceRef);
        }
        if !self.config.within_bounds(operation.amount) {
            return Err(BridgeError::AmountOutOfBounds {
                amount: operation.amount,
                min: self.config.min_bridge_amount,
                max: self.config.max_bridge_amount,
            });
        }
        Ok(())
    }

    fn reject_inbound(&mut self, operation_id: OperationId, class: RejectClass, reason: String) {
        self.stats.record_failure();
        tracing::warn!(%operation_id, %class, %reason, "inbound settlement rejected");
        self.events
            .push(BridgeEvent::now(BridgeEventKind::InboundRejected {
                operation_id,
                class,
                reason,
            }));
    }

    // =====================================================================
    // Outbound settlement
    // =====================================================================

    /// Burn `amount` from `caller` and emit a durable outbound record for
    /// the relayer to prove on the source side. Returns the deterministic
    /// operation id. No fee is charged on outbound.
    ///
    /// Any balance holder may call this; a failed request mutates nothing.
    pub fn initiate_bridge_out(
        &mut self,
        caller: AccountId,
        amount: Amount,
        destination_address: &str,
    ) -> Result<OperationId> {
        if self.config.paused {
            return Err(BridgeError::BridgePaused);
        }
        if destination_address.is_empty() {
            return Err(BridgeError::EmptyDestination);
        }
        if !self.config.within_bounds(amount) {
            return Err(BridgeError::AmountOutOfBounds {
                amount,
                min: self.config.min_bridge_amount,
                max: self.config.max_bridge_amount,
            });
        }

        // Burned: irreversible from here. Insufficient balance fails the
        // whole request with no trace.
        self.ledger.bridge_burn(caller, amount)?;

        // Emitted.
        let nonce = self.nonces.next(caller);
        self.sequence += 1;
        let operation_id = OperationId::derive_outbound(caller, amount, nonce, self.sequence);
        let record = OutboundRecord {
            operation_id,
            sender: caller,
            amount,
            destination_address: destination_address.to_string(),
            nonce,
            sequence: self.sequence,
            initiated_at: chrono::Utc::now(),
        };
        self.outbound.push(record);

        self.stats.record_success(amount);
        self.events
            .push(BridgeEvent::now(BridgeEventKind::OutboundInitiated {
                operation_id,
                sender: caller,
                amount,
                destination_address: destination_address.to_string(),
                nonce,
            }));
        tracing::info!(
            %operation_id,
            sender = %caller,
            amount,
            nonce,
            "outbound settlement initiated"
        );
        Ok(operation_id)
    }

    // =====================================================================
    // Administration
    // =====================================================================

    /// Grant a role. Admin-only.
    pub fn grant_role(&mut self, caller: AccountId, account: AccountId, role: Role) -> Result<()> {
        self.access.require(caller, Role::Admin)?;
        self.access.grant(account, role);
        Ok(())
    }

    /// Revoke a role. Admin-only.
    pub fn revoke_role(&mut self, caller: AccountId, account: AccountId, role: Role) -> Result<()> {
        self.access.require(caller, Role::Admin)?;
        self.access.revoke(account, role);
        Ok(())
    }

    /// Swap the proof verifier. Verifier-manager only.
    pub fn update_verifier(
        &mut self,
        caller: AccountId,
        verifier: Box<dyn ProofVerifier>,
    ) -> Result<()> {
        self.access.require(caller, Role::VerifierManager)?;
        let old = self.verifier.info().name;
        let new = verifier.info().name;
        self.verifier = verifier;
        tracing::info!(%old, %new, "verifier updated");
        self.events
            .push(BridgeEvent::now(BridgeEventKind::VerifierUpdated {
                old,
                new,
            }));
        Ok(())
    }

    /// Change the amount bounds. Admin-only.
    pub fn update_bridge_limits(
        &mut self,
        caller: AccountId,
        min: Amount,
        max: Amount,
    ) -> Result<()> {
        self.access.require(caller, Role::Admin)?;
        let mut candidate = self.config.clone();
        candidate.min_bridge_amount = min;
        candidate.max_bridge_amount = max;
        candidate.validate()?;

        self.events
            .push(BridgeEvent::now(BridgeEventKind::LimitsUpdated {
                old_min: self.config.min_bridge_amount,
                old_max: self.config.max_bridge_amount,
                new_min: min,
                new_max: max,
            }));
        self.config = candidate;
        Ok(())
    }

    /// Change the fee rate and fee recipient. Admin-only.
    pub fn update_bridge_fee(
        &mut self,
        caller: AccountId,
        bps: u16,
        recipient: AccountId,
    ) -> Result<()> {
        self.access.require(caller, Role::Admin)?;
        let mut candidate = self.config.clone();
        candidate.bridge_fee_bps = bps;
        candidate.fee_recipient = recipient;
        candidate.validate()?;

        self.events.push(BridgeEvent::now(BridgeEventKind::FeeUpdated {
            old_bps: self.config.bridge_fee_bps,
            new_bps: bps,
            old_recipient: self.config.fee_recipient,
            new_recipient: recipient,
        }));
        self.config = candidate;
        Ok(())
    }

    /// Pause both flows. Admin-only. In-flight settlements are unaffected;
    /// only new requests are blocked. Idempotent (no event on a no-op).
    pub fn pause(&mut self, caller: AccountId) -> Result<()> {
        self.access.require(caller, Role::Admin)?;
        if !self.config.paused {
            self.config.paused = true;
            tracing::warn!("bridge paused");
            self.events.push(BridgeEvent::now(BridgeEventKind::Paused));
        }
        Ok(())
    }

    /// Resume both flows. Admin-only. Idempotent.
    pub fn unpause(&mut self, caller: AccountId) -> Result<()> {
        self.access.require(caller, Role::Admin)?;
        if self.config.paused {
            self.config.paused = false;
            tracing::info!("bridge unpaused");
            self.events.push(BridgeEvent::now(BridgeEventKind::Unpaused));
        }
        Ok(())
    }

    /// Emergency poison: force-mark an id as processed so no verifier,
    /// buggy or compromised, can later settle it. Admin-only.
    ///
    /// # Errors
    /// Returns [`BridgeError::AlreadyProcessed`] if the id is already set.
    pub fn mark_operation_processed(
        &mut self,
        caller: AccountId,
        id: OperationId,
    ) -> Result<()> {
        self.access.require(caller, Role::Admin)?;
        self.operations.mark_processed(id)?;
        tracing::warn!(operation_id = %id, "operation id force-marked as processed");
        self.events
            .push(BridgeEvent::now(BridgeEventKind::OperationForceMarked {
                operation_id: id,
            }));
        Ok(())
    }

    // =====================================================================
    // Read API
    // =====================================================================

    /// Fee the current configuration would charge on `amount`.
    #[must_use]
    pub fn calculate_fee(&self, amount: Amount) -> Amount {
        self.config.fee_for(amount)
    }

    #[must_use]
    pub fn stats(&self) -> &BridgeStats {
        &self.stats
    }

    #[must_use]
    pub fn is_operation_processed(&self, id: &OperationId) -> bool {
        self.operations.is_processed(id)
    }

    /// The next nonce the account's outbound derivation will consume.
    #[must_use]
    pub fn user_nonce(&self, account: AccountId) -> u64 {
        self.nonces.peek(account)
    }

    #[must_use]
    pub fn verifier_info(&self) -> VerifierInfo {
        self.verifier.info()
    }

    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.ledger.balance_of(account)
    }

    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    #[must_use]
    pub fn ledger(&self) -> &TokenLedger {
        &self.ledger
    }

    /// The append-only audit stream.
    #[must_use]
    pub fn events(&self) -> &[BridgeEvent] {
        &self.events
    }

    /// Durable outbound records awaiting relay.
    #[must_use]
    pub fn outbound_records(&self) -> &[OutboundRecord] {
        &self.outbound
    }

    /// Test-only ledger access for funding accounts directly.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn ledger_mut(&mut self) -> &mut TokenLedger {
        &mut self.ledger
    }
}
