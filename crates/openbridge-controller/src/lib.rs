//! # openbridge-controller
//!
//! The settlement orchestrator of the OpenBridge workspace.
//!
//! [`BridgeController`] ties the planes together:
//! 1. Validates inbound operations (bounds, recipient, replay gate)
//! 2. Delegates proof checking to the pluggable verifier
//! 3. Mints net-of-fee plus fee, recording nullifiers atomically
//! 4. Burns locally and emits durable records for the outbound direction
//! 5. Owns configuration, roles, statistics, and the audit event stream
//!
//! The controller is a synchronous single-writer core: embed it behind a
//! mutex, an actor loop, or a transactional store keyed by operation id,
//! whatever serialization point the host process already has.

pub mod controller;

pub use controller::BridgeController;
