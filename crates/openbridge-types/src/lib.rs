//! # openbridge-types
//!
//! Shared types, errors, and configuration for the **OpenBridge**
//! settlement core.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`OperationId`]
//! - **Proof model**: [`BridgeProof`]
//! - **Operation model**: [`BridgeOperation`], [`OutboundRecord`]
//! - **Event model**: [`BridgeEvent`], [`BridgeEventKind`], [`RejectClass`]
//! - **Configuration**: [`BridgeConfig`]
//! - **Access control**: [`Role`], [`AccessControl`]
//! - **Statistics**: [`BridgeStats`]
//! - **Errors**: [`BridgeError`] with `OB_ERR_` prefix codes
//! - **Constants**: supply cap, fee divisor, defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod operation;
pub mod proof;
pub mod roles;
pub mod stats;

/// Token amount in base units. All arithmetic on amounts is checked.
pub type Amount = u128;

// Re-export all primary types at crate root for ergonomic imports:
//   use openbridge_types::{BridgeOperation, BridgeProof, OperationId, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use operation::*;
pub use proof::*;
pub use roles::*;
pub use stats::*;

// Constants are accessed via `openbridge_types::constants::FOO`
// (not re-exported to avoid name collisions).
