//! # openbridge-ledger
//!
//! Destination-side state for the OpenBridge settlement core:
//!
//! 1. [`TokenLedger`]: balances, total supply under a hard cap, and the
//!    monotonic bridged-in/bridged-out counters
//! 2. [`OperationLedger`]: the nullifier set enforcing at-most-once
//!    settlement per operation id
//! 3. [`NonceRegistry`]: per-account monotonic nonces feeding the
//!    deterministic outbound id derivation
//!
//! All three are plain single-writer structures: the controller owns them
//! behind one `&mut self` serialization point, which is what makes
//! check-then-mutate sequences atomic.

pub mod nonces;
pub mod operations;
pub mod token;

pub use nonces::NonceRegistry;
pub use operations::OperationLedger;
pub use token::TokenLedger;
