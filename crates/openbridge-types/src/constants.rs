//! System-wide constants for the OpenBridge settlement core.

use crate::Amount;

/// Hard cap on total token supply (base units). Mints past this fail.
pub const MAX_SUPPLY: Amount = 1_000_000_000_000_000_000;

/// Basis-point divisor for fee math: fee = amount * bps / `FEE_DIVISOR`.
pub const FEE_DIVISOR: u128 = 10_000;

/// Hard ceiling on the bridge fee rate (10%).
pub const MAX_FEE_BPS: u16 = 1_000;

/// Default minimum amount accepted by either bridge direction.
pub const DEFAULT_MIN_BRIDGE_AMOUNT: Amount = 1;

/// Default maximum amount accepted by either bridge direction.
pub const DEFAULT_MAX_BRIDGE_AMOUNT: Amount = 1_000_000_000_000;

/// Default fee rate in basis points (0.3%).
pub const DEFAULT_BRIDGE_FEE_BPS: u16 = 30;

/// Default maximum proof age accepted by the reference verifier (seconds).
pub const DEFAULT_MAX_PROOF_AGE_SECS: i64 = 3_600;

/// Allowed clock skew for proofs timestamped in the future (seconds).
pub const MAX_PROOF_FUTURE_SKEW_SECS: i64 = 60;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenBridge";
