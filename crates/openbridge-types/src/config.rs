//! Bridge configuration.
//!
//! One mutable, admin-owned record: amount bounds, fee rate, fee recipient,
//! pause flag. Every mutation goes through the controller under the same
//! serialization discipline as settlement and emits an old/new audit event.

use serde::{Deserialize, Serialize};

use crate::{constants, AccountId, Amount, BridgeError, Result};

/// Admin-mutable bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Smallest amount accepted by either direction (inclusive).
    pub min_bridge_amount: Amount,
    /// Largest amount accepted by either direction (inclusive).
    pub max_bridge_amount: Amount,
    /// Fee rate in basis points, taken on inbound mint only. At most
    /// [`constants::MAX_FEE_BPS`].
    pub bridge_fee_bps: u16,
    /// Account credited with the inbound fee.
    pub fee_recipient: AccountId,
    /// Global gate: when set, both flows reject new work uniformly.
    pub paused: bool,
}

impl BridgeConfig {
    /// Configuration with stock limits and fee, paying fees to `fee_recipient`.
    #[must_use]
    pub fn new(fee_recipient: AccountId) -> Self {
        Self {
            min_bridge_amount: constants::DEFAULT_MIN_BRIDGE_AMOUNT,
            max_bridge_amount: constants::DEFAULT_MAX_BRIDGE_AMOUNT,
            bridge_fee_bps: constants::DEFAULT_BRIDGE_FEE_BPS,
            fee_recipient,
            paused: false,
        }
    }

    /// Validate internal consistency.
    ///
    /// # Errors
    /// - [`BridgeError::InvalidLimits`] unless `0 < min < max`
    /// - [`BridgeError::FeeTooHigh`] if the rate exceeds the ceiling
    /// - [`BridgeError::InvalidRecipient`] if a nonzero fee pays the null account
    pub fn validate(&self) -> Result<()> {
        if self.min_bridge_amount == 0 || self.min_bridge_amount >= self.max_bridge_amount {
            return Err(BridgeError::InvalidLimits {
                min: self.min_bridge_amount,
                max: self.max_bridge_amount,
            });
        }
        if self.bridge_fee_bps > constants::MAX_FEE_BPS {
            return Err(BridgeError::FeeTooHigh {
                bps: self.bridge_fee_bps,
                max_bps: constants::MAX_FEE_BPS,
            });
        }
        if self.bridge_fee_bps > 0 && self.fee_recipient.is_nil() {
            return Err(BridgeError::InvalidRecipient);
        }
        Ok(())
    }

    /// Whether `amount` lies within the configured bounds (inclusive).
    #[must_use]
    pub fn within_bounds(&self, amount: Amount) -> bool {
        amount >= self.min_bridge_amount && amount <= self.max_bridge_amount
    }

    /// Fee charged on an inbound mint: `floor(amount * bps / 10_000)`.
    ///
    /// Computed as `(a / d) * bps + ((a % d) * bps) / d`, which is exactly
    /// the floor and cannot overflow for any `u128` amount.
    #[must_use]
    pub fn fee_for(&self, amount: Amount) -> Amount {
        let bps = u128::from(self.bridge_fee_bps);
        let d = constants::FEE_DIVISOR;
        (amount / d) * bps + (amount % d) * bps / d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = BridgeConfig::new(AccountId::new());
        cfg.validate().unwrap();
        assert!(!cfg.paused);
    }

    #[test]
    fn zero_min_rejected() {
        let mut cfg = BridgeConfig::new(AccountId::new());
        cfg.min_bridge_amount = 0;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            BridgeError::InvalidLimits { .. }
        ));
    }

    #[test]
    fn inverted_limits_rejected() {
        let mut cfg = BridgeConfig::new(AccountId::new());
        cfg.min_bridge_amount = 100;
        cfg.max_bridge_amount = 100;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            BridgeError::InvalidLimits { .. }
        ));
    }

    #[test]
    fn fee_ceiling_enforced() {
        let mut cfg = BridgeConfig::new(AccountId::new());
        cfg.bridge_fee_bps = constants::MAX_FEE_BPS + 1;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            BridgeError::FeeTooHigh { .. }
        ));
    }

    #[test]
    fn nil_fee_recipient_rejected_when_fee_nonzero() {
        let mut cfg = BridgeConfig::new(AccountId::nil());
        cfg.bridge_fee_bps = 10;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            BridgeError::InvalidRecipient
        ));

        // Zero fee tolerates a nil recipient (nothing is ever paid out).
        cfg.bridge_fee_bps = 0;
        cfg.validate().unwrap();
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut cfg = BridgeConfig::new(AccountId::new());
        cfg.min_bridge_amount = 10;
        cfg.max_bridge_amount = 100;
        assert!(cfg.within_bounds(10));
        assert!(cfg.within_bounds(100));
        assert!(!cfg.within_bounds(9));
        assert!(!cfg.within_bounds(101));
    }

    #[test]
    fn fee_is_floor_of_bps() {
        let mut cfg = BridgeConfig::new(AccountId::new());
        cfg.bridge_fee_bps = 100; // 1%
        assert_eq!(cfg.fee_for(1_000), 10);
        assert_eq!(cfg.fee_for(999), 9); // floor(9.99)
        assert_eq!(cfg.fee_for(0), 0);

        cfg.bridge_fee_bps = 0;
        assert_eq!(cfg.fee_for(1_000), 0);
    }

    #[test]
    fn fee_plus_net_equals_amount() {
        let mut cfg = BridgeConfig::new(AccountId::new());
        cfg.bridge_fee_bps = 37;
        for amount in [1u128, 999, 10_000, 123_456_789] {
            let fee = cfg.fee_for(amount);
            assert_eq!(fee + (amount - fee), amount);
        }
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = BridgeConfig::new(AccountId::new());
        let json = serde_json::to_string(&cfg).unwrap();
        let back: BridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.min_bridge_amount, back.min_bridge_amount);
        assert_eq!(cfg.bridge_fee_bps, back.bridge_fee_bps);
        assert_eq!(cfg.fee_recipient, back.fee_recipient);
    }
}
