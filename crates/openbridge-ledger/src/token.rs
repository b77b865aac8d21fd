//! Token ledger: balances, supply, and bridge flow counters.
//!
//! Owns total supply and per-account balances. Mutated only via mint/burn;
//! every check precedes every mutation, so a failed call leaves no trace.
//! Invariant enforced here: `total_supply <= max_supply`, always.

use std::collections::HashMap;

use openbridge_types::{AccountId, Amount, BridgeError, Result};

/// Destination-side fungible token ledger.
#[derive(Debug, Clone)]
pub struct TokenLedger {
    /// Per-account balances. Absent account = zero balance.
    balances: HashMap<AccountId, Amount>,
    /// Sum of all balances.
    total_supply: Amount,
    /// Hard supply cap.
    max_supply: Amount,
    /// Cumulative value minted by the bridge. Monotonic.
    total_bridged_in: Amount,
    /// Cumulative value burned by the bridge. Monotonic.
    total_bridged_out: Amount,
}

impl TokenLedger {
    /// Create an empty ledger with the given supply cap.
    ///
    /// # Panics
    /// Panics if `max_supply` is zero.
    #[must_use]
    pub fn new(max_supply: Amount) -> Self {
        assert!(max_supply > 0, "TokenLedger max_supply must be > 0");
        Self {
            balances: HashMap::new(),
            total_supply: 0,
            max_supply,
            total_bridged_in: 0,
            total_bridged_out: 0,
        }
    }

    /// Side-effect-free capacity check: would a mint of `amount` fit under
    /// the supply cap? Used by the controller to order its nullifier write
    /// before the mint without risking a poisoned id.
    pub fn check_mint_capacity(&self, amount: Amount) -> Result<()> {
        let Some(new_supply) = self.total_supply.checked_add(amount) else {
            return Err(BridgeError::LedgerOverflow);
        };
        if new_supply > self.max_supply {
            return Err(BridgeError::SupplyExceeded {
                supply: self.total_supply,
                requested: amount,
                max_supply: self.max_supply,
            });
        }
        Ok(())
    }

    /// Mint `amount` to `to`, increasing both the balance and total supply.
    ///
    /// # Errors
    /// - [`BridgeError::InvalidRecipient`] for the null account
    /// - [`BridgeError::SupplyExceeded`] past the cap
    /// - [`BridgeError::LedgerOverflow`] on u128 overflow
    pub fn mint(&mut self, to: AccountId, amount: Amount) -> Result<()> {
        if to.is_nil() {
            return Err(BridgeError::InvalidRecipient);
        }
        self.check_mint_capacity(amount)?;
        let balance = self.balances.entry(to).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(BridgeError::LedgerOverflow)?;
        self.total_supply += amount;
        Ok(())
    }

    /// Burn `amount` from `from`, decreasing both the balance and total supply.
    ///
    /// # Errors
    /// Returns [`BridgeError::InsufficientBalance`] if the balance is short.
    pub fn burn(&mut self, from: AccountId, amount: Amount) -> Result<()> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(BridgeError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        // Checks passed; mutations cannot fail from here.
        if available == amount {
            self.balances.remove(&from);
        } else if let Some(balance) = self.balances.get_mut(&from) {
            *balance -= amount;
        }
        self.total_supply -= amount;
        Ok(())
    }

    /// Bridge-capability mint: mint plus the monotonic bridged-in counter.
    pub fn bridge_mint(&mut self, to: AccountId, amount: Amount) -> Result<()> {
        self.mint(to, amount)?;
        self.total_bridged_in = self
            .total_bridged_in
            .checked_add(amount)
            .ok_or(BridgeError::LedgerOverflow)?;
        Ok(())
    }

    /// Bridge-capability burn: burn plus the monotonic bridged-out counter.
    pub fn bridge_burn(&mut self, from: AccountId, amount: Amount) -> Result<()> {
        self.burn(from, amount)?;
        self.total_bridged_out = self
            .total_bridged_out
            .checked_add(amount)
            .ok_or(BridgeError::LedgerOverflow)?;
        Ok(())
    }

    /// Balance of an account. Absent accounts hold zero.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    #[must_use]
    pub fn max_supply(&self) -> Amount {
        self.max_supply
    }

    #[must_use]
    pub fn total_bridged_in(&self) -> Amount {
        self.total_bridged_in
    }

    #[must_use]
    pub fn total_bridged_out(&self) -> Amount {
        self.total_bridged_out
    }

    /// Net supply created by the bridge: bridged in minus bridged out.
    #[must_use]
    pub fn net_bridged(&self) -> i128 {
        // Both counters fit comfortably in i128 for any supply under the cap.
        i128::try_from(self.total_bridged_in).unwrap_or(i128::MAX)
            - i128::try_from(self.total_bridged_out).unwrap_or(i128::MAX)
    }

    /// Number of accounts with a nonzero balance.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_credits_balance_and_supply() {
        let mut ledger = TokenLedger::new(1_000_000);
        let user = AccountId::new();
        ledger.mint(user, 500).unwrap();

        assert_eq!(ledger.balance_of(user), 500);
        assert_eq!(ledger.total_supply(), 500);
    }

    #[test]
    fn mint_to_nil_rejected() {
        let mut ledger = TokenLedger::new(1_000_000);
        let err = ledger.mint(AccountId::nil(), 1).unwrap_err();
        assert!(matches!(err, BridgeError::InvalidRecipient));
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn mint_past_cap_rejected() {
        let mut ledger = TokenLedger::new(1_000);
        ledger.mint(AccountId::new(), 900).unwrap();

        let user = AccountId::new();
        let err = ledger.mint(user, 101).unwrap_err();
        assert!(matches!(err, BridgeError::SupplyExceeded { .. }));
        // Failed mint leaves no trace.
        assert_eq!(ledger.balance_of(user), 0);
        assert_eq!(ledger.total_supply(), 900);

        // Exactly at the cap is fine.
        ledger.mint(user, 100).unwrap();
        assert_eq!(ledger.total_supply(), 1_000);
    }

    #[test]
    fn burn_debits_balance_and_supply() {
        let mut ledger = TokenLedger::new(1_000_000);
        let user = AccountId::new();
        ledger.mint(user, 700).unwrap();
        ledger.burn(user, 500).unwrap();

        assert_eq!(ledger.balance_of(user), 200);
        assert_eq!(ledger.total_supply(), 200);
    }

    #[test]
    fn burn_insufficient_rejected() {
        let mut ledger = TokenLedger::new(1_000_000);
        let user = AccountId::new();
        ledger.mint(user, 100).unwrap();

        let err = ledger.burn(user, 101).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::InsufficientBalance {
                needed: 101,
                available: 100
            }
        ));
        assert_eq!(ledger.balance_of(user), 100);
    }

    #[test]
    fn burn_from_unknown_account_rejected() {
        let mut ledger = TokenLedger::new(1_000_000);
        let err = ledger.burn(AccountId::new(), 1).unwrap_err();
        assert!(matches!(err, BridgeError::InsufficientBalance { .. }));
    }

    #[test]
    fn full_burn_removes_account() {
        let mut ledger = TokenLedger::new(1_000_000);
        let user = AccountId::new();
        ledger.mint(user, 50).unwrap();
        ledger.burn(user, 50).unwrap();

        assert_eq!(ledger.balance_of(user), 0);
        assert_eq!(ledger.account_count(), 0);
    }

    #[test]
    fn bridge_counters_track_both_directions() {
        let mut ledger = TokenLedger::new(1_000_000);
        let user = AccountId::new();
        ledger.bridge_mint(user, 1_000).unwrap();
        ledger.bridge_burn(user, 400).unwrap();

        assert_eq!(ledger.total_bridged_in(), 1_000);
        assert_eq!(ledger.total_bridged_out(), 400);
        assert_eq!(ledger.net_bridged(), 600);
        // Net bridged equals the supply the bridge created.
        assert_eq!(ledger.net_bridged(), i128::try_from(ledger.total_supply()).unwrap());
    }

    #[test]
    fn counters_never_decrease_on_failures() {
        let mut ledger = TokenLedger::new(1_000);
        let user = AccountId::new();
        ledger.bridge_mint(user, 500).unwrap();

        assert!(ledger.bridge_mint(user, 600).is_err());
        assert!(ledger.bridge_burn(user, 9_999).is_err());
        assert_eq!(ledger.total_bridged_in(), 500);
        assert_eq!(ledger.total_bridged_out(), 0);
    }

    #[test]
    fn capacity_check_is_side_effect_free() {
        let ledger = TokenLedger::new(100);
        assert!(ledger.check_mint_capacity(100).is_ok());
        assert!(ledger.check_mint_capacity(101).is_err());
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    #[should_panic(expected = "max_supply must be > 0")]
    fn zero_cap_panics() {
        let _ = TokenLedger::new(0);
    }
}
