//! Per-account monotonic nonce registry.
//!
//! Feeds the deterministic outbound id derivation: the nonce makes two
//! otherwise identical burns by the same sender produce distinct ids,
//! while a retried relay of the *same* burn reuses the nonce it consumed
//! and therefore the same id.

use std::collections::HashMap;

use openbridge_types::AccountId;

/// Monotonic per-account counters, starting at zero.
#[derive(Debug, Clone, Default)]
pub struct NonceRegistry {
    nonces: HashMap<AccountId, u64>,
}

impl NonceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nonce for an account without consuming it.
    #[must_use]
    pub fn peek(&self, account: AccountId) -> u64 {
        self.nonces.get(&account).copied().unwrap_or(0)
    }

    /// Consume and return the account's current nonce, incrementing it.
    pub fn next(&mut self, account: AccountId) -> u64 {
        let entry = self.nonces.entry(account).or_insert(0);
        let current = *entry;
        *entry += 1;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let registry = NonceRegistry::new();
        assert_eq!(registry.peek(AccountId::new()), 0);
    }

    #[test]
    fn next_consumes_and_increments() {
        let mut registry = NonceRegistry::new();
        let user = AccountId::new();

        assert_eq!(registry.next(user), 0);
        assert_eq!(registry.next(user), 1);
        assert_eq!(registry.next(user), 2);
        assert_eq!(registry.peek(user), 3);
    }

    #[test]
    fn accounts_are_independent() {
        let mut registry = NonceRegistry::new();
        let a = AccountId::new();
        let b = AccountId::new();

        registry.next(a);
        registry.next(a);
        assert_eq!(registry.peek(a), 2);
        assert_eq!(registry.peek(b), 0);
    }
}
