//! Role-based access control.
//!
//! Roles are an explicit set-membership lookup keyed by caller identity,
//! checked at the top of every mutating entry point. No inheritance:
//! holding `Admin` does not imply `Operator`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AccountId, BridgeError, Result};

/// Capabilities recognized by the bridge controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Configuration changes, pause/unpause, emergency nullifier poison.
    Admin,
    /// Inbound settlement, the path that creates new value.
    Operator,
    /// Swapping the proof verifier.
    VerifierManager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Operator => write!(f, "OPERATOR"),
            Self::VerifierManager => write!(f, "VERIFIER_MANAGER"),
        }
    }
}

/// Per-account role grants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessControl {
    grants: HashMap<AccountId, HashSet<Role>>,
}

impl AccessControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a role to an account. Granting twice is a no-op.
    pub fn grant(&mut self, account: AccountId, role: Role) {
        self.grants.entry(account).or_default().insert(role);
    }

    /// Revoke a role. Revoking an absent grant is a no-op.
    pub fn revoke(&mut self, account: AccountId, role: Role) {
        if let Some(roles) = self.grants.get_mut(&account) {
            roles.remove(&role);
            if roles.is_empty() {
                self.grants.remove(&account);
            }
        }
    }

    /// Whether `account` holds `role`.
    #[must_use]
    pub fn has(&self, account: AccountId, role: Role) -> bool {
        self.grants
            .get(&account)
            .is_some_and(|roles| roles.contains(&role))
    }

    /// Fail-closed role gate.
    ///
    /// # Errors
    /// Returns [`BridgeError::Unauthorized`] if the caller lacks the role.
    pub fn require(&self, caller: AccountId, role: Role) -> Result<()> {
        if self.has(caller, role) {
            Ok(())
        } else {
            Err(BridgeError::Unauthorized { required: role })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_and_require() {
        let mut ac = AccessControl::new();
        let op = AccountId::new();
        ac.grant(op, Role::Operator);

        assert!(ac.has(op, Role::Operator));
        ac.require(op, Role::Operator).unwrap();
    }

    #[test]
    fn missing_role_rejected() {
        let ac = AccessControl::new();
        let err = ac.require(AccountId::new(), Role::Admin).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Unauthorized {
                required: Role::Admin
            }
        ));
    }

    #[test]
    fn roles_do_not_imply_each_other() {
        let mut ac = AccessControl::new();
        let admin = AccountId::new();
        ac.grant(admin, Role::Admin);

        assert!(ac.require(admin, Role::Operator).is_err());
        assert!(ac.require(admin, Role::VerifierManager).is_err());
    }

    #[test]
    fn revoke_removes_access() {
        let mut ac = AccessControl::new();
        let op = AccountId::new();
        ac.grant(op, Role::Operator);
        ac.revoke(op, Role::Operator);

        assert!(!ac.has(op, Role::Operator));
        assert!(ac.require(op, Role::Operator).is_err());
    }

    #[test]
    fn multiple_roles_per_account() {
        let mut ac = AccessControl::new();
        let acct = AccountId::new();
        ac.grant(acct, Role::Admin);
        ac.grant(acct, Role::Operator);

        ac.require(acct, Role::Admin).unwrap();
        ac.require(acct, Role::Operator).unwrap();

        ac.revoke(acct, Role::Admin);
        assert!(ac.require(acct, Role::Admin).is_err());
        ac.require(acct, Role::Operator).unwrap();
    }

    #[test]
    fn role_display_names() {
        assert_eq!(format!("{}", Role::Admin), "ADMIN");
        assert_eq!(format!("{}", Role::VerifierManager), "VERIFIER_MANAGER");
    }
}
