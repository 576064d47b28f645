//! Role membership for a single escrow instance.
//!
//! Roles are stored one entry per `(role, account)` pair so lookups never touch
//! more than a single ledger key. Funder and Payee are mutually exclusive.

use soroban_sdk::{contracttype, Address, Env};

use crate::{
    errors::Error,
    storage::{get_persistent, store_persistent},
};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin = 1,
    Factory = 2,
    Funder = 3,
    Payee = 4,
}

impl Role {
    /// The role an account holding `self` may never hold at the same time.
    pub fn exclusive_with(&self) -> Option<Role> {
        match self {
            Role::Funder => Some(Role::Payee),
            Role::Payee => Some(Role::Funder),
            Role::Admin | Role::Factory => None,
        }
    }
}

#[contracttype]
#[derive(Clone)]
enum AccessKey {
    Member(Role, Address),
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    get_persistent::<_, bool>(env, &AccessKey::Member(role, account.clone())).unwrap_or(false)
}

pub fn require_role(env: &Env, role: Role, account: &Address) -> Result<(), Error> {
    require_any_role(env, account, &[role])
}

pub fn require_any_role(env: &Env, account: &Address, roles: &[Role]) -> Result<(), Error> {
    if roles.iter().any(|role| has_role(env, *role, account)) {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

/// Whether `granter` controls `role`. Admin controls every role, otherwise the
/// counterparty grants: a funder appoints payees and a payee appoints funders.
pub fn can_grant(env: &Env, granter: &Address, role: Role) -> bool {
    if has_role(env, Role::Admin, granter) {
        return true;
    }
    match role.exclusive_with() {
        Some(counterpart) => has_role(env, counterpart, granter),
        None => false,
    }
}

/// Fails with `RoleConflict` if `account` holds the role exclusive with `role`.
pub fn check_exclusive(env: &Env, role: Role, account: &Address) -> Result<(), Error> {
    match role.exclusive_with() {
        Some(other) if has_role(env, other, account) => Err(Error::RoleConflict),
        _ => Ok(()),
    }
}

/// Idempotent insert. Returns `true` when the role was not held before.
pub fn grant_role(env: &Env, role: Role, account: &Address) -> Result<bool, Error> {
    check_exclusive(env, role, account)?;
    if has_role(env, role, account) {
        return Ok(false);
    }
    store_persistent(env, &AccessKey::Member(role, account.clone()), &true);
    Ok(true)
}
