//! Per-account, per-asset balances of a pooled escrow.
//!
//! `held(asset)` is the amount of `asset` the contract owes in total. It only
//! moves on external transfers, so it always equals deposited minus withdrawn
//! and the sum of all account balances for that asset.

use soroban_sdk::{contracttype, log, Address, Env, Vec};

use crate::{
    errors::Error,
    storage::{append_persistent, get_persistent, store_persistent},
    transfer::{pull_from, push_to},
};

#[contracttype]
#[derive(Clone)]
enum LedgerKey {
    Fund(Address, Address),
    Assets(Address),
    Held(Address),
}

pub fn balance_of(env: &Env, account: &Address, asset: &Address) -> i128 {
    get_persistent(env, &LedgerKey::Fund(account.clone(), asset.clone())).unwrap_or(0)
}

/// Assets `account` ever held, in the order they were first credited.
pub fn assets_of(env: &Env, account: &Address) -> Vec<Address> {
    get_persistent(env, &LedgerKey::Assets(account.clone())).unwrap_or_else(|| Vec::new(env))
}

pub fn held(env: &Env, asset: &Address) -> i128 {
    get_persistent(env, &LedgerKey::Held(asset.clone())).unwrap_or(0)
}

fn set_balance(env: &Env, account: &Address, asset: &Address, amount: i128) {
    store_persistent(
        env,
        &LedgerKey::Fund(account.clone(), asset.clone()),
        &amount,
    );
}

fn set_held(env: &Env, asset: &Address, amount: i128) {
    store_persistent(env, &LedgerKey::Held(asset.clone()), &amount);
}

fn credit(env: &Env, account: &Address, asset: &Address, amount: i128) -> Result<i128, Error> {
    let balance = balance_of(env, account, asset)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    if !assets_of(env, account).contains(asset) {
        append_persistent(env, &LedgerKey::Assets(account.clone()), asset.clone());
    }
    set_balance(env, account, asset, balance);
    Ok(balance)
}

fn debit(env: &Env, account: &Address, asset: &Address, amount: i128) -> Result<i128, Error> {
    let balance = balance_of(env, account, asset);
    if amount > balance {
        return Err(Error::InsufficientFunds);
    }
    set_balance(env, account, asset, balance - amount);
    Ok(balance - amount)
}

/// Pulls `amount` of `asset` from `account` and credits it. Nothing is
/// credited unless the pull succeeded.
pub fn deposit(env: &Env, account: &Address, asset: &Address, amount: i128) -> Result<i128, Error> {
    let total = held(env, asset).checked_add(amount).ok_or(Error::Overflow)?;
    pull_from(env, account, asset, amount)?;
    set_held(env, asset, total);
    credit(env, account, asset, amount)
}

/// Moves bookkeeping between two accounts without touching the asset.
pub fn reassign(
    env: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    debit(env, from, asset, amount)?;
    credit(env, to, asset, amount)?;
    Ok(())
}

/// Zeroes every balance of `account` and pushes the nonzero ones out, in the
/// order the assets were first credited. Balances are cleared before any
/// transfer is attempted.
pub fn payout(env: &Env, account: &Address) -> Result<Vec<(Address, i128)>, Error> {
    let mut paid: Vec<(Address, i128)> = Vec::new(env);

    for asset in assets_of(env, account).iter() {
        let amount = balance_of(env, account, &asset);
        if amount == 0 {
            continue;
        }
        set_balance(env, account, &asset, 0);
        set_held(env, &asset, held(env, &asset) - amount);
        paid.push_back((asset, amount));
    }

    for (asset, amount) in paid.iter() {
        log!(env, "payout {} of {} to {}", amount, asset.clone(), account.clone());
        push_to(env, account, &asset, amount)?;
    }

    Ok(paid)
}
