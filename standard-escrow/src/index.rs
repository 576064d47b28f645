//! Reverse lookup from an account to the escrows it takes part in.
//!
//! Each `(side, account)` pair owns an append-only list of escrow ids in
//! creation order. Pages are read newest first.

use common::{
    errors::Error,
    registry::types::{EscrowSide, RegistryKey, MAX_PAGE_SIZE},
    storage::{append_persistent, get_persistent},
};
use soroban_sdk::{Address, Env, Vec};

fn ids_of(env: &Env, side: EscrowSide, account: &Address) -> Vec<u64> {
    get_persistent(env, &RegistryKey::Index(side, account.clone())).unwrap_or_else(|| Vec::new(env))
}

pub fn append(env: &Env, side: EscrowSide, account: &Address, escrow_id: u64) {
    append_persistent(env, &RegistryKey::Index(side, account.clone()), escrow_id);
}

/// Returns up to `size` ids starting `cursor` positions from the newest entry,
/// along with the total number of entries.
pub fn page(
    env: &Env,
    side: EscrowSide,
    account: &Address,
    cursor: u32,
    size: u32,
) -> Result<(Vec<u64>, u32), Error> {
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(Error::InvalidPageSize);
    }

    let ids: Vec<u64> = ids_of(env, side, account);
    let total: u32 = ids.len();
    let mut page: Vec<u64> = Vec::new(env);

    let end: u32 = cursor.saturating_add(size).min(total);
    for position in cursor..end {
        if let Some(id) = ids.get(total - 1 - position) {
            page.push_back(id);
        }
    }

    Ok((page, total))
}
