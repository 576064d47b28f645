#![no_std]

mod events;
mod index;

use common::{
    access::{self, Role},
    errors::{require_positive, Error},
    lifecycle::EscrowState,
    registry::{
        interface::StandardEscrowTrait,
        types::{Escrow, EscrowPage, EscrowSide, RegistryKey},
    },
    storage::{get_data, get_persistent, store_data, store_persistent},
    transfer::{pull_from, push_to},
};
pub use events::RegistryEvent;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Vec};

#[contract]
pub struct StandardEscrowContract;

#[contractimpl]
impl StandardEscrowContract {
    pub fn __constructor(env: Env, admin: Address) -> Result<(), Error> {
        access::grant_role(&env, Role::Admin, &admin)?;
        store_data(&env, &RegistryKey::EscrowCount, &0u64);
        RegistryEvent::Initialized(admin).publish(&env);
        Ok(())
    }
}

#[contractimpl]
impl StandardEscrowTrait for StandardEscrowContract {
    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        admin.require_auth();
        access::require_role(&env, Role::Admin, &admin)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        RegistryEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn create_escrow(
        env: Env,
        funder: Address,
        title: String,
        payee: Address,
        token: Address,
        amount: i128,
    ) -> Result<u64, Error> {
        funder.require_auth();
        require_positive(amount)?;
        if funder == payee {
            return Err(Error::RoleConflict);
        }

        let escrow_id: u64 = Self::escrow_count(env.clone())
            .checked_add(1)
            .ok_or(Error::Overflow)?;

        pull_from(&env, &funder, &token, amount)?;

        let escrow = Escrow {
            id: escrow_id,
            title,
            token: token.clone(),
            funder: funder.clone(),
            payee: payee.clone(),
            state: EscrowState::Initialized,
            amount,
            determined: 0,
            balance: amount,
            created_at: env.ledger().timestamp(),
            arbitration_requested: false,
        };
        save_escrow(&env, &escrow);
        store_data(&env, &RegistryKey::EscrowCount, &escrow_id);

        index::append(&env, EscrowSide::Funder, &funder, escrow_id);
        index::append(&env, EscrowSide::Payee, &payee, escrow_id);

        RegistryEvent::EscrowCreated(escrow_id, funder.clone(), payee, token.clone(), amount)
            .publish(&env);
        RegistryEvent::Deposited(escrow_id, funder, token, amount).publish(&env);
        Ok(escrow_id)
    }

    fn deposit(env: Env, escrow_id: u64, funder: Address, amount: i128) -> Result<i128, Error> {
        funder.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;
        if escrow.funder != funder {
            return Err(Error::Unauthorized);
        }
        escrow.state.require(EscrowState::Initialized)?;
        require_positive(amount)?;

        let balance: i128 = escrow.balance.checked_add(amount).ok_or(Error::Overflow)?;
        pull_from(&env, &funder, &escrow.token, amount)?;
        escrow.balance = balance;
        save_escrow(&env, &escrow);

        RegistryEvent::Deposited(escrow_id, funder, escrow.token, amount).publish(&env);
        Ok(balance)
    }

    fn withdraw(env: Env, escrow_id: u64, caller: Address, amount: i128) -> Result<i128, Error> {
        caller.require_auth();
        require_positive(amount)?;

        let escrow: Escrow = load_escrow(&env, escrow_id)?;
        if amount > withdrawable(&escrow, &caller)? {
            return Err(Error::InsufficientFunds);
        }

        let escrow: Escrow = pay_out(&env, escrow, &caller, amount)?;
        Ok(escrow.balance)
    }

    fn withdraw_all(env: Env, escrow_id: u64, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let escrow: Escrow = load_escrow(&env, escrow_id)?;
        let amount: i128 = withdrawable(&escrow, &caller)?;
        if amount > 0 {
            pay_out(&env, escrow, &caller, amount)?;
        }
        Ok(amount)
    }

    fn activate_contract(env: Env, escrow_id: u64, payee: Address) -> Result<(), Error> {
        payee.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;
        if escrow.payee != payee {
            return Err(Error::Unauthorized);
        }
        escrow.state.require(EscrowState::Initialized)?;

        if escrow.balance <= 0 || escrow.balance < escrow.amount {
            return Err(Error::Underfunded);
        }

        escrow.state = escrow.state.advance(EscrowState::Activated)?;
        escrow.determined = escrow.balance;
        save_escrow(&env, &escrow);
        log!(&env, "escrow {} activated with {}", escrow_id, escrow.determined);

        RegistryEvent::ContractActivated(escrow_id, payee, escrow.determined).publish(&env);
        Ok(())
    }

    fn settle(env: Env, escrow_id: u64, funder: Address, auto_withdraw: bool) -> Result<(), Error> {
        funder.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;
        if escrow.funder != funder {
            return Err(Error::Unauthorized);
        }

        // From here on the whole balance belongs to the payee.
        escrow.state = escrow.state.advance(EscrowState::Finalized)?;
        save_escrow(&env, &escrow);
        log!(&env, "escrow {} settled by {}", escrow_id, funder.clone());
        RegistryEvent::ContractFinalized(escrow_id, funder, auto_withdraw).publish(&env);

        if auto_withdraw && escrow.balance > 0 {
            let payee: Address = escrow.payee.clone();
            let amount: i128 = escrow.balance;
            pay_out(&env, escrow, &payee, amount)?;
        }
        Ok(())
    }

    fn request_arbitration(env: Env, escrow_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut escrow: Escrow = load_escrow(&env, escrow_id)?;
        if caller != escrow.funder && caller != escrow.payee {
            return Err(Error::Unauthorized);
        }
        escrow.state.require(EscrowState::Activated)?;

        escrow.arbitration_requested = true;
        save_escrow(&env, &escrow);

        RegistryEvent::ArbitrationRequested(escrow_id, caller).publish(&env);
        Ok(())
    }

    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error> {
        load_escrow(&env, escrow_id)
    }

    fn escrow_count(env: Env) -> u64 {
        get_data(&env, &RegistryKey::EscrowCount).unwrap_or(0)
    }

    // True only when a withdrawal by `account` would move a nonzero amount.
    fn withdrawal_allowed(env: Env, escrow_id: u64, account: Address) -> bool {
        matches!(
            load_escrow(&env, escrow_id).and_then(|escrow| withdrawable(&escrow, &account)),
            Ok(amount) if amount > 0
        )
    }

    fn find_escrows_by_cursor(
        env: Env,
        account: Address,
        side: EscrowSide,
        cursor: u32,
        size: u32,
    ) -> Result<EscrowPage, Error> {
        let (ids, total) = index::page(&env, side, &account, cursor, size)?;

        let mut escrows: Vec<Escrow> = Vec::new(&env);
        for escrow_id in ids.iter() {
            escrows.push_back(load_escrow(&env, escrow_id)?);
        }

        Ok(EscrowPage { escrows, total })
    }

    fn find_escrows_as_funder_by_cursor(
        env: Env,
        account: Address,
        cursor: u32,
        size: u32,
    ) -> Result<EscrowPage, Error> {
        Self::find_escrows_by_cursor(env, account, EscrowSide::Funder, cursor, size)
    }

    fn find_escrows_as_payee_by_cursor(
        env: Env,
        account: Address,
        cursor: u32,
        size: u32,
    ) -> Result<EscrowPage, Error> {
        Self::find_escrows_by_cursor(env, account, EscrowSide::Payee, cursor, size)
    }
}

fn load_escrow(env: &Env, escrow_id: u64) -> Result<Escrow, Error> {
    get_persistent(env, &RegistryKey::Record(escrow_id)).ok_or(Error::EscrowNotFound)
}

fn save_escrow(env: &Env, escrow: &Escrow) {
    store_persistent(env, &RegistryKey::Record(escrow.id), escrow);
}

/// How much `account` may take out of `escrow` right now.
///
/// The funder can reclaim everything before activation and only the excess
/// above the activation snapshot while it runs. The payee is paid once the
/// escrow is finalized.
fn withdrawable(escrow: &Escrow, account: &Address) -> Result<i128, Error> {
    let is_funder: bool = *account == escrow.funder;
    if !is_funder && *account != escrow.payee {
        return Err(Error::Unauthorized);
    }

    match (escrow.state, is_funder) {
        (EscrowState::Initialized, true) => Ok(escrow.balance),
        (EscrowState::Activated, true) => Ok((escrow.balance - escrow.determined).max(0)),
        (EscrowState::Finalized, false) => Ok(escrow.balance),
        _ => Err(Error::InvalidState),
    }
}

/// Debits the record, then pushes `amount` of its token to `account`.
fn pay_out(env: &Env, mut escrow: Escrow, account: &Address, amount: i128) -> Result<Escrow, Error> {
    escrow.balance -= amount;
    save_escrow(env, &escrow);

    log!(env, "escrow {} paid {} to {}", escrow.id, amount, account.clone());
    push_to(env, account, &escrow.token, amount)?;

    RegistryEvent::Withdrawn(escrow.id, account.clone(), escrow.token.clone(), amount).publish(env);
    Ok(escrow)
}
