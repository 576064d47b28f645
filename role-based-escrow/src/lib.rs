#![no_std]

mod events;

use common::{
    access::{self, Role},
    errors::{require_positive, Error},
    escrow::{
        interface::RoleBasedEscrowTrait,
        types::{CreatorRole, EscrowConfig, EscrowDataKey as DataKey},
    },
    ledger,
    lifecycle::{self, EscrowState},
    storage::{
        append_persistent, get_data, get_persistent, remove_persistent, store_data,
        store_persistent,
    },
};
pub use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Vec};

#[contract]
pub struct RoleBasedEscrowContract;

#[contractimpl]
impl RoleBasedEscrowContract {
    /// Sets up a fresh instance for `creator`. The deploying factory gets Admin
    /// and Factory; a preset counterparty gets the opposite role without having
    /// to register.
    pub fn __constructor(
        env: Env,
        factory: Address,
        creator: Address,
        config: EscrowConfig,
    ) -> Result<(), Error> {
        access::grant_role(&env, Role::Admin, &factory)?;
        access::grant_role(&env, Role::Factory, &factory)?;
        store_data(&env, &DataKey::Metadata, &config.metadata);
        lifecycle::store(&env, EscrowState::Initialized);

        let (creator_role, counterpart_role) = match config.role {
            CreatorRole::Funder => (Role::Funder, Role::Payee),
            CreatorRole::Payee => (Role::Payee, Role::Funder),
        };

        enroll(&env, creator_role, &creator)?;
        if let Some(counterparty) = config.counterparty {
            if counterparty == creator {
                return Err(Error::RoleConflict);
            }
            enroll(&env, counterpart_role, &counterparty)?;
        }

        EscrowEvent::Initialized(factory, creator, config.role).publish(&env);
        Ok(())
    }
}

#[contractimpl]
impl RoleBasedEscrowTrait for RoleBasedEscrowContract {
    fn version() -> u32 {
        1
    }

    fn deposit(env: Env, funder: Address, asset: Address, amount: i128) -> Result<(), Error> {
        funder.require_auth();
        lifecycle::require_state(&env, EscrowState::Initialized)?;
        require_positive(amount)?;

        access::check_exclusive(&env, Role::Funder, &funder)?;
        if is_candidate(&env, &funder) {
            return Err(Error::RoleConflict);
        }

        ledger::deposit(&env, &funder, &asset, amount)?;

        // First deposit implies the funder role.
        if !access::has_role(&env, Role::Funder, &funder) {
            enroll(&env, Role::Funder, &funder)?;
        }

        EscrowEvent::Deposited(funder, asset, amount).publish(&env);
        Ok(())
    }

    fn register_as_funder(env: Env, account: Address) -> Result<(), Error> {
        account.require_auth();
        lifecycle::require_state(&env, EscrowState::Initialized)?;

        access::check_exclusive(&env, Role::Funder, &account)?;
        if is_candidate(&env, &account) {
            return Err(Error::RoleConflict);
        }
        if access::has_role(&env, Role::Funder, &account) {
            return Err(Error::AlreadyRegistered);
        }

        enroll(&env, Role::Funder, &account)
    }

    fn register_as_payee(env: Env, account: Address, identifier: BytesN<32>) -> Result<(), Error> {
        account.require_auth();
        lifecycle::require_state(&env, EscrowState::Initialized)?;

        if access::has_role(&env, Role::Funder, &account) {
            return Err(Error::RoleConflict);
        }
        if access::has_role(&env, Role::Payee, &account) || is_candidate(&env, &account) {
            return Err(Error::AlreadyRegistered);
        }

        append_persistent(&env, &DataKey::Candidates, account.clone());
        store_persistent(&env, &DataKey::Candidate(account.clone()), &identifier);

        EscrowEvent::PayeeCandidateRegistered(account, identifier).publish(&env);
        Ok(())
    }

    fn grant_payee_role(env: Env, granter: Address, accounts: Vec<Address>) -> Result<(), Error> {
        granter.require_auth();
        access::require_any_role(&env, &granter, &[Role::Funder, Role::Admin, Role::Factory])?;
        lifecycle::require_state(&env, EscrowState::Initialized)?;

        if accounts.is_empty() {
            return Err(Error::EmptyAccountList);
        }

        // Validate the whole batch before touching storage.
        for (index, account) in accounts.iter().enumerate() {
            let repeated = accounts
                .first_index_of(&account)
                .is_some_and(|first| (first as usize) < index);
            if repeated || access::has_role(&env, Role::Payee, &account) {
                return Err(Error::AlreadyRegistered);
            }
            if !is_candidate(&env, &account) {
                return Err(Error::NoSuchCandidate);
            }
        }

        for account in accounts.iter() {
            enroll(&env, Role::Payee, &account)?;
        }
        Ok(())
    }

    fn grant_role(env: Env, granter: Address, role: Role, account: Address) -> Result<(), Error> {
        granter.require_auth();
        if !access::can_grant(&env, &granter, role) {
            return Err(Error::Unauthorized);
        }

        match role {
            Role::Funder | Role::Payee => {
                lifecycle::require_state(&env, EscrowState::Initialized)?;
                if role == Role::Funder && is_candidate(&env, &account) {
                    return Err(Error::RoleConflict);
                }
                if !access::has_role(&env, role, &account) {
                    enroll(&env, role, &account)?;
                }
            }
            Role::Admin | Role::Factory => {
                access::grant_role(&env, role, &account)?;
            }
        }

        EscrowEvent::RoleGranted(role, account, granter).publish(&env);
        Ok(())
    }

    fn activate_contract(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_any_role(&env, &caller, &[Role::Funder, Role::Payee])?;
        lifecycle::require_state(&env, EscrowState::Initialized)?;

        if payees(&env).is_empty() {
            return Err(Error::PayeeRequired);
        }

        lifecycle::transition(&env, EscrowState::Activated)?;
        log!(&env, "escrow activated by {}", caller.clone());

        EscrowEvent::ContractActivated(caller).publish(&env);
        Ok(())
    }

    fn settle(env: Env, funder: Address, auto_withdraw: bool) -> Result<(), Error> {
        funder.require_auth();
        access::require_role(&env, Role::Funder, &funder)?;
        lifecycle::require_state(&env, EscrowState::Activated)?;

        let payees: Vec<Address> = payees(&env);
        let count = payees.len() as i128;
        let Some(first) = payees.first() else {
            return Err(Error::PayeeRequired);
        };

        // The settling funder's balance becomes the payees' reward, split evenly
        // with the remainder going to the first payee.
        for asset in ledger::assets_of(&env, &funder).iter() {
            let amount = ledger::balance_of(&env, &funder, &asset);
            let share = amount / count;
            for payee in payees.iter() {
                ledger::reassign(&env, &funder, &payee, &asset, share)?;
            }
            ledger::reassign(&env, &funder, &first, &asset, amount - share * count)?;
        }

        lifecycle::transition(&env, EscrowState::Finalized)?;
        log!(&env, "escrow settled by {}", funder.clone());
        EscrowEvent::ContractFinalized(funder, auto_withdraw).publish(&env);

        if auto_withdraw {
            for payee in payees.iter() {
                pay_out(&env, &payee)?;
            }
        }
        Ok(())
    }

    fn withdraw(env: Env, account: Address) -> Result<Vec<(Address, i128)>, Error> {
        account.require_auth();
        if !Self::withdrawal_allowed(env.clone(), account.clone()) {
            return Err(Error::InvalidState);
        }
        pay_out(&env, &account)
    }

    fn request_arbitration(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_any_role(&env, &caller, &[Role::Funder, Role::Payee])?;
        lifecycle::require_state(&env, EscrowState::Activated)?;

        store_data(&env, &DataKey::ArbitrationRequested, &true);
        EscrowEvent::ArbitrationRequested(caller).publish(&env);
        Ok(())
    }

    // Funds stay locked while the escrow is executing.
    fn withdrawal_allowed(env: Env, _account: Address) -> bool {
        lifecycle::load(&env) != EscrowState::Activated
    }

    fn state(env: Env) -> EscrowState {
        lifecycle::load(&env)
    }

    fn metadata(env: Env) -> String {
        get_data(&env, &DataKey::Metadata).unwrap_or_else(|| String::from_str(&env, ""))
    }

    fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }

    fn funders(env: Env) -> Vec<Address> {
        funders(&env)
    }

    fn payees(env: Env) -> Vec<Address> {
        payees(&env)
    }

    fn candidates(env: Env) -> Vec<Address> {
        candidates(&env)
    }

    fn funder_exists(env: Env, account: Address) -> bool {
        access::has_role(&env, Role::Funder, &account)
    }

    fn payee_exists(env: Env, account: Address) -> bool {
        access::has_role(&env, Role::Payee, &account)
    }

    fn candidate_exists(env: Env, account: Address) -> bool {
        is_candidate(&env, &account)
    }

    fn candidate_identifier(env: Env, account: Address) -> Option<BytesN<32>> {
        get_persistent(&env, &DataKey::Candidate(account))
    }

    fn funds(env: Env, account: Address, asset: Address) -> i128 {
        ledger::balance_of(&env, &account, &asset)
    }

    fn held(env: Env, asset: Address) -> i128 {
        ledger::held(&env, &asset)
    }

    fn arbitration_requested(env: Env) -> bool {
        get_data(&env, &DataKey::ArbitrationRequested).unwrap_or(false)
    }
}

fn funders(env: &Env) -> Vec<Address> {
    get_persistent(env, &DataKey::Funders).unwrap_or_else(|| Vec::new(env))
}

fn payees(env: &Env) -> Vec<Address> {
    get_persistent(env, &DataKey::Payees).unwrap_or_else(|| Vec::new(env))
}

fn candidates(env: &Env) -> Vec<Address> {
    get_persistent(env, &DataKey::Candidates).unwrap_or_else(|| Vec::new(env))
}

fn is_candidate(env: &Env, account: &Address) -> bool {
    get_persistent::<_, BytesN<32>>(env, &DataKey::Candidate(account.clone())).is_some()
}

/// Grants a party role and appends the account to the matching list, dropping
/// any pending payee candidacy it had.
fn enroll(env: &Env, role: Role, account: &Address) -> Result<(), Error> {
    if !access::grant_role(env, role, account)? {
        return Ok(());
    }

    match role {
        Role::Funder => {
            append_persistent(env, &DataKey::Funders, account.clone());
            EscrowEvent::FunderRegistered(account.clone()).publish(env);
        }
        Role::Payee => {
            if is_candidate(env, account) {
                let mut candidates: Vec<Address> = candidates(env);
                if let Some(index) = candidates.first_index_of(account) {
                    candidates.remove(index);
                    store_persistent(env, &DataKey::Candidates, &candidates);
                }
                remove_persistent(env, &DataKey::Candidate(account.clone()));
            }

            append_persistent(env, &DataKey::Payees, account.clone());
            EscrowEvent::PayeeRegistered(account.clone()).publish(env);
        }
        Role::Admin | Role::Factory => {}
    }
    Ok(())
}

fn pay_out(env: &Env, account: &Address) -> Result<Vec<(Address, i128)>, Error> {
    let paid = ledger::payout(env, account)?;
    for (asset, amount) in paid.iter() {
        EscrowEvent::Withdrawn(account.clone(), asset, amount).publish(env);
    }
    Ok(paid)
}
