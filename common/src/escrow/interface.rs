use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};

use crate::{access::Role, errors::Error, lifecycle::EscrowState};

#[contractclient(name = "RoleBasedEscrowContractClient")]
pub trait RoleBasedEscrowTrait {
    fn version() -> u32;
    fn deposit(env: Env, funder: Address, asset: Address, amount: i128) -> Result<(), Error>;
    fn register_as_funder(env: Env, account: Address) -> Result<(), Error>;
    fn register_as_payee(env: Env, account: Address, identifier: BytesN<32>) -> Result<(), Error>;
    fn grant_payee_role(env: Env, granter: Address, accounts: Vec<Address>) -> Result<(), Error>;
    fn grant_role(env: Env, granter: Address, role: Role, account: Address) -> Result<(), Error>;
    fn activate_contract(env: Env, caller: Address) -> Result<(), Error>;
    fn settle(env: Env, funder: Address, auto_withdraw: bool) -> Result<(), Error>;
    fn withdraw(env: Env, account: Address) -> Result<Vec<(Address, i128)>, Error>;
    fn request_arbitration(env: Env, caller: Address) -> Result<(), Error>;
    fn withdrawal_allowed(env: Env, account: Address) -> bool;
    fn state(env: Env) -> EscrowState;
    fn metadata(env: Env) -> String;
    fn has_role(env: Env, role: Role, account: Address) -> bool;
    fn funders(env: Env) -> Vec<Address>;
    fn payees(env: Env) -> Vec<Address>;
    fn candidates(env: Env) -> Vec<Address>;
    fn funder_exists(env: Env, account: Address) -> bool;
    fn payee_exists(env: Env, account: Address) -> bool;
    fn candidate_exists(env: Env, account: Address) -> bool;
    fn candidate_identifier(env: Env, account: Address) -> Option<BytesN<32>>;
    fn funds(env: Env, account: Address, asset: Address) -> i128;
    fn held(env: Env, asset: Address) -> i128;
    fn arbitration_requested(env: Env) -> bool;
}
