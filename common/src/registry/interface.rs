use soroban_sdk::{contractclient, Address, BytesN, Env, String};

use super::types::{Escrow, EscrowPage, EscrowSide};
use crate::errors::Error;

#[contractclient(name = "StandardEscrowContractClient")]
pub trait StandardEscrowTrait {
    fn version() -> u32;
    fn upgrade(env: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn create_escrow(
        env: Env,
        funder: Address,
        title: String,
        payee: Address,
        token: Address,
        amount: i128,
    ) -> Result<u64, Error>;
    fn deposit(env: Env, escrow_id: u64, funder: Address, amount: i128) -> Result<i128, Error>;
    fn withdraw(env: Env, escrow_id: u64, caller: Address, amount: i128) -> Result<i128, Error>;
    fn withdraw_all(env: Env, escrow_id: u64, caller: Address) -> Result<i128, Error>;
    fn activate_contract(env: Env, escrow_id: u64, payee: Address) -> Result<(), Error>;
    fn settle(env: Env, escrow_id: u64, funder: Address, auto_withdraw: bool)
        -> Result<(), Error>;
    fn request_arbitration(env: Env, escrow_id: u64, caller: Address) -> Result<(), Error>;
    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error>;
    fn escrow_count(env: Env) -> u64;
    fn withdrawal_allowed(env: Env, escrow_id: u64, account: Address) -> bool;
    fn find_escrows_by_cursor(
        env: Env,
        account: Address,
        side: EscrowSide,
        cursor: u32,
        size: u32,
    ) -> Result<EscrowPage, Error>;
    fn find_escrows_as_funder_by_cursor(
        env: Env,
        account: Address,
        cursor: u32,
        size: u32,
    ) -> Result<EscrowPage, Error>;
    fn find_escrows_as_payee_by_cursor(
        env: Env,
        account: Address,
        cursor: u32,
        size: u32,
    ) -> Result<EscrowPage, Error>;
}
