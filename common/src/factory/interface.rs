use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};

use super::types::FactoryError;
use crate::escrow::types::EscrowConfig;

#[contractclient(name = "EscrowFactoryContractClient")]
pub trait EscrowFactoryTrait {
    fn version() -> u32;
    fn upgrade(env: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), FactoryError>;
    fn set_escrow_wasm_hash(
        env: Env,
        admin: Address,
        escrow_wasm_hash: BytesN<32>,
    ) -> Result<(), FactoryError>;
    fn create_escrow(env: Env, creator: Address, config: EscrowConfig)
        -> Result<Address, FactoryError>;
    fn create_escrow_as_funder(
        env: Env,
        funder: Address,
        preset_payee: Option<Address>,
        metadata: String,
    ) -> Result<Address, FactoryError>;
    fn create_escrow_as_payee(
        env: Env,
        payee: Address,
        preset_funder: Option<Address>,
        metadata: String,
    ) -> Result<Address, FactoryError>;
    fn escrow_wasm_hash(env: Env) -> BytesN<32>;
    fn escrow_count(env: Env) -> u64;
    fn escrows(env: Env) -> Vec<Address>;
    fn escrows_of(env: Env, creator: Address) -> Vec<Address>;
}
