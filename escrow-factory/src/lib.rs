#![no_std]

mod events;

use common::{
    escrow::types::{CreatorRole, EscrowConfig},
    factory::{
        interface::EscrowFactoryTrait,
        types::{FactoryDataKey as DataKey, FactoryError as Error},
    },
    storage::{append_persistent, get_data, get_persistent, store_data},
};
pub use events::FactoryEvent;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Vec};

#[contract]
pub struct EscrowFactoryContract;

#[contractimpl]
impl EscrowFactoryContract {
    pub fn __constructor(env: Env, admin: Address, escrow_wasm_hash: BytesN<32>) -> Result<(), Error> {
        store_data(&env, &DataKey::Admin, &admin);
        store_data(&env, &DataKey::EscrowWasmHash, &escrow_wasm_hash);
        store_data(&env, &DataKey::EscrowCount, &0u64);
        FactoryEvent::Initialized(admin).publish(&env);
        Ok(())
    }
}

#[contractimpl]
impl EscrowFactoryTrait for EscrowFactoryContract {
    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, admin: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        require_admin(&env, &admin)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        FactoryEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn set_escrow_wasm_hash(
        env: Env,
        admin: Address,
        escrow_wasm_hash: BytesN<32>,
    ) -> Result<(), Error> {
        require_admin(&env, &admin)?;
        store_data(&env, &DataKey::EscrowWasmHash, &escrow_wasm_hash);
        FactoryEvent::EscrowWasmHashUpdated(escrow_wasm_hash).publish(&env);
        Ok(())
    }

    /// Deploys a fresh escrow instance with this factory as its admin.
    fn create_escrow(env: Env, creator: Address, config: EscrowConfig) -> Result<Address, Error> {
        creator.require_auth();
        if config.counterparty.as_ref() == Some(&creator) {
            return Err(Error::CounterpartyIsCreator);
        }

        let index: u64 = Self::escrow_count(env.clone());
        let role: CreatorRole = config.role;

        // Salt from the running count keeps every deployment address unique.
        let mut salt: [u8; 32] = [0; 32];
        salt[24..].copy_from_slice(&index.to_be_bytes());

        let escrow: Address = env
            .deployer()
            .with_current_contract(BytesN::from_array(&env, &salt))
            .deploy_v2(
                Self::escrow_wasm_hash(env.clone()),
                (env.current_contract_address(), creator.clone(), config),
            );

        append_persistent(&env, &DataKey::Escrows, escrow.clone());
        append_persistent(&env, &DataKey::CreatorEscrows(creator.clone()), escrow.clone());
        store_data(&env, &DataKey::EscrowCount, &(index + 1));

        log!(&env, "escrow {} deployed at {}", index, escrow.clone());
        FactoryEvent::EscrowCreated(escrow.clone(), creator, role, index).publish(&env);
        Ok(escrow)
    }

    fn create_escrow_as_funder(
        env: Env,
        funder: Address,
        preset_payee: Option<Address>,
        metadata: String,
    ) -> Result<Address, Error> {
        let config = EscrowConfig {
            role: CreatorRole::Funder,
            counterparty: preset_payee,
            metadata,
        };
        Self::create_escrow(env, funder, config)
    }

    fn create_escrow_as_payee(
        env: Env,
        payee: Address,
        preset_funder: Option<Address>,
        metadata: String,
    ) -> Result<Address, Error> {
        let config = EscrowConfig {
            role: CreatorRole::Payee,
            counterparty: preset_funder,
            metadata,
        };
        Self::create_escrow(env, payee, config)
    }

    fn escrow_wasm_hash(env: Env) -> BytesN<32> {
        get_data(&env, &DataKey::EscrowWasmHash).unwrap_or_else(|| BytesN::from_array(&env, &[0; 32]))
    }

    fn escrow_count(env: Env) -> u64 {
        get_data(&env, &DataKey::EscrowCount).unwrap_or(0)
    }

    fn escrows(env: Env) -> Vec<Address> {
        get_persistent(&env, &DataKey::Escrows).unwrap_or_else(|| Vec::new(&env))
    }

    fn escrows_of(env: Env, creator: Address) -> Vec<Address> {
        get_persistent(&env, &DataKey::CreatorEscrows(creator)).unwrap_or_else(|| Vec::new(&env))
    }
}

fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    admin.require_auth();
    match get_data::<_, Address>(env, &DataKey::Admin) {
        Some(stored) if stored == *admin => Ok(()),
        _ => Err(Error::Unauthorized),
    }
}
