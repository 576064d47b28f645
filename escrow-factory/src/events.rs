use common::escrow::types::CreatorRole;
use soroban_sdk::{Address, BytesN, Env, IntoVal, Val, Vec};

pub enum FactoryEvent {
    Initialized(Address),
    Upgraded(u32),
    EscrowWasmHashUpdated(BytesN<32>),
    EscrowCreated(Address, Address, CreatorRole, u64),
}

impl FactoryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FactoryEvent::Initialized(..) => stringify!(Initialized),
            FactoryEvent::Upgraded(..) => stringify!(Upgraded),
            FactoryEvent::EscrowWasmHashUpdated(..) => stringify!(EscrowWasmHashUpdated),
            FactoryEvent::EscrowCreated(..) => stringify!(EscrowCreated),
        }
    }

    pub fn data(&self, env: &Env) -> Vec<Val> {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            FactoryEvent::Initialized(admin) => {
                v.push_back(admin.into_val(env));
            }
            FactoryEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            FactoryEvent::EscrowWasmHashUpdated(wasm_hash) => {
                v.push_back(wasm_hash.into_val(env));
            }
            FactoryEvent::EscrowCreated(escrow, creator, role, index) => {
                v.push_back(escrow.into_val(env));
                v.push_back(creator.into_val(env));
                v.push_back(role.into_val(env));
                v.push_back(index.into_val(env));
            }
        }

        v
    }

    pub fn publish(&self, env: &Env) {
        env.events().publish((self.name(),), self.data(env))
    }
}
