use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum RegistryEvent {
    Initialized(Address),
    Upgraded(u32),
    EscrowCreated(u64, Address, Address, Address, i128),
    Deposited(u64, Address, Address, i128),
    Withdrawn(u64, Address, Address, i128),
    ContractActivated(u64, Address, i128),
    ContractFinalized(u64, Address, bool),
    ArbitrationRequested(u64, Address),
}

impl RegistryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RegistryEvent::Initialized(..) => stringify!(Initialized),
            RegistryEvent::Upgraded(..) => stringify!(Upgraded),
            RegistryEvent::EscrowCreated(..) => stringify!(EscrowCreated),
            RegistryEvent::Deposited(..) => stringify!(Deposited),
            RegistryEvent::Withdrawn(..) => stringify!(Withdrawn),
            RegistryEvent::ContractActivated(..) => stringify!(ContractActivated),
            RegistryEvent::ContractFinalized(..) => stringify!(ContractFinalized),
            RegistryEvent::ArbitrationRequested(..) => stringify!(ArbitrationRequested),
        }
    }

    pub fn data(&self, env: &Env) -> Vec<Val> {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            RegistryEvent::Initialized(admin) => {
                v.push_back(admin.into_val(env));
            }
            RegistryEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            RegistryEvent::EscrowCreated(escrow_id, funder, payee, token, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(funder.into_val(env));
                v.push_back(payee.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            RegistryEvent::Deposited(escrow_id, account, token, amount)
            | RegistryEvent::Withdrawn(escrow_id, account, token, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(account.into_val(env));
                v.push_back(token.into_val(env));
                v.push_back(amount.into_val(env));
            }
            RegistryEvent::ContractActivated(escrow_id, account, amount) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(account.into_val(env));
                v.push_back(amount.into_val(env));
            }
            RegistryEvent::ContractFinalized(escrow_id, funder, auto_withdraw) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(funder.into_val(env));
                v.push_back(auto_withdraw.into_val(env));
            }
            RegistryEvent::ArbitrationRequested(escrow_id, caller) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(caller.into_val(env));
            }
        }

        v
    }

    pub fn publish(&self, env: &Env) {
        env.events().publish((self.name(),), self.data(env))
    }
}
