use common::{access::Role, escrow::types::CreatorRole};
use soroban_sdk::{Address, BytesN, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized(Address, Address, CreatorRole),
    FunderRegistered(Address),
    PayeeCandidateRegistered(Address, BytesN<32>),
    PayeeRegistered(Address),
    RoleGranted(Role, Address, Address),
    Deposited(Address, Address, i128),
    Withdrawn(Address, Address, i128),
    ContractActivated(Address),
    ContractFinalized(Address, bool),
    ArbitrationRequested(Address),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized(..) => stringify!(Initialized),
            EscrowEvent::FunderRegistered(..) => stringify!(FunderRegistered),
            EscrowEvent::PayeeCandidateRegistered(..) => stringify!(PayeeCandidateRegistered),
            EscrowEvent::PayeeRegistered(..) => stringify!(PayeeRegistered),
            EscrowEvent::RoleGranted(..) => stringify!(RoleGranted),
            EscrowEvent::Deposited(..) => stringify!(Deposited),
            EscrowEvent::Withdrawn(..) => stringify!(Withdrawn),
            EscrowEvent::ContractActivated(..) => stringify!(ContractActivated),
            EscrowEvent::ContractFinalized(..) => stringify!(ContractFinalized),
            EscrowEvent::ArbitrationRequested(..) => stringify!(ArbitrationRequested),
        }
    }

    pub fn data(&self, env: &Env) -> Vec<Val> {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            EscrowEvent::Initialized(factory, creator, role) => {
                v.push_back(factory.into_val(env));
                v.push_back(creator.into_val(env));
                v.push_back(role.into_val(env));
            }
            EscrowEvent::FunderRegistered(account)
            | EscrowEvent::PayeeRegistered(account)
            | EscrowEvent::ContractActivated(account)
            | EscrowEvent::ArbitrationRequested(account) => {
                v.push_back(account.into_val(env));
            }
            EscrowEvent::PayeeCandidateRegistered(account, identifier) => {
                v.push_back(account.into_val(env));
                v.push_back(identifier.into_val(env));
            }
            EscrowEvent::RoleGranted(role, account, granter) => {
                v.push_back(role.into_val(env));
                v.push_back(account.into_val(env));
                v.push_back(granter.into_val(env));
            }
            EscrowEvent::Deposited(account, asset, amount)
            | EscrowEvent::Withdrawn(account, asset, amount) => {
                v.push_back(account.into_val(env));
                v.push_back(asset.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::ContractFinalized(funder, auto_withdraw) => {
                v.push_back(funder.into_val(env));
                v.push_back(auto_withdraw.into_val(env));
            }
        }

        v
    }

    pub fn publish(&self, env: &Env) {
        env.events().publish((self.name(),), self.data(env))
    }
}
