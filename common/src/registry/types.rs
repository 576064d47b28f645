use soroban_sdk::{contracttype, Address, String, Vec};

use crate::lifecycle::EscrowState;

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub id: u64,
    pub title: String,
    pub token: Address,
    pub funder: Address,
    pub payee: Address,
    pub state: EscrowState,
    pub amount: i128,     // requested at creation, required again at activation
    pub determined: i128, // balance snapshot taken at activation
    pub balance: i128,
    pub created_at: u64,
    pub arbitration_requested: bool,
}

/// Which party index a lookup walks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum EscrowSide {
    Funder = 1,
    Payee = 2,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EscrowPage {
    pub escrows: Vec<Escrow>,
    pub total: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum RegistryKey {
    EscrowCount,
    Record(u64),
    Index(EscrowSide, Address), // Vec<u64> in creation order
}
