use soroban_sdk::{contracttype, Address, String};

/// Side the creator of a pooled escrow takes.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CreatorRole {
    Funder = 1,
    Payee = 2,
}

/// Creation-time configuration handed to a fresh escrow instance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub role: CreatorRole,
    pub counterparty: Option<Address>, // granted the opposite role without registration
    pub metadata: String,
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    Metadata,
    Funders,             // persistent Vec<Address>, append-only
    Payees,              // persistent Vec<Address>, append-only
    Candidates,          // persistent Vec<Address> awaiting a payee grant
    Candidate(Address),  // identifier submitted with the registration
    ArbitrationRequested,
}
