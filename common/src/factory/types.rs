use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    Unauthorized = 1,
    CounterpartyIsCreator = 2,
}

#[derive(Clone)]
#[contracttype]
pub enum FactoryDataKey {
    Admin,
    EscrowWasmHash,       // code every new escrow instance runs
    EscrowCount,
    Escrows,              // persistent Vec<Address> of every deployed instance
    CreatorEscrows(Address),
}
