#![no_std]

pub mod access;
pub mod errors;
pub mod escrow;
pub mod factory;
pub mod ledger;
pub mod lifecycle;
pub mod registry;
pub mod storage;
pub mod transfer;
