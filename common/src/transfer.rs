//! Pull and push value through a Soroban token contract.
//!
//! Pulls follow the approve-then-pull flow: the account approves the escrow
//! contract as spender, and the escrow draws the approved amount into itself.

use soroban_sdk::{token, Address, Env};

use crate::errors::TransferError;

pub fn pull_from(
    env: &Env,
    account: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), TransferError> {
    let token_client: token::Client<'_> = token::Client::new(env, asset);
    let escrow: Address = env.current_contract_address();

    if token_client.balance(account) < amount {
        return Err(TransferError::InsufficientBalance);
    }
    if token_client.allowance(account, &escrow) < amount {
        return Err(TransferError::InsufficientAllowance);
    }

    match token_client.try_transfer_from(&escrow, account, &escrow, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(TransferError::TransferRejected),
    }
}

pub fn push_to(
    env: &Env,
    account: &Address,
    asset: &Address,
    amount: i128,
) -> Result<(), TransferError> {
    let token_client: token::Client<'_> = token::Client::new(env, asset);

    match token_client.try_transfer(&env.current_contract_address(), account, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(TransferError::TransferRejected),
    }
}
