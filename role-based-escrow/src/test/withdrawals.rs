#![cfg(test)]

use super::{EscrowTest, STARTING_BALANCE};
use crate::EscrowEvent;
use common::errors::Error;
use soroban_sdk::{vec, Address};

#[test]
fn test_funder_reclaims_deposit_when_no_payee_joins() {
    let test = EscrowTest::as_funder(false);
    test.deposit(&test.funder, &test.token, 300);
    assert_eq!(
        test.escrow.try_activate_contract(&test.funder),
        Err(Ok(Error::PayeeRequired))
    );

    assert!(test.escrow.withdrawal_allowed(&test.funder));
    let paid = test.escrow.withdraw(&test.funder);
    assert_eq!(
        paid,
        vec![&test.env, (test.token.address.clone(), 300_i128)]
    );
    test.assert_event(EscrowEvent::Withdrawn(
        test.funder.clone(),
        test.token.address.clone(),
        300,
    ));

    assert_eq!(test.token.balance(&test.funder), STARTING_BALANCE);
    assert_eq!(test.escrow.funds(&test.funder, &test.token.address), 0);
    assert_eq!(test.escrow.held(&test.token.address), 0);
}

#[test]
fn test_payee_withdraws_after_settlement() {
    let test = EscrowTest::activated(300);
    test.escrow.settle(&test.funder, &false);

    assert_eq!(test.token.balance(&test.payee), STARTING_BALANCE);
    test.escrow.withdraw(&test.payee);

    assert_eq!(test.token.balance(&test.payee), STARTING_BALANCE + 300);
    assert_eq!(test.token.balance(&test.funder), STARTING_BALANCE - 300);
    assert_eq!(test.token.balance(&test.escrow.address), 0);
    assert_eq!(test.escrow.held(&test.token.address), 0);
}

#[test]
fn test_settle_with_auto_withdraw_pays_payees() {
    let test = EscrowTest::activated(300);
    test.escrow.settle(&test.funder, &true);

    test.assert_event(EscrowEvent::ContractFinalized(test.funder.clone(), true));
    test.assert_event(EscrowEvent::Withdrawn(
        test.payee.clone(),
        test.token.address.clone(),
        300,
    ));
    assert_eq!(test.token.balance(&test.payee), STARTING_BALANCE + 300);
    assert_eq!(test.escrow.funds(&test.payee, &test.token.address), 0);

    // Nothing left to pay out.
    let paid = test.escrow.withdraw(&test.payee);
    assert!(paid.is_empty());
}

#[test]
fn test_withdrawal_locked_while_activated() {
    let test = EscrowTest::activated(300);

    assert!(!test.escrow.withdrawal_allowed(&test.funder));
    assert!(!test.escrow.withdrawal_allowed(&test.payee));
    assert_eq!(
        test.escrow.try_withdraw(&test.funder),
        Err(Ok(Error::InvalidState))
    );
    assert_eq!(
        test.escrow.try_withdraw(&test.payee),
        Err(Ok(Error::InvalidState))
    );
    assert_eq!(test.token.balance(&test.escrow.address), 300);
}

#[test]
fn test_withdraw_pays_every_asset() {
    let test = EscrowTest::as_funder(false);
    test.deposit(&test.funder, &test.token, 120);
    test.deposit(&test.funder, &test.token2, 30);

    let paid = test.escrow.withdraw(&test.funder);
    assert_eq!(
        paid,
        vec![
            &test.env,
            (test.token.address.clone(), 120_i128),
            (test.token2.address.clone(), 30_i128),
        ]
    );
    assert_eq!(test.token.balance(&test.funder), STARTING_BALANCE);
    assert_eq!(test.token2.balance(&test.funder), STARTING_BALANCE);
}

#[test]
fn test_withdraw_with_nothing_owed_is_empty() {
    let test = EscrowTest::as_funder(true);
    let stranger: Address = test.other3.clone();

    let paid = test.escrow.withdraw(&stranger);
    assert!(paid.is_empty());
    assert_eq!(test.token.balance(&stranger), STARTING_BALANCE);
}

#[test]
fn test_remaining_funders_withdraw_after_finalization() {
    let test = EscrowTest::as_funder(false);
    test.deposit(&test.funder, &test.token, 200);
    test.deposit(&test.other1, &test.token, 70);
    test.escrow
        .register_as_payee(&test.payee, &test.identifier(1));
    test.escrow
        .grant_payee_role(&test.funder, &vec![&test.env, test.payee.clone()]);
    test.escrow.activate_contract(&test.payee);
    test.escrow.settle(&test.funder, &true);

    test.escrow.withdraw(&test.other1);
    assert_eq!(test.token.balance(&test.other1), STARTING_BALANCE);
    assert_eq!(test.token.balance(&test.payee), STARTING_BALANCE + 200);
    assert_eq!(test.token.balance(&test.escrow.address), 0);
}
