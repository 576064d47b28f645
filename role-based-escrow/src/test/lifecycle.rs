#![cfg(test)]

use super::EscrowTest;
use crate::EscrowEvent;
use common::{errors::Error, lifecycle::EscrowState};
use soroban_sdk::vec;

#[test]
fn test_fresh_escrow_is_initialized() {
    let test = EscrowTest::as_funder(true);
    assert_eq!(test.escrow.state(), EscrowState::Initialized);
    assert_eq!(test.escrow.version(), 1);
    assert!(!test.escrow.arbitration_requested());
}

#[test]
fn test_activation_requires_a_payee() {
    let test = EscrowTest::as_funder(false);
    test.deposit(&test.funder, &test.token, 300);

    assert_eq!(
        test.escrow.try_activate_contract(&test.funder),
        Err(Ok(Error::PayeeRequired))
    );
    assert_eq!(test.escrow.state(), EscrowState::Initialized);
}

#[test]
fn test_activation_requires_a_party_role() {
    let test = EscrowTest::as_funder(true);
    assert_eq!(
        test.escrow.try_activate_contract(&test.other1),
        Err(Ok(Error::Unauthorized))
    );
    // Admin alone is not a party to the escrow.
    assert_eq!(
        test.escrow.try_activate_contract(&test.factory),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_payee_creator_activates_with_preset_funder() {
    let test = EscrowTest::as_payee(true);
    test.deposit(&test.funder, &test.token, 200);

    test.escrow.activate_contract(&test.payee);
    test.assert_event(EscrowEvent::ContractActivated(test.payee.clone()));
    assert_eq!(test.escrow.state(), EscrowState::Activated);
}

#[test]
fn test_activation_is_one_way() {
    let test = EscrowTest::activated(300);
    test.assert_event(EscrowEvent::ContractActivated(test.funder.clone()));
    assert_eq!(test.escrow.state(), EscrowState::Activated);

    assert_eq!(
        test.escrow.try_activate_contract(&test.funder),
        Err(Ok(Error::InvalidState))
    );
}

#[test]
fn test_registration_closed_after_activation() {
    let test = EscrowTest::activated(300);

    assert_eq!(
        test.escrow
            .try_register_as_payee(&test.other1, &test.identifier(2)),
        Err(Ok(Error::InvalidState))
    );
    assert_eq!(
        test.escrow.try_register_as_funder(&test.other2),
        Err(Ok(Error::InvalidState))
    );
}

#[test]
fn test_settle_before_activation_fails() {
    let test = EscrowTest::as_funder(true);
    test.deposit(&test.funder, &test.token, 300);

    assert_eq!(
        test.escrow.try_settle(&test.funder, &false),
        Err(Ok(Error::InvalidState))
    );
    assert_eq!(test.escrow.funds(&test.funder, &test.token.address), 300);
}

#[test]
fn test_only_funders_settle() {
    let test = EscrowTest::activated(300);
    assert_eq!(
        test.escrow.try_settle(&test.payee, &false),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        test.escrow.try_settle(&test.other1, &false),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_settle_moves_funder_balance_to_payee() {
    let test = EscrowTest::activated(300);

    test.escrow.settle(&test.funder, &false);
    test.assert_event(EscrowEvent::ContractFinalized(test.funder.clone(), false));

    assert_eq!(test.escrow.state(), EscrowState::Finalized);
    assert_eq!(test.escrow.funds(&test.funder, &test.token.address), 0);
    assert_eq!(test.escrow.funds(&test.payee, &test.token.address), 300);
    assert_eq!(test.escrow.held(&test.token.address), 300);

    assert_eq!(
        test.escrow.try_settle(&test.funder, &false),
        Err(Ok(Error::InvalidState))
    );
}

#[test]
fn test_settle_splits_evenly_with_remainder_to_first_payee() {
    let test = EscrowTest::as_funder(false);
    test.deposit(&test.funder, &test.token, 301);
    test.deposit(&test.funder, &test.token2, 10);
    test.escrow
        .register_as_payee(&test.payee, &test.identifier(1));
    test.escrow
        .register_as_payee(&test.other1, &test.identifier(2));
    test.escrow
        .register_as_payee(&test.other2, &test.identifier(3));
    test.escrow.grant_payee_role(
        &test.funder,
        &vec![
            &test.env,
            test.payee.clone(),
            test.other1.clone(),
            test.other2.clone(),
        ],
    );
    test.escrow.activate_contract(&test.funder);

    test.escrow.settle(&test.funder, &false);

    assert_eq!(test.escrow.funds(&test.payee, &test.token.address), 101);
    assert_eq!(test.escrow.funds(&test.other1, &test.token.address), 100);
    assert_eq!(test.escrow.funds(&test.other2, &test.token.address), 100);
    assert_eq!(test.escrow.funds(&test.payee, &test.token2.address), 4);
    assert_eq!(test.escrow.funds(&test.other1, &test.token2.address), 3);
    assert_eq!(test.escrow.funds(&test.other2, &test.token2.address), 3);
}

#[test]
fn test_settle_leaves_other_funders_untouched() {
    let test = EscrowTest::as_funder(false);
    test.deposit(&test.funder, &test.token, 300);
    test.deposit(&test.other1, &test.token, 50);
    test.escrow
        .register_as_payee(&test.payee, &test.identifier(1));
    test.escrow
        .grant_payee_role(&test.funder, &vec![&test.env, test.payee.clone()]);
    test.escrow.activate_contract(&test.other1);

    test.escrow.settle(&test.funder, &false);

    assert_eq!(test.escrow.funds(&test.payee, &test.token.address), 300);
    assert_eq!(test.escrow.funds(&test.other1, &test.token.address), 50);
}

#[test]
fn test_arbitration_only_while_activated() {
    let test = EscrowTest::as_funder(true);
    assert_eq!(
        test.escrow.try_request_arbitration(&test.funder),
        Err(Ok(Error::InvalidState))
    );

    let test = EscrowTest::activated(300);
    assert_eq!(
        test.escrow.try_request_arbitration(&test.other1),
        Err(Ok(Error::Unauthorized))
    );

    test.escrow.request_arbitration(&test.payee);
    test.assert_event(EscrowEvent::ArbitrationRequested(test.payee.clone()));
    assert!(test.escrow.arbitration_requested());
    assert_eq!(test.escrow.state(), EscrowState::Activated);

    test.escrow.settle(&test.funder, &false);
    assert_eq!(
        test.escrow.try_request_arbitration(&test.funder),
        Err(Ok(Error::InvalidState))
    );
    assert!(test.escrow.arbitration_requested());
}
