use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

// --- ft_on_transfer (deposits) ---

#[test]
fn deposit_credits_balance() {
    let mut contract = new_contract();

    seed_balance(&mut contract, buyer(), 500_000);

    assert_eq!(balance_of(&contract, buyer()), Some(500_000));
}

#[test]
fn deposit_emits_event() {
    let mut contract = new_contract();
    testing_env!(context(token()).build());

    contract.ft_on_transfer(buyer(), U128(500_000), String::new());

    let logs = get_logs();
    assert!(
        logs.contains(&"EVENT_JSON:{\"standard\":\"nep297\",\"version\":\"1.0.0\",\"event\":\"deposited\",\"data\":{\"account\":\"buyer.near\",\"token\":\"token.near\",\"amount\":\"500000\",\"new_balance\":\"500000\"}}".to_string()),
        "Expected deposited event, got: {:?}",
        logs
    );
}

#[test]
fn deposit_accumulates() {
    let mut contract = new_contract();

    seed_balance(&mut contract, buyer(), 300_000);
    seed_balance(&mut contract, buyer(), 200_000);

    assert_eq!(balance_of(&contract, buyer()), Some(500_000));
}

#[test]
fn skip_sentinel_is_noop() {
    let mut contract = new_contract();
    testing_env!(context(token()).build());

    match contract.ft_on_transfer(buyer(), U128(500_000), SKIP_DEPOSIT_MEMO.to_string()) {
        PromiseOrValue::Value(refund) => assert_eq!(refund.0, 0, "skip keeps the tokens"),
        PromiseOrValue::Promise(_) => panic!("expected a value"),
    }

    assert_eq!(balance_of(&contract, buyer()), None);
}

#[test]
fn deposit_from_self_is_not_credited() {
    let mut contract = new_contract();
    testing_env!(context(token()).build());

    contract.ft_on_transfer(directory(), U128(500_000), String::new());

    assert_eq!(balance_of(&contract, directory()), None);
}

#[test]
#[should_panic(expected = "Unsupported token")]
fn deposit_from_unsupported_token_aborts() {
    let mut contract = new_contract();
    let other_token: AccountId = "other-token.near".parse().unwrap();
    testing_env!(context(other_token).build());

    contract.ft_on_transfer(buyer(), U128(500_000), String::new());
}

// --- withdraw ---

#[test]
fn withdraw_happy() {
    let mut contract = new_contract();
    seed_balance(&mut contract, buyer(), 500_000);
    testing_env!(context_with_deposit(buyer(), 1).build());

    contract.withdraw(token(), U128(200_000)).unwrap();

    assert_eq!(balance_of(&contract, buyer()), Some(300_000));
}

#[test]
fn withdraw_full_balance() {
    let mut contract = new_contract();
    seed_balance(&mut contract, buyer(), 500_000);
    testing_env!(context_with_deposit(buyer(), 1).build());

    contract.withdraw(token(), U128(500_000)).unwrap();

    assert_eq!(balance_of(&contract, buyer()), Some(0));
}

#[test]
fn withdraw_requires_one_yocto() {
    let mut contract = new_contract();
    seed_balance(&mut contract, buyer(), 500_000);
    testing_env!(context(buyer()).build());

    let err = contract.withdraw(token(), U128(100_000)).err().unwrap();
    assert!(matches!(err, DirectoryError::InsufficientDeposit(_)));
    assert_eq!(balance_of(&contract, buyer()), Some(500_000));
}

#[test]
fn withdraw_more_than_balance_fails() {
    let mut contract = new_contract();
    seed_balance(&mut contract, buyer(), 10_000);
    testing_env!(context_with_deposit(buyer(), 1).build());

    let err = contract.withdraw(token(), U128(50_000)).err().unwrap();
    assert!(matches!(err, DirectoryError::InsufficientFunds(_)));
    assert_eq!(balance_of(&contract, buyer()), Some(10_000));
}

#[test]
fn withdraw_zero_fails() {
    let mut contract = new_contract();
    seed_balance(&mut contract, buyer(), 10_000);
    testing_env!(context_with_deposit(buyer(), 1).build());

    let err = contract.withdraw(token(), U128(0)).err().unwrap();
    assert!(matches!(err, DirectoryError::InvalidAmount(_)));
    assert_eq!(balance_of(&contract, buyer()), Some(10_000));
}

#[test]
fn withdraw_without_entry_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), 1).build());

    let err = contract.withdraw(token(), U128(100)).err().unwrap();
    assert!(matches!(err, DirectoryError::NotFound(_)));
}

#[test]
fn withdraw_wrong_token_fails() {
    let mut contract = new_contract();
    seed_balance(&mut contract, buyer(), 10_000);
    testing_env!(context_with_deposit(buyer(), 1).build());

    let other_token: AccountId = "other-token.near".parse().unwrap();
    let err = contract.withdraw(other_token, U128(100)).err().unwrap();
    assert!(matches!(err, DirectoryError::InvalidAmount(_)));
}

// --- conservation ---

#[test]
fn balance_equals_credits_minus_successful_debits() {
    let mut contract = new_contract();

    seed_balance(&mut contract, buyer(), 300_000);
    seed_balance(&mut contract, buyer(), 150_000);

    // Failed debit contributes zero change.
    testing_env!(context_with_deposit(buyer(), 1).build());
    contract.withdraw(token(), U128(1_000_000)).err().unwrap();

    testing_env!(context_with_deposit(buyer(), 1).build());
    contract.withdraw(token(), U128(100_000)).unwrap();

    assert_eq!(balance_of(&contract, buyer()), Some(350_000));
}

#[test]
fn get_balance_absent_is_none() {
    let contract = new_contract();
    assert_eq!(balance_of(&contract, buyer()), None);
}
