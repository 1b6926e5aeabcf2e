use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- schedule defaults ---

#[test]
fn new_seeds_default_fees() {
    let contract = new_contract();

    assert_eq!(
        contract.get_fee(FEE_SUBMIT_DAPP.to_string()),
        Some(U128(DEFAULT_SUBMIT_DAPP_FEE))
    );
    assert_eq!(
        contract.get_fee(FEE_REGISTER_ITEM.to_string()),
        Some(U128(DEFAULT_REGISTER_ITEM_FEE))
    );
    assert_eq!(contract.get_fees().len(), 2);
}

// --- upsert_fee ---

#[test]
fn upsert_fee_inserts_and_overwrites() {
    let mut contract = new_contract();
    testing_env!(context(admin()).build());

    contract
        .upsert_fee("verify_listing".to_string(), tokens(25_000))
        .unwrap();
    assert_eq!(
        contract.get_fee("verify_listing".to_string()),
        Some(U128(25_000))
    );

    contract
        .upsert_fee("verify_listing".to_string(), tokens(30_000))
        .unwrap();
    assert_eq!(
        contract.get_fee("verify_listing".to_string()),
        Some(U128(30_000))
    );
}

#[test]
fn upsert_fee_non_admin_fails() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());

    let err = contract
        .upsert_fee("verify_listing".to_string(), tokens(25_000))
        .unwrap_err();
    assert!(matches!(err, DirectoryError::Unauthorized(_)));
}

#[test]
fn upsert_fee_wrong_token_fails() {
    let mut contract = new_contract();
    testing_env!(context(admin()).build());

    let wrong = TokenAmount {
        token: "other-token.near".parse().unwrap(),
        amount: U128(25_000),
    };
    let err = contract
        .upsert_fee("verify_listing".to_string(), wrong)
        .unwrap_err();
    assert!(matches!(err, DirectoryError::InvalidAmount(_)));
}

#[test]
fn upsert_fee_zero_fails() {
    let mut contract = new_contract();
    testing_env!(context(admin()).build());

    let err = contract
        .upsert_fee("verify_listing".to_string(), tokens(0))
        .unwrap_err();
    assert!(matches!(err, DirectoryError::InvalidAmount(_)));
}

// --- remove_fee ---

#[test]
fn remove_fee_happy() {
    let mut contract = new_contract();
    testing_env!(context(admin()).build());

    contract.remove_fee(FEE_REGISTER_ITEM.to_string()).unwrap();
    assert_eq!(contract.get_fee(FEE_REGISTER_ITEM.to_string()), None);
}

#[test]
fn remove_fee_missing_fails() {
    let mut contract = new_contract();
    testing_env!(context(admin()).build());

    let err = contract.remove_fee("no_such_fee".to_string()).unwrap_err();
    assert!(matches!(err, DirectoryError::FeeNotConfigured(_)));
}

#[test]
fn remove_fee_non_admin_fails() {
    let mut contract = new_contract();
    testing_env!(context(manager()).build());

    let err = contract
        .remove_fee(FEE_REGISTER_ITEM.to_string())
        .unwrap_err();
    assert!(matches!(err, DirectoryError::Unauthorized(_)));
}

// --- internal_charge_fee ---

#[test]
fn charge_fee_burns_from_payer() {
    let mut contract = new_contract();
    seed_balance(&mut contract, manager(), 120_000);

    let charged = contract
        .internal_charge_fee(&manager(), FEE_REGISTER_ITEM)
        .unwrap();

    assert_eq!(charged, DEFAULT_REGISTER_ITEM_FEE);
    assert_eq!(
        balance_of(&contract, manager()),
        Some(120_000 - DEFAULT_REGISTER_ITEM_FEE)
    );
    // Burned, not credited to any other entry.
    assert_eq!(contract.fees_burned, DEFAULT_REGISTER_ITEM_FEE);
}

#[test]
fn charge_fee_unconfigured_fails() {
    let mut contract = new_contract();
    seed_balance(&mut contract, manager(), 120_000);

    let err = contract
        .internal_charge_fee(&manager(), "no_such_fee")
        .unwrap_err();
    assert!(matches!(err, DirectoryError::FeeNotConfigured(_)));
    assert_eq!(balance_of(&contract, manager()), Some(120_000));
}

#[test]
fn charge_fee_insufficient_funds_fails() {
    let mut contract = new_contract();
    seed_balance(&mut contract, manager(), 10_000);

    let err = contract
        .internal_charge_fee(&manager(), FEE_REGISTER_ITEM)
        .unwrap_err();
    assert!(matches!(err, DirectoryError::InsufficientFunds(_)));
    assert_eq!(balance_of(&contract, manager()), Some(10_000));
    assert_eq!(contract.fees_burned, 0);
}

#[test]
fn charge_fee_without_entry_fails() {
    let mut contract = new_contract();

    let err = contract
        .internal_charge_fee(&manager(), FEE_REGISTER_ITEM)
        .unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound(_)));
}
