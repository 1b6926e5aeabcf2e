use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

use crate::types::Category;

#[near(event_json(standard = "nep297"))]
pub enum DirectoryEvent {
    #[event_version("1.0.0")]
    Deposited {
        account: AccountId,
        token: AccountId,
        amount: U128,
        new_balance: U128,
    },
    #[event_version("1.0.0")]
    Withdrawn {
        account: AccountId,
        token: AccountId,
        amount: U128,
        new_balance: U128,
    },
    #[event_version("1.0.0")]
    FeeCharged {
        payer: AccountId,
        fee_name: String,
        amount: U128,
    },
    #[event_version("1.0.0")]
    FeeUpserted { fee_name: String, amount: U128 },
    #[event_version("1.0.0")]
    FeeRemoved { fee_name: String },
    #[event_version("1.0.0")]
    AdminChanged {
        old_admin: AccountId,
        new_admin: AccountId,
    },
    #[event_version("1.0.0")]
    VersionSet { version: String },
    #[event_version("1.0.0")]
    DappSubmitted {
        dapp_account: AccountId,
        manager: AccountId,
        category: Category,
    },
    #[event_version("1.0.0")]
    DappReviewed {
        dapp_account: AccountId,
        approved: bool,
    },
    #[event_version("1.0.0")]
    DappUpdated { dapp_account: AccountId },
    #[event_version("1.0.0")]
    DappManagerChanged {
        dapp_account: AccountId,
        old_manager: AccountId,
        new_manager: AccountId,
    },
    #[event_version("1.0.0")]
    DappDeleted { dapp_account: AccountId },
    #[event_version("1.0.0")]
    ItemRegistered {
        dapp_account: AccountId,
        item_id: String,
        price: U128,
        stock: u32,
    },
    #[event_version("1.0.0")]
    ItemRestocked {
        dapp_account: AccountId,
        item_id: String,
        new_stock: u32,
    },
    #[event_version("1.0.0")]
    ItemRemoved {
        dapp_account: AccountId,
        item_id: String,
    },
    /// Purchase notification addressed to the dapp account.
    #[event_version("1.0.0")]
    ItemPurchased {
        purchaser: AccountId,
        dapp_account: AccountId,
        item_id: String,
        price: U128,
        remaining_stock: u32,
    },
    #[event_version("1.0.0")]
    FeaturedSet {
        slot: u16,
        dapp_account: AccountId,
        featured_until_ms: u64,
    },
    #[event_version("1.0.0")]
    FeaturedRemoved { slot: u16 },
    #[event_version("1.0.0")]
    StateMigrated {
        old_version: String,
        new_version: String,
    },
}
