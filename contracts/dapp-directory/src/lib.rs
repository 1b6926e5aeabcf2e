//! Dapp Directory — listings with an admin review workflow, an internal
//! NEP-141 token ledger, an admin-managed fee schedule, and a per-dapp
//! purchasable item catalog with stock depletion. JSON (nep297) events.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{
    env, ext_contract, near, AccountId, BorshStorageKey, Gas, PanicOnDefault, Promise,
    PromiseOrValue,
};

// --- Modules ---

mod admin;
mod catalog;
pub mod constants;
mod dapps;
mod errors;
mod events;
mod fees;
mod guards;
mod ledger;
mod purchase;
pub mod types;

pub use constants::*;
pub use errors::DirectoryError;
pub use events::DirectoryEvent;
pub use types::*;

// --- External Interfaces ---

#[ext_contract(ext_ft)]
pub trait FungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Fees,
    Ledger,
    Dapps,
    Items,
    Featured,
}

// --- Contract State ---

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    pub admin: AccountId,
    /// NEP-141 token denominating every ledger entry, fee, and price.
    pub token_id: AccountId,

    /// Fee schedule: fee name -> amount in the settlement token's smallest unit.
    pub fees: IterableMap<String, u128>,
    /// Escrow balances; key = (owner, token).
    pub ledger: LookupMap<(AccountId, AccountId), u128>,
    /// Listings; key = dapp account.
    pub dapps: IterableMap<AccountId, Dapp>,
    /// Purchasable items; key = (dapp account, item id).
    pub items: LookupMap<(AccountId, String), CatalogItem>,
    /// Featured list; key = slot number.
    pub featured: IterableMap<u16, FeaturedSlot>,

    /// Cumulative fees debited from ledger entries; never credited anywhere.
    pub fees_burned: u128,
}

#[near]
impl Contract {
    #[init]
    pub fn new(admin: AccountId, token_id: AccountId) -> Self {
        let mut fees = IterableMap::new(StorageKey::Fees);
        fees.insert(FEE_SUBMIT_DAPP.to_string(), DEFAULT_SUBMIT_DAPP_FEE);
        fees.insert(FEE_REGISTER_ITEM.to_string(), DEFAULT_REGISTER_ITEM_FEE);

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            admin,
            token_id,
            fees,
            ledger: LookupMap::new(StorageKey::Ledger),
            dapps: IterableMap::new(StorageKey::Dapps),
            items: LookupMap::new(StorageKey::Items),
            featured: IterableMap::new(StorageKey::Featured),
            fees_burned: 0,
        }
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut state: Contract = env::state_read()
            .unwrap_or_else(|| env::panic_str("Contract is not initialized"));

        let current = env!("CARGO_PKG_VERSION");
        if state.version != current {
            DirectoryEvent::StateMigrated {
                old_version: state.version.clone(),
                new_version: current.to_string(),
            }
            .emit();
            state.version = current.to_string();
        }
        state
    }

    pub fn get_config(&self) -> ConfigView {
        ConfigView {
            version: self.version.clone(),
            admin: self.admin.clone(),
            token_id: self.token_id.clone(),
            fees_burned: U128(self.fees_burned),
        }
    }
}

// --- Internal helpers ---

impl Contract {
    pub(crate) fn internal_dapp(&self, dapp_account: &AccountId) -> Result<&Dapp, DirectoryError> {
        self.dapps
            .get(dapp_account)
            .ok_or_else(|| DirectoryError::dapp_not_found(dapp_account))
    }

    pub(crate) fn assert_admin(&self) -> Result<(), DirectoryError> {
        if env::predecessor_account_id() != self.admin {
            return Err(DirectoryError::only("the directory admin"));
        }
        Ok(())
    }

    /// Checks the caller against the dapp's manager; returns the caller.
    pub(crate) fn assert_manager(
        &self,
        dapp_account: &AccountId,
    ) -> Result<AccountId, DirectoryError> {
        let dapp = self.internal_dapp(dapp_account)?;
        let caller = env::predecessor_account_id();
        if caller != dapp.manager {
            return Err(DirectoryError::only("the dapp manager"));
        }
        Ok(caller)
    }

    /// Validates the amount's denomination; returns the raw amount.
    pub(crate) fn assert_currency(&self, amount: &TokenAmount) -> Result<u128, DirectoryError> {
        if amount.token != self.token_id {
            return Err(DirectoryError::currency_mismatch(&self.token_id));
        }
        Ok(amount.amount.0)
    }
}

#[cfg(test)]
mod tests;
