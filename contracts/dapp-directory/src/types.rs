//! Domain types for the directory contract.

use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

// --- Enums ---

/// Review lifecycle of a dapp listing.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DappStatus {
    #[default]
    Submitted,
    Approved,
    Rejected,
}

/// Closed set of listing categories; unknown names fail at deserialization.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq)]
pub enum Category {
    Games,
    Finance,
    Music,
    Developer,
}

/// Closed set of supported platforms; unknown names fail at deserialization.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq)]
pub enum Platform {
    Ios,
    Android,
    Mac,
    Linux,
    Windows,
    Web,
}

// --- Structs ---

/// An amount plus the NEP-141 token that denominates it. Every boundary
/// validates the token against the contract's configured settlement token.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenAmount {
    pub token: AccountId,
    pub amount: U128,
}

/// Download link for one platform.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformLink {
    pub platform: Platform,
    pub download_url: String,
}

/// A dapp listing. Keyed by the dapp's account id.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Dapp {
    pub manager: AccountId,
    pub category: Category,
    pub status: DappStatus,
    /// 16x16
    pub icon_small: String,
    /// 64x64
    pub icon_large: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub website: String,
    /// The dapp's own release version, not the contract version.
    pub version: String,
    pub slides: Vec<String>,
    pub platforms: Vec<PlatformLink>,
    pub last_updated_ms: u64,
}

/// A purchasable in-dapp item with finite stock. Keyed by (dapp, item id).
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub title: String,
    pub subtitle: String,
    pub price: TokenAmount,
    pub stock: u32,
}

/// A featured-list slot, admin-scheduled.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturedSlot {
    pub dapp_account: AccountId,
    pub featured_until_ms: u64,
}

/// Read-only contract configuration snapshot.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct ConfigView {
    pub version: String,
    pub admin: AccountId,
    pub token_id: AccountId,
    /// Cumulative total of fees debited from ledger entries and burned.
    pub fees_burned: U128,
}
