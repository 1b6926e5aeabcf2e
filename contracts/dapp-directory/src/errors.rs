//! Typed error handling for the directory contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(DirectoryError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message, aborting the receipt — no partial state change survives.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum DirectoryError {
    /// Caller is not the required admin/manager/owner.
    Unauthorized(String),
    /// Referenced ledger entry, item, dapp, or slot does not exist.
    NotFound(String),
    /// Item or dapp already registered under that key.
    DuplicateKey(String),
    /// A debit exceeds the current balance.
    InsufficientFunds(String),
    /// Zero charge/withdrawal amount, or a currency mismatch.
    InvalidAmount(String),
    /// Structurally invalid parameters (zero stock, slide limit, empty platform list).
    InvalidInput(String),
    /// Stock decrement attempted at zero stock.
    OutOfStock(String),
    /// The fee schedule lacks the named fee.
    FeeNotConfigured(String),
    /// Attached deposit does not satisfy the guard.
    InsufficientDeposit(String),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::DuplicateKey(msg) => write!(f, "Duplicate key: {}", msg),
            Self::InsufficientFunds(msg) => write!(f, "Insufficient funds: {}", msg),
            Self::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::OutOfStock(msg) => write!(f, "Out of stock: {}", msg),
            Self::FeeNotConfigured(msg) => write!(f, "Fee not configured: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl DirectoryError {
    pub fn dapp_not_found(id: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("Dapp not found: {}", id))
    }
    pub fn item_not_found(item_id: &str) -> Self {
        Self::NotFound(format!("Item not found: {}", item_id))
    }
    pub fn entry_not_found(owner: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("Ledger entry not found: {}", owner))
    }
    pub fn only(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn currency_mismatch(expected: &near_sdk::AccountId) -> Self {
        Self::InvalidAmount(format!("Amount must be denominated in {}", expected))
    }
}
