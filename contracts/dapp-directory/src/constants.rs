//! Directory-wide constants.

use near_sdk::NearToken;

/// Fee schedule key charged when an account submits a dapp for review.
pub const FEE_SUBMIT_DAPP: &str = "submit_dapp";

/// Fee schedule key charged when a manager registers a catalog item.
pub const FEE_REGISTER_ITEM: &str = "register_item";

/// Initial `submit_dapp` fee in the settlement token's smallest unit.
pub const DEFAULT_SUBMIT_DAPP_FEE: u128 = 500_000;

/// Initial `register_item` fee in the settlement token's smallest unit.
pub const DEFAULT_REGISTER_ITEM_FEE: u128 = 50_000;

/// `ft_transfer` msg sentinel: keep the tokens without crediting any ledger
/// entry. Used for operational top-ups of the contract account.
pub const SKIP_DEPOSIT_MEMO: &str = "skip";

/// Memo attached to outbound withdrawal transfers.
pub const WITHDRAW_MEMO: &str = "dapp store withdrawal";

/// Maximum number of promo slides per dapp.
pub const MAX_SLIDES: usize = 5;

/// Gas for the outbound `ft_transfer` on withdrawal (TGas).
pub const FT_TRANSFER_GAS: u64 = 30;

/// 1 yocto, required on funds-moving methods (full-access-key guard).
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
