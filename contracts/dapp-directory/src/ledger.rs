//! Account ledger: NEP-141 deposit handling, withdrawals, and the
//! credit/debit primitives every other module settles through.
//!
//! Balances only ever increase through `ft_on_transfer` (external value
//! entering custody) or a purchase credit; a committed debit never leaves a
//! negative balance.

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// NEP-141 receiver hook. Credits the sender's ledger entry, creating it
    /// on first deposit. Only the configured settlement token may call this;
    /// transfers from any other token contract abort, refunding the sender.
    ///
    /// `msg == "skip"` keeps the tokens without crediting any entry.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let token = env::predecessor_account_id();
        if token != self.token_id {
            env::panic_str("Unsupported token");
        }

        // Transfers out of the contract's own custody are never re-credited.
        if sender_id == env::current_account_id() || msg == SKIP_DEPOSIT_MEMO {
            return PromiseOrValue::Value(U128(0));
        }

        let new_balance = self.internal_credit(&sender_id, &token, amount.0);
        DirectoryEvent::Deposited {
            account: sender_id,
            token,
            amount,
            new_balance: U128(new_balance),
        }
        .emit();

        PromiseOrValue::Value(U128(0))
    }

    /// Debits the caller's ledger entry, then transfers the tokens out.
    /// The debit commits in the same receipt that issues the transfer, so a
    /// failed debit never reaches the token contract.
    #[payable]
    #[handle_result]
    pub fn withdraw(&mut self, token: AccountId, amount: U128) -> Result<Promise, DirectoryError> {
        check_one_yocto()?;
        let owner = env::predecessor_account_id();
        if token != self.token_id {
            return Err(DirectoryError::currency_mismatch(&self.token_id));
        }

        let new_balance = self.internal_debit(&owner, &token, amount.0)?;

        DirectoryEvent::Withdrawn {
            account: owner.clone(),
            token: token.clone(),
            amount,
            new_balance: U128(new_balance),
        }
        .emit();

        Ok(ext_ft::ext(token)
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(FT_TRANSFER_GAS))
            .ft_transfer(owner, amount, Some(WITHDRAW_MEMO.to_string())))
    }

    pub fn get_balance(&self, owner: AccountId, token: AccountId) -> Option<U128> {
        self.internal_balance_of(&owner, &token).ok().map(U128)
    }
}

// --- Internal helpers ---

impl Contract {
    pub(crate) fn internal_balance_of(
        &self,
        owner: &AccountId,
        token: &AccountId,
    ) -> Result<u128, DirectoryError> {
        self.ledger
            .get(&(owner.clone(), token.clone()))
            .copied()
            .ok_or_else(|| DirectoryError::entry_not_found(owner))
    }

    /// Adds to the owner's balance, materializing the entry on first use.
    /// Returns the new balance.
    pub(crate) fn internal_credit(
        &mut self,
        owner: &AccountId,
        token: &AccountId,
        amount: u128,
    ) -> u128 {
        let key = (owner.clone(), token.clone());
        let new_balance = self.ledger.get(&key).copied().unwrap_or(0) + amount;
        self.ledger.insert(key, new_balance);
        new_balance
    }

    /// Subtracts from the owner's balance. No partial debit is ever applied:
    /// on any error the entry is untouched. Returns the new balance.
    pub(crate) fn internal_debit(
        &mut self,
        owner: &AccountId,
        token: &AccountId,
        amount: u128,
    ) -> Result<u128, DirectoryError> {
        if amount == 0 {
            return Err(DirectoryError::InvalidAmount(
                "Amount must be greater than 0".to_string(),
            ));
        }

        let key = (owner.clone(), token.clone());
        let balance = self
            .ledger
            .get(&key)
            .copied()
            .ok_or_else(|| DirectoryError::entry_not_found(owner))?;
        if amount > balance {
            return Err(DirectoryError::InsufficientFunds(format!(
                "Balance {} cannot cover {}",
                balance, amount
            )));
        }

        let new_balance = balance - amount;
        self.ledger.insert(key, new_balance);
        Ok(new_balance)
    }
}
