//! Admin-maintained fee schedule and the fee charger.
//!
//! Charged fees are debited from the payer's ledger entry and burned — they
//! are never credited to another entry. The cumulative total is tracked in
//! `fees_burned`.

use crate::*;

#[near]
impl Contract {
    /// Inserts or overwrites a named fee. Admin only.
    #[handle_result]
    pub fn upsert_fee(&mut self, fee_name: String, amount: TokenAmount) -> Result<(), DirectoryError> {
        self.assert_admin()?;
        let value = self.assert_currency(&amount)?;
        if value == 0 {
            return Err(DirectoryError::InvalidAmount(
                "Fee must be greater than 0".to_string(),
            ));
        }

        self.fees.insert(fee_name.clone(), value);

        DirectoryEvent::FeeUpserted {
            fee_name,
            amount: amount.amount,
        }
        .emit();
        Ok(())
    }

    /// Removes a named fee. Admin only.
    #[handle_result]
    pub fn remove_fee(&mut self, fee_name: String) -> Result<(), DirectoryError> {
        self.assert_admin()?;
        self.fees.remove(&fee_name).ok_or_else(|| {
            DirectoryError::FeeNotConfigured(format!("No fee configured under '{}'", fee_name))
        })?;

        DirectoryEvent::FeeRemoved { fee_name }.emit();
        Ok(())
    }

    pub fn get_fee(&self, fee_name: String) -> Option<U128> {
        self.fees.get(&fee_name).map(|f| U128(*f))
    }

    pub fn get_fees(&self) -> Vec<(String, U128)> {
        self.fees.iter().map(|(k, v)| (k.clone(), U128(*v))).collect()
    }
}

// --- Internal helpers ---

impl Contract {
    /// Looks up the named fee and debits it from the payer. Returns the
    /// charged amount. Fails before touching any state if the schedule lacks
    /// the name or the payer cannot cover it.
    pub(crate) fn internal_charge_fee(
        &mut self,
        payer: &AccountId,
        fee_name: &str,
    ) -> Result<u128, DirectoryError> {
        let fee = self.fees.get(fee_name).copied().ok_or_else(|| {
            DirectoryError::FeeNotConfigured(format!("No fee configured under '{}'", fee_name))
        })?;

        let token = self.token_id.clone();
        self.internal_debit(payer, &token, fee)?;
        self.fees_burned += fee;

        DirectoryEvent::FeeCharged {
            payer: payer.clone(),
            fee_name: fee_name.to_string(),
            amount: U128(fee),
        }
        .emit();
        Ok(fee)
    }
}
