//! Purchase flow: debit the buyer, decrement stock, credit the dapp.

use crate::*;

#[near]
impl Contract {
    /// Buys one unit of an item; the caller is the purchaser. Stock is
    /// verified before the charge, so a buyer is never debited for an
    /// unfulfillable item. An error at any step aborts the receipt, leaving
    /// buyer balance, stock, and the dapp's balance untouched.
    #[handle_result]
    pub fn purchase(
        &mut self,
        dapp_account: AccountId,
        item_id: String,
    ) -> Result<(), DirectoryError> {
        let purchaser = env::predecessor_account_id();
        self.internal_dapp(&dapp_account)?;

        let (price, stock) = {
            let item = self
                .items
                .get(&(dapp_account.clone(), item_id.clone()))
                .ok_or_else(|| DirectoryError::item_not_found(&item_id))?;
            (item.price.clone(), item.stock)
        };
        if stock == 0 {
            return Err(DirectoryError::OutOfStock(format!(
                "Item is out of stock: {}",
                item_id
            )));
        }

        self.internal_debit(&purchaser, &price.token, price.amount.0)?;
        let remaining_stock = self.internal_decrement_stock(&dapp_account, &item_id)?;
        self.internal_credit(&dapp_account, &price.token, price.amount.0);

        DirectoryEvent::ItemPurchased {
            purchaser,
            dapp_account,
            item_id,
            price: price.amount,
            remaining_stock,
        }
        .emit();
        Ok(())
    }
}
