//! Per-dapp catalog of purchasable items.

use crate::*;

#[near]
impl Contract {
    /// Registers a new item under a dapp. The `register_item` fee is charged
    /// to the manager before the item is persisted; if the charge fails the
    /// registration is rejected entirely.
    #[handle_result]
    pub fn register_item(
        &mut self,
        dapp_account: AccountId,
        item_id: String,
        title: String,
        subtitle: String,
        price: TokenAmount,
        stock: u32,
    ) -> Result<(), DirectoryError> {
        let manager = self.assert_manager(&dapp_account)?;

        if self
            .items
            .contains_key(&(dapp_account.clone(), item_id.clone()))
        {
            return Err(DirectoryError::DuplicateKey(format!(
                "Item already registered: {}",
                item_id
            )));
        }
        let price_amount = self.assert_currency(&price)?;
        if price_amount == 0 {
            return Err(DirectoryError::InvalidAmount(
                "Price must be greater than 0".to_string(),
            ));
        }
        if stock == 0 {
            return Err(DirectoryError::InvalidInput(
                "Stock must be greater than 0".to_string(),
            ));
        }

        self.internal_charge_fee(&manager, FEE_REGISTER_ITEM)?;

        self.items.insert(
            (dapp_account.clone(), item_id.clone()),
            CatalogItem {
                title,
                subtitle,
                price: price.clone(),
                stock,
            },
        );

        DirectoryEvent::ItemRegistered {
            dapp_account,
            item_id,
            price: price.amount,
            stock,
        }
        .emit();
        Ok(())
    }

    /// Overwrites an item's stock with any value, including lower ones and 0.
    #[handle_result]
    pub fn restock(
        &mut self,
        dapp_account: AccountId,
        item_id: String,
        new_stock: u32,
    ) -> Result<(), DirectoryError> {
        self.assert_manager(&dapp_account)?;

        let key = (dapp_account.clone(), item_id.clone());
        let mut item = self
            .items
            .remove(&key)
            .ok_or_else(|| DirectoryError::item_not_found(&item_id))?;
        item.stock = new_stock;
        self.items.insert(key, item);

        DirectoryEvent::ItemRestocked {
            dapp_account,
            item_id,
            new_stock,
        }
        .emit();
        Ok(())
    }

    #[handle_result]
    pub fn remove_item(
        &mut self,
        dapp_account: AccountId,
        item_id: String,
    ) -> Result<(), DirectoryError> {
        self.assert_manager(&dapp_account)?;

        self.items
            .remove(&(dapp_account.clone(), item_id.clone()))
            .ok_or_else(|| DirectoryError::item_not_found(&item_id))?;

        DirectoryEvent::ItemRemoved {
            dapp_account,
            item_id,
        }
        .emit();
        Ok(())
    }

    pub fn get_item(&self, dapp_account: AccountId, item_id: String) -> Option<CatalogItem> {
        self.items.get(&(dapp_account, item_id)).cloned()
    }
}

// --- Internal helpers ---

impl Contract {
    /// Subtracts 1 from the item's stock; stock never goes below 0. Returns
    /// the remaining stock. Used only by the purchase flow.
    pub(crate) fn internal_decrement_stock(
        &mut self,
        dapp_account: &AccountId,
        item_id: &str,
    ) -> Result<u32, DirectoryError> {
        let key = (dapp_account.clone(), item_id.to_string());
        let mut item = self
            .items
            .remove(&key)
            .ok_or_else(|| DirectoryError::item_not_found(item_id))?;
        if item.stock == 0 {
            self.items.insert(key, item);
            return Err(DirectoryError::OutOfStock(format!(
                "Item is out of stock: {}",
                item_id
            )));
        }

        item.stock -= 1;
        let remaining = item.stock;
        self.items.insert(key, item);
        Ok(remaining)
    }
}
