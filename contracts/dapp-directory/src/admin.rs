//! Admin configuration: admin handover, version string, dapp review, and
//! featured-list slots.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn set_admin(&mut self, new_admin: AccountId) -> Result<(), DirectoryError> {
        self.assert_admin()?;
        let old_admin = std::mem::replace(&mut self.admin, new_admin.clone());

        DirectoryEvent::AdminChanged {
            old_admin,
            new_admin,
        }
        .emit();
        Ok(())
    }

    #[handle_result]
    pub fn set_version(&mut self, new_version: String) -> Result<(), DirectoryError> {
        self.assert_admin()?;
        self.version = new_version.clone();

        DirectoryEvent::VersionSet {
            version: new_version,
        }
        .emit();
        Ok(())
    }

    /// Approves or rejects a submitted dapp. Admin only.
    #[handle_result]
    pub fn review_dapp(
        &mut self,
        dapp_account: AccountId,
        approve: bool,
    ) -> Result<(), DirectoryError> {
        self.assert_admin()?;
        let dapp = self
            .dapps
            .get_mut(&dapp_account)
            .ok_or_else(|| DirectoryError::dapp_not_found(&dapp_account))?;

        dapp.status = if approve {
            DappStatus::Approved
        } else {
            DappStatus::Rejected
        };
        dapp.last_updated_ms = env::block_timestamp_ms();

        DirectoryEvent::DappReviewed {
            dapp_account,
            approved: approve,
        }
        .emit();
        Ok(())
    }

    /// Puts a registered dapp into a featured slot, replacing any previous
    /// occupant. Admin only.
    #[handle_result]
    pub fn add_featured(
        &mut self,
        slot: u16,
        dapp_account: AccountId,
        featured_until_ms: u64,
    ) -> Result<(), DirectoryError> {
        self.assert_admin()?;
        self.internal_dapp(&dapp_account)?;

        self.featured.insert(
            slot,
            FeaturedSlot {
                dapp_account: dapp_account.clone(),
                featured_until_ms,
            },
        );

        DirectoryEvent::FeaturedSet {
            slot,
            dapp_account,
            featured_until_ms,
        }
        .emit();
        Ok(())
    }

    #[handle_result]
    pub fn remove_featured(&mut self, slot: u16) -> Result<(), DirectoryError> {
        self.assert_admin()?;
        self.featured
            .remove(&slot)
            .ok_or_else(|| DirectoryError::NotFound(format!("Featured slot not found: {}", slot)))?;

        DirectoryEvent::FeaturedRemoved { slot }.emit();
        Ok(())
    }

    pub fn get_featured(&self, slot: u16) -> Option<FeaturedSlot> {
        self.featured.get(&slot).cloned()
    }

    pub fn get_featured_slots(&self) -> Vec<(u16, FeaturedSlot)> {
        self.featured.iter().map(|(k, v)| (*k, v.clone())).collect()
    }
}
