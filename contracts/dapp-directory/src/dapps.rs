//! Dapp listing registry: submission, metadata updates, manager changes,
//! deletion. Review lives in `admin.rs`.

use crate::*;

#[near]
impl Contract {
    /// Submits the caller's account as a dapp listing. The `submit_dapp` fee
    /// is charged to the dapp account; status starts as `Submitted`.
    #[handle_result]
    pub fn submit_dapp(
        &mut self,
        manager: AccountId,
        category: Category,
        title: String,
        subtitle: String,
        description: String,
        website: String,
        dapp_version: String,
    ) -> Result<(), DirectoryError> {
        let dapp_account = env::predecessor_account_id();
        if self.dapps.contains_key(&dapp_account) {
            return Err(DirectoryError::DuplicateKey(format!(
                "This account already has a dapp: {}",
                dapp_account
            )));
        }

        self.internal_charge_fee(&dapp_account, FEE_SUBMIT_DAPP)?;

        self.dapps.insert(
            dapp_account.clone(),
            Dapp {
                manager: manager.clone(),
                category: category.clone(),
                status: DappStatus::Submitted,
                icon_small: String::new(),
                icon_large: String::new(),
                title,
                subtitle,
                description,
                website,
                version: dapp_version,
                slides: Vec::new(),
                platforms: Vec::new(),
                last_updated_ms: env::block_timestamp_ms(),
            },
        );

        DirectoryEvent::DappSubmitted {
            dapp_account,
            manager,
            category,
        }
        .emit();
        Ok(())
    }

    /// Updates listing text fields. `None` keeps the current value.
    #[handle_result]
    pub fn update_dapp_info(
        &mut self,
        dapp_account: AccountId,
        new_title: Option<String>,
        new_subtitle: Option<String>,
        new_description: Option<String>,
        new_website: Option<String>,
        new_version: Option<String>,
    ) -> Result<(), DirectoryError> {
        self.assert_manager(&dapp_account)?;
        let dapp = self
            .dapps
            .get_mut(&dapp_account)
            .ok_or_else(|| DirectoryError::dapp_not_found(&dapp_account))?;

        if let Some(title) = new_title {
            dapp.title = title;
        }
        if let Some(subtitle) = new_subtitle {
            dapp.subtitle = subtitle;
        }
        if let Some(description) = new_description {
            dapp.description = description;
        }
        if let Some(website) = new_website {
            dapp.website = website;
        }
        if let Some(version) = new_version {
            dapp.version = version;
        }
        dapp.last_updated_ms = env::block_timestamp_ms();

        DirectoryEvent::DappUpdated { dapp_account }.emit();
        Ok(())
    }

    #[handle_result]
    pub fn update_dapp_icons(
        &mut self,
        dapp_account: AccountId,
        icon_small: Option<String>,
        icon_large: Option<String>,
    ) -> Result<(), DirectoryError> {
        self.assert_manager(&dapp_account)?;
        let dapp = self
            .dapps
            .get_mut(&dapp_account)
            .ok_or_else(|| DirectoryError::dapp_not_found(&dapp_account))?;

        if let Some(small) = icon_small {
            dapp.icon_small = small;
        }
        if let Some(large) = icon_large {
            dapp.icon_large = large;
        }
        dapp.last_updated_ms = env::block_timestamp_ms();

        DirectoryEvent::DappUpdated { dapp_account }.emit();
        Ok(())
    }

    /// Replaces the promo slides wholesale; at most `MAX_SLIDES` entries.
    #[handle_result]
    pub fn update_dapp_slides(
        &mut self,
        dapp_account: AccountId,
        new_slides: Vec<String>,
    ) -> Result<(), DirectoryError> {
        self.assert_manager(&dapp_account)?;
        if new_slides.len() > MAX_SLIDES {
            return Err(DirectoryError::InvalidInput(format!(
                "Cannot have more than {} slides",
                MAX_SLIDES
            )));
        }

        let dapp = self
            .dapps
            .get_mut(&dapp_account)
            .ok_or_else(|| DirectoryError::dapp_not_found(&dapp_account))?;
        dapp.slides = new_slides;
        dapp.last_updated_ms = env::block_timestamp_ms();

        DirectoryEvent::DappUpdated { dapp_account }.emit();
        Ok(())
    }

    /// Replaces the platform download links wholesale. At least one entry;
    /// each platform at most once. Platform names themselves are a closed
    /// enum, so unknown names never reach this method.
    #[handle_result]
    pub fn set_dapp_platforms(
        &mut self,
        dapp_account: AccountId,
        new_platforms: Vec<PlatformLink>,
    ) -> Result<(), DirectoryError> {
        self.assert_manager(&dapp_account)?;
        if new_platforms.is_empty() {
            return Err(DirectoryError::InvalidInput(
                "Must submit at least 1 platform".to_string(),
            ));
        }
        for (i, link) in new_platforms.iter().enumerate() {
            if new_platforms[..i].iter().any(|p| p.platform == link.platform) {
                return Err(DirectoryError::InvalidInput(
                    "Duplicate platform".to_string(),
                ));
            }
        }

        let dapp = self
            .dapps
            .get_mut(&dapp_account)
            .ok_or_else(|| DirectoryError::dapp_not_found(&dapp_account))?;
        dapp.platforms = new_platforms;
        dapp.last_updated_ms = env::block_timestamp_ms();

        DirectoryEvent::DappUpdated { dapp_account }.emit();
        Ok(())
    }

    #[handle_result]
    pub fn change_dapp_manager(
        &mut self,
        dapp_account: AccountId,
        new_manager: AccountId,
    ) -> Result<(), DirectoryError> {
        let old_manager = self.assert_manager(&dapp_account)?;

        let dapp = self
            .dapps
            .get_mut(&dapp_account)
            .ok_or_else(|| DirectoryError::dapp_not_found(&dapp_account))?;
        dapp.manager = new_manager.clone();
        dapp.last_updated_ms = env::block_timestamp_ms();

        DirectoryEvent::DappManagerChanged {
            dapp_account,
            old_manager,
            new_manager,
        }
        .emit();
        Ok(())
    }

    /// Deletes a listing. A rejected dapp can only be removed by the admin;
    /// otherwise the manager removes it.
    #[handle_result]
    pub fn delete_dapp(&mut self, dapp_account: AccountId) -> Result<(), DirectoryError> {
        let dapp = self.internal_dapp(&dapp_account)?;
        let caller = env::predecessor_account_id();
        let authorized = if dapp.status == DappStatus::Rejected {
            caller == self.admin
        } else {
            caller == dapp.manager
        };
        if !authorized {
            return Err(DirectoryError::only(
                "the directory admin (rejected dapps) or the dapp manager",
            ));
        }

        self.dapps.remove(&dapp_account);

        DirectoryEvent::DappDeleted { dapp_account }.emit();
        Ok(())
    }

    pub fn get_dapp(&self, dapp_account: AccountId) -> Option<Dapp> {
        self.dapps.get(&dapp_account).cloned()
    }
}
