//! Call guards shared across modules.

use crate::errors::DirectoryError;
use near_sdk::env;

/// Requires exactly 1 yoctoNEAR attached (full-access-key guard for
/// funds-moving methods).
pub(crate) fn check_one_yocto() -> Result<(), DirectoryError> {
    if env::attached_deposit().as_yoctonear() != 1 {
        return Err(DirectoryError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".to_string(),
        ));
    }
    Ok(())
}
