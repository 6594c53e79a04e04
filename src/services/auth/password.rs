use tracing::{info, warn};

use super::AuthService;
use crate::errors::{EDeptError, Result};
use crate::models::{auth::ChangePasswordRequest, users::entities::UserRole};
use crate::services::{identity::find_by_id, transaction::finish};
use crate::storage::Storage;
use crate::utils::{
    password::{hash_password, verify_password},
    validate::validate_password_simple,
};

pub async fn change_password(
    service: &AuthService,
    role: UserRole,
    id: i64,
    req: ChangePasswordRequest,
) -> Result<()> {
    let tx = service.storage.begin().await?;
    let result = rehash(tx.storage(), role, id, &req).await;
    finish(tx, result).await?;

    info!("{} {} changed password", role, id);
    Ok(())
}

async fn rehash(
    storage: &dyn Storage,
    role: UserRole,
    id: i64,
    req: &ChangePasswordRequest,
) -> Result<()> {
    let identity = find_by_id(storage, role, id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found(role.as_str(), id))?;

    if !verify_password(&req.old_password, identity.password_hash()) {
        warn!("Old password mismatch for {} {}", role, id);
        return Err(EDeptError::authentication("Old password is incorrect"));
    }

    validate_password_simple(&req.new_password)?;

    let hash = hash_password(&req.new_password)?;
    storage.update_password_hash(role, id, &hash).await?;
    Ok(())
}
