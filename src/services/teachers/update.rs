use tracing::info;

use super::TeacherService;
use crate::errors::{EDeptError, Result};
use crate::models::{
    teachers::entities::Teacher,
    users::{entities::UserRole, requests::UpdateAccountRequest},
};
use crate::services::{
    identity::{ensure_email_available, validate_account_overlay},
    transaction::finish,
};
use crate::storage::Storage;

pub async fn update_teacher(
    service: &TeacherService,
    id: i64,
    req: UpdateAccountRequest,
) -> Result<Teacher> {
    validate_account_overlay(
        req.first_name.as_deref(),
        req.last_name.as_deref(),
        req.email.as_deref(),
    )?;

    let tx = service.storage.begin().await?;
    let result = checked_update(tx.storage(), id, req).await;
    let teacher = finish(tx, result).await?;

    info!("Teacher {} updated", id);
    Ok(teacher)
}

async fn checked_update(
    storage: &dyn Storage,
    id: i64,
    req: UpdateAccountRequest,
) -> Result<Teacher> {
    if storage.get_teacher_by_id(id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Teacher", id));
    }
    if let Some(email) = &req.email {
        ensure_email_available(storage, UserRole::Teacher, email, Some(id)).await?;
    }

    storage
        .update_teacher(id, req)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Teacher", id))
}
