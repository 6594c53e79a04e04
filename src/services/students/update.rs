use tracing::info;

use super::StudentService;
use crate::errors::{EDeptError, Result};
use crate::models::{
    students::{entities::Student, requests::UpdateStudentRequest},
    users::entities::UserRole,
};
use crate::services::{
    identity::{ensure_email_available, validate_account_overlay},
    transaction::finish,
};
use crate::storage::Storage;

pub async fn update_student(
    service: &StudentService,
    id: i64,
    req: UpdateStudentRequest,
) -> Result<Student> {
    validate_account_overlay(
        req.first_name.as_deref(),
        req.last_name.as_deref(),
        req.email.as_deref(),
    )?;

    let tx = service.storage.begin().await?;
    let result = checked_update(tx.storage(), id, req).await;
    let student = finish(tx, result).await?;

    info!("Student {} updated", id);
    Ok(student)
}

async fn checked_update(
    storage: &dyn Storage,
    id: i64,
    req: UpdateStudentRequest,
) -> Result<Student> {
    if storage.get_student_by_id(id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Student", id));
    }
    if let Some(email) = &req.email {
        ensure_email_available(storage, UserRole::Student, email, Some(id)).await?;
    }
    if let Some(group_id) = req.group_id {
        if storage.get_group_by_id(group_id).await?.is_none() {
            return Err(EDeptError::entity_not_found("Group", group_id));
        }
    }

    storage
        .update_student(id, req)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Student", id))
}
