use tracing::info;

use super::TeacherService;
use crate::errors::Result;
use crate::models::{
    teachers::entities::Teacher,
    users::{entities::UserRole, requests::CreateAccountRequest},
};
use crate::services::{
    identity::{ensure_email_available, validate_new_account},
    transaction::finish,
};
use crate::storage::Storage;
use crate::utils::password::hash_password;

pub async fn create_teacher(service: &TeacherService, req: CreateAccountRequest) -> Result<Teacher> {
    validate_new_account(&req)?;

    let tx = service.storage.begin().await?;
    let result = checked_create(tx.storage(), req).await;
    let teacher = finish(tx, result).await?;

    info!("Teacher {} created", teacher.id);
    Ok(teacher)
}

async fn checked_create(storage: &dyn Storage, mut req: CreateAccountRequest) -> Result<Teacher> {
    ensure_email_available(storage, UserRole::Teacher, &req.email, None).await?;
    req.password = hash_password(&req.password)?;
    storage.create_teacher(req).await
}
