use tracing::info;

use super::StudentService;
use crate::errors::{EDeptError, Result};
use crate::models::{
    students::{entities::Student, requests::CreateStudentRequest},
    users::{entities::UserRole, requests::CreateAccountRequest},
};
use crate::services::{
    identity::{ensure_email_available, validate_new_account},
    transaction::finish,
};
use crate::storage::Storage;
use crate::utils::password::hash_password;

pub async fn create_student(service: &StudentService, req: CreateStudentRequest) -> Result<Student> {
    validate_new_account(&CreateAccountRequest {
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    })?;

    let tx = service.storage.begin().await?;
    let result = checked_create(tx.storage(), req).await;
    let student = finish(tx, result).await?;

    info!("Student {} created in group {}", student.id, student.group_id);
    Ok(student)
}

async fn checked_create(storage: &dyn Storage, mut req: CreateStudentRequest) -> Result<Student> {
    ensure_email_available(storage, UserRole::Student, &req.email, None).await?;

    if storage.get_group_by_id(req.group_id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Group", req.group_id));
    }

    req.password = hash_password(&req.password)?;
    storage.create_student(req).await
}
