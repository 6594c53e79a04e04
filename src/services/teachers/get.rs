use super::TeacherService;
use crate::errors::{EDeptError, Result};
use crate::models::teachers::entities::Teacher;

pub async fn get_teacher(service: &TeacherService, id: i64) -> Result<Teacher> {
    service
        .storage
        .get_teacher_by_id(id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Teacher", id))
}

pub async fn get_teacher_by_email(service: &TeacherService, email: &str) -> Result<Teacher> {
    service
        .storage
        .get_teacher_by_email(email)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Teacher", email))
}
