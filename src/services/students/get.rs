use super::StudentService;
use crate::errors::{EDeptError, Result};
use crate::models::students::entities::Student;

pub async fn get_student(service: &StudentService, id: i64) -> Result<Student> {
    service
        .storage
        .get_student_by_id(id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Student", id))
}

pub async fn get_student_by_email(service: &StudentService, email: &str) -> Result<Student> {
    service
        .storage
        .get_student_by_email(email)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Student", email))
}
