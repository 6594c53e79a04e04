use super::SubjectService;
use crate::errors::{EDeptError, Result};
use crate::models::subjects::entities::Subject;

pub async fn get_subject(service: &SubjectService, id: i64) -> Result<Subject> {
    service
        .storage
        .get_subject_by_id(id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Subject", id))
}
