use tracing::info;

use super::SubjectService;
use crate::errors::Result;
use crate::models::subjects::{entities::Subject, requests::CreateSubjectRequest};
use crate::services::transaction::finish;
use crate::storage::Storage;
use crate::utils::validate::validate_required;

pub async fn create_subject(service: &SubjectService, req: CreateSubjectRequest) -> Result<Subject> {
    validate_required("Name", &req.name)?;

    let tx = service.storage.begin().await?;
    let result = checked_create(tx.storage(), req).await;
    let subject = finish(tx, result).await?;

    info!(
        "Subject {} created for group {} taught by {}",
        subject.name, subject.group_id, subject.teacher_id
    );
    Ok(subject)
}

async fn checked_create(storage: &dyn Storage, req: CreateSubjectRequest) -> Result<Subject> {
    super::ensure_references(storage, req.teacher_id, req.department_id, req.group_id).await?;
    storage.create_subject(req).await
}
