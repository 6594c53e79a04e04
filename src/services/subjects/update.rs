use tracing::info;

use super::SubjectService;
use crate::errors::{EDeptError, Result};
use crate::models::subjects::{entities::Subject, requests::UpdateSubjectRequest};
use crate::services::transaction::finish;
use crate::storage::Storage;
use crate::utils::validate::validate_required;

pub async fn update_subject(
    service: &SubjectService,
    id: i64,
    req: UpdateSubjectRequest,
) -> Result<Subject> {
    validate_required("Name", &req.name)?;

    let tx = service.storage.begin().await?;
    let result = checked_update(tx.storage(), id, req).await;
    let subject = finish(tx, result).await?;

    info!("Subject {} updated", id);
    Ok(subject)
}

async fn checked_update(
    storage: &dyn Storage,
    id: i64,
    req: UpdateSubjectRequest,
) -> Result<Subject> {
    if storage.get_subject_by_id(id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Subject", id));
    }
    super::ensure_references(storage, req.teacher_id, req.department_id, req.group_id).await?;

    storage
        .update_subject(id, req)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Subject", id))
}
