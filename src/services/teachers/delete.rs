use tracing::{info, warn};

use super::TeacherService;
use crate::errors::{EDeptError, Result};
use crate::models::subjects::requests::SubjectFilter;
use crate::services::transaction::finish;
use crate::storage::Storage;

pub async fn delete_teacher(service: &TeacherService, id: i64) -> Result<()> {
    let tx = service.storage.begin().await?;
    let result = guarded_delete(tx.storage(), id).await;
    finish(tx, result).await
}

async fn guarded_delete(storage: &dyn Storage, id: i64) -> Result<()> {
    if storage.get_teacher_by_id(id).await?.is_none() {
        return Ok(());
    }

    let subjects = storage.list_subjects(SubjectFilter::by_teacher(id)).await?;
    if !subjects.is_empty() {
        warn!(
            "Refusing to delete teacher {}: instructor of {} subjects",
            id,
            subjects.len()
        );
        return Err(EDeptError::validation(
            "Cannot delete teacher who is the instructor of existing subjects",
        ));
    }

    storage.delete_teacher(id).await?;
    info!("Teacher {} deleted", id);
    Ok(())
}
