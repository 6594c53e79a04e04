use tracing::{info, warn};

use super::DepartmentService;
use crate::errors::{EDeptError, Result};
use crate::models::{groups::requests::GroupFilter, subjects::requests::SubjectFilter};
use crate::services::transaction::finish;
use crate::storage::Storage;

pub async fn delete_department(service: &DepartmentService, id: i64) -> Result<()> {
    let tx = service.storage.begin().await?;
    let result = guarded_delete(tx.storage(), id).await;
    finish(tx, result).await
}

async fn guarded_delete(storage: &dyn Storage, id: i64) -> Result<()> {
    // 不存在时视为已删除
    if storage.get_department_by_id(id).await?.is_none() {
        return Ok(());
    }

    let groups = storage.list_groups(GroupFilter::by_department(id)).await?;
    let subjects = storage
        .list_subjects(SubjectFilter::by_department(id))
        .await?;
    if !groups.is_empty() || !subjects.is_empty() {
        warn!(
            "Refusing to delete department {}: {} groups, {} subjects",
            id,
            groups.len(),
            subjects.len()
        );
        return Err(EDeptError::validation(
            "Cannot delete department with existing groups or subjects",
        ));
    }

    storage.delete_department(id).await?;
    info!("Department {} deleted", id);
    Ok(())
}
