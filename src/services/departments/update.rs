use tracing::info;

use super::DepartmentService;
use crate::errors::{EDeptError, Result};
use crate::models::departments::{entities::Department, requests::UpdateDepartmentRequest};
use crate::services::transaction::finish;
use crate::storage::Storage;
use crate::utils::validate::validate_required;

pub async fn update_department(
    service: &DepartmentService,
    id: i64,
    req: UpdateDepartmentRequest,
) -> Result<Department> {
    validate_required("Name", &req.name)?;

    let tx = service.storage.begin().await?;
    let result = apply_update(tx.storage(), id, req).await;
    let department = finish(tx, result).await?;

    info!("Department {} updated", id);
    Ok(department)
}

async fn apply_update(
    storage: &dyn Storage,
    id: i64,
    req: UpdateDepartmentRequest,
) -> Result<Department> {
    storage
        .update_department(id, req)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Department", id))
}
