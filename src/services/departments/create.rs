use tracing::info;

use super::DepartmentService;
use crate::errors::Result;
use crate::models::departments::{entities::Department, requests::CreateDepartmentRequest};
use crate::services::transaction::finish;
use crate::utils::validate::validate_required;

pub async fn create_department(
    service: &DepartmentService,
    req: CreateDepartmentRequest,
) -> Result<Department> {
    validate_required("Name", &req.name)?;

    let tx = service.storage.begin().await?;
    let result = tx.storage().create_department(req).await;
    let department = finish(tx, result).await?;

    info!("Department {} created with id {}", department.name, department.id);
    Ok(department)
}
