use tracing::{info, warn};

use super::GroupService;
use crate::errors::{EDeptError, Result};
use crate::models::groups::{entities::Group, requests::CreateGroupRequest};
use crate::services::transaction::finish;
use crate::storage::Storage;
use crate::utils::validate::validate_required;

pub async fn create_group(service: &GroupService, req: CreateGroupRequest) -> Result<Group> {
    validate_required("Name", &req.name)?;

    let tx = service.storage.begin().await?;
    let result = checked_create(tx.storage(), req).await;
    let group = finish(tx, result).await?;

    info!(
        "Group {} created in department {}",
        group.name, group.department_id
    );
    Ok(group)
}

async fn checked_create(storage: &dyn Storage, req: CreateGroupRequest) -> Result<Group> {
    if storage
        .get_department_by_id(req.department_id)
        .await?
        .is_none()
    {
        return Err(EDeptError::entity_not_found("Department", req.department_id));
    }

    if storage
        .get_group_by_name(req.department_id, &req.name)
        .await?
        .is_some()
    {
        warn!(
            "Group name {} already used in department {}",
            req.name, req.department_id
        );
        return Err(EDeptError::validation(
            "A group with this name already exists in the department",
        ));
    }

    storage.create_group(req).await
}
