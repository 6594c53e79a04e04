use tracing::{info, warn};

use super::GroupService;
use crate::errors::{EDeptError, Result};
use crate::models::groups::{entities::Group, requests::UpdateGroupRequest};
use crate::services::transaction::finish;
use crate::storage::Storage;
use crate::utils::validate::validate_required;

pub async fn update_group(
    service: &GroupService,
    id: i64,
    req: UpdateGroupRequest,
) -> Result<Group> {
    validate_required("Name", &req.name)?;

    let tx = service.storage.begin().await?;
    let result = checked_update(tx.storage(), id, req).await;
    let group = finish(tx, result).await?;

    info!("Group {} updated", id);
    Ok(group)
}

async fn checked_update(storage: &dyn Storage, id: i64, req: UpdateGroupRequest) -> Result<Group> {
    if storage.get_group_by_id(id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Group", id));
    }
    if storage
        .get_department_by_id(req.department_id)
        .await?
        .is_none()
    {
        return Err(EDeptError::entity_not_found("Department", req.department_id));
    }

    // 与其他班组重名才算冲突
    let existing = storage
        .get_group_by_name(req.department_id, &req.name)
        .await?;
    if let Some(existing) = existing.filter(|g| g.id != id) {
        warn!(
            "Group name {} already used by group {} in department {}",
            req.name, existing.id, req.department_id
        );
        return Err(EDeptError::validation(
            "A group with this name already exists in the department",
        ));
    }

    storage
        .update_group(id, req)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Group", id))
}
