use super::GroupService;
use crate::errors::Result;
use crate::models::groups::{entities::Group, requests::GroupFilter};

pub async fn list_groups(service: &GroupService, filter: GroupFilter) -> Result<Vec<Group>> {
    service.storage.list_groups(filter).await
}
