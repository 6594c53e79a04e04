use super::GroupService;
use crate::errors::{EDeptError, Result};
use crate::models::{
    groups::entities::GroupDetail, students::requests::StudentFilter,
    subjects::requests::SubjectFilter,
};
use crate::storage::Storage;

pub async fn get_group(service: &GroupService, id: i64) -> Result<GroupDetail> {
    load_detail(service.storage.as_ref(), id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Group", id))
}

/// 加载班组及其学生、课程
pub(super) async fn load_detail(storage: &dyn Storage, id: i64) -> Result<Option<GroupDetail>> {
    let Some(group) = storage.get_group_by_id(id).await? else {
        return Ok(None);
    };

    let students = storage.list_students(StudentFilter::by_group(id)).await?;
    let subjects = storage.list_subjects(SubjectFilter::by_group(id)).await?;

    Ok(Some(GroupDetail {
        group,
        students,
        subjects,
    }))
}
