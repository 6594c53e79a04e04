use super::DepartmentService;
use crate::errors::{EDeptError, Result};
use crate::models::{
    departments::entities::{Department, DepartmentDetail},
    groups::requests::GroupFilter,
    subjects::requests::SubjectFilter,
};

pub async fn get_department(service: &DepartmentService, id: i64) -> Result<DepartmentDetail> {
    let department = service
        .storage
        .get_department_by_id(id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Department", id))?;

    let groups = service
        .storage
        .list_groups(GroupFilter::by_department(id))
        .await?;
    let subjects = service
        .storage
        .list_subjects(SubjectFilter::by_department(id))
        .await?;

    Ok(DepartmentDetail {
        department,
        groups,
        subjects,
    })
}

pub async fn get_department_by_name(service: &DepartmentService, name: &str) -> Result<Department> {
    service
        .storage
        .get_department_by_name(name)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Department", name))
}
