use super::DepartmentService;
use crate::errors::Result;
use crate::models::{
    departments::entities::Department,
    groups::{entities::Group, requests::GroupFilter},
    subjects::{entities::Subject, requests::SubjectFilter},
    teachers::entities::Teacher,
};

pub async fn list_departments(service: &DepartmentService) -> Result<Vec<Department>> {
    service.storage.list_departments().await
}

pub async fn list_subjects_of(service: &DepartmentService, id: i64) -> Result<Vec<Subject>> {
    service
        .storage
        .list_subjects(SubjectFilter::by_department(id))
        .await
}

pub async fn list_teachers_of(service: &DepartmentService, id: i64) -> Result<Vec<Teacher>> {
    service.storage.list_teachers_by_department(id).await
}

pub async fn list_groups_of(service: &DepartmentService, id: i64) -> Result<Vec<Group>> {
    service
        .storage
        .list_groups(GroupFilter::by_department(id))
        .await
}
