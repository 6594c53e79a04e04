pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    departments::{
        entities::{Department, DepartmentDetail},
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
    },
    groups::entities::Group,
    subjects::entities::Subject,
    teachers::entities::Teacher,
};
use crate::storage::Storage;

pub struct DepartmentService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl DepartmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 获取院系列表
    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        list::list_departments(self).await
    }

    // 获取院系详情（含班组与课程）
    pub async fn get_department(&self, id: i64) -> Result<DepartmentDetail> {
        get::get_department(self, id).await
    }

    // 按名称获取院系
    pub async fn get_department_by_name(&self, name: &str) -> Result<Department> {
        get::get_department_by_name(self, name).await
    }

    pub async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department> {
        create::create_department(self, req).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        req: UpdateDepartmentRequest,
    ) -> Result<Department> {
        update::update_department(self, id, req).await
    }

    pub async fn delete_department(&self, id: i64) -> Result<()> {
        delete::delete_department(self, id).await
    }

    // 院系下的课程
    pub async fn list_subjects_of(&self, id: i64) -> Result<Vec<Subject>> {
        list::list_subjects_of(self, id).await
    }

    // 在院系任课的教师
    pub async fn list_teachers_of(&self, id: i64) -> Result<Vec<Teacher>> {
        list::list_teachers_of(self, id).await
    }

    // 院系下的班组
    pub async fn list_groups_of(&self, id: i64) -> Result<Vec<Group>> {
        list::list_groups_of(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EDeptError;
    use crate::models::groups::requests::CreateGroupRequest;
    use crate::services::test_support::{World, memory_storage};

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = DepartmentService::new(memory_storage().await);

        let err = service
            .create_department(CreateDepartmentRequest {
                name: "   ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));
        assert!(service.list_departments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_department_is_not_found() {
        let service = DepartmentService::new(memory_storage().await);

        let err = service
            .update_department(
                42,
                UpdateDepartmentRequest {
                    name: "Physics".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_department_is_noop() {
        let service = DepartmentService::new(memory_storage().await);
        service.delete_department(42).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_department_with_groups_is_rejected() {
        let storage = memory_storage().await;
        let service = DepartmentService::new(storage.clone());
        let department = service
            .create_department(CreateDepartmentRequest {
                name: "CS".to_string(),
            })
            .await
            .unwrap();
        storage
            .create_group(CreateGroupRequest {
                name: "G1".to_string(),
                department_id: department.id,
            })
            .await
            .unwrap();

        let err = service.delete_department(department.id).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));
        assert!(service.get_department(department.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_detail_and_derived_listings() {
        let world = World::seed().await;
        let service = DepartmentService::new(world.storage.clone());

        let detail = service.get_department(world.department.id).await.unwrap();
        assert_eq!(detail.department.name, "CS");
        assert_eq!(detail.groups.len(), 1);
        assert_eq!(detail.subjects.len(), 1);

        let teachers = service.list_teachers_of(world.department.id).await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].id, world.teacher.id);

        let by_name = service.get_department_by_name("CS").await.unwrap();
        assert_eq!(by_name.id, world.department.id);
    }
}
