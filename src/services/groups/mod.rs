pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::groups::{
    entities::{Group, GroupDetail},
    requests::{CreateGroupRequest, GroupFilter, UpdateGroupRequest},
};
use crate::storage::Storage;

pub struct GroupService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl GroupService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 按条件获取班组列表
    pub async fn list_groups(&self, filter: GroupFilter) -> Result<Vec<Group>> {
        list::list_groups(self, filter).await
    }

    // 获取班组详情（含学生与课程）
    pub async fn get_group(&self, id: i64) -> Result<GroupDetail> {
        get::get_group(self, id).await
    }

    pub async fn create_group(&self, req: CreateGroupRequest) -> Result<Group> {
        create::create_group(self, req).await
    }

    pub async fn update_group(&self, id: i64, req: UpdateGroupRequest) -> Result<Group> {
        update::update_group(self, id, req).await
    }

    pub async fn delete_group(&self, id: i64) -> Result<()> {
        delete::delete_group(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EDeptError;
    use crate::models::departments::requests::CreateDepartmentRequest;
    use crate::models::students::requests::UpdateStudentRequest;
    use crate::services::test_support::{World, memory_storage};

    fn create(name: &str, department_id: i64) -> CreateGroupRequest {
        CreateGroupRequest {
            name: name.to_string(),
            department_id,
        }
    }

    #[tokio::test]
    async fn test_group_name_unique_within_department() {
        let storage = memory_storage().await;
        let cs = storage
            .create_department(CreateDepartmentRequest {
                name: "CS".to_string(),
            })
            .await
            .unwrap();
        let math = storage
            .create_department(CreateDepartmentRequest {
                name: "Math".to_string(),
            })
            .await
            .unwrap();
        let service = GroupService::new(storage);

        service.create_group(create("G1", cs.id)).await.unwrap();
        let err = service.create_group(create("G1", cs.id)).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        // 不同院系可以同名
        service.create_group(create("G1", math.id)).await.unwrap();
        assert_eq!(
            service.list_groups(GroupFilter::default()).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_create_group_requires_department_and_name() {
        let service = GroupService::new(memory_storage().await);

        let err = service.create_group(create("G1", 99)).await.unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));

        let err = service.create_group(create(" ", 99)).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_group_collision_excludes_self() {
        let world = World::seed().await;
        let service = GroupService::new(world.storage.clone());
        let other = world.add_group("G2").await;

        // 保持原名更新不算冲突
        let same = service
            .update_group(
                world.group.id,
                UpdateGroupRequest {
                    name: "G1".to_string(),
                    department_id: world.department.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(same.name, "G1");

        let err = service
            .update_group(
                other.id,
                UpdateGroupRequest {
                    name: "G1".to_string(),
                    department_id: world.department.id,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        let err = service
            .update_group(
                other.id,
                UpdateGroupRequest {
                    name: "G3".to_string(),
                    department_id: 999,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_group_guarded_by_students() {
        let storage = memory_storage().await;
        let department = storage
            .create_department(CreateDepartmentRequest {
                name: "CS".to_string(),
            })
            .await
            .unwrap();
        let service = GroupService::new(storage.clone());
        let group = service.create_group(create("G1", department.id)).await.unwrap();
        let spare = service.create_group(create("G2", department.id)).await.unwrap();

        let student = storage
            .create_student(crate::models::students::requests::CreateStudentRequest {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                email: "a@x.com".to_string(),
                password: "hash".to_string(),
                group_id: group.id,
            })
            .await
            .unwrap();

        let err = service.delete_group(group.id).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        // 学生转到其他班组后可以删除
        storage
            .update_student(
                student.id,
                UpdateStudentRequest {
                    group_id: Some(spare.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        service.delete_group(group.id).await.unwrap();
        assert!(matches!(
            service.get_group(group.id).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));

        // 再次删除为空操作
        service.delete_group(group.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_group_guarded_by_subjects() {
        let world = World::seed().await;
        let service = GroupService::new(world.storage.clone());
        world.storage.delete_student(world.student.id).await.unwrap();

        let err = service.delete_group(world.group.id).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_groups_search_is_case_insensitive() {
        let world = World::seed().await;
        world.add_group("Evening-A").await;
        let service = GroupService::new(world.storage.clone());

        let found = service
            .list_groups(GroupFilter {
                search_term: Some("evening".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Evening-A");
        assert_eq!(found[0].department_name, "CS");
    }
}
