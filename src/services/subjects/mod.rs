pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::{EDeptError, Result};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, SubjectFilter, UpdateSubjectRequest},
};
use crate::storage::Storage;

pub struct SubjectService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl SubjectService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list_subjects(&self, filter: SubjectFilter) -> Result<Vec<Subject>> {
        list::list_subjects(self, filter).await
    }

    pub async fn get_subject(&self, id: i64) -> Result<Subject> {
        get::get_subject(self, id).await
    }

    pub async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        create::create_subject(self, req).await
    }

    pub async fn update_subject(&self, id: i64, req: UpdateSubjectRequest) -> Result<Subject> {
        update::update_subject(self, id, req).await
    }

    pub async fn delete_subject(&self, id: i64) -> Result<()> {
        delete::delete_subject(self, id).await
    }
}

/// 任课教师、院系与班组都必须存在
async fn ensure_references(
    storage: &dyn Storage,
    teacher_id: i64,
    department_id: i64,
    group_id: i64,
) -> Result<()> {
    if storage.get_teacher_by_id(teacher_id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Teacher", teacher_id));
    }
    if storage.get_department_by_id(department_id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Department", department_id));
    }
    if storage.get_group_by_id(group_id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Group", group_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::World;

    fn subject(world: &World, name: &str) -> CreateSubjectRequest {
        CreateSubjectRequest {
            name: name.to_string(),
            department_id: world.department.id,
            teacher_id: world.teacher.id,
            group_id: world.group.id,
        }
    }

    #[tokio::test]
    async fn test_create_subject_projects_names() {
        let world = World::seed().await;
        let service = SubjectService::new(world.storage.clone());

        let created = service
            .create_subject(subject(&world, "Databases"))
            .await
            .unwrap();
        assert_eq!(created.department_name, "CS");
        assert_eq!(created.teacher_name, "Bob Jones");
        assert_eq!(created.group_name, "G1");
    }

    #[tokio::test]
    async fn test_create_subject_requires_references() {
        let world = World::seed().await;
        let service = SubjectService::new(world.storage.clone());

        let mut req = subject(&world, " ");
        assert!(matches!(
            service.create_subject(req.clone()).await.unwrap_err(),
            EDeptError::Validation(_)
        ));

        req.name = "Databases".to_string();
        req.teacher_id = 999;
        assert!(matches!(
            service.create_subject(req.clone()).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));

        let mut req = subject(&world, "Databases");
        req.department_id = 999;
        assert!(matches!(
            service.create_subject(req).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));

        let mut req = subject(&world, "Databases");
        req.group_id = 999;
        assert!(matches!(
            service.create_subject(req).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));

        assert_eq!(
            service
                .list_subjects(SubjectFilter::default())
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_update_subject_reassigns_teacher() {
        let world = World::seed().await;
        let eve = world.add_teacher("Eve", "e@x.com").await;
        let service = SubjectService::new(world.storage.clone());

        let updated = service
            .update_subject(
                world.subject.id,
                UpdateSubjectRequest {
                    name: "Advanced Algorithms".to_string(),
                    department_id: world.department.id,
                    teacher_id: eve.id,
                    group_id: world.group.id,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.teacher_id, eve.id);
        assert_eq!(updated.teacher_name, "Eve Teacher");

        let err = service
            .update_subject(
                999,
                UpdateSubjectRequest {
                    name: "X".to_string(),
                    department_id: world.department.id,
                    teacher_id: eve.id,
                    group_id: world.group.id,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_subject_is_idempotent_and_drops_enrollments() {
        let world = World::seed().await;
        world
            .storage
            .create_student_subject(world.student.id, world.subject.id, Some(5))
            .await
            .unwrap();
        let service = SubjectService::new(world.storage.clone());

        service.delete_subject(world.subject.id).await.unwrap();
        service.delete_subject(world.subject.id).await.unwrap();
        assert!(
            world
                .storage
                .get_student_subject(world.student.id, world.subject.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_list_subjects_filters() {
        let world = World::seed().await;
        let eve = world.add_teacher("Eve", "e@x.com").await;
        let service = SubjectService::new(world.storage.clone());
        let mut req = subject(&world, "Compilers");
        req.teacher_id = eve.id;
        service.create_subject(req).await.unwrap();

        let by_teacher = service
            .list_subjects(SubjectFilter::by_teacher(eve.id))
            .await
            .unwrap();
        assert_eq!(by_teacher.len(), 1);
        assert_eq!(by_teacher[0].name, "Compilers");

        let sorted = service
            .list_subjects(SubjectFilter {
                sort_descending: true,
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Compilers", "Algorithms"]);

        let searched = service
            .list_subjects(SubjectFilter {
                search_term: Some("algo".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(searched.len(), 1);
    }
}
