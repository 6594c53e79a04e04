pub mod create;
pub mod delete;
pub mod get;
pub mod grade;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    grades::{
        entities::{Grade, GradeId},
        requests::AddGradeRequest,
    },
    subjects::entities::Subject,
    teachers::{entities::Teacher, requests::TeacherFilter},
    users::requests::{CreateAccountRequest, UpdateAccountRequest},
};
use crate::storage::Storage;

pub struct TeacherService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list_teachers(&self, filter: TeacherFilter) -> Result<Vec<Teacher>> {
        list::list_teachers(self, filter).await
    }

    pub async fn get_teacher(&self, id: i64) -> Result<Teacher> {
        get::get_teacher(self, id).await
    }

    pub async fn get_teacher_by_email(&self, email: &str) -> Result<Teacher> {
        get::get_teacher_by_email(self, email).await
    }

    pub async fn create_teacher(&self, req: CreateAccountRequest) -> Result<Teacher> {
        create::create_teacher(self, req).await
    }

    pub async fn update_teacher(&self, id: i64, req: UpdateAccountRequest) -> Result<Teacher> {
        update::update_teacher(self, id, req).await
    }

    pub async fn delete_teacher(&self, id: i64) -> Result<()> {
        delete::delete_teacher(self, id).await
    }

    // 教师任教的课程
    pub async fn list_subjects_of(&self, id: i64) -> Result<Vec<Subject>> {
        list::list_subjects_of(self, id).await
    }

    // 教师所授课程的已评分成绩
    pub async fn list_grades_of(&self, id: i64) -> Result<Vec<Grade>> {
        list::list_grades_of(self, id).await
    }

    // 教师评分入口，首次评分要求学生属于课程班组
    pub async fn add_grade(&self, req: AddGradeRequest) -> Result<Grade> {
        grade::add_grade(self, req).await
    }

    // 未评分的选课记录返回 None
    pub async fn get_grade_by_id(&self, id: GradeId) -> Result<Option<Grade>> {
        grade::get_grade_by_id(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EDeptError;
    use crate::services::test_support::{PASSWORD, World, memory_storage};

    fn account(email: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: email.to_string(),
            password: PASSWORD.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_teacher_unique_email() {
        let service = TeacherService::new(memory_storage().await);

        let teacher = service.create_teacher(account("g@x.com")).await.unwrap();
        assert_eq!(teacher.role.as_str(), "Teacher");
        assert_ne!(teacher.password_hash, PASSWORD);

        let err = service.create_teacher(account("g@x.com")).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        let found = service.get_teacher_by_email("g@x.com").await.unwrap();
        assert_eq!(found.id, teacher.id);
    }

    #[tokio::test]
    async fn test_update_teacher_email_collision() {
        let world = World::seed().await;
        let other = world.add_teacher("Eve", "e@x.com").await;
        let service = TeacherService::new(world.storage.clone());

        let err = service
            .update_teacher(
                other.id,
                UpdateAccountRequest {
                    email: Some("b@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        // 改回自己的邮箱不算冲突
        let same = service
            .update_teacher(
                other.id,
                UpdateAccountRequest {
                    email: Some("e@x.com".to_string()),
                    first_name: Some("Eva".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(same.first_name, "Eva");
    }

    #[tokio::test]
    async fn test_delete_teacher_with_subjects_is_rejected() {
        let world = World::seed().await;
        let service = TeacherService::new(world.storage.clone());

        let err = service.delete_teacher(world.teacher.id).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        let idle = world.add_teacher("Eve", "e@x.com").await;
        service.delete_teacher(idle.id).await.unwrap();
        service.delete_teacher(idle.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_teacher_path_requires_cohort_for_new_enrollment() {
        let world = World::seed().await;
        let other = world.add_group("G2").await;
        let outsider = world.add_student("Dave", "d@x.com", other.id).await;
        let service = TeacherService::new(world.storage.clone());

        let err = service
            .add_grade(AddGradeRequest {
                student_id: outsider.id,
                subject_id: world.subject.id,
                teacher_id: world.teacher.id,
                grade: 5,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        // 事务回滚，没有留下选课记录
        assert!(
            world
                .storage
                .get_student_subject(outsider.id, world.subject.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_teacher_path_regrade_skips_cohort_check() {
        let world = World::seed().await;
        let other = world.add_group("G2").await;
        let outsider = world.add_student("Dave", "d@x.com", other.id).await;
        world
            .storage
            .create_student_subject(outsider.id, world.subject.id, Some(2))
            .await
            .unwrap();
        let service = TeacherService::new(world.storage.clone());

        let regraded = service
            .add_grade(AddGradeRequest {
                student_id: outsider.id,
                subject_id: world.subject.id,
                teacher_id: world.teacher.id,
                grade: 4,
            })
            .await
            .unwrap();
        assert_eq!(regraded.grade, 4);
    }

    #[tokio::test]
    async fn test_get_grade_by_id_hides_ungraded_enrollment() {
        let world = World::seed().await;
        let service = TeacherService::new(world.storage.clone());
        let id = GradeId::new(world.student.id, world.subject.id);

        assert!(service.get_grade_by_id(id).await.unwrap().is_none());

        world
            .storage
            .create_student_subject(world.student.id, world.subject.id, None)
            .await
            .unwrap();
        assert!(service.get_grade_by_id(id).await.unwrap().is_none());

        service
            .add_grade(AddGradeRequest {
                student_id: world.student.id,
                subject_id: world.subject.id,
                teacher_id: world.teacher.id,
                grade: 5,
            })
            .await
            .unwrap();
        let grade = service.get_grade_by_id(id).await.unwrap().unwrap();
        assert_eq!(grade.grade, 5);

        assert_eq!(service.list_grades_of(world.teacher.id).await.unwrap().len(), 1);
        assert_eq!(service.list_subjects_of(world.teacher.id).await.unwrap().len(), 1);
    }
}
