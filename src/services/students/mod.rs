pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    grades::entities::Grade,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentFilter, UpdateStudentRequest},
    },
    subjects::entities::Subject,
};
use crate::storage::Storage;

pub struct StudentService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list_students(&self, filter: StudentFilter) -> Result<Vec<Student>> {
        list::list_students(self, filter).await
    }

    pub async fn get_student(&self, id: i64) -> Result<Student> {
        get::get_student(self, id).await
    }

    pub async fn get_student_by_email(&self, email: &str) -> Result<Student> {
        get::get_student_by_email(self, email).await
    }

    pub async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        create::create_student(self, req).await
    }

    pub async fn update_student(&self, id: i64, req: UpdateStudentRequest) -> Result<Student> {
        update::update_student(self, id, req).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<()> {
        delete::delete_student(self, id).await
    }

    // 学生的已评分成绩
    pub async fn list_grades_of(&self, id: i64) -> Result<Vec<Grade>> {
        list::list_grades_of(self, id).await
    }

    // 学生有选课记录的课程
    pub async fn list_subjects_of(&self, id: i64) -> Result<Vec<Subject>> {
        list::list_subjects_of(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EDeptError;
    use crate::models::users::requests::CreateAccountRequest;
    use crate::services::test_support::{PASSWORD, World};
    use crate::utils::password::verify_password;

    fn new_student(email: &str, group_id: i64) -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: "Carol".to_string(),
            last_name: "White".to_string(),
            email: email.to_string(),
            password: PASSWORD.to_string(),
            group_id,
        }
    }

    #[tokio::test]
    async fn test_create_student_hashes_password_and_projects_group() {
        let world = World::seed().await;
        let service = StudentService::new(world.storage.clone());

        let student = service
            .create_student(new_student("c@x.com", world.group.id))
            .await
            .unwrap();
        assert_ne!(student.password_hash, PASSWORD);
        assert!(verify_password(PASSWORD, &student.password_hash));
        assert_eq!(student.group_name, "G1");
        assert_eq!(student.department_name, "CS");
        assert_eq!(student.role.as_str(), "Student");
    }

    #[tokio::test]
    async fn test_create_student_rejects_duplicate_email_and_missing_group() {
        let world = World::seed().await;
        let service = StudentService::new(world.storage.clone());

        let err = service
            .create_student(new_student("a@x.com", world.group.id))
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        let err = service
            .create_student(new_student("c@x.com", 999))
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));

        let err = service
            .create_student(new_student("", world.group.id))
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));
    }

    #[tokio::test]
    async fn test_student_and_teacher_may_share_email() {
        let world = World::seed().await;
        let service = StudentService::new(world.storage.clone());

        // 教师 Bob 的邮箱
        let student = service
            .create_student(new_student("b@x.com", world.group.id))
            .await
            .unwrap();
        assert_eq!(student.email, world.teacher.email);

        world
            .storage
            .create_teacher(CreateAccountRequest {
                first_name: "Alice".to_string(),
                last_name: "Twin".to_string(),
                email: "a@x.com".to_string(),
                password: "hash".to_string(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_student_overlays_fields_only() {
        let world = World::seed().await;
        let service = StudentService::new(world.storage.clone());

        let updated = service
            .update_student(
                world.student.id,
                UpdateStudentRequest {
                    last_name: Some("Brown".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Alice");
        assert_eq!(updated.last_name, "Brown");
        assert_eq!(updated.password_hash, world.student.password_hash);

        let err = service
            .update_student(999, UpdateStudentRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));

        let err = service
            .update_student(
                world.student.id,
                UpdateStudentRequest {
                    group_id: Some(999),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_student_is_idempotent() {
        let world = World::seed().await;
        let service = StudentService::new(world.storage.clone());

        service.delete_student(world.student.id).await.unwrap();
        service.delete_student(world.student.id).await.unwrap();
        assert!(matches!(
            service.get_student(world.student.id).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_list_students_filters_by_department_and_search() {
        let world = World::seed().await;
        let other = world.add_group("G2").await;
        world.add_student("Dave", "d@x.com", other.id).await;
        let service = StudentService::new(world.storage.clone());

        let all = service
            .list_students(StudentFilter {
                department_id: Some(world.department.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let found = service
            .list_students(StudentFilter {
                search_term: Some("ALICE".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, world.student.id);

        let empty = service
            .list_students(StudentFilter {
                department_id: Some(999),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(empty.is_empty());
    }
}
