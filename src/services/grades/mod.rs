pub mod add;
pub mod delete;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::grades::{
    entities::Grade,
    requests::{AddGradeRequest, DeleteGradeQuery, GradeFilter},
};
use crate::storage::Storage;

pub struct GradeService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 按条件列出已评分成绩，条件之间为 AND
    pub async fn list_grades(&self, filter: GradeFilter) -> Result<Vec<Grade>> {
        list::list_grades(self, filter).await
    }

    pub async fn list_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
        list::list_by_student(self, student_id).await
    }

    pub async fn list_by_teacher(&self, teacher_id: i64) -> Result<Vec<Grade>> {
        list::list_by_teacher(self, teacher_id).await
    }

    // 通用评分入口，不检查班组
    pub async fn add_grade(&self, req: AddGradeRequest) -> Result<Grade> {
        add::add_grade(self, req).await
    }

    // 清除成绩，选课记录保留
    pub async fn delete_grade(&self, query: DeleteGradeQuery) -> Result<()> {
        delete::delete_grade(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EDeptError;
    use crate::models::grades::entities::GradeId;
    use crate::services::test_support::World;

    fn grade(world: &World, teacher_id: i64, value: i32) -> AddGradeRequest {
        AddGradeRequest {
            student_id: world.student.id,
            subject_id: world.subject.id,
            teacher_id,
            grade: value,
        }
    }

    fn clear(world: &World, teacher_id: i64) -> DeleteGradeQuery {
        DeleteGradeQuery {
            student_id: world.student.id,
            subject_id: world.subject.id,
            teacher_id,
        }
    }

    #[tokio::test]
    async fn test_add_then_lookup_returns_same_grade() {
        let world = World::seed().await;
        let service = GradeService::new(world.storage.clone());

        for value in 1..=5 {
            let added = service
                .add_grade(grade(&world, world.teacher.id, value))
                .await
                .unwrap();
            assert_eq!(added.grade, value);

            let id = GradeId::new(world.student.id, world.subject.id);
            let fetched = world.storage.get_grade(id).await.unwrap().unwrap();
            assert_eq!(fetched.grade, value);
            assert_eq!(fetched.id, format!("{}_{}", world.student.id, world.subject.id));
        }
    }

    #[tokio::test]
    async fn test_regrade_keeps_single_record() {
        let world = World::seed().await;
        let service = GradeService::new(world.storage.clone());

        service
            .add_grade(grade(&world, world.teacher.id, 3))
            .await
            .unwrap();
        service
            .add_grade(grade(&world, world.teacher.id, 5))
            .await
            .unwrap();

        let grades = service.list_by_student(world.student.id).await.unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].grade, 5);
    }

    #[tokio::test]
    async fn test_projection_carries_names() {
        let world = World::seed().await;
        let service = GradeService::new(world.storage.clone());

        let added = service
            .add_grade(grade(&world, world.teacher.id, 4))
            .await
            .unwrap();
        assert_eq!(added.student_name, "Alice Smith");
        assert_eq!(added.subject_name, "Algorithms");
        assert_eq!(added.teacher_name, "Bob Jones");
        assert_eq!(added.teacher_id, world.teacher.id);
    }

    #[tokio::test]
    async fn test_add_by_other_teacher_is_rejected_without_changes() {
        let world = World::seed().await;
        let intruder = world.add_teacher("Eve", "e@x.com").await;
        let service = GradeService::new(world.storage.clone());

        let err = service
            .add_grade(grade(&world, intruder.id, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Authorization(_)));
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
    async fn test_add_checks_in_order() {
        let world = World::seed().await;
        let intruder = world.add_teacher("Eve", "e@x.com").await;
        let service = GradeService::new(world.storage.clone());

        let mut req = grade(&world, world.teacher.id, 9);
        req.student_id = 999;
        assert!(matches!(
            service.add_grade(req).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));

        let mut req = grade(&world, world.teacher.id, 9);
        req.subject_id = 999;
        assert!(matches!(
            service.add_grade(req).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));

        // 非任课教师优先于成绩范围
        assert!(matches!(
            service.add_grade(grade(&world, intruder.id, 9)).await.unwrap_err(),
            EDeptError::Authorization(_)
        ));
        for value in [0, 6, -1] {
            assert!(matches!(
                service
                    .add_grade(grade(&world, world.teacher.id, value))
                    .await
                    .unwrap_err(),
                EDeptError::Validation(_)
            ));
        }
    }

    #[tokio::test]
    async fn test_generic_path_skips_cohort_check() {
        let world = World::seed().await;
        let other = world.add_group("G2").await;
        let outsider = world.add_student("Dave", "d@x.com", other.id).await;
        let service = GradeService::new(world.storage.clone());

        let added = service
            .add_grade(AddGradeRequest {
                student_id: outsider.id,
                subject_id: world.subject.id,
                teacher_id: world.teacher.id,
                grade: 3,
            })
            .await
            .unwrap();
        assert_eq!(added.student_id, outsider.id);
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_noop() {
        let world = World::seed().await;
        let service = GradeService::new(world.storage.clone());

        service
            .delete_grade(clear(&world, world.teacher.id))
            .await
            .unwrap();
        // 即使教师不匹配，没有记录时同样不报错
        service.delete_grade(clear(&world, 999)).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_by_other_teacher_keeps_grade() {
        let world = World::seed().await;
        let intruder = world.add_teacher("Eve", "e@x.com").await;
        let service = GradeService::new(world.storage.clone());
        service
            .add_grade(grade(&world, world.teacher.id, 4))
            .await
            .unwrap();

        let err = service
            .delete_grade(clear(&world, intruder.id))
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Authorization(_)));

        let grades = service.list_by_student(world.student.id).await.unwrap();
        assert_eq!(grades[0].grade, 4);
    }

    #[tokio::test]
    async fn test_delete_clears_grade_but_keeps_enrollment() {
        let world = World::seed().await;
        let service = GradeService::new(world.storage.clone());
        service
            .add_grade(grade(&world, world.teacher.id, 4))
            .await
            .unwrap();

        service
            .delete_grade(clear(&world, world.teacher.id))
            .await
            .unwrap();

        let record = world
            .storage
            .get_student_subject(world.student.id, world.subject.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.grade, None);
        assert!(service.list_grades(GradeFilter::default()).await.unwrap().is_empty());
        assert!(
            world
                .storage
                .get_grade(GradeId::new(world.student.id, world.subject.id))
                .await
                .unwrap()
                .is_none()
        );

        // 删除后再次评分恢复可见，且没有重复记录
        service
            .add_grade(grade(&world, world.teacher.id, 2))
            .await
            .unwrap();
        let grades = service.list_by_student(world.student.id).await.unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].grade, 2);
    }

    #[tokio::test]
    async fn test_filters_are_conjunctive() {
        let world = World::seed().await;
        let carol = world.add_student("Carol", "c@x.com", world.group.id).await;
        let service = GradeService::new(world.storage.clone());

        service
            .add_grade(grade(&world, world.teacher.id, 5))
            .await
            .unwrap();
        service
            .add_grade(AddGradeRequest {
                student_id: carol.id,
                subject_id: world.subject.id,
                teacher_id: world.teacher.id,
                grade: 2,
            })
            .await
            .unwrap();

        let high = service
            .list_grades(GradeFilter {
                subject_id: Some(world.subject.id),
                min_grade: Some(4),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].student_id, world.student.id);

        let low = service
            .list_grades(GradeFilter {
                teacher_id: Some(world.teacher.id),
                max_grade: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].student_id, carol.id);

        assert_eq!(service.list_by_teacher(world.teacher.id).await.unwrap().len(), 2);
        assert!(service.list_by_teacher(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_grade_round_trip_through_services() {
        use crate::models::departments::requests::CreateDepartmentRequest;
        use crate::models::groups::requests::CreateGroupRequest;
        use crate::models::students::requests::CreateStudentRequest;
        use crate::models::subjects::requests::CreateSubjectRequest;
        use crate::models::users::requests::CreateAccountRequest;
        use crate::services::test_support::{PASSWORD, memory_storage};
        use crate::services::{
            DepartmentService, GroupService, StudentService, SubjectService, TeacherService,
        };

        let storage = memory_storage().await;
        let departments = DepartmentService::new(storage.clone());
        let groups = GroupService::new(storage.clone());
        let students = StudentService::new(storage.clone());
        let teachers = TeacherService::new(storage.clone());
        let subjects = SubjectService::new(storage.clone());
        let grades = GradeService::new(storage.clone());

        let department = departments
            .create_department(CreateDepartmentRequest {
                name: "CS".to_string(),
            })
            .await
            .unwrap();
        let group = groups
            .create_group(CreateGroupRequest {
                name: "G1".to_string(),
                department_id: department.id,
            })
            .await
            .unwrap();
        assert_eq!(group.department_name, "CS");

        let alice = students
            .create_student(CreateStudentRequest {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                email: "a@x.com".to_string(),
                password: PASSWORD.to_string(),
                group_id: group.id,
            })
            .await
            .unwrap();
        let bob = teachers
            .create_teacher(CreateAccountRequest {
                first_name: "Bob".to_string(),
                last_name: "Jones".to_string(),
                email: "b@x.com".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();
        let algorithms = subjects
            .create_subject(CreateSubjectRequest {
                name: "Algorithms".to_string(),
                department_id: department.id,
                teacher_id: bob.id,
                group_id: group.id,
            })
            .await
            .unwrap();

        let add = |value: i32| AddGradeRequest {
            student_id: alice.id,
            subject_id: algorithms.id,
            teacher_id: bob.id,
            grade: value,
        };

        let first = teachers.add_grade(add(5)).await.unwrap();
        assert_eq!(first.grade, 5);
        assert_eq!(first.student_name, "Alice Smith");

        grades
            .delete_grade(DeleteGradeQuery {
                student_id: alice.id,
                subject_id: algorithms.id,
                teacher_id: bob.id,
            })
            .await
            .unwrap();
        assert!(grades.list_grades(GradeFilter::default()).await.unwrap().is_empty());

        teachers.add_grade(add(4)).await.unwrap();
        let listed = grades.list_grades(GradeFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].grade, 4);
        assert_eq!(listed[0].id, GradeId::new(alice.id, algorithms.id).to_string());

        let err = groups.delete_group(group.id).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));
        assert!(groups.get_group(group.id).await.is_ok());
    }
}
