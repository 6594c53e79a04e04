use super::StudentService;
use crate::errors::Result;
use crate::models::{
    grades::{entities::Grade, requests::GradeFilter},
    students::{entities::Student, requests::StudentFilter},
    subjects::entities::Subject,
};

pub async fn list_students(service: &StudentService, filter: StudentFilter) -> Result<Vec<Student>> {
    service.storage.list_students(filter).await
}

pub async fn list_grades_of(service: &StudentService, id: i64) -> Result<Vec<Grade>> {
    service.storage.list_grades(GradeFilter::by_student(id)).await
}

pub async fn list_subjects_of(service: &StudentService, id: i64) -> Result<Vec<Subject>> {
    service.storage.list_student_subjects(id).await
}
