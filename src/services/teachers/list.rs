use super::TeacherService;
use crate::errors::Result;
use crate::models::{
    grades::{entities::Grade, requests::GradeFilter},
    subjects::{entities::Subject, requests::SubjectFilter},
    teachers::{entities::Teacher, requests::TeacherFilter},
};

pub async fn list_teachers(service: &TeacherService, filter: TeacherFilter) -> Result<Vec<Teacher>> {
    service.storage.list_teachers(filter).await
}

pub async fn list_subjects_of(service: &TeacherService, id: i64) -> Result<Vec<Subject>> {
    service
        .storage
        .list_subjects(SubjectFilter::by_teacher(id))
        .await
}

pub async fn list_grades_of(service: &TeacherService, id: i64) -> Result<Vec<Grade>> {
    service.storage.list_grades(GradeFilter::by_teacher(id)).await
}
