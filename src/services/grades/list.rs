use super::GradeService;
use crate::errors::Result;
use crate::models::grades::{entities::Grade, requests::GradeFilter};

pub async fn list_grades(service: &GradeService, filter: GradeFilter) -> Result<Vec<Grade>> {
    service.storage.list_grades(filter).await
}

pub async fn list_by_student(service: &GradeService, student_id: i64) -> Result<Vec<Grade>> {
    service
        .storage
        .list_grades(GradeFilter::by_student(student_id))
        .await
}

pub async fn list_by_teacher(service: &GradeService, teacher_id: i64) -> Result<Vec<Grade>> {
    service
        .storage
        .list_grades(GradeFilter::by_teacher(teacher_id))
        .await
}
