use super::TeacherService;
use crate::errors::Result;
use crate::models::grades::{
    entities::{Grade, GradeId},
    requests::AddGradeRequest,
};
use crate::services::grades::add::{CohortCheck, assign_grade};
use crate::services::transaction::finish;

/// 查找、授权校验与写入在同一事务中完成
pub async fn add_grade(service: &TeacherService, req: AddGradeRequest) -> Result<Grade> {
    let tx = service.storage.begin().await?;
    let result = assign_grade(tx.storage(), &req, CohortCheck::Require).await;
    finish(tx, result).await
}

pub async fn get_grade_by_id(service: &TeacherService, id: GradeId) -> Result<Option<Grade>> {
    service.storage.get_grade(id).await
}
