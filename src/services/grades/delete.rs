use tracing::{info, warn};

use super::GradeService;
use crate::errors::{EDeptError, Result};
use crate::models::grades::requests::DeleteGradeQuery;
use crate::services::transaction::finish;
use crate::storage::Storage;

pub async fn delete_grade(service: &GradeService, query: DeleteGradeQuery) -> Result<()> {
    let tx = service.storage.begin().await?;
    let result = clear_grade(tx.storage(), &query).await;
    finish(tx, result).await
}

/// 清除成绩但保留选课记录
async fn clear_grade(storage: &dyn Storage, query: &DeleteGradeQuery) -> Result<()> {
    let Some(_) = storage
        .get_student_subject(query.student_id, query.subject_id)
        .await?
    else {
        return Ok(());
    };

    let subject = storage
        .get_subject_by_id(query.subject_id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Subject", query.subject_id))?;

    if subject.teacher_id != query.teacher_id {
        warn!(
            "Teacher {} tried to clear a grade of subject {} taught by {}",
            query.teacher_id, subject.id, subject.teacher_id
        );
        return Err(EDeptError::authorization(
            "Teacher is not the instructor of this subject",
        ));
    }

    storage
        .set_student_subject_grade(query.student_id, query.subject_id, None)
        .await?;

    info!(
        "Grade cleared for student {} in subject {}",
        query.student_id, query.subject_id
    );
    Ok(())
}
