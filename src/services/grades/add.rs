use tracing::{info, warn};

use super::GradeService;
use crate::errors::{EDeptError, Result};
use crate::models::grades::{
    entities::{Grade, GradeId},
    requests::AddGradeRequest,
};
use crate::services::transaction::finish;
use crate::storage::Storage;
use crate::utils::validate::validate_grade;

/// 首次评分时是否要求学生属于课程所在班组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CohortCheck {
    Skip,
    Require,
}

pub async fn add_grade(service: &GradeService, req: AddGradeRequest) -> Result<Grade> {
    let tx = service.storage.begin().await?;
    let result = assign_grade(tx.storage(), &req, CohortCheck::Skip).await;
    finish(tx, result).await
}

/// 评分状态迁移：无记录时创建选课记录并评分，已有记录时覆盖成绩
pub(crate) async fn assign_grade(
    storage: &dyn Storage,
    req: &AddGradeRequest,
    cohort: CohortCheck,
) -> Result<Grade> {
    let student = storage
        .get_student_by_id(req.student_id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Student", req.student_id))?;
    let subject = storage
        .get_subject_by_id(req.subject_id)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Subject", req.subject_id))?;

    if subject.teacher_id != req.teacher_id {
        warn!(
            "Teacher {} tried to grade subject {} taught by {}",
            req.teacher_id, subject.id, subject.teacher_id
        );
        return Err(EDeptError::authorization(
            "Teacher is not the instructor of this subject",
        ));
    }

    validate_grade(req.grade)?;

    match storage
        .get_student_subject(req.student_id, req.subject_id)
        .await?
    {
        Some(_) => {
            storage
                .set_student_subject_grade(req.student_id, req.subject_id, Some(req.grade))
                .await?;
        }
        None => {
            if cohort == CohortCheck::Require && student.group_id != subject.group_id {
                warn!(
                    "Student {} (group {}) is not in the cohort of subject {} (group {})",
                    student.id, student.group_id, subject.id, subject.group_id
                );
                return Err(EDeptError::validation(
                    "Student is not enrolled in this subject's group",
                ));
            }
            storage
                .create_student_subject(req.student_id, req.subject_id, Some(req.grade))
                .await?;
        }
    }

    info!(
        "Grade {} set for student {} in subject {} by teacher {}",
        req.grade, req.student_id, req.subject_id, req.teacher_id
    );

    // 写入后重新读取投影
    let id = GradeId::new(req.student_id, req.subject_id);
    storage
        .get_grade(id)
        .await?
        .ok_or_else(|| EDeptError::database_operation(format!("Grade {id} missing after write")))
}
