use serde::Deserialize;

// 评分请求；首次评分会隐式创建选课记录
#[derive(Debug, Clone, Deserialize)]
pub struct AddGradeRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub grade: i32,
}

// 清除成绩（查询字符串）
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteGradeQuery {
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
}

// 成绩筛选参数，各条件之间为 AND
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeFilter {
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub min_grade: Option<i32>,
    pub max_grade: Option<i32>,
}

impl GradeFilter {
    pub fn by_student(student_id: i64) -> Self {
        Self {
            student_id: Some(student_id),
            ..Default::default()
        }
    }

    pub fn by_teacher(teacher_id: i64) -> Self {
        Self {
            teacher_id: Some(teacher_id),
            ..Default::default()
        }
    }
}
