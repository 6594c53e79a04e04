use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EDeptError;

/// 成绩的对外标识：`{student_id}_{subject_id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradeId {
    pub student_id: i64,
    pub subject_id: i64,
}

impl GradeId {
    pub fn new(student_id: i64, subject_id: i64) -> Self {
        Self {
            student_id,
            subject_id,
        }
    }
}

impl fmt::Display for GradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.student_id, self.subject_id)
    }
}

impl FromStr for GradeId {
    type Err = EDeptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            EDeptError::validation(format!(
                "Invalid grade id '{s}', expected format 'StudentId_SubjectId'"
            ))
        };

        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let student_id = parts[0].parse::<i64>().map_err(|_| invalid())?;
        let subject_id = parts[1].parse::<i64>().map_err(|_| invalid())?;

        Ok(Self::new(student_id, subject_id))
    }
}

// 选课记录；grade 为空表示已选课但尚未评分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSubject {
    pub student_id: i64,
    pub subject_id: i64,
    pub grade: Option<i32>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 成绩投影，只包含已评分的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub student_id: i64,
    pub student_name: String,
    pub subject_id: i64,
    pub subject_name: String,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub grade: i32,
}

impl Grade {
    pub fn grade_id(&self) -> GradeId {
        GradeId::new(self.student_id, self.subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_id_display() {
        assert_eq!(GradeId::new(12, 7).to_string(), "12_7");
    }

    #[test]
    fn test_grade_id_parse() {
        let id: GradeId = "3_14".parse().unwrap();
        assert_eq!(id, GradeId::new(3, 14));

        let id: GradeId = "0_0".parse().unwrap();
        assert_eq!(id, GradeId::new(0, 0));
    }

    #[test]
    fn test_grade_id_parse_preserves_large_values() {
        let text = format!("{}_{}", i64::MAX, 1);
        let id: GradeId = text.parse().unwrap();
        assert_eq!(id.student_id, i64::MAX);
        assert_eq!(id.to_string(), text);
    }

    #[test]
    fn test_grade_id_rejects_malformed() {
        for bad in ["", "12", "1_2_3", "a_1", "1_b", "_1", "1_", "1-2", "1 _2"] {
            let err = bad.parse::<GradeId>().unwrap_err();
            assert!(
                matches!(err, EDeptError::Validation(_)),
                "expected validation error for {bad:?}"
            );
        }
    }
}
