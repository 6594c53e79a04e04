use serde::{Deserialize, Serialize};

// 课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub department_name: String,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub group_id: i64,
    pub group_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubjectSortBy {
    #[default]
    Name,
}

impl SubjectSortBy {
    pub fn from_param(_value: Option<&str>) -> Self {
        SubjectSortBy::Name
    }
}
