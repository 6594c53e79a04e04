use serde::{Deserialize, Serialize};

use crate::models::{groups::entities::Group, subjects::entities::Subject};

// 院系
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 院系详情，附带下属班组与课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentDetail {
    #[serde(flatten)]
    pub department: Department,
    pub groups: Vec<Group>,
    pub subjects: Vec<Subject>,
}
