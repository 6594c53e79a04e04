use serde::{Deserialize, Serialize};

use crate::models::users::entities::{UserRole, impl_identity};

// 学生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub role: UserRole,
    pub group_id: i64,
    pub group_name: String,
    pub department_id: i64,
    pub department_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl_identity!(Student);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentSortBy {
    FirstName,
    #[default]
    LastName,
}

impl StudentSortBy {
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("firstname") | Some("first_name") => StudentSortBy::FirstName,
            _ => StudentSortBy::LastName,
        }
    }
}
