use serde::{Deserialize, Serialize};

use crate::models::users::entities::{UserRole, impl_identity};

// 教师
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl_identity!(Teacher);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeacherSortBy {
    FirstName,
    #[default]
    LastName,
    Email,
}

impl TeacherSortBy {
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("firstname") | Some("first_name") => TeacherSortBy::FirstName,
            Some("email") => TeacherSortBy::Email,
            _ => TeacherSortBy::LastName,
        }
    }
}
