use serde::Deserialize;

use super::entities::StudentSortBy;

// password 字段在服务层会被替换为哈希值
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub group_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub group_id: Option<i64>,
}

// 学生筛选参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilter {
    pub search_term: Option<String>,
    pub group_id: Option<i64>,
    pub department_id: Option<i64>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_descending: bool,
}

impl StudentFilter {
    pub fn by_group(group_id: i64) -> Self {
        Self {
            group_id: Some(group_id),
            ..Default::default()
        }
    }

    pub fn sort_by(&self) -> StudentSortBy {
        StudentSortBy::from_param(self.sort_by.as_deref())
    }
}
