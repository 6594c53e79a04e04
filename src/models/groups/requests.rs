use serde::Deserialize;

use super::entities::GroupSortBy;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub department_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: String,
    pub department_id: i64,
}

// 班组筛选参数（来自查询字符串）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupFilter {
    pub search_term: Option<String>,
    pub department_id: Option<i64>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_descending: bool,
}

impl GroupFilter {
    pub fn by_department(department_id: i64) -> Self {
        Self {
            department_id: Some(department_id),
            ..Default::default()
        }
    }

    pub fn sort_by(&self) -> GroupSortBy {
        GroupSortBy::from_param(self.sort_by.as_deref())
    }
}
