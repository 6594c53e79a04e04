use serde::Deserialize;

use super::entities::TeacherSortBy;

// 教师筛选参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherFilter {
    pub search_term: Option<String>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_descending: bool,
}

impl TeacherFilter {
    pub fn sort_by(&self) -> TeacherSortBy {
        TeacherSortBy::from_param(self.sort_by.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherEmailQuery {
    pub email: String,
}
