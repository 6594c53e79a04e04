use serde::Deserialize;

use super::entities::SubjectSortBy;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub department_id: i64,
    pub teacher_id: i64,
    pub group_id: i64,
}

// 课程更新覆盖全部字段
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: String,
    pub department_id: i64,
    pub teacher_id: i64,
    pub group_id: i64,
}

// 课程筛选参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectFilter {
    pub search_term: Option<String>,
    pub department_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub group_id: Option<i64>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_descending: bool,
}

impl SubjectFilter {
    pub fn by_department(department_id: i64) -> Self {
        Self {
            department_id: Some(department_id),
            ..Default::default()
        }
    }

    pub fn by_teacher(teacher_id: i64) -> Self {
        Self {
            teacher_id: Some(teacher_id),
            ..Default::default()
        }
    }

    pub fn by_group(group_id: i64) -> Self {
        Self {
            group_id: Some(group_id),
            ..Default::default()
        }
    }

    pub fn sort_by(&self) -> SubjectSortBy {
        SubjectSortBy::from_param(self.sort_by.as_deref())
    }
}
