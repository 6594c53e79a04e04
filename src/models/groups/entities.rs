use serde::{Deserialize, Serialize};

use crate::models::{students::entities::Student, subjects::entities::Subject};

// 班组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub department_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 班组详情，附带已加载的学生与课程
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetail {
    #[serde(flatten)]
    pub group: Group,
    pub students: Vec<Student>,
    pub subjects: Vec<Subject>,
}

impl GroupDetail {
    /// 只要已加载的学生或课程非空，班组就不能删除
    pub fn has_dependents(&self) -> bool {
        !self.students.is_empty() || !self.subjects.is_empty()
    }
}

// 班组排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupSortBy {
    #[default]
    Name,
    DepartmentId,
}

impl GroupSortBy {
    /// 未知取值回退到默认排序
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("departmentid") | Some("department_id") => GroupSortBy::DepartmentId,
            _ => GroupSortBy::Name,
        }
    }
}
