//! 业务数据模型
//!
//! 与 entity 模块中的数据库实体分离，HTTP 层与服务层只使用这里的类型。

pub mod admins;
pub mod auth;
pub mod common;
pub mod departments;
pub mod grades;
pub mod groups;
pub mod managers;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::{ApiResponse, ErrorCode};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
