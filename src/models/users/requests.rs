use serde::Deserialize;

// 教师、管理者、管理员的创建请求
// password 字段在服务层会被替换为哈希值后再交给存储层
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

// 部分更新：未提供的字段保持原值，id/密码/角色不可经此修改
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAccountRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}
