use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Student, // 学生
    Teacher, // 教师
    Manager, // 教务管理者
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "Student";
    pub const TEACHER: &'static str = "Teacher";
    pub const MANAGER: &'static str = "Manager";
    pub const ADMIN: &'static str = "Admin";

    /// 登录时按此顺序依次查找身份
    pub const LOGIN_ORDER: [UserRole; 4] = [
        UserRole::Student,
        UserRole::Teacher,
        UserRole::Manager,
        UserRole::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => Self::STUDENT,
            UserRole::Teacher => Self::TEACHER,
            UserRole::Manager => Self::MANAGER,
            UserRole::Admin => Self::ADMIN,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "manager" => Ok(UserRole::Manager),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// 四类身份实体（学生、教师、管理者、管理员）共有的能力
pub trait Identity: Send + Sync {
    fn id(&self) -> i64;
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn email(&self) -> &str;
    fn password_hash(&self) -> &str;
    fn role(&self) -> UserRole;

    /// "名 姓"
    fn display_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id(),
            first_name: self.first_name().to_string(),
            last_name: self.last_name().to_string(),
            email: self.email().to_string(),
            role: self.role(),
        }
    }
}

/// 为拥有标准身份字段的结构体实现 Identity
macro_rules! impl_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::models::users::entities::Identity for $ty {
                fn id(&self) -> i64 {
                    self.id
                }
                fn first_name(&self) -> &str {
                    &self.first_name
                }
                fn last_name(&self) -> &str {
                    &self.last_name
                }
                fn email(&self) -> &str {
                    &self.email
                }
                fn password_hash(&self) -> &str {
                    &self.password_hash
                }
                fn role(&self) -> $crate::models::users::entities::UserRole {
                    self.role
                }
            }
        )*
    };
}

pub(crate) use impl_identity;

// 登录用户概要，也是请求扩展中保存的当前用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
}
