//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_edept_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum EDeptError {
            $($variant(String),)*
        }

        impl EDeptError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EDeptError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EDeptError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EDeptError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EDeptError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EDeptError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edept_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Authentication("E007", "Authentication Error"),
    Authorization("E008", "Authorization Error"),
    Unimplemented("E009", "Not Implemented"),
    Timeout("E010", "Operation Timeout"),
    Configuration("E011", "Configuration Error"),
}

impl EDeptError {
    /// 实体不存在，消息中带上实体类型与 id
    pub fn entity_not_found(kind: &str, id: impl fmt::Display) -> Self {
        EDeptError::NotFound(format!("{kind} with id {id} was not found"))
    }

    /// 数据库错误附加上下文，连接池超时仍保持 Timeout 类型
    pub fn from_db(context: &str, err: sea_orm::DbErr) -> Self {
        match EDeptError::from(err) {
            EDeptError::Timeout(msg) => EDeptError::Timeout(format!("{context}: {msg}")),
            EDeptError::DatabaseOperation(msg) => {
                EDeptError::DatabaseOperation(format!("{context}: {msg}"))
            }
            other => other,
        }
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EDeptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EDeptError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EDeptError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            // 连接池取不到连接视为超时
            sea_orm::DbErr::ConnectionAcquire(e) => EDeptError::Timeout(e.to_string()),
            other => EDeptError::DatabaseOperation(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for EDeptError {
    fn from(err: serde_json::Error) -> Self {
        EDeptError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for EDeptError {
    fn from(err: config::ConfigError) -> Self {
        EDeptError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EDeptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EDeptError::database_config("test").code(), "E001");
        assert_eq!(EDeptError::validation("test").code(), "E005");
        assert_eq!(EDeptError::authentication("test").code(), "E007");
        assert_eq!(EDeptError::unimplemented("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EDeptError::authorization("test").error_type(),
            "Authorization Error"
        );
        assert_eq!(
            EDeptError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_entity_not_found_names_kind_and_id() {
        let err = EDeptError::entity_not_found("Student", 42);
        assert!(matches!(err, EDeptError::NotFound(_)));
        assert!(err.message().contains("Student"));
        assert!(err.message().contains("42"));
    }

    #[test]
    fn test_db_err_mapping() {
        let err: EDeptError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, EDeptError::DatabaseOperation(_)));

        let err: EDeptError =
            sea_orm::DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout).into();
        assert!(matches!(err, EDeptError::Timeout(_)));
    }

    #[test]
    fn test_from_db_keeps_kind_and_adds_context() {
        let err = EDeptError::from_db(
            "查询院系失败",
            sea_orm::DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout),
        );
        assert!(matches!(err, EDeptError::Timeout(_)));
        assert!(err.message().starts_with("查询院系失败"));

        let err = EDeptError::from_db("创建院系失败", sea_orm::DbErr::Custom("boom".to_string()));
        assert!(matches!(err, EDeptError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = EDeptError::validation("Grade must be between 1 and 5");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("between 1 and 5"));
    }
}
