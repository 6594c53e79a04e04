use serde::Serialize;

use crate::errors::EDeptError;

/// 业务错误码，随 ApiResponse 一起返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    InternalServerError = 1005,
    NotImplemented = 1006,
    ServiceUnavailable = 1007,

    // 认证授权 2xxx
    Unauthorized = 2000,
    AuthFailed = 2001,
    Forbidden = 2003,
    PasswordPolicyViolation = 2004,

    // 成绩相关 3xxx
    GradeNotFound = 3000,
    GradeIdInvalid = 3001,
}

impl From<&EDeptError> for ErrorCode {
    fn from(err: &EDeptError) -> Self {
        match err {
            EDeptError::Validation(_) => ErrorCode::ValidationFailed,
            EDeptError::NotFound(_) => ErrorCode::NotFound,
            EDeptError::Authentication(_) => ErrorCode::AuthFailed,
            EDeptError::Authorization(_) => ErrorCode::Forbidden,
            EDeptError::Unimplemented(_) => ErrorCode::NotImplemented,
            EDeptError::Timeout(_) => ErrorCode::ServiceUnavailable,
            _ => ErrorCode::InternalServerError,
        }
    }
}
