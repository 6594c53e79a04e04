pub mod admins;
pub mod auth;
pub mod departments;
pub mod grades;
pub mod groups;
pub mod managers;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use admins::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use departments::configure_department_routes;
pub use grades::configure_grade_routes;
pub use groups::configure_group_routes;
pub use managers::configure_manager_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use teachers::configure_teacher_routes;

use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, Route, http::StatusCode, web};
use serde::Serialize;
use tracing::error;

use crate::errors::{EDeptError, Result};
use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::auth::Operation;
use crate::storage::Storage;

/// 处理程序共享的存储句柄
pub type StorageData = web::Data<Arc<dyn Storage>>;

/// 按操作挂载认证与角色中间件，公开操作原样返回
pub(crate) fn guarded(route: Route, op: Operation) -> Route {
    if op.is_public() {
        return route;
    }
    // 后 wrap 的先执行：先验证JWT，再验证角色
    route.wrap(RequireRole::for_operation(op)).wrap(RequireJWT)
}

fn status_of(err: &EDeptError) -> StatusCode {
    match err {
        EDeptError::NotFound(_) => StatusCode::NOT_FOUND,
        EDeptError::Validation(_) => StatusCode::BAD_REQUEST,
        EDeptError::Authorization(_) => StatusCode::FORBIDDEN,
        EDeptError::Authentication(_) => StatusCode::UNAUTHORIZED,
        EDeptError::Unimplemented(_) => StatusCode::NOT_IMPLEMENTED,
        EDeptError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn error_response(err: &EDeptError) -> HttpResponse {
    let status = status_of(err);
    if status.is_server_error() {
        error!("Request failed: {}", err.format_simple());
    }
    HttpResponse::build(status).json(ApiResponse::error_empty(
        ErrorCode::from(err),
        err.message(),
    ))
}

pub(crate) fn respond<T: Serialize>(result: Result<T>, message: &str) -> ActixResult<HttpResponse> {
    Ok(match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
        Err(err) => error_response(&err),
    })
}

pub(crate) fn respond_created<T: Serialize>(
    result: Result<T>,
    message: &str,
) -> ActixResult<HttpResponse> {
    Ok(match result {
        Ok(data) => HttpResponse::Created().json(ApiResponse::success(data, message)),
        Err(err) => error_response(&err),
    })
}

pub(crate) fn respond_empty(result: Result<()>, message: &str) -> ActixResult<HttpResponse> {
    Ok(match result {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success_empty(message)),
        Err(err) => error_response(&err),
    })
}

/// 成绩变更只能以当前教师本人的身份进行
pub(crate) fn ensure_acting_teacher(
    req: &actix_web::HttpRequest,
    teacher_id: i64,
) -> std::result::Result<(), HttpResponse> {
    match RequireJWT::extract_user_id(req) {
        Some(id) if id == teacher_id => Ok(()),
        Some(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Teachers may only grade on their own behalf",
        ))),
        None => Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{UserRole, UserSummary};

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            status_of(&EDeptError::entity_not_found("Group", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(&EDeptError::validation("bad")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(&EDeptError::authorization("no")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(&EDeptError::authentication("who")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(&EDeptError::timeout("slow")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(&EDeptError::database_operation("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    fn request_as(user: Option<UserSummary>) -> actix_web::HttpRequest {
        use actix_web::HttpMessage;

        let req = actix_web::test::TestRequest::default().to_http_request();
        if let Some(user) = user {
            req.extensions_mut().insert(user);
        }
        req
    }

    fn teacher(id: i64) -> UserSummary {
        UserSummary {
            id,
            first_name: "Bob".to_string(),
            last_name: "Jones".to_string(),
            email: "b@x.com".to_string(),
            role: UserRole::Teacher,
        }
    }

    #[test]
    fn test_acting_teacher_must_match_token() {
        let req = request_as(Some(teacher(7)));
        assert!(ensure_acting_teacher(&req, 7).is_ok());

        let response = ensure_acting_teacher(&req, 8).unwrap_err();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let anonymous = request_as(None);
        let response = ensure_acting_teacher(&anonymous, 7).unwrap_err();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
