use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::{StorageData, error_response, guarded, respond, respond_empty};
use crate::middlewares::RequireJWT;
use crate::models::auth::{ChangePasswordRequest, LoginRequest, UserInfoResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AuthService;
use crate::services::auth::Operation;

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Authentication required",
    ))
}

pub async fn login(
    storage: StorageData,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let service = AuthService::new(storage.get_ref().clone());
    match service.login(login_data.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful"))),
        Err(err) => Ok(error_response(&err)),
    }
}

pub async fn change_password(
    req: HttpRequest,
    storage: StorageData,
    password_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user(&req) else {
        return Ok(unauthorized());
    };
    let service = AuthService::new(storage.get_ref().clone());
    respond_empty(
        service
            .change_password(user.role, user.id, password_data.into_inner())
            .await,
        "Password changed successfully",
    )
}

pub async fn get_user(req: HttpRequest) -> ActixResult<HttpResponse> {
    // RequireJWT 已经重新加载过身份
    match RequireJWT::extract_user(&req) {
        Some(user) => respond(Ok(UserInfoResponse { user }), "User retrieved successfully"),
        None => Ok(unauthorized()),
    }
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route("/login", web::post().to(login))
            .route(
                "/password",
                guarded(web::put().to(change_password), Operation::ChangePassword),
            )
            .route(
                "/me",
                guarded(web::get().to(get_user), Operation::CurrentUser),
            ),
    );
}
