//! 路径参数提取器，解析失败时直接返回统一格式的 400 响应

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode, grades::entities::GradeId};

fn bad_request(code: ErrorCode, message: String) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(code, &message));
    InternalError::from_response(message, response).into()
}

/// `{id}` 路径参数（i64）
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(raw.parse::<i64>().map(SafeIDI64).map_err(|_| {
            bad_request(ErrorCode::BadRequest, format!("Invalid id in path: '{raw}'"))
        }))
    }
}

/// `{id}` 路径参数，格式为 `StudentId_SubjectId`
#[derive(Debug, Clone, Copy)]
pub struct SafeGradeId(pub GradeId);

impl FromRequest for SafeGradeId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(
            raw.parse::<GradeId>()
                .map(SafeGradeId)
                .map_err(|e| bad_request(ErrorCode::GradeIdInvalid, e.message().to_string())),
        )
    }
}
