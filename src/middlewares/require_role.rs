/*!
 * 基于角色的访问控制中间件
 *
 * 此中间件必须在 RequireJWT 中间件之后使用，按操作查询角色策略决定是否放行。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::{RequireJWT, RequireRole};
 * use crate::services::auth::Operation;
 *
 * web::post()
 *     .to(create_group)
 *     .wrap(RequireRole::for_operation(Operation::CreateGroup)) // 再验证角色
 *     .wrap(RequireJWT); // 先验证JWT
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::{
    models::{ErrorCode, users::entities::UserSummary},
    services::auth::{Operation, authorize},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    operation: Operation,
}

impl RequireRole {
    /// 创建校验指定操作权限的中间件
    pub fn for_operation(operation: Operation) -> Self {
        Self { operation }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            operation: self.operation,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    operation: Operation,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let operation = self.operation;

        Box::pin(async move {
            let user = req.extensions().get::<UserSummary>().cloned();

            match user {
                Some(user) => match authorize(user.role, operation) {
                    Ok(()) => {
                        let res = srv.call(req).await?.map_into_left_body();
                        Ok(res)
                    }
                    Err(_) => {
                        info!(
                            "Access denied for {} {} on {:?}. Allowed roles: {:?}",
                            user.role,
                            user.id,
                            operation,
                            operation.allowed_roles()
                        );
                        Ok(req.into_response(
                            create_error_response(
                                StatusCode::FORBIDDEN,
                                ErrorCode::Forbidden,
                                "Access denied.",
                            )
                            .map_into_right_body(),
                        ))
                    }
                },
                None => {
                    info!(
                        "Role check failed: No user found in request. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}
