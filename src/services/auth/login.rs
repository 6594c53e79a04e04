use tracing::{debug, info, warn};

use super::AuthService;
use crate::config::AppConfig;
use crate::errors::{EDeptError, Result};
use crate::models::{
    auth::{LoginRequest, LoginResponse},
    users::entities::UserRole,
};
use crate::services::identity::find_by_email;
use crate::utils::{jwt::JwtUtils, password::verify_password};

/// 依次在学生、教师、管理者、管理员中查找邮箱；密码不匹配时继续查找下一类
pub async fn login(service: &AuthService, req: LoginRequest) -> Result<LoginResponse> {
    let storage = service.storage.as_ref();

    for role in UserRole::LOGIN_ORDER {
        let Some(identity) = find_by_email(storage, role, &req.email).await? else {
            continue;
        };

        if !verify_password(&req.password, identity.password_hash()) {
            debug!("Password mismatch for {} in {} store", req.email, role);
            continue;
        }

        let token = JwtUtils::generate_token(identity.as_ref())
            .map_err(|e| EDeptError::configuration(format!("签发令牌失败: {e}")))?;

        info!("{} {} logged in", role, identity.id());
        return Ok(LoginResponse {
            token,
            expires_in: AppConfig::get().jwt.expiration_minutes * 60,
            user: identity.summary(),
        });
    }

    warn!("Login failed for {}", req.email);
    Err(EDeptError::authentication("Invalid email or password"))
}
