pub mod login;
pub mod password;
pub mod policy;

use std::sync::Arc;

use crate::errors::{EDeptError, Result};
use crate::models::{
    auth::{ChangePasswordRequest, LoginRequest, LoginResponse},
    users::entities::{UserRole, UserSummary},
};
use crate::services::identity::find_by_id;
use crate::storage::Storage;

pub use policy::{Operation, authorize};

pub struct AuthService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 登录验证
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        login::login(self, req).await
    }

    // 修改当前身份的密码
    pub async fn change_password(
        &self,
        role: UserRole,
        id: i64,
        req: ChangePasswordRequest,
    ) -> Result<()> {
        password::change_password(self, role, id, req).await
    }

    /// 按角色重新加载身份，已删除的身份返回 NotFound
    pub async fn current_user(&self, role: UserRole, id: i64) -> Result<UserSummary> {
        find_by_id(self.storage.as_ref(), role, id)
            .await?
            .map(|identity| identity.summary())
            .ok_or_else(|| EDeptError::entity_not_found(role.as_str(), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::CreateAccountRequest;
    use crate::services::test_support::{PASSWORD, World};
    use crate::utils::jwt::JwtUtils;
    use crate::utils::password::hash_password;

    fn credentials(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_with_claims() {
        let world = World::seed().await;
        let service = AuthService::new(world.storage.clone());

        let response = service.login(credentials("a@x.com", PASSWORD)).await.unwrap();
        assert_eq!(response.user.role, UserRole::Student);
        assert_eq!(response.user.id, world.student.id);

        let claims = JwtUtils::verify_token(&response.token).unwrap();
        assert_eq!(claims.user_id(), Some(world.student.id));
        assert_eq!(claims.user_role(), Some(UserRole::Student));
        assert_eq!(claims.name, "Alice Smith");
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_login_falls_through_on_wrong_password() {
        let world = World::seed().await;
        // 与学生同邮箱、不同密码的管理员
        world
            .storage
            .create_admin(CreateAccountRequest {
                first_name: "Alice".to_string(),
                last_name: "Admin".to_string(),
                email: "a@x.com".to_string(),
                password: hash_password("AdminPassw0rd").unwrap(),
            })
            .await
            .unwrap();
        let service = AuthService::new(world.storage.clone());

        let response = service
            .login(credentials("a@x.com", "AdminPassw0rd"))
            .await
            .unwrap();
        assert_eq!(response.user.role, UserRole::Admin);

        // 学生存储优先
        let response = service.login(credentials("a@x.com", PASSWORD)).await.unwrap();
        assert_eq!(response.user.role, UserRole::Student);
    }

    #[tokio::test]
    async fn test_login_failures_are_authentication_errors() {
        let world = World::seed().await;
        let service = AuthService::new(world.storage.clone());

        for req in [
            credentials("nobody@x.com", PASSWORD),
            credentials("b@x.com", "wrong-password"),
        ] {
            let err = service.login(req).await.unwrap_err();
            assert!(matches!(err, EDeptError::Authentication(_)));
        }
    }

    #[tokio::test]
    async fn test_change_password() {
        let world = World::seed().await;
        let service = AuthService::new(world.storage.clone());
        let teacher_id = world.teacher.id;

        let err = service
            .change_password(
                UserRole::Teacher,
                teacher_id,
                ChangePasswordRequest {
                    old_password: "not-it".to_string(),
                    new_password: "N3wPassword".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Authentication(_)));

        let err = service
            .change_password(
                UserRole::Teacher,
                teacher_id,
                ChangePasswordRequest {
                    old_password: PASSWORD.to_string(),
                    new_password: "short".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));

        let err = service
            .change_password(
                UserRole::Manager,
                teacher_id,
                ChangePasswordRequest {
                    old_password: PASSWORD.to_string(),
                    new_password: "N3wPassword".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));

        service
            .change_password(
                UserRole::Teacher,
                teacher_id,
                ChangePasswordRequest {
                    old_password: PASSWORD.to_string(),
                    new_password: "N3wPassword".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(service.login(credentials("b@x.com", PASSWORD)).await.is_err());
        let response = service
            .login(credentials("b@x.com", "N3wPassword"))
            .await
            .unwrap();
        assert_eq!(response.user.id, teacher_id);
    }

    #[tokio::test]
    async fn test_current_user_rejects_deleted_principal() {
        let world = World::seed().await;
        let service = AuthService::new(world.storage.clone());

        let summary = service
            .current_user(UserRole::Student, world.student.id)
            .await
            .unwrap();
        assert_eq!(summary.email, "a@x.com");

        world.storage.delete_student(world.student.id).await.unwrap();
        assert!(
            service
                .current_user(UserRole::Student, world.student.id)
                .await
                .is_err()
        );
    }
}
