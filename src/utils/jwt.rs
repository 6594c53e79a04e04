use crate::config::AppConfig;
use crate::models::users::entities::{Identity, UserRole};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // Subject (身份 ID)
    pub name: String,  // "名 姓"
    pub email: String, // 邮箱
    pub role: String,  // 用户角色
    pub iss: String,   // 签发者
    pub aud: String,   // 受众
    pub exp: usize,    // Expiration time (时间戳)
    pub iat: usize,    // Issued at (签发时间)
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }

    pub fn user_role(&self) -> Option<UserRole> {
        self.role.parse().ok()
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    /// 为登录成功的身份签发令牌
    pub fn generate_token(identity: &dyn Identity) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            identity,
            chrono::Duration::minutes(config.jwt.expiration_minutes),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        identity: &dyn Identity,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: identity.id().to_string(),
            name: identity.display_name(),
            email: identity.email().to_string(),
            role: identity.role().to_string(),
            iss: config.jwt.issuer.clone(),
            aud: config.jwt.audience.clone(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    /// 验证签名、过期时间、签发者与受众
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        let mut validation = Validation::default();
        validation.set_issuer(&[config.jwt.issuer.as_str()]);
        validation.set_audience(&[config.jwt.audience.as_str()]);

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::teachers::entities::Teacher;

    fn sample_teacher() -> Teacher {
        Teacher {
            id: 7,
            first_name: "Bob".to_string(),
            last_name: "Builder".to_string(),
            email: "bob@x.com".to_string(),
            password_hash: String::new(),
            role: UserRole::Teacher,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_token_carries_identity_claims() {
        let token = JwtUtils::generate_token(&sample_teacher()).unwrap();
        let claims = JwtUtils::verify_token(&token).unwrap();

        assert_eq!(claims.user_id(), Some(7));
        assert_eq!(claims.name, "Bob Builder");
        assert_eq!(claims.email, "bob@x.com");
        assert_eq!(claims.user_role(), Some(UserRole::Teacher));
        assert_eq!(claims.iss, AppConfig::get().jwt.issuer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token =
            JwtUtils::generate_token_with_expiry(&sample_teacher(), chrono::Duration::hours(-2))
                .unwrap();
        assert!(JwtUtils::verify_token(&token).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let mut token = JwtUtils::generate_token(&sample_teacher()).unwrap();
        token.push('x');
        assert!(JwtUtils::verify_token(&token).is_err());
    }
}
