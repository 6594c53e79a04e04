use crate::errors::Result;
use crate::models::users::requests::CreateAccountRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_ADMIN_EMAIL: &str = "admin@localhost";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
/// 四类字符各取一个，保证满足密码策略
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    use rand::seq::SliceRandom;
    const UPPER: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
    const LOWER: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
    const DIGITS: &[u8] = b"23456789";
    const SYMBOLS: &[u8] = b"!@#$%";

    let mut rng = rand::rng();
    let charset: Vec<u8> = [UPPER, LOWER, DIGITS, SYMBOLS].concat();
    let mut chars: Vec<char> = [UPPER, LOWER, DIGITS, SYMBOLS]
        .iter()
        .map(|set| set[rng.random_range(0..set.len())] as char)
        .collect();
    while chars.len() < length {
        chars.push(charset[rng.random_range(0..charset.len())] as char);
    }
    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}

/// 初始化默认管理员账号
/// 如果管理员表为空，则创建一个管理员
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_admins().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} admin(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No admins found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count admins: {}, skipping admin seed", e);
            return;
        }
    }

    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateAccountRequest {
        first_name: "System".to_string(),
        last_name: "Administrator".to_string(),
        email,
        password: password_hash,
    };

    match storage.create_admin(admin_request).await {
        Ok(admin) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                admin.id, admin.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 连接存储并执行迁移，必要时创建默认管理员
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory_storage;
    use crate::utils::validate::validate_password_simple;

    #[test]
    fn test_generated_password_passes_policy() {
        for _ in 0..20 {
            let password = generate_random_password(16);
            assert_eq!(password.chars().count(), 16);
            assert!(validate_password_simple(&password).is_ok());
        }
    }

    #[tokio::test]
    async fn test_seed_admin_only_when_empty() {
        let storage = memory_storage().await;

        seed_admin(&storage).await;
        assert_eq!(storage.count_admins().await.unwrap(), 1);

        seed_admin(&storage).await;
        assert_eq!(storage.count_admins().await.unwrap(), 1);
    }
}
