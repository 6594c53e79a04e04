//! 四类身份共用的查找与校验

use tracing::warn;

use crate::errors::{EDeptError, Result};
use crate::models::users::{
    entities::{Identity, UserRole},
    requests::CreateAccountRequest,
};
use crate::storage::Storage;
use crate::utils::validate::{validate_email, validate_required};

pub(crate) type BoxedIdentity = Box<dyn Identity>;

/// 在指定角色的存储中按邮箱查找身份
pub(crate) async fn find_by_email(
    storage: &dyn Storage,
    role: UserRole,
    email: &str,
) -> Result<Option<BoxedIdentity>> {
    Ok(match role {
        UserRole::Student => boxed(storage.get_student_by_email(email).await?),
        UserRole::Teacher => boxed(storage.get_teacher_by_email(email).await?),
        UserRole::Manager => boxed(storage.get_manager_by_email(email).await?),
        UserRole::Admin => boxed(storage.get_admin_by_email(email).await?),
    })
}

/// 在指定角色的存储中按 ID 查找身份
pub(crate) async fn find_by_id(
    storage: &dyn Storage,
    role: UserRole,
    id: i64,
) -> Result<Option<BoxedIdentity>> {
    Ok(match role {
        UserRole::Student => boxed(storage.get_student_by_id(id).await?),
        UserRole::Teacher => boxed(storage.get_teacher_by_id(id).await?),
        UserRole::Manager => boxed(storage.get_manager_by_id(id).await?),
        UserRole::Admin => boxed(storage.get_admin_by_id(id).await?),
    })
}

fn boxed<T: Identity + 'static>(identity: Option<T>) -> Option<BoxedIdentity> {
    identity.map(|i| Box::new(i) as BoxedIdentity)
}

/// 邮箱只在同一角色的存储内唯一；except 为正在更新的身份自身
pub(crate) async fn ensure_email_available(
    storage: &dyn Storage,
    role: UserRole,
    email: &str,
    except: Option<i64>,
) -> Result<()> {
    if let Some(existing) = find_by_email(storage, role, email).await? {
        if Some(existing.id()) != except {
            warn!("{} email {} is already taken", role, email);
            return Err(EDeptError::validation(format!(
                "A {} with this email already exists",
                role.as_str().to_lowercase()
            )));
        }
    }
    Ok(())
}

/// 创建账户前的字段校验
pub(crate) fn validate_new_account(req: &CreateAccountRequest) -> Result<()> {
    validate_email(&req.email)?;
    validate_required("First name", &req.first_name)?;
    validate_required("Last name", &req.last_name)?;
    validate_required("Password", &req.password)?;
    Ok(())
}

/// 更新时只校验提供了的字段
pub(crate) fn validate_account_overlay(
    first_name: Option<&str>,
    last_name: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    if let Some(email) = email {
        validate_email(email)?;
    }
    if let Some(first_name) = first_name {
        validate_required("First name", first_name)?;
    }
    if let Some(last_name) = last_name {
        validate_required("Last name", last_name)?;
    }
    Ok(())
}
