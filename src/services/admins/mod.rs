use std::sync::Arc;

use tracing::info;

use crate::errors::{EDeptError, Result};
use crate::models::{
    admins::Admin,
    users::{
        entities::UserRole,
        requests::{CreateAccountRequest, UpdateAccountRequest},
    },
};
use crate::services::{
    identity::{ensure_email_available, validate_account_overlay, validate_new_account},
    transaction::finish,
};
use crate::storage::Storage;
use crate::utils::password::hash_password;

pub struct AdminService {
    storage: Arc<dyn Storage>,
}

impl AdminService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list_admins(&self) -> Result<Vec<Admin>> {
        self.storage.list_admins().await
    }

    pub async fn get_admin(&self, id: i64) -> Result<Admin> {
        self.storage
            .get_admin_by_id(id)
            .await?
            .ok_or_else(|| EDeptError::entity_not_found("Admin", id))
    }

    pub async fn create_admin(&self, req: CreateAccountRequest) -> Result<Admin> {
        validate_new_account(&req)?;

        let tx = self.storage.begin().await?;
        let result = create(tx.storage(), req).await;
        let admin = finish(tx, result).await?;

        info!("Admin {} created", admin.id);
        Ok(admin)
    }

    pub async fn update_admin(&self, id: i64, req: UpdateAccountRequest) -> Result<Admin> {
        validate_account_overlay(
            req.first_name.as_deref(),
            req.last_name.as_deref(),
            req.email.as_deref(),
        )?;

        let tx = self.storage.begin().await?;
        let result = update(tx.storage(), id, req).await;
        let admin = finish(tx, result).await?;

        info!("Admin {} updated", id);
        Ok(admin)
    }

    pub async fn delete_admin(&self, id: i64) -> Result<()> {
        let tx = self.storage.begin().await?;
        let result = tx.storage().delete_admin(id).await;
        if finish(tx, result).await? {
            info!("Admin {} deleted", id);
        }
        Ok(())
    }
}

async fn create(storage: &dyn Storage, mut req: CreateAccountRequest) -> Result<Admin> {
    ensure_email_available(storage, UserRole::Admin, &req.email, None).await?;
    req.password = hash_password(&req.password)?;
    storage.create_admin(req).await
}

async fn update(storage: &dyn Storage, id: i64, req: UpdateAccountRequest) -> Result<Admin> {
    if storage.get_admin_by_id(id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Admin", id));
    }
    if let Some(email) = &req.email {
        ensure_email_available(storage, UserRole::Admin, email, Some(id)).await?;
    }
    storage
        .update_admin(id, req)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Admin", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{PASSWORD, memory_storage};

    fn account(email: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            first_name: "Ada".to_string(),
            last_name: "Root".to_string(),
            email: email.to_string(),
            password: PASSWORD.to_string(),
        }
    }

    #[tokio::test]
    async fn test_admin_email_unique_within_store() {
        let service = AdminService::new(memory_storage().await);

        let admin = service.create_admin(account("root@x.com")).await.unwrap();
        assert_eq!(admin.role, UserRole::Admin);

        let err = service.create_admin(account("root@x.com")).await.unwrap_err();
        assert!(matches!(err, EDeptError::Validation(_)));
        assert_eq!(service.list_admins().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_admin_is_not_found() {
        let service = AdminService::new(memory_storage().await);

        let err = service
            .update_admin(7, UpdateAccountRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EDeptError::NotFound(_)));
        service.delete_admin(7).await.unwrap();
    }
}
