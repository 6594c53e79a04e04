use std::sync::Arc;

use tracing::info;

use crate::errors::{EDeptError, Result};
use crate::models::{
    managers::Manager,
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

pub struct ManagerService {
    storage: Arc<dyn Storage>,
}

impl ManagerService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list_managers(&self) -> Result<Vec<Manager>> {
        self.storage.list_managers().await
    }

    pub async fn get_manager(&self, id: i64) -> Result<Manager> {
        self.storage
            .get_manager_by_id(id)
            .await?
            .ok_or_else(|| EDeptError::entity_not_found("Manager", id))
    }

    pub async fn create_manager(&self, req: CreateAccountRequest) -> Result<Manager> {
        validate_new_account(&req)?;

        let tx = self.storage.begin().await?;
        let result = create(tx.storage(), req).await;
        let manager = finish(tx, result).await?;

        info!("Manager {} created", manager.id);
        Ok(manager)
    }

    pub async fn update_manager(&self, id: i64, req: UpdateAccountRequest) -> Result<Manager> {
        validate_account_overlay(
            req.first_name.as_deref(),
            req.last_name.as_deref(),
            req.email.as_deref(),
        )?;

        let tx = self.storage.begin().await?;
        let result = update(tx.storage(), id, req).await;
        let manager = finish(tx, result).await?;

        info!("Manager {} updated", id);
        Ok(manager)
    }

    pub async fn delete_manager(&self, id: i64) -> Result<()> {
        let tx = self.storage.begin().await?;
        let result = tx.storage().delete_manager(id).await;
        if finish(tx, result).await? {
            info!("Manager {} deleted", id);
        }
        Ok(())
    }
}

async fn create(storage: &dyn Storage, mut req: CreateAccountRequest) -> Result<Manager> {
    ensure_email_available(storage, UserRole::Manager, &req.email, None).await?;
    req.password = hash_password(&req.password)?;
    storage.create_manager(req).await
}

async fn update(storage: &dyn Storage, id: i64, req: UpdateAccountRequest) -> Result<Manager> {
    if storage.get_manager_by_id(id).await?.is_none() {
        return Err(EDeptError::entity_not_found("Manager", id));
    }
    if let Some(email) = &req.email {
        ensure_email_available(storage, UserRole::Manager, email, Some(id)).await?;
    }
    storage
        .update_manager(id, req)
        .await?
        .ok_or_else(|| EDeptError::entity_not_found("Manager", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{PASSWORD, memory_storage};

    #[tokio::test]
    async fn test_manager_crud() {
        let service = ManagerService::new(memory_storage().await);

        let manager = service
            .create_manager(CreateAccountRequest {
                first_name: "Mia".to_string(),
                last_name: "Moss".to_string(),
                email: "m@x.com".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap();
        assert_eq!(manager.role, UserRole::Manager);

        let updated = service
            .update_manager(
                manager.id,
                UpdateAccountRequest {
                    first_name: Some("Maya".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Maya");
        assert_eq!(updated.email, "m@x.com");

        service.delete_manager(manager.id).await.unwrap();
        service.delete_manager(manager.id).await.unwrap();
        assert!(service.list_managers().await.unwrap().is_empty());
        assert!(matches!(
            service.get_manager(manager.id).await.unwrap_err(),
            EDeptError::NotFound(_)
        ));
    }
}
