//! 教务管理者存储操作

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::managers::{ActiveModel, Column, Entity as Managers};
use crate::errors::{EDeptError, Result};
use crate::models::{
    managers::Manager,
    users::{
        entities::UserRole,
        requests::{CreateAccountRequest, UpdateAccountRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set, sea_query::Expr,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    pub async fn create_manager_impl(&self, req: CreateAccountRequest) -> Result<Manager> {
        let now = now_timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(UserRole::Manager.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建教务管理者失败", e))?;

        Ok(result.into_manager())
    }

    pub async fn get_manager_by_id_impl(&self, id: i64) -> Result<Option<Manager>> {
        let result = Managers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教务管理者失败", e))?;

        Ok(result.map(|m| m.into_manager()))
    }

    pub async fn get_manager_by_email_impl(&self, email: &str) -> Result<Option<Manager>> {
        let result = Managers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教务管理者失败", e))?;

        Ok(result.map(|m| m.into_manager()))
    }

    pub async fn list_managers_impl(&self) -> Result<Vec<Manager>> {
        let models = Managers::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教务管理者列表失败", e))?;

        Ok(models.into_iter().map(|m| m.into_manager()).collect())
    }

    pub async fn update_manager_impl(
        &self,
        id: i64,
        req: UpdateAccountRequest,
    ) -> Result<Option<Manager>> {
        if self.get_manager_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            first_name: req.first_name.map(Set).unwrap_or(NotSet),
            last_name: req.last_name.map(Set).unwrap_or(NotSet),
            email: req.email.map(Set).unwrap_or(NotSet),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新教务管理者失败", e))?;

        Ok(Some(result.into_manager()))
    }

    pub async fn update_manager_password_impl(&self, id: i64, hash: &str) -> Result<bool> {
        let result = Managers::update_many()
            .col_expr(Column::PasswordHash, Expr::value(hash.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now_timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新教务管理者密码失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_manager_impl(&self, id: i64) -> Result<bool> {
        let result = Managers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("删除教务管理者失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
