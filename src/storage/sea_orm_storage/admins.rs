//! 管理员存储操作

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::{EDeptError, Result};
use crate::models::{
    admins::Admin,
    users::{
        entities::UserRole,
        requests::{CreateAccountRequest, UpdateAccountRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, sea_query::Expr,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    pub async fn create_admin_impl(&self, req: CreateAccountRequest) -> Result<Admin> {
        let now = now_timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(UserRole::Admin.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建管理员失败", e))?;

        Ok(result.into_admin())
    }

    pub async fn get_admin_by_id_impl(&self, id: i64) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询管理员失败", e))?;

        Ok(result.map(|m| m.into_admin()))
    }

    pub async fn get_admin_by_email_impl(&self, email: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询管理员失败", e))?;

        Ok(result.map(|m| m.into_admin()))
    }

    pub async fn list_admins_impl(&self) -> Result<Vec<Admin>> {
        let models = Admins::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询管理员列表失败", e))?;

        Ok(models.into_iter().map(|m| m.into_admin()).collect())
    }

    pub async fn update_admin_impl(
        &self,
        id: i64,
        req: UpdateAccountRequest,
    ) -> Result<Option<Admin>> {
        if self.get_admin_by_id_impl(id).await?.is_none() {
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
            .map_err(|e| EDeptError::from_db("更新管理员失败", e))?;

        Ok(Some(result.into_admin()))
    }

    pub async fn update_admin_password_impl(&self, id: i64, hash: &str) -> Result<bool> {
        let result = Admins::update_many()
            .col_expr(Column::PasswordHash, Expr::value(hash.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now_timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新管理员密码失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_admin_impl(&self, id: i64) -> Result<bool> {
        let result = Admins::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("删除管理员失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计管理员数量
    pub async fn count_admins_impl(&self) -> Result<u64> {
        Admins::find()
            .count(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("统计管理员失败", e))
    }
}
