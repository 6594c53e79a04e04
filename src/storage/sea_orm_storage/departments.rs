//! 院系存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{EDeptError, Result};
use crate::models::departments::{
    entities::Department,
    requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    /// 创建院系
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = now_timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建院系失败", e))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询院系失败", e))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 通过名称获取院系
    pub async fn get_department_by_name_impl(&self, name: &str) -> Result<Option<Department>> {
        let result = Departments::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询院系失败", e))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 列出全部院系
    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let models = Departments::find()
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询院系列表失败", e))?;

        Ok(models.into_iter().map(|m| m.into_department()).collect())
    }

    /// 更新院系名称
    pub async fn update_department_impl(
        &self,
        id: i64,
        req: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        // 先检查院系是否存在
        let existing = self.get_department_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新院系失败", e))?;

        self.get_department_by_id_impl(id).await
    }

    /// 删除院系
    pub async fn delete_department_impl(&self, id: i64) -> Result<bool> {
        let result = Departments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("删除院系失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量查询院系名称
    pub(super) async fn department_names(&self, ids: Vec<i64>) -> Result<HashMap<i64, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Departments::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询院系名称失败", e))?;

        Ok(models.into_iter().map(|m| (m.id, m.name)).collect())
    }
}
