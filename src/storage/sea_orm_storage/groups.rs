//! 班组存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::groups::{ActiveModel, Column, Entity as Groups, Model};
use crate::errors::{EDeptError, Result};
use crate::models::groups::{
    entities::{Group, GroupSortBy},
    requests::{CreateGroupRequest, GroupFilter, UpdateGroupRequest},
};
use crate::utils::search::{matches_any, normalize_search_term};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    Set,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    /// 创建班组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<Group> {
        let now = now_timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            department_id: Set(req.department_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建班组失败", e))?;

        self.hydrate_group(result).await
    }

    /// 通过 ID 获取班组
    pub async fn get_group_by_id_impl(&self, id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询班组失败", e))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_group(model).await?)),
            None => Ok(None),
        }
    }

    /// 在院系内按名称精确查找班组
    pub async fn get_group_by_name_impl(
        &self,
        department_id: i64,
        name: &str,
    ) -> Result<Option<Group>> {
        let result = Groups::find()
            .filter(Column::DepartmentId.eq(department_id))
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询班组失败", e))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_group(model).await?)),
            None => Ok(None),
        }
    }

    /// 按条件列出班组
    pub async fn list_groups_impl(&self, filter: GroupFilter) -> Result<Vec<Group>> {
        let mut select = Groups::find();

        // 院系筛选
        if let Some(department_id) = filter.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }

        // 排序
        let order = if filter.sort_descending {
            Order::Desc
        } else {
            Order::Asc
        };
        select = match filter.sort_by() {
            GroupSortBy::Name => select.order_by(Column::Name, order),
            GroupSortBy::DepartmentId => select.order_by(Column::DepartmentId, order),
        };
        select = select.order_by_asc(Column::Id);

        let mut models = select
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询班组列表失败", e))?;

        // 搜索条件（不区分大小写）
        if let Some(term) = normalize_search_term(filter.search_term.as_deref()) {
            models.retain(|m| matches_any(&term, &[&m.name]));
        }

        self.hydrate_groups(models).await
    }

    /// 更新班组
    pub async fn update_group_impl(
        &self,
        id: i64,
        req: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        // 先检查班组是否存在
        let existing = Groups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询班组失败", e))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name),
            department_id: Set(req.department_id),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新班组失败", e))?;

        self.get_group_by_id_impl(id).await
    }

    /// 删除班组
    pub async fn delete_group_impl(&self, id: i64) -> Result<bool> {
        let result = Groups::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("删除班组失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量查询班组原始记录
    pub(super) async fn group_models(&self, ids: Vec<i64>) -> Result<HashMap<i64, Model>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Groups::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询班组失败", e))?;

        Ok(models.into_iter().map(|m| (m.id, m)).collect())
    }

    /// 查询某院系下所有班组的 ID
    pub(super) async fn group_ids_of_department(&self, department_id: i64) -> Result<Vec<i64>> {
        let models = Groups::find()
            .filter(Column::DepartmentId.eq(department_id))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询班组失败", e))?;

        Ok(models.into_iter().map(|m| m.id).collect())
    }

    async fn hydrate_group(&self, model: Model) -> Result<Group> {
        let mut groups = self.hydrate_groups(vec![model]).await?;
        groups
            .pop()
            .ok_or_else(|| EDeptError::database_operation("班组投影为空"))
    }

    /// 补齐院系名称
    async fn hydrate_groups(&self, models: Vec<Model>) -> Result<Vec<Group>> {
        let department_ids = models.iter().map(|m| m.department_id).collect();
        let names = self.department_names(department_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let department_name = names.get(&m.department_id).cloned().unwrap_or_default();
                m.into_group(department_name)
            })
            .collect())
    }
}
