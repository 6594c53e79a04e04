//! 教师存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{EDeptError, Result};
use crate::models::{
    teachers::{
        entities::{Teacher, TeacherSortBy},
        requests::TeacherFilter,
    },
    users::{
        entities::UserRole,
        requests::{CreateAccountRequest, UpdateAccountRequest},
    },
};
use crate::utils::search::{matches_any, normalize_search_term};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    /// 创建教师，password 字段已是哈希值
    pub async fn create_teacher_impl(&self, req: CreateAccountRequest) -> Result<Teacher> {
        let now = now_timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(UserRole::Teacher.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建教师失败", e))?;

        Ok(result.into_teacher())
    }

    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教师失败", e))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn get_teacher_by_email_impl(&self, email: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教师失败", e))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 按条件列出教师
    pub async fn list_teachers_impl(&self, filter: TeacherFilter) -> Result<Vec<Teacher>> {
        let order = if filter.sort_descending {
            Order::Desc
        } else {
            Order::Asc
        };
        let select = match filter.sort_by() {
            TeacherSortBy::FirstName => Teachers::find().order_by(Column::FirstName, order),
            TeacherSortBy::LastName => Teachers::find().order_by(Column::LastName, order),
            TeacherSortBy::Email => Teachers::find().order_by(Column::Email, order),
        };

        let mut models = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教师列表失败", e))?;

        if let Some(term) = normalize_search_term(filter.search_term.as_deref()) {
            models.retain(|m| matches_any(&term, &[&m.first_name, &m.last_name, &m.email]));
        }

        Ok(models.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 在该院系任一课程任教的教师
    pub async fn list_teachers_by_department_impl(
        &self,
        department_id: i64,
    ) -> Result<Vec<Teacher>> {
        let subjects = Subjects::find()
            .filter(SubjectColumn::DepartmentId.eq(department_id))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询课程失败", e))?;

        let mut teacher_ids: Vec<i64> = subjects.into_iter().map(|s| s.teacher_id).collect();
        teacher_ids.sort_unstable();
        teacher_ids.dedup();
        if teacher_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Teachers::find()
            .filter(Column::Id.is_in(teacher_ids))
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教师列表失败", e))?;

        Ok(models.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 更新教师，仅写入提供的字段
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        req: UpdateAccountRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id_impl(id).await?.is_none() {
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
            .map_err(|e| EDeptError::from_db("更新教师失败", e))?;

        Ok(Some(result.into_teacher()))
    }

    pub async fn update_teacher_password_impl(&self, id: i64, hash: &str) -> Result<bool> {
        let result = Teachers::update_many()
            .col_expr(Column::PasswordHash, Expr::value(hash.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now_timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新教师密码失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("删除教师失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量查询教师显示名
    pub(super) async fn teacher_names(&self, ids: Vec<i64>) -> Result<HashMap<i64, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Teachers::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询教师名称失败", e))?;

        Ok(models.into_iter().map(|m| (m.id, m.display_name())).collect())
    }
}
