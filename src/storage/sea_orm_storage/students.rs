//! 学生存储操作

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model};
use crate::errors::{EDeptError, Result};
use crate::models::{
    students::{
        entities::{Student, StudentSortBy},
        requests::{CreateStudentRequest, StudentFilter, UpdateStudentRequest},
    },
    users::entities::UserRole,
};
use crate::utils::search::{matches_any, normalize_search_term};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    /// 创建学生，password 字段已是哈希值
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = now_timestamp();

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(UserRole::Student.as_str().to_string()),
            group_id: Set(req.group_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建学生失败", e))?;

        self.hydrate_student(result).await
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询学生失败", e))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_student(model).await?)),
            None => Ok(None),
        }
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询学生失败", e))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_student(model).await?)),
            None => Ok(None),
        }
    }

    /// 按条件列出学生
    pub async fn list_students_impl(&self, filter: StudentFilter) -> Result<Vec<Student>> {
        let mut select = Students::find();

        if let Some(group_id) = filter.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        // 院系筛选转换为班组筛选
        if let Some(department_id) = filter.department_id {
            let group_ids = self.group_ids_of_department(department_id).await?;
            if group_ids.is_empty() {
                return Ok(Vec::new());
            }
            select = select.filter(Column::GroupId.is_in(group_ids));
        }

        let order = if filter.sort_descending {
            Order::Desc
        } else {
            Order::Asc
        };
        select = match filter.sort_by() {
            StudentSortBy::FirstName => select.order_by(Column::FirstName, order),
            StudentSortBy::LastName => select.order_by(Column::LastName, order),
        };
        select = select.order_by_asc(Column::Id);

        let mut models = select
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询学生列表失败", e))?;

        // 搜索姓、名与邮箱
        if let Some(term) = normalize_search_term(filter.search_term.as_deref()) {
            models.retain(|m| matches_any(&term, &[&m.first_name, &m.last_name, &m.email]));
        }

        self.hydrate_students(models).await
    }

    /// 更新学生，仅写入提供的字段
    pub async fn update_student_impl(
        &self,
        id: i64,
        req: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询学生失败", e))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            first_name: req.first_name.map(Set).unwrap_or(NotSet),
            last_name: req.last_name.map(Set).unwrap_or(NotSet),
            email: req.email.map(Set).unwrap_or(NotSet),
            group_id: req.group_id.map(Set).unwrap_or(NotSet),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    /// 更新学生密码哈希
    pub async fn update_student_password_impl(&self, id: i64, hash: &str) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(Column::PasswordHash, Expr::value(hash.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now_timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新学生密码失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除学生，选课记录级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("删除学生失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量查询学生原始记录
    pub(super) async fn student_models(
        &self,
        ids: Vec<i64>,
    ) -> Result<std::collections::HashMap<i64, Model>> {
        if ids.is_empty() {
            return Ok(Default::default());
        }

        let models = Students::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询学生失败", e))?;

        Ok(models.into_iter().map(|m| (m.id, m)).collect())
    }

    async fn hydrate_student(&self, model: Model) -> Result<Student> {
        let mut students = self.hydrate_students(vec![model]).await?;
        students
            .pop()
            .ok_or_else(|| EDeptError::database_operation("学生投影为空"))
    }

    /// 补齐班组与院系信息
    async fn hydrate_students(&self, models: Vec<Model>) -> Result<Vec<Student>> {
        let group_ids = models.iter().map(|m| m.group_id).collect();
        let groups = self.group_models(group_ids).await?;

        let department_ids = groups.values().map(|g| g.department_id).collect();
        let departments = self.department_names(department_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let (group_name, department_id) = groups
                    .get(&m.group_id)
                    .map(|g| (g.name.clone(), g.department_id))
                    .unwrap_or_default();
                let department_name = departments.get(&department_id).cloned().unwrap_or_default();
                m.into_student(group_name, department_id, department_name)
            })
            .collect())
    }
}
