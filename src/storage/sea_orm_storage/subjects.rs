//! 课程存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects, Model};
use crate::errors::{EDeptError, Result};
use crate::models::subjects::{
    entities::{Subject, SubjectSortBy},
    requests::{CreateSubjectRequest, SubjectFilter, UpdateSubjectRequest},
};
use crate::utils::search::{matches_any, normalize_search_term};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    Set,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    /// 创建课程
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = now_timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            department_id: Set(req.department_id),
            teacher_id: Set(req.teacher_id),
            group_id: Set(req.group_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建课程失败", e))?;

        self.hydrate_subject(result).await
    }

    /// 通过 ID 获取课程
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询课程失败", e))?;

        match result {
            Some(model) => Ok(Some(self.hydrate_subject(model).await?)),
            None => Ok(None),
        }
    }

    /// 按条件列出课程
    pub async fn list_subjects_impl(&self, filter: SubjectFilter) -> Result<Vec<Subject>> {
        let mut select = Subjects::find();

        if let Some(department_id) = filter.department_id {
            select = select.filter(Column::DepartmentId.eq(department_id));
        }
        if let Some(teacher_id) = filter.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(group_id) = filter.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        let order = if filter.sort_descending {
            Order::Desc
        } else {
            Order::Asc
        };
        select = match filter.sort_by() {
            SubjectSortBy::Name => select.order_by(Column::Name, order),
        };

        let mut models = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询课程列表失败", e))?;

        if let Some(term) = normalize_search_term(filter.search_term.as_deref()) {
            models.retain(|m| matches_any(&term, &[&m.name]));
        }

        self.hydrate_subjects(models).await
    }

    /// 更新课程
    pub async fn update_subject_impl(
        &self,
        id: i64,
        req: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询课程失败", e))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name),
            department_id: Set(req.department_id),
            teacher_id: Set(req.teacher_id),
            group_id: Set(req.group_id),
            updated_at: Set(now_timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新课程失败", e))?;

        Ok(Some(self.hydrate_subject(result).await?))
    }

    /// 删除课程，选课记录级联删除
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("删除课程失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量查询课程原始记录
    pub(super) async fn subject_models(&self, ids: Vec<i64>) -> Result<HashMap<i64, Model>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = Subjects::find()
            .filter(Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询课程失败", e))?;

        Ok(models.into_iter().map(|m| (m.id, m)).collect())
    }

    /// 某教师任教的所有课程 ID
    pub(super) async fn subject_ids_of_teacher(&self, teacher_id: i64) -> Result<Vec<i64>> {
        let models = Subjects::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询课程失败", e))?;

        Ok(models.into_iter().map(|m| m.id).collect())
    }

    async fn hydrate_subject(&self, model: Model) -> Result<Subject> {
        let mut subjects = self.hydrate_subjects(vec![model]).await?;
        subjects
            .pop()
            .ok_or_else(|| EDeptError::database_operation("课程投影为空"))
    }

    /// 补齐院系、教师与班组名称
    pub(super) async fn hydrate_subjects(&self, models: Vec<Model>) -> Result<Vec<Subject>> {
        let departments = self
            .department_names(models.iter().map(|m| m.department_id).collect())
            .await?;
        let teachers = self
            .teacher_names(models.iter().map(|m| m.teacher_id).collect())
            .await?;
        let groups = self
            .group_models(models.iter().map(|m| m.group_id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let department_name = departments.get(&m.department_id).cloned().unwrap_or_default();
                let teacher_name = teachers.get(&m.teacher_id).cloned().unwrap_or_default();
                let group_name = groups
                    .get(&m.group_id)
                    .map(|g| g.name.clone())
                    .unwrap_or_default();
                m.into_subject(department_name, teacher_name, group_name)
            })
            .collect())
    }
}
