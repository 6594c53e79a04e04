//! 选课与成绩存储操作

use super::{SeaOrmStorage, now_timestamp};
use crate::entity::student_subjects::{ActiveModel, Column, Entity as StudentSubjects, Model};
use crate::errors::{EDeptError, Result};
use crate::models::{
    grades::{
        entities::{Grade, GradeId, StudentSubject},
        requests::GradeFilter,
    },
    subjects::entities::Subject,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl<C: ConnectionTrait> SeaOrmStorage<C> {
    /// 获取选课记录（含未评分）
    pub async fn get_student_subject_impl(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<StudentSubject>> {
        let result = StudentSubjects::find_by_id((student_id, subject_id))
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询选课记录失败", e))?;

        Ok(result.map(|m| m.into_student_subject()))
    }

    /// 创建选课记录
    pub async fn create_student_subject_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        grade: Option<i32>,
    ) -> Result<StudentSubject> {
        let model = ActiveModel {
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            grade: Set(grade),
            updated_at: Set(now_timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("创建选课记录失败", e))?;

        Ok(result.into_student_subject())
    }

    /// 设置或清除成绩，记录本身保留
    pub async fn set_student_subject_grade_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        grade: Option<i32>,
    ) -> Result<bool> {
        let result = StudentSubjects::update_many()
            .col_expr(Column::Grade, Expr::value(grade))
            .col_expr(Column::UpdatedAt, Expr::value(now_timestamp()))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .exec(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("更新成绩失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取成绩投影，未评分返回 None
    pub async fn get_grade_impl(&self, id: GradeId) -> Result<Option<Grade>> {
        let result = StudentSubjects::find_by_id((id.student_id, id.subject_id))
            .filter(Column::Grade.is_not_null())
            .one(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询成绩失败", e))?;

        match result {
            Some(model) => Ok(self.hydrate_grades(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 按条件列出已评分的成绩
    pub async fn list_grades_impl(&self, filter: GradeFilter) -> Result<Vec<Grade>> {
        let mut select = StudentSubjects::find().filter(Column::Grade.is_not_null());

        if let Some(student_id) = filter.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(subject_id) = filter.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        // 教师筛选转换为其任教课程筛选
        if let Some(teacher_id) = filter.teacher_id {
            let subject_ids = self.subject_ids_of_teacher(teacher_id).await?;
            if subject_ids.is_empty() {
                return Ok(Vec::new());
            }
            select = select.filter(Column::SubjectId.is_in(subject_ids));
        }
        if let Some(min_grade) = filter.min_grade {
            select = select.filter(Column::Grade.gte(min_grade));
        }
        if let Some(max_grade) = filter.max_grade {
            select = select.filter(Column::Grade.lte(max_grade));
        }

        let models = select
            .order_by_asc(Column::StudentId)
            .order_by_asc(Column::SubjectId)
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询成绩列表失败", e))?;

        self.hydrate_grades(models).await
    }

    /// 学生有选课记录的所有课程
    pub async fn list_student_subjects_impl(&self, student_id: i64) -> Result<Vec<Subject>> {
        let enrollments = StudentSubjects::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| EDeptError::from_db("查询选课记录失败", e))?;

        let subject_ids = enrollments.iter().map(|m| m.subject_id).collect();
        let subjects = self.subject_models(subject_ids).await?;

        let mut models: Vec<_> = subjects.into_values().collect();
        models.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        self.hydrate_subjects(models).await
    }

    /// 补齐学生、课程与教师信息，跳过未评分记录
    async fn hydrate_grades(&self, models: Vec<Model>) -> Result<Vec<Grade>> {
        let students = self
            .student_models(models.iter().map(|m| m.student_id).collect())
            .await?;
        let subjects = self
            .subject_models(models.iter().map(|m| m.subject_id).collect())
            .await?;
        let teachers = self
            .teacher_names(subjects.values().map(|s| s.teacher_id).collect())
            .await?;

        Ok(models
            .into_iter()
            .filter_map(|m| {
                let grade = m.grade?;
                let student_name = students
                    .get(&m.student_id)
                    .map(|s| s.display_name())
                    .unwrap_or_default();
                let (subject_name, teacher_id) = subjects
                    .get(&m.subject_id)
                    .map(|s| (s.name.clone(), s.teacher_id))
                    .unwrap_or_default();
                let teacher_name = teachers.get(&teacher_id).cloned().unwrap_or_default();

                Some(Grade {
                    id: GradeId::new(m.student_id, m.subject_id).to_string(),
                    student_id: m.student_id,
                    student_name,
                    subject_id: m.subject_id,
                    subject_name,
                    teacher_id,
                    teacher_name,
                    grade,
                })
            })
            .collect())
    }
}
