//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! `SeaOrmStorage<C>` 既可以包装连接池，也可以包装一个已开启的事务。

mod admins;
mod departments;
mod grades;
mod groups;
mod managers;
mod students;
mod subjects;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{EDeptError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    TransactionTrait,
};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage<C = DatabaseConnection> {
    pub(crate) db: C,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::from_connection(db).await
    }

    /// 在已有连接上运行迁移并创建存储
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| EDeptError::from_db("数据库迁移失败", e))?;

        info!("SeaORM 存储初始化完成");

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EDeptError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EDeptError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EDeptError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EDeptError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 单连接内存 SQLite，供测试使用
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| EDeptError::database_config(e.to_string()))?
            .foreign_keys(true);

        // 内存库随连接销毁，连接池固定为一条常驻连接
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| EDeptError::database_connection(e.to_string()))?;

        Self::from_connection(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)).await
    }
}

/// 当前时间戳（秒）
pub(crate) fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

// Storage trait 实现
use crate::models::{
    admins::Admin,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, UpdateDepartmentRequest},
    },
    grades::{
        entities::{Grade, GradeId, StudentSubject},
        requests::GradeFilter,
    },
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, GroupFilter, UpdateGroupRequest},
    },
    managers::Manager,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentFilter, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectFilter, UpdateSubjectRequest},
    },
    teachers::{entities::Teacher, requests::TeacherFilter},
    users::{
        entities::UserRole,
        requests::{CreateAccountRequest, UpdateAccountRequest},
    },
};
use crate::storage::{Storage, StorageTransaction};
use async_trait::async_trait;

#[async_trait]
impl<C> Storage for SeaOrmStorage<C>
where
    C: ConnectionTrait
        + TransactionTrait<Transaction = DatabaseTransaction>
        + Send
        + Sync
        + 'static,
{
    async fn begin(&self) -> Result<Box<dyn StorageTransaction>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EDeptError::from_db("开启事务失败", e))?;
        Ok(Box::new(SeaOrmStorage { db: txn }))
    }

    // 院系模块
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department> {
        self.create_department_impl(req).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>> {
        self.get_department_by_name_impl(name).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn update_department(
        &self,
        id: i64,
        req: UpdateDepartmentRequest,
    ) -> Result<Option<Department>> {
        self.update_department_impl(id, req).await
    }

    async fn delete_department(&self, id: i64) -> Result<bool> {
        self.delete_department_impl(id).await
    }

    // 班组模块
    async fn create_group(&self, req: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(req).await
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(id).await
    }

    async fn get_group_by_name(&self, department_id: i64, name: &str) -> Result<Option<Group>> {
        self.get_group_by_name_impl(department_id, name).await
    }

    async fn list_groups(&self, filter: GroupFilter) -> Result<Vec<Group>> {
        self.list_groups_impl(filter).await
    }

    async fn update_group(&self, id: i64, req: UpdateGroupRequest) -> Result<Option<Group>> {
        self.update_group_impl(id, req).await
    }

    async fn delete_group(&self, id: i64) -> Result<bool> {
        self.delete_group_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<Student>> {
        self.list_students_impl(filter).await
    }

    async fn update_student(
        &self,
        id: i64,
        req: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, req).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, req: CreateAccountRequest) -> Result<Teacher> {
        self.create_teacher_impl(req).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_email_impl(email).await
    }

    async fn list_teachers(&self, filter: TeacherFilter) -> Result<Vec<Teacher>> {
        self.list_teachers_impl(filter).await
    }

    async fn list_teachers_by_department(&self, department_id: i64) -> Result<Vec<Teacher>> {
        self.list_teachers_by_department_impl(department_id).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        req: UpdateAccountRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, req).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 教务管理者模块
    async fn create_manager(&self, req: CreateAccountRequest) -> Result<Manager> {
        self.create_manager_impl(req).await
    }

    async fn get_manager_by_id(&self, id: i64) -> Result<Option<Manager>> {
        self.get_manager_by_id_impl(id).await
    }

    async fn get_manager_by_email(&self, email: &str) -> Result<Option<Manager>> {
        self.get_manager_by_email_impl(email).await
    }

    async fn list_managers(&self) -> Result<Vec<Manager>> {
        self.list_managers_impl().await
    }

    async fn update_manager(
        &self,
        id: i64,
        req: UpdateAccountRequest,
    ) -> Result<Option<Manager>> {
        self.update_manager_impl(id, req).await
    }

    async fn delete_manager(&self, id: i64) -> Result<bool> {
        self.delete_manager_impl(id).await
    }

    // 管理员模块
    async fn create_admin(&self, req: CreateAccountRequest) -> Result<Admin> {
        self.create_admin_impl(req).await
    }

    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>> {
        self.get_admin_by_id_impl(id).await
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        self.get_admin_by_email_impl(email).await
    }

    async fn list_admins(&self) -> Result<Vec<Admin>> {
        self.list_admins_impl().await
    }

    async fn update_admin(&self, id: i64, req: UpdateAccountRequest) -> Result<Option<Admin>> {
        self.update_admin_impl(id, req).await
    }

    async fn delete_admin(&self, id: i64) -> Result<bool> {
        self.delete_admin_impl(id).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    async fn update_password_hash(&self, role: UserRole, id: i64, hash: &str) -> Result<bool> {
        match role {
            UserRole::Student => self.update_student_password_impl(id, hash).await,
            UserRole::Teacher => self.update_teacher_password_impl(id, hash).await,
            UserRole::Manager => self.update_manager_password_impl(id, hash).await,
            UserRole::Admin => self.update_admin_password_impl(id, hash).await,
        }
    }

    // 课程模块
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self, filter: SubjectFilter) -> Result<Vec<Subject>> {
        self.list_subjects_impl(filter).await
    }

    async fn update_subject(
        &self,
        id: i64,
        req: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, req).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 选课与成绩模块
    async fn get_student_subject(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<StudentSubject>> {
        self.get_student_subject_impl(student_id, subject_id).await
    }

    async fn create_student_subject(
        &self,
        student_id: i64,
        subject_id: i64,
        grade: Option<i32>,
    ) -> Result<StudentSubject> {
        self.create_student_subject_impl(student_id, subject_id, grade)
            .await
    }

    async fn set_student_subject_grade(
        &self,
        student_id: i64,
        subject_id: i64,
        grade: Option<i32>,
    ) -> Result<bool> {
        self.set_student_subject_grade_impl(student_id, subject_id, grade)
            .await
    }

    async fn get_grade(&self, id: GradeId) -> Result<Option<Grade>> {
        self.get_grade_impl(id).await
    }

    async fn list_grades(&self, filter: GradeFilter) -> Result<Vec<Grade>> {
        self.list_grades_impl(filter).await
    }

    async fn list_student_subjects(&self, student_id: i64) -> Result<Vec<Subject>> {
        self.list_student_subjects_impl(student_id).await
    }
}

#[async_trait]
impl StorageTransaction for SeaOrmStorage<DatabaseTransaction> {
    fn storage(&self) -> &dyn Storage {
        self
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.db
            .commit()
            .await
            .map_err(|e| EDeptError::from_db("提交事务失败", e))
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.db
            .rollback()
            .await
            .map_err(|e| EDeptError::from_db("回滚事务失败", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("data.db").unwrap(),
            "sqlite://data.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/edept").unwrap(),
            "postgres://u:p@localhost/edept"
        );
        assert!(matches!(
            SeaOrmStorage::build_database_url("ftp://nowhere"),
            Err(EDeptError::DatabaseConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_rolled_back_transaction_leaves_no_trace() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();

        let tx = storage.begin().await.unwrap();
        tx.storage()
            .create_department(CreateDepartmentRequest {
                name: "Ghost".to_string(),
            })
            .await
            .unwrap();
        tx.rollback().await.unwrap();

        assert!(storage.get_department_by_name("Ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_committed_transaction_is_visible() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();

        let tx = storage.begin().await.unwrap();
        let created = tx
            .storage()
            .create_department(CreateDepartmentRequest {
                name: "CS".to_string(),
            })
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let found = storage.get_department_by_id(created.id).await.unwrap();
        assert_eq!(found.map(|d| d.name), Some("CS".to_string()));
    }

    #[tokio::test]
    async fn test_pool_exhaustion_surfaces_as_timeout() {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(Duration::from_millis(200))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .unwrap();
        let storage =
            SeaOrmStorage::from_connection(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
                .await
                .unwrap();

        // 占住唯一的连接
        let held = storage.begin().await.unwrap();

        let err = storage.begin().await.err().unwrap();
        assert!(matches!(err, EDeptError::Timeout(_)), "{err:?}");

        let err = storage.get_department_by_id(1).await.unwrap_err();
        assert!(matches!(err, EDeptError::Timeout(_)), "{err:?}");

        held.rollback().await.unwrap();
        assert!(storage.get_department_by_id(1).await.unwrap().is_none());
    }
}
