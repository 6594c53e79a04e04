use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 事务
    // 开启一个事务，返回的句柄同样实现 Storage
    async fn begin(&self) -> Result<Box<dyn StorageTransaction>>;

    /// 院系管理方法
    // 创建院系
    async fn create_department(&self, req: CreateDepartmentRequest) -> Result<Department>;
    // 通过ID获取院系
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 通过名称获取院系
    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>>;
    // 列出院系
    async fn list_departments(&self) -> Result<Vec<Department>>;
    // 更新院系
    async fn update_department(
        &self,
        id: i64,
        req: UpdateDepartmentRequest,
    ) -> Result<Option<Department>>;
    // 删除院系
    async fn delete_department(&self, id: i64) -> Result<bool>;

    /// 班组管理方法
    // 创建班组
    async fn create_group(&self, req: CreateGroupRequest) -> Result<Group>;
    // 通过ID获取班组
    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>>;
    // 在院系内按名称精确查找班组
    async fn get_group_by_name(&self, department_id: i64, name: &str) -> Result<Option<Group>>;
    // 按条件列出班组
    async fn list_groups(&self, filter: GroupFilter) -> Result<Vec<Group>>;
    // 更新班组
    async fn update_group(&self, id: i64, req: UpdateGroupRequest) -> Result<Option<Group>>;
    // 删除班组
    async fn delete_group(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生（password 已是哈希值）
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过邮箱获取学生
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 按条件列出学生
    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<Student>>;
    // 更新学生
    async fn update_student(&self, id: i64, req: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    async fn create_teacher(&self, req: CreateAccountRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    async fn list_teachers(&self, filter: TeacherFilter) -> Result<Vec<Teacher>>;
    // 在该院系任一课程任教的教师
    async fn list_teachers_by_department(&self, department_id: i64) -> Result<Vec<Teacher>>;
    async fn update_teacher(&self, id: i64, req: UpdateAccountRequest)
    -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 教务管理者管理方法
    async fn create_manager(&self, req: CreateAccountRequest) -> Result<Manager>;
    async fn get_manager_by_id(&self, id: i64) -> Result<Option<Manager>>;
    async fn get_manager_by_email(&self, email: &str) -> Result<Option<Manager>>;
    async fn list_managers(&self) -> Result<Vec<Manager>>;
    async fn update_manager(&self, id: i64, req: UpdateAccountRequest)
    -> Result<Option<Manager>>;
    async fn delete_manager(&self, id: i64) -> Result<bool>;

    /// 管理员管理方法
    async fn create_admin(&self, req: CreateAccountRequest) -> Result<Admin>;
    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>>;
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;
    async fn list_admins(&self) -> Result<Vec<Admin>>;
    async fn update_admin(&self, id: i64, req: UpdateAccountRequest) -> Result<Option<Admin>>;
    async fn delete_admin(&self, id: i64) -> Result<bool>;
    // 统计管理员数量
    async fn count_admins(&self) -> Result<u64>;

    /// 身份通用方法
    // 更新指定角色身份的密码哈希
    async fn update_password_hash(&self, role: UserRole, id: i64, hash: &str) -> Result<bool>;

    /// 课程管理方法
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects(&self, filter: SubjectFilter) -> Result<Vec<Subject>>;
    async fn update_subject(&self, id: i64, req: UpdateSubjectRequest)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 选课与成绩方法
    // 获取选课记录（含未评分）
    async fn get_student_subject(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<Option<StudentSubject>>;
    // 创建选课记录
    async fn create_student_subject(
        &self,
        student_id: i64,
        subject_id: i64,
        grade: Option<i32>,
    ) -> Result<StudentSubject>;
    // 设置或清除成绩，记录本身保留
    async fn set_student_subject_grade(
        &self,
        student_id: i64,
        subject_id: i64,
        grade: Option<i32>,
    ) -> Result<bool>;
    // 获取成绩投影，未评分返回 None
    async fn get_grade(&self, id: GradeId) -> Result<Option<Grade>>;
    // 按条件列出已评分的成绩
    async fn list_grades(&self, filter: GradeFilter) -> Result<Vec<Grade>>;
    // 学生有选课记录的所有课程
    async fn list_student_subjects(&self, student_id: i64) -> Result<Vec<Subject>>;
}

/// 工作单元：在同一事务中执行多步存储操作
#[async_trait::async_trait]
pub trait StorageTransaction: Storage {
    // 以 Storage 视图使用事务
    fn storage(&self) -> &dyn Storage;
    // 提交
    async fn commit(self: Box<Self>) -> Result<()>;
    // 回滚
    async fn rollback(self: Box<Self>) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
