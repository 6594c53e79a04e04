//! 服务层测试共用的内存数据库与基础数据

use std::sync::Arc;

use crate::models::{
    departments::{entities::Department, requests::CreateDepartmentRequest},
    groups::{entities::Group, requests::CreateGroupRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachers::entities::Teacher,
    users::requests::CreateAccountRequest,
};
use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use crate::utils::password::hash_password;

pub const PASSWORD: &str = "Str0ngPassw0rd";

pub async fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(SeaOrmStorage::new_in_memory().await.unwrap())
}

/// CS 院系、G1 班组、学生 Alice、教师 Bob 与 Bob 教授的 Algorithms 课程
pub struct World {
    pub storage: Arc<dyn Storage>,
    pub department: Department,
    pub group: Group,
    pub student: Student,
    pub teacher: Teacher,
    pub subject: Subject,
}

impl World {
    pub async fn seed() -> Self {
        let storage = memory_storage().await;

        let department = storage
            .create_department(CreateDepartmentRequest {
                name: "CS".to_string(),
            })
            .await
            .unwrap();
        let group = storage
            .create_group(CreateGroupRequest {
                name: "G1".to_string(),
                department_id: department.id,
            })
            .await
            .unwrap();
        let student = storage
            .create_student(CreateStudentRequest {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                email: "a@x.com".to_string(),
                password: hash_password(PASSWORD).unwrap(),
                group_id: group.id,
            })
            .await
            .unwrap();
        let teacher = storage
            .create_teacher(CreateAccountRequest {
                first_name: "Bob".to_string(),
                last_name: "Jones".to_string(),
                email: "b@x.com".to_string(),
                password: hash_password(PASSWORD).unwrap(),
            })
            .await
            .unwrap();
        let subject = storage
            .create_subject(CreateSubjectRequest {
                name: "Algorithms".to_string(),
                department_id: department.id,
                teacher_id: teacher.id,
                group_id: group.id,
            })
            .await
            .unwrap();

        Self {
            storage,
            department,
            group,
            student,
            teacher,
            subject,
        }
    }

    pub async fn add_teacher(&self, first_name: &str, email: &str) -> Teacher {
        self.storage
            .create_teacher(CreateAccountRequest {
                first_name: first_name.to_string(),
                last_name: "Teacher".to_string(),
                email: email.to_string(),
                password: hash_password(PASSWORD).unwrap(),
            })
            .await
            .unwrap()
    }

    pub async fn add_group(&self, name: &str) -> Group {
        self.storage
            .create_group(CreateGroupRequest {
                name: name.to_string(),
                department_id: self.department.id,
            })
            .await
            .unwrap()
    }

    pub async fn add_student(&self, first_name: &str, email: &str, group_id: i64) -> Student {
        self.storage
            .create_student(CreateStudentRequest {
                first_name: first_name.to_string(),
                last_name: "Student".to_string(),
                email: email.to_string(),
                password: hash_password(PASSWORD).unwrap(),
                group_id,
            })
            .await
            .unwrap()
    }
}
