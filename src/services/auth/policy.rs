//! 角色访问策略：(角色, 操作) -> 允许 / 拒绝

use crate::errors::{EDeptError, Result};
use crate::models::users::entities::UserRole;

const ALL_ROLES: &[UserRole] = &[
    UserRole::Student,
    UserRole::Teacher,
    UserRole::Manager,
    UserRole::Admin,
];
const STAFF: &[UserRole] = &[UserRole::Manager, UserRole::Admin, UserRole::Teacher];
const OFFICE: &[UserRole] = &[UserRole::Admin, UserRole::Manager];
const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const TEACHER_ONLY: &[UserRole] = &[UserRole::Teacher];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListDepartments,
    GetDepartment,
    CreateDepartment,
    UpdateDepartment,
    DeleteDepartment,
    ListDepartmentSubjects,
    ListDepartmentTeachers,
    ListDepartmentGroups,

    ListGroups,
    GetGroup,
    CreateGroup,
    UpdateGroup,
    DeleteGroup,

    ListStudents,
    GetStudent,
    ListStudentGrades,
    ListStudentSubjects,
    CreateStudent,
    UpdateStudent,
    DeleteStudent,

    ListTeachers,
    GetTeacher,
    CreateTeacher,
    UpdateTeacher,
    DeleteTeacher,
    ListTeacherSubjects,
    ListTeacherGrades,
    GetGradeById,
    TeacherAddGrade,

    ManageManagers,
    ManageAdmins,

    ListSubjects,
    GetSubject,
    CreateSubject,
    UpdateSubject,
    DeleteSubject,

    ListGrades,
    AddGrade,
    DeleteGrade,

    ChangePassword,
    CurrentUser,
}

impl Operation {
    /// None 表示公开操作，无需登录
    pub fn allowed_roles(self) -> Option<&'static [UserRole]> {
        use Operation::*;

        match self {
            ListDepartments | ListDepartmentSubjects | ListDepartmentTeachers
            | ListDepartmentGroups | ListTeachers | ListSubjects => None,

            GetDepartment | ListGroups | GetGroup | GetSubject | ListGrades | ChangePassword
            | CurrentUser => Some(ALL_ROLES),

            CreateDepartment | UpdateDepartment | CreateGroup | UpdateGroup | DeleteGroup
            | CreateStudent | UpdateStudent | DeleteStudent | GetTeacher | CreateTeacher
            | UpdateTeacher | DeleteTeacher | CreateSubject | UpdateSubject | DeleteSubject => {
                Some(OFFICE)
            }

            DeleteDepartment | ManageManagers | ManageAdmins => Some(ADMIN_ONLY),

            ListStudents | GetStudent | ListStudentGrades | ListStudentSubjects
            | ListTeacherSubjects | ListTeacherGrades | GetGradeById => Some(STAFF),

            TeacherAddGrade | AddGrade | DeleteGrade => Some(TEACHER_ONLY),
        }
    }

    pub fn is_public(self) -> bool {
        self.allowed_roles().is_none()
    }
}

/// 检查角色是否可以执行操作；公开操作对任何已登录角色同样开放
pub fn authorize(role: UserRole, op: Operation) -> Result<()> {
    match op.allowed_roles() {
        None => Ok(()),
        Some(roles) if roles.contains(&role) => Ok(()),
        Some(_) => Err(EDeptError::authorization(format!(
            "Role {role} is not allowed to perform {op:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_operations() {
        assert!(Operation::ListDepartments.is_public());
        assert!(Operation::ListTeachers.is_public());
        assert!(Operation::ListSubjects.is_public());
        assert!(!Operation::GetSubject.is_public());
    }

    #[test]
    fn test_grade_mutations_are_teacher_only() {
        for op in [
            Operation::AddGrade,
            Operation::DeleteGrade,
            Operation::TeacherAddGrade,
        ] {
            assert!(authorize(UserRole::Teacher, op).is_ok());
            assert!(authorize(UserRole::Admin, op).is_err());
            assert!(authorize(UserRole::Student, op).is_err());
        }
    }

    #[test]
    fn test_account_management_roles() {
        assert!(authorize(UserRole::Admin, Operation::ManageManagers).is_ok());
        assert!(authorize(UserRole::Manager, Operation::ManageManagers).is_err());
        assert!(authorize(UserRole::Manager, Operation::CreateStudent).is_ok());
        assert!(authorize(UserRole::Teacher, Operation::CreateStudent).is_err());
        assert!(authorize(UserRole::Teacher, Operation::ListStudents).is_ok());
        assert!(authorize(UserRole::Student, Operation::ListStudents).is_err());
        assert!(authorize(UserRole::Manager, Operation::DeleteDepartment).is_err());
        assert!(authorize(UserRole::Manager, Operation::DeleteSubject).is_ok());
    }

    #[test]
    fn test_denial_is_authorization_error() {
        let err = authorize(UserRole::Student, Operation::CreateGroup).unwrap_err();
        assert!(matches!(err, EDeptError::Authorization(_)));
    }
}
