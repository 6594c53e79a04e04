pub mod admins;
pub mod auth;
pub mod departments;
pub mod grades;
pub mod groups;
pub(crate) mod identity;
pub mod managers;
pub mod students;
pub mod subjects;
pub mod teachers;
pub(crate) mod transaction;

#[cfg(test)]
pub(crate) mod test_support;

pub use admins::AdminService;
pub use auth::AuthService;
pub use departments::DepartmentService;
pub use grades::GradeService;
pub use groups::GroupService;
pub use managers::ManagerService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
