use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{StorageData, guarded, respond, respond_created, respond_empty};
use crate::models::students::requests::{
    CreateStudentRequest, StudentFilter, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::services::auth::Operation;
use crate::utils::SafeIDI64;

fn service(storage: &StorageData) -> StudentService {
    StudentService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_students(
    storage: StorageData,
    query: web::Query<StudentFilter>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_students(query.into_inner()).await,
        "Students retrieved successfully",
    )
}

pub async fn get_student(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_student(id.0).await,
        "Student retrieved successfully",
    )
}

pub async fn create_student(
    storage: StorageData,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    respond_created(
        service(&storage)
            .create_student(student_data.into_inner())
            .await,
        "Student created successfully",
    )
}

pub async fn update_student(
    storage: StorageData,
    id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage)
            .update_student(id.0, update_data.into_inner())
            .await,
        "Student updated successfully",
    )
}

pub async fn delete_student(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond_empty(
        service(&storage).delete_student(id.0).await,
        "Student deleted successfully",
    )
}

pub async fn list_student_grades(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_grades_of(id.0).await,
        "Grades retrieved successfully",
    )
}

pub async fn list_student_subjects(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_subjects_of(id.0).await,
        "Subjects retrieved successfully",
    )
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(guarded(
                        web::get().to(list_students),
                        Operation::ListStudents,
                    ))
                    .route(guarded(
                        web::post().to(create_student),
                        Operation::CreateStudent,
                    )),
            )
            .service(
                web::resource("/{id}")
                    .route(guarded(web::get().to(get_student), Operation::GetStudent))
                    .route(guarded(
                        web::put().to(update_student),
                        Operation::UpdateStudent,
                    ))
                    .route(guarded(
                        web::delete().to(delete_student),
                        Operation::DeleteStudent,
                    )),
            )
            .service(web::resource("/{id}/grades").route(guarded(
                web::get().to(list_student_grades),
                Operation::ListStudentGrades,
            )))
            .service(web::resource("/{id}/subjects").route(guarded(
                web::get().to(list_student_subjects),
                Operation::ListStudentSubjects,
            ))),
    );
}
