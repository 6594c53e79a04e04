use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::{
    StorageData, ensure_acting_teacher, error_response, guarded, respond, respond_created,
    respond_empty,
};
use crate::models::grades::requests::AddGradeRequest;
use crate::models::teachers::requests::{TeacherEmailQuery, TeacherFilter};
use crate::models::users::requests::{CreateAccountRequest, UpdateAccountRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::TeacherService;
use crate::services::auth::Operation;
use crate::utils::{SafeGradeId, SafeIDI64};

fn service(storage: &StorageData) -> TeacherService {
    TeacherService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_teachers(
    storage: StorageData,
    query: web::Query<TeacherFilter>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_teachers(query.into_inner()).await,
        "Teachers retrieved successfully",
    )
}

pub async fn get_teacher(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_teacher(id.0).await,
        "Teacher retrieved successfully",
    )
}

pub async fn get_teacher_by_email(
    storage: StorageData,
    query: web::Query<TeacherEmailQuery>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_teacher_by_email(&query.email).await,
        "Teacher retrieved successfully",
    )
}

pub async fn create_teacher(
    storage: StorageData,
    teacher_data: web::Json<CreateAccountRequest>,
) -> ActixResult<HttpResponse> {
    respond_created(
        service(&storage)
            .create_teacher(teacher_data.into_inner())
            .await,
        "Teacher created successfully",
    )
}

pub async fn update_teacher(
    storage: StorageData,
    id: SafeIDI64,
    update_data: web::Json<UpdateAccountRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage)
            .update_teacher(id.0, update_data.into_inner())
            .await,
        "Teacher updated successfully",
    )
}

pub async fn delete_teacher(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond_empty(
        service(&storage).delete_teacher(id.0).await,
        "Teacher deleted successfully",
    )
}

pub async fn list_teacher_subjects(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_subjects_of(id.0).await,
        "Subjects retrieved successfully",
    )
}

pub async fn list_teacher_grades(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_grades_of(id.0).await,
        "Grades retrieved successfully",
    )
}

pub async fn add_grade(
    req: HttpRequest,
    storage: StorageData,
    grade_data: web::Json<AddGradeRequest>,
) -> ActixResult<HttpResponse> {
    let grade_data = grade_data.into_inner();
    if let Err(response) = ensure_acting_teacher(&req, grade_data.teacher_id) {
        return Ok(response);
    }
    respond_created(
        service(&storage).add_grade(grade_data).await,
        "Grade saved successfully",
    )
}

pub async fn get_grade_by_id(
    storage: StorageData,
    grade_id: SafeGradeId,
) -> ActixResult<HttpResponse> {
    match service(&storage).get_grade_by_id(grade_id.0).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grade,
            "Grade retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            format!("Grade {} not found", grade_id.0),
        ))),
        Err(err) => Ok(error_response(&err)),
    }
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .service(
                web::resource("")
                    .route(guarded(
                        web::get().to(list_teachers),
                        Operation::ListTeachers,
                    ))
                    .route(guarded(
                        web::post().to(create_teacher),
                        Operation::CreateTeacher,
                    )),
            )
            // 静态路径需要在 /{id} 之前注册
            .service(web::resource("/email").route(guarded(
                web::get().to(get_teacher_by_email),
                Operation::GetTeacher,
            )))
            .service(web::resource("/grades").route(guarded(
                web::post().to(add_grade),
                Operation::TeacherAddGrade,
            )))
            .service(web::resource("/grades/{id}").route(guarded(
                web::get().to(get_grade_by_id),
                Operation::GetGradeById,
            )))
            .service(
                web::resource("/{id}")
                    .route(guarded(web::get().to(get_teacher), Operation::GetTeacher))
                    .route(guarded(
                        web::put().to(update_teacher),
                        Operation::UpdateTeacher,
                    ))
                    .route(guarded(
                        web::delete().to(delete_teacher),
                        Operation::DeleteTeacher,
                    )),
            )
            .service(web::resource("/{id}/subjects").route(guarded(
                web::get().to(list_teacher_subjects),
                Operation::ListTeacherSubjects,
            )))
            .service(web::resource("/{id}/grades").route(guarded(
                web::get().to(list_teacher_grades),
                Operation::ListTeacherGrades,
            ))),
    );
}
