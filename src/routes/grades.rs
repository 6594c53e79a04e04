use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::{
    StorageData, ensure_acting_teacher, guarded, respond, respond_created, respond_empty,
};
use crate::models::grades::requests::{AddGradeRequest, DeleteGradeQuery, GradeFilter};
use crate::services::GradeService;
use crate::services::auth::Operation;
use crate::utils::SafeIDI64;

fn service(storage: &StorageData) -> GradeService {
    GradeService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_grades(
    storage: StorageData,
    query: web::Query<GradeFilter>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_grades(query.into_inner()).await,
        "Grades retrieved successfully",
    )
}

pub async fn list_student_grades(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_by_student(id.0).await,
        "Grades retrieved successfully",
    )
}

pub async fn list_teacher_grades(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_by_teacher(id.0).await,
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

pub async fn delete_grade(
    req: HttpRequest,
    storage: StorageData,
    query: web::Query<DeleteGradeQuery>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    if let Err(response) = ensure_acting_teacher(&req, query.teacher_id) {
        return Ok(response);
    }
    respond_empty(
        service(&storage).delete_grade(query).await,
        "Grade deleted successfully",
    )
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .service(
                web::resource("")
                    .route(guarded(web::get().to(list_grades), Operation::ListGrades))
                    .route(guarded(web::post().to(add_grade), Operation::AddGrade))
                    // ?student_id=&subject_id=&teacher_id=
                    .route(guarded(
                        web::delete().to(delete_grade),
                        Operation::DeleteGrade,
                    )),
            )
            .service(web::resource("/student/{id}").route(guarded(
                web::get().to(list_student_grades),
                Operation::ListStudentGrades,
            )))
            .service(web::resource("/teacher/{id}").route(guarded(
                web::get().to(list_teacher_grades),
                Operation::ListTeacherGrades,
            ))),
    );
}
