use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{StorageData, guarded, respond, respond_created, respond_empty};
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectFilter, UpdateSubjectRequest,
};
use crate::services::SubjectService;
use crate::services::auth::Operation;
use crate::utils::SafeIDI64;

fn service(storage: &StorageData) -> SubjectService {
    SubjectService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_subjects(
    storage: StorageData,
    query: web::Query<SubjectFilter>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_subjects(query.into_inner()).await,
        "Subjects retrieved successfully",
    )
}

pub async fn get_subject(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_subject(id.0).await,
        "Subject retrieved successfully",
    )
}

pub async fn create_subject(
    storage: StorageData,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    respond_created(
        service(&storage)
            .create_subject(subject_data.into_inner())
            .await,
        "Subject created successfully",
    )
}

pub async fn update_subject(
    storage: StorageData,
    id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage)
            .update_subject(id.0, update_data.into_inner())
            .await,
        "Subject updated successfully",
    )
}

pub async fn delete_subject(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond_empty(
        service(&storage).delete_subject(id.0).await,
        "Subject deleted successfully",
    )
}

// 配置路由
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .service(
                web::resource("")
                    .route(guarded(
                        web::get().to(list_subjects),
                        Operation::ListSubjects,
                    ))
                    .route(guarded(
                        web::post().to(create_subject),
                        Operation::CreateSubject,
                    )),
            )
            .service(
                web::resource("/{id}")
                    .route(guarded(web::get().to(get_subject), Operation::GetSubject))
                    .route(guarded(
                        web::put().to(update_subject),
                        Operation::UpdateSubject,
                    ))
                    .route(guarded(
                        web::delete().to(delete_subject),
                        Operation::DeleteSubject,
                    )),
            ),
    );
}
