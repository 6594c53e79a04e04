use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{StorageData, guarded, respond, respond_created, respond_empty};
use crate::models::departments::requests::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::services::DepartmentService;
use crate::services::auth::Operation;
use crate::utils::SafeIDI64;

fn service(storage: &StorageData) -> DepartmentService {
    DepartmentService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_departments(storage: StorageData) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_departments().await,
        "Departments retrieved successfully",
    )
}

pub async fn get_department(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_department(id.0).await,
        "Department retrieved successfully",
    )
}

pub async fn create_department(
    storage: StorageData,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    respond_created(
        service(&storage)
            .create_department(department_data.into_inner())
            .await,
        "Department created successfully",
    )
}

pub async fn update_department(
    storage: StorageData,
    id: SafeIDI64,
    update_data: web::Json<UpdateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage)
            .update_department(id.0, update_data.into_inner())
            .await,
        "Department updated successfully",
    )
}

pub async fn delete_department(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond_empty(
        service(&storage).delete_department(id.0).await,
        "Department deleted successfully",
    )
}

pub async fn list_department_subjects(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_subjects_of(id.0).await,
        "Subjects retrieved successfully",
    )
}

pub async fn list_department_teachers(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_teachers_of(id.0).await,
        "Teachers retrieved successfully",
    )
}

pub async fn list_department_groups(
    storage: StorageData,
    id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_groups_of(id.0).await,
        "Groups retrieved successfully",
    )
}

// 配置路由
pub fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/departments")
            .service(
                web::resource("")
                    .route(guarded(
                        web::get().to(list_departments),
                        Operation::ListDepartments,
                    ))
                    .route(guarded(
                        web::post().to(create_department),
                        Operation::CreateDepartment,
                    )),
            )
            .service(
                web::resource("/{id}")
                    .route(guarded(
                        web::get().to(get_department),
                        Operation::GetDepartment,
                    ))
                    .route(guarded(
                        web::put().to(update_department),
                        Operation::UpdateDepartment,
                    ))
                    .route(guarded(
                        web::delete().to(delete_department),
                        Operation::DeleteDepartment,
                    )),
            )
            .service(web::resource("/{id}/subjects").route(guarded(
                web::get().to(list_department_subjects),
                Operation::ListDepartmentSubjects,
            )))
            .service(web::resource("/{id}/teachers").route(guarded(
                web::get().to(list_department_teachers),
                Operation::ListDepartmentTeachers,
            )))
            .service(web::resource("/{id}/groups").route(guarded(
                web::get().to(list_department_groups),
                Operation::ListDepartmentGroups,
            ))),
    );
}
