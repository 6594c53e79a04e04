use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{StorageData, guarded, respond, respond_created, respond_empty};
use crate::models::users::requests::{CreateAccountRequest, UpdateAccountRequest};
use crate::services::ManagerService;
use crate::services::auth::Operation;
use crate::utils::SafeIDI64;

fn service(storage: &StorageData) -> ManagerService {
    ManagerService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_managers(storage: StorageData) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_managers().await,
        "Managers retrieved successfully",
    )
}

pub async fn get_manager(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_manager(id.0).await,
        "Manager retrieved successfully",
    )
}

pub async fn create_manager(
    storage: StorageData,
    manager_data: web::Json<CreateAccountRequest>,
) -> ActixResult<HttpResponse> {
    respond_created(
        service(&storage)
            .create_manager(manager_data.into_inner())
            .await,
        "Manager created successfully",
    )
}

pub async fn update_manager(
    storage: StorageData,
    id: SafeIDI64,
    update_data: web::Json<UpdateAccountRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage)
            .update_manager(id.0, update_data.into_inner())
            .await,
        "Manager updated successfully",
    )
}

pub async fn delete_manager(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond_empty(
        service(&storage).delete_manager(id.0).await,
        "Manager deleted successfully",
    )
}

// 配置路由，全部仅限管理员
pub fn configure_manager_routes(cfg: &mut web::ServiceConfig) {
    let op = Operation::ManageManagers;
    cfg.service(
        web::scope("/api/v1/managers")
            .service(
                web::resource("")
                    .route(guarded(web::get().to(list_managers), op))
                    .route(guarded(web::post().to(create_manager), op)),
            )
            .service(
                web::resource("/{id}")
                    .route(guarded(web::get().to(get_manager), op))
                    .route(guarded(web::put().to(update_manager), op))
                    .route(guarded(web::delete().to(delete_manager), op)),
            ),
    );
}
