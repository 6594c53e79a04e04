use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{StorageData, guarded, respond, respond_created, respond_empty};
use crate::models::users::requests::{CreateAccountRequest, UpdateAccountRequest};
use crate::services::AdminService;
use crate::services::auth::Operation;
use crate::utils::SafeIDI64;

fn service(storage: &StorageData) -> AdminService {
    AdminService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_admins(storage: StorageData) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_admins().await,
        "Admins retrieved successfully",
    )
}

pub async fn get_admin(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_admin(id.0).await,
        "Admin retrieved successfully",
    )
}

pub async fn create_admin(
    storage: StorageData,
    admin_data: web::Json<CreateAccountRequest>,
) -> ActixResult<HttpResponse> {
    respond_created(
        service(&storage).create_admin(admin_data.into_inner()).await,
        "Admin created successfully",
    )
}

pub async fn update_admin(
    storage: StorageData,
    id: SafeIDI64,
    update_data: web::Json<UpdateAccountRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage)
            .update_admin(id.0, update_data.into_inner())
            .await,
        "Admin updated successfully",
    )
}

pub async fn delete_admin(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond_empty(
        service(&storage).delete_admin(id.0).await,
        "Admin deleted successfully",
    )
}

// 配置路由，全部仅限管理员
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    let op = Operation::ManageAdmins;
    cfg.service(
        web::scope("/api/v1/admins")
            .service(
                web::resource("")
                    .route(guarded(web::get().to(list_admins), op))
                    .route(guarded(web::post().to(create_admin), op)),
            )
            .service(
                web::resource("/{id}")
                    .route(guarded(web::get().to(get_admin), op))
                    .route(guarded(web::put().to(update_admin), op))
                    .route(guarded(web::delete().to(delete_admin), op)),
            ),
    );
}
