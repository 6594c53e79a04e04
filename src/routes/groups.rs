use actix_web::{HttpResponse, Result as ActixResult, web};

use super::{StorageData, guarded, respond, respond_created, respond_empty};
use crate::models::groups::requests::{CreateGroupRequest, GroupFilter, UpdateGroupRequest};
use crate::services::GroupService;
use crate::services::auth::Operation;
use crate::utils::SafeIDI64;

fn service(storage: &StorageData) -> GroupService {
    GroupService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_groups(
    storage: StorageData,
    query: web::Query<GroupFilter>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).list_groups(query.into_inner()).await,
        "Groups retrieved successfully",
    )
}

pub async fn get_group(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond(
        service(&storage).get_group(id.0).await,
        "Group retrieved successfully",
    )
}

pub async fn create_group(
    storage: StorageData,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    respond_created(
        service(&storage).create_group(group_data.into_inner()).await,
        "Group created successfully",
    )
}

pub async fn update_group(
    storage: StorageData,
    id: SafeIDI64,
    update_data: web::Json<UpdateGroupRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service(&storage)
            .update_group(id.0, update_data.into_inner())
            .await,
        "Group updated successfully",
    )
}

pub async fn delete_group(storage: StorageData, id: SafeIDI64) -> ActixResult<HttpResponse> {
    respond_empty(
        service(&storage).delete_group(id.0).await,
        "Group deleted successfully",
    )
}

// 配置路由
pub fn configure_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .service(
                web::resource("")
                    .route(guarded(web::get().to(list_groups), Operation::ListGroups))
                    .route(guarded(web::post().to(create_group), Operation::CreateGroup)),
            )
            .service(
                web::resource("/{id}")
                    .route(guarded(web::get().to(get_group), Operation::GetGroup))
                    .route(guarded(web::put().to(update_group), Operation::UpdateGroup))
                    .route(guarded(
                        web::delete().to(delete_group),
                        Operation::DeleteGroup,
                    )),
            ),
    );
}
