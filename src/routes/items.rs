use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::items::{CreateItemRequest, ItemList, UpdateItemRequest},
    error::AppResult,
    models::Item,
    response::ApiResponse,
    routes::params::ItemQuery,
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
}

#[utoipa::path(
    get,
    path = "/items",
    params(ItemQuery),
    responses(
        (status = 200, description = "List menu items", body = ApiResponse<ItemList>)
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> AppResult<Json<ApiResponse<ItemList>>> {
    let resp = item_service::list_items(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Get item", body = ApiResponse<Item>),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Item>>> {
    let resp = item_service::get_item(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Create item", body = ApiResponse<Item>),
        (status = 400, description = "Negative price"),
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Item>>)> {
    let resp = item_service::create_item(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item", body = ApiResponse<Item>),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateItemRequest>,
) -> AppResult<Json<ApiResponse<Item>>> {
    let resp = item_service::update_item(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Deleted item"),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = item_service::delete_item(&state, id).await?;
    Ok(Json(resp))
}
