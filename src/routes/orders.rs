use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::orders::{
        AttachedItem, CloseOrderRequest, CreateOrderRequest, DetachedItem, ItemQuantity,
        OrderLineList, OrderList, OrderWithItems, UpdateOrderRequest,
    },
    error::AppResult,
    models::Order,
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).put(update_order).delete(delete_order))
        .route("/{id}/close", put(close_order))
        .route("/price/{id}", put(recompute_price))
        .route("/items/{order_id}", get(list_order_items))
        .route(
            "/items/{order_id}/{item_id}",
            get(item_quantity).post(attach_item).delete(detach_item),
        )
}

#[utoipa::path(
    get,
    path = "/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "List orders; an empty list means no orders yet", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with its attached items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = order_service::get_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Open a new order", body = ApiResponse<Order>),
        (status = 404, description = "User or payment type not found"),
        (status = 409, description = "Store conflict")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let resp = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Overwrite an open order", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is closed or version is stale")
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order and its item rows deleted"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = order_service::delete_order(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/orders/{id}/close",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = CloseOrderRequest,
    responses(
        (status = 200, description = "Order closed, tip folded into the total", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order already closed")
    ),
    tag = "Orders"
)]
pub async fn close_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CloseOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::close_order(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/orders/price/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Total recomputed from attached items", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is closed")
    ),
    tag = "Orders"
)]
pub async fn recompute_price(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::recompute_price(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orders/items/{order_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Attached items, one entry per unit", body = ApiResponse<OrderLineList>),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn list_order_items(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderLineList>>> {
    let resp = order_service::list_order_items(&state, order_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/orders/items/{order_id}/{item_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Rows of the item on the order", body = ApiResponse<ItemQuantity>),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn item_quantity(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<ItemQuantity>>> {
    let resp = order_service::item_quantity(&state, order_id, item_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders/items/{order_id}/{item_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 201, description = "One unit attached, total refreshed", body = ApiResponse<AttachedItem>),
        (status = 404, description = "Order or item not found"),
        (status = 409, description = "Order is closed")
    ),
    tag = "Orders"
)]
pub async fn attach_item(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<(StatusCode, Json<ApiResponse<AttachedItem>>)> {
    let resp = order_service::attach_item(&state, order_id, item_id).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/orders/items/{order_id}/{item_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "One unit removed, or nothing to remove", body = ApiResponse<DetachedItem>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is closed")
    ),
    tag = "Orders"
)]
pub async fn detach_item(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<DetachedItem>>> {
    let resp = order_service::detach_item(&state, order_id, item_id).await?;
    Ok(Json(resp))
}
