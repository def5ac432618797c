use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::revenue::{CreateRevenueRequest, RevenueDeletion, RevenueList, RevenueTotal},
    error::AppResult,
    models::Revenue,
    response::ApiResponse,
    services::revenue_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/revenueNodes", post(record_revenue))
        .route("/revenue", get(total_revenue))
        .route("/revenue/nodes", get(list_revenue))
        .route("/revenue/{order_id}", delete(delete_revenue))
}

#[utoipa::path(
    post,
    path = "/revenueNodes",
    request_body = CreateRevenueRequest,
    responses(
        (status = 201, description = "Revenue recorded from the closed order", body = ApiResponse<Revenue>),
        (status = 400, description = "Order is still open or has no payment type"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Revenue already recorded for the order")
    ),
    tag = "Revenue"
)]
pub async fn record_revenue(
    State(state): State<AppState>,
    Json(payload): Json<CreateRevenueRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Revenue>>)> {
    let resp = revenue_service::record_revenue(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/revenue",
    responses(
        (status = 200, description = "Sum of all recorded order totals", body = ApiResponse<RevenueTotal>)
    ),
    tag = "Revenue"
)]
pub async fn total_revenue(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<RevenueTotal>>> {
    let resp = revenue_service::total_revenue(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/revenue/nodes",
    responses(
        (status = 200, description = "Ledger rows, newest first", body = ApiResponse<RevenueList>)
    ),
    tag = "Revenue"
)]
pub async fn list_revenue(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<RevenueList>>> {
    let resp = revenue_service::list_revenue(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/revenue/{order_id}",
    params(
        ("order_id" = Uuid, Path, description = "Order whose revenue row is removed")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = ApiResponse<RevenueDeletion>)
    ),
    tag = "Revenue"
)]
pub async fn delete_revenue(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<RevenueDeletion>>> {
    let resp = revenue_service::delete_revenue_for_order(&state, order_id).await?;
    Ok(Json(resp))
}
