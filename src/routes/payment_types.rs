use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::payment_types::PaymentTypeList,
    error::AppResult,
    models::PaymentType,
    response::ApiResponse,
    services::payment_type_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payment_types))
        .route("/{id}", get(get_payment_type))
}

#[utoipa::path(
    get,
    path = "/paymentTypes",
    responses(
        (status = 200, description = "List payment types", body = ApiResponse<PaymentTypeList>)
    ),
    tag = "PaymentTypes"
)]
pub async fn list_payment_types(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PaymentTypeList>>> {
    let resp = payment_type_service::list_payment_types(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/paymentTypes/{id}",
    params(
        ("id" = Uuid, Path, description = "Payment type ID")
    ),
    responses(
        (status = 200, description = "Get payment type", body = ApiResponse<PaymentType>),
        (status = 404, description = "Payment type not found")
    ),
    tag = "PaymentTypes"
)]
pub async fn get_payment_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<PaymentType>>> {
    let resp = payment_type_service::get_payment_type(&state, id).await?;
    Ok(Json(resp))
}
