use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::users::{RegisterRequest, UserList},
    error::AppResult,
    models::User,
    response::ApiResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/checkuser/{uid}", get(check_user))
        .route("/register", post(register))
}

#[utoipa::path(
    get,
    path = "/checkuser/{uid}",
    params(
        ("uid" = String, Path, description = "External user id")
    ),
    responses(
        (status = 200, description = "Users registered under the uid, possibly none", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn check_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::check_user(&state, &uid).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Register user", body = ApiResponse<User>),
        (status = 409, description = "uid already registered")
    ),
    tag = "Users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let resp = user_service::register_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
