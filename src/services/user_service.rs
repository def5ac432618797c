use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::users::{RegisterRequest, UserList},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<User>> {
    let RegisterRequest { uid, name, email } = payload;
    if uid.trim().is_empty() {
        return Err(AppError::BadRequest("uid must not be empty".into()));
    }

    let exist = Users::find()
        .filter(UserCol::Uid.eq(uid.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::Conflict(format!("User {uid} is already registered")));
    }

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        uid: Set(uid),
        name: Set(name),
        email: Set(email),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(ApiResponse::success("User created", user.into(), None))
}

/// Users registered under an external uid. No match is an empty list.
pub async fn check_user(state: &AppState, uid: &str) -> AppResult<ApiResponse<UserList>> {
    let items: Vec<User> = Users::find()
        .filter(UserCol::Uid.eq(uid))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    let meta = Meta::total(items.len());

    Ok(ApiResponse::listing(
        items.is_empty(),
        "OK",
        "User is not registered",
        UserList { items },
        meta,
    ))
}
