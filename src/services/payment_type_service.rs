use sea_orm::{EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    dto::payment_types::PaymentTypeList,
    entity::payment_types::{Column, Entity as PaymentTypes},
    error::{AppError, AppResult},
    models::PaymentType,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_payment_types(state: &AppState) -> AppResult<ApiResponse<PaymentTypeList>> {
    let items: Vec<PaymentType> = PaymentTypes::find()
        .order_by_asc(Column::Kind)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(PaymentType::from)
        .collect();
    let meta = Meta::total(items.len());

    Ok(ApiResponse::listing(
        items.is_empty(),
        "OK",
        "No payment types",
        PaymentTypeList { items },
        meta,
    ))
}

pub async fn get_payment_type(state: &AppState, id: Uuid) -> AppResult<ApiResponse<PaymentType>> {
    let payment_type = PaymentTypes::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("payment type"))?;
    Ok(ApiResponse::success("OK", payment_type.into(), None))
}
