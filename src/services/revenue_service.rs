use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::revenue::{CreateRevenueRequest, RevenueDeletion, RevenueList, RevenueTotal},
    entity::{
        orders::Entity as Orders,
        revenues::{ActiveModel as RevenueActive, Column as RevenueCol, Entity as Revenues},
    },
    error::{AppError, AppResult},
    models::Revenue,
    ordering::{self, OrderState},
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Append a ledger row for a closed order, read from the store by id.
pub async fn record_revenue(
    state: &AppState,
    payload: CreateRevenueRequest,
) -> AppResult<ApiResponse<Revenue>> {
    let txn = state.orm.begin().await?;

    let order = Orders::find_by_id(payload.order_id)
        .lock(LockType::Share)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("order"))?;

    if OrderState::from_flag(order.is_open).is_open() {
        return Err(AppError::BadRequest(
            "Revenue can only be recorded for a closed order".into(),
        ));
    }
    let payment_type_id = order.payment_type_id.ok_or_else(|| {
        AppError::BadRequest("Order was closed without a payment type".into())
    })?;

    let existing = Revenues::find()
        .filter(RevenueCol::OrderId.eq(order.id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "Revenue already recorded for order {}",
            order.id
        )));
    }

    let revenue = RevenueActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(order.id),
        payment_type_id: Set(payment_type_id),
        order_total: Set(order.total_price),
        tip: Set(order.tip),
        order_type: Set(order.order_type),
        date_closed: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!(order_id = %revenue.order_id, revenue_id = %revenue.id, "revenue recorded");

    Ok(ApiResponse::success(
        "Revenue recorded",
        revenue.into(),
        Some(Meta::empty()),
    ))
}

/// Full scan of the ledger; null totals count as zero.
pub async fn total_revenue(state: &AppState) -> AppResult<ApiResponse<RevenueTotal>> {
    let totals: Vec<Option<Decimal>> = Revenues::find()
        .select_only()
        .column(RevenueCol::OrderTotal)
        .into_tuple::<Option<Decimal>>()
        .all(&state.orm)
        .await?;

    let count = totals.len();
    let total = ordering::sum_totals(totals);

    Ok(ApiResponse::success(
        "Total revenue",
        RevenueTotal { total, count },
        Some(Meta::total(count)),
    ))
}

pub async fn list_revenue(state: &AppState) -> AppResult<ApiResponse<RevenueList>> {
    let items: Vec<Revenue> = Revenues::find()
        .order_by_desc(RevenueCol::DateClosed)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Revenue::from)
        .collect();
    let meta = Meta::total(items.len());

    Ok(ApiResponse::listing(
        items.is_empty(),
        "OK",
        "No revenue recorded",
        RevenueList { items },
        meta,
    ))
}

/// Idempotent: deleting twice reports `deleted: false` the second time.
pub async fn delete_revenue_for_order(
    state: &AppState,
    order_id: Uuid,
) -> AppResult<ApiResponse<RevenueDeletion>> {
    let result = Revenues::delete_many()
        .filter(RevenueCol::OrderId.eq(order_id))
        .exec(&state.orm)
        .await?;

    let deleted = result.rows_affected > 0;
    let message = if deleted { "Deleted" } else { "Nothing to delete" };

    Ok(ApiResponse::success(
        message,
        RevenueDeletion { order_id, deleted },
        Some(Meta::empty()),
    ))
}
