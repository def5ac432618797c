use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::items::{CreateItemRequest, ItemList, UpdateItemRequest},
    entity::{
        items::{ActiveModel, Column, Entity as Items},
        order_items::{self, Column as OrderItemCol, Entity as OrderItems},
        orders::{Column as OrderCol, Entity as Orders},
    },
    error::{AppError, AppResult},
    models::Item,
    ordering,
    response::{ApiResponse, Meta},
    routes::params::{ItemQuery, ItemSortBy, SortOrder},
    services::order_service::recompute_total,
    state::AppState,
};

pub async fn list_items(state: &AppState, query: ItemQuery) -> AppResult<ApiResponse<ItemList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        condition = condition.add(Expr::col(Column::Name).ilike(format!("%{}%", search)));
    }

    let sort_col = match query.sort_by.unwrap_or(ItemSortBy::Name) {
        ItemSortBy::CreatedAt => Column::CreatedAt,
        ItemSortBy::Price => Column::Price,
        ItemSortBy::Name => Column::Name,
    };

    let mut finder = Items::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Asc) {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items: Vec<Item> = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Item::from)
        .collect();

    Ok(ApiResponse::listing(
        items.is_empty(),
        "Items",
        "No items",
        ItemList { items },
        Meta::new(page, limit, total),
    ))
}

pub async fn get_item(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Item>> {
    let item = Items::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("item"))?;
    Ok(ApiResponse::success("Item", item.into(), None))
}

pub async fn create_item(
    state: &AppState,
    payload: CreateItemRequest,
) -> AppResult<ApiResponse<Item>> {
    ordering::ensure_price(payload.price)?;
    let item = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        image_url: Set(payload.image_url),
        price: Set(payload.price),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(item_id = %item.id, name = %item.name, "menu item created");

    Ok(ApiResponse::success(
        "Item created",
        item.into(),
        Some(Meta::empty()),
    ))
}

/// Only the given fields change. Order totals pick up a new price on their
/// next recompute.
pub async fn update_item(
    state: &AppState,
    id: Uuid,
    payload: UpdateItemRequest,
) -> AppResult<ApiResponse<Item>> {
    let existing = Items::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("item"))?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(image_url);
    }
    if let Some(price) = payload.price {
        ordering::ensure_price(price)?;
        active.price = Set(price);
    }

    let item = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        item.into(),
        Some(Meta::empty()),
    ))
}

/// Removes an item from the menu. Its order rows cascade away, so every open
/// order that carried it is re-totalled in the same transaction.
pub async fn delete_item(state: &AppState, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;

    let affected: Vec<Uuid> = OrderItems::find()
        .select_only()
        .column(OrderItemCol::OrderId)
        .distinct()
        .join(JoinType::InnerJoin, order_items::Relation::Orders.def())
        .filter(OrderItemCol::ItemId.eq(id))
        .filter(OrderCol::IsOpen.eq(true))
        .into_tuple::<Uuid>()
        .all(&txn)
        .await?;

    let result = Items::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("item"));
    }

    for order_id in &affected {
        if let Some(order) = Orders::find_by_id(*order_id).one(&txn).await? {
            recompute_total(&txn, order).await?;
        }
    }

    txn.commit().await?;

    tracing::info!(item_id = %id, orders_updated = affected.len(), "menu item deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "id": id, "orders_updated": affected.len() }),
        Some(Meta::empty()),
    ))
}
