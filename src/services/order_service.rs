use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::orders::{
        AttachedItem, CloseOrderRequest, CreateOrderRequest, DetachedItem, ItemQuantity,
        OrderLine, OrderLineList, OrderList, OrderWithItems, UpdateOrderRequest,
    },
    entity::{
        items::{Column as ItemCol, Entity as Items},
        order_items::{
            self, ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems,
        },
        orders::{
            ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
        },
        payment_types::Entity as PaymentTypes,
        users::Entity as Users,
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    ordering::{self, OrderState},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    state::AppState,
};

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();
    if let Some(is_open) = query.is_open {
        condition = condition.add(OrderCol::IsOpen.eq(is_open));
    }

    let mut finder = Orders::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder.order_by_asc(OrderCol::CreatedAt),
        SortOrder::Desc => finder.order_by_desc(OrderCol::CreatedAt),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders: Vec<Order> = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    Ok(ApiResponse::listing(
        orders.is_empty(),
        "Ok",
        "No orders",
        OrderList { items: orders },
        Meta::new(page, limit, total),
    ))
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("order"))?;

    let items = order_lines(&state.orm, order.id).await?;

    Ok(ApiResponse::success(
        "OK",
        OrderWithItems {
            order: order.into(),
            items,
        },
        Some(Meta::empty()),
    ))
}

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    ensure_user(&state.orm, payload.user_id).await?;
    if let Some(payment_type_id) = payload.payment_type_id {
        ensure_payment_type(&state.orm, payment_type_id).await?;
    }

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(payload.user_id),
        payment_type_id: Set(payload.payment_type_id),
        name: Set(payload.name),
        phone: Set(payload.phone),
        email: Set(payload.email),
        order_type: Set(payload.order_type),
        total_price: Set(Some(Decimal::ZERO)),
        is_open: Set(true),
        tip: Set(None),
        date_closed: Set(None),
        comments: Set(None),
        version: Set(1),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(order_id = %order.id, user_id = %order.user_id, "order created");

    Ok(ApiResponse::success(
        "Order created",
        order.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_order(
    state: &AppState,
    id: Uuid,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let txn = state.orm.begin().await?;

    let order = lock_order(&txn, id).await?;
    OrderState::from_flag(order.is_open).ensure_open()?;
    ordering::ensure_version(payload.version, order.version)?;
    ordering::ensure_tip(payload.tip)?;
    ensure_user(&txn, payload.user_id).await?;
    if let Some(payment_type_id) = payload.payment_type_id {
        ensure_payment_type(&txn, payment_type_id).await?;
    }

    let version = order.version + 1;
    let mut active: OrderActive = order.into();
    active.user_id = Set(payload.user_id);
    active.payment_type_id = Set(payload.payment_type_id);
    active.name = Set(payload.name);
    active.phone = Set(payload.phone);
    active.email = Set(payload.email);
    active.order_type = Set(payload.order_type);
    active.tip = Set(payload.tip);
    active.comments = Set(payload.comments);
    active.version = Set(version);
    active.updated_at = Set(Utc::now().into());
    let order = active.update(&txn).await?;

    txn.commit().await?;

    Ok(ApiResponse::success(
        "Updated",
        order.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("order"));
    }

    tracing::info!(order_id = %id, "order deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}

/// Open -> Closed. Payment type, tip and comments are taken from the payload
/// as sent, so a tip stored by an earlier update is replaced, never folded.
pub async fn close_order(
    state: &AppState,
    id: Uuid,
    payload: CloseOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let txn = state.orm.begin().await?;

    let order = lock_order(&txn, id).await?;
    let next = OrderState::from_flag(order.is_open).close()?;
    ordering::ensure_tip(payload.tip)?;
    if let Some(payment_type_id) = payload.payment_type_id {
        ensure_payment_type(&txn, payment_type_id).await?;
    }

    let total_price = ordering::fold_tip(order.total_price, payload.tip)?;
    let version = order.version + 1;
    let now = Utc::now();

    let mut active: OrderActive = order.into();
    active.payment_type_id = Set(payload.payment_type_id);
    active.tip = Set(payload.tip);
    active.comments = Set(payload.comments);
    active.total_price = Set(Some(total_price));
    active.is_open = Set(next.is_open());
    active.date_closed = Set(Some(now.into()));
    active.version = Set(version);
    active.updated_at = Set(now.into());
    let order = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, total = %total_price, "order closed");

    Ok(ApiResponse::success(
        "Order closed",
        order.into(),
        Some(Meta::empty()),
    ))
}

pub async fn recompute_price(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let txn = state.orm.begin().await?;

    let order = lock_order(&txn, id).await?;
    OrderState::from_flag(order.is_open).ensure_open()?;
    let order = recompute_total(&txn, order).await?;

    txn.commit().await?;

    Ok(ApiResponse::success(
        "Price updated",
        order.into(),
        Some(Meta::empty()),
    ))
}

/// Adds one unit of an item and refreshes the total in the same transaction.
pub async fn attach_item(
    state: &AppState,
    order_id: Uuid,
    item_id: Uuid,
) -> AppResult<ApiResponse<AttachedItem>> {
    let txn = state.orm.begin().await?;

    let order = lock_order(&txn, order_id).await?;
    OrderState::from_flag(order.is_open).ensure_open()?;
    Items::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("item"))?;

    let order_item = OrderItemActive {
        id: Set(Uuid::new_v4()),
        order_id: Set(order.id),
        item_id: Set(item_id),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    let order = recompute_total(&txn, order).await?;

    txn.commit().await?;

    tracing::debug!(order_id = %order_id, item_id = %item_id, "item attached");

    Ok(ApiResponse::success(
        "Item added",
        AttachedItem {
            order_item: order_item.into(),
            order: order.into(),
        },
        Some(Meta::empty()),
    ))
}

/// Removes one unit of an item. A missing row is reported with `removed: false`.
pub async fn detach_item(
    state: &AppState,
    order_id: Uuid,
    item_id: Uuid,
) -> AppResult<ApiResponse<DetachedItem>> {
    let txn = state.orm.begin().await?;

    let order = lock_order(&txn, order_id).await?;
    OrderState::from_flag(order.is_open).ensure_open()?;

    let row = OrderItems::find()
        .filter(
            Condition::all()
                .add(OrderItemCol::OrderId.eq(order_id))
                .add(OrderItemCol::ItemId.eq(item_id)),
        )
        .order_by_asc(OrderItemCol::CreatedAt)
        .order_by_asc(OrderItemCol::Id)
        .one(&txn)
        .await?;

    let Some(row) = row else {
        txn.commit().await?;
        return Ok(ApiResponse::success(
            "Nothing to remove",
            DetachedItem {
                removed: false,
                order: order.into(),
            },
            Some(Meta::empty()),
        ));
    };

    OrderItems::delete_by_id(row.id).exec(&txn).await?;
    let order = recompute_total(&txn, order).await?;

    txn.commit().await?;

    tracing::debug!(order_id = %order_id, item_id = %item_id, "item removed");

    Ok(ApiResponse::success(
        "Item removed",
        DetachedItem {
            removed: true,
            order: order.into(),
        },
        Some(Meta::empty()),
    ))
}

pub async fn list_order_items(
    state: &AppState,
    order_id: Uuid,
) -> AppResult<ApiResponse<OrderLineList>> {
    ensure_order(&state.orm, order_id).await?;
    let items = order_lines(&state.orm, order_id).await?;
    let meta = Meta::total(items.len());

    Ok(ApiResponse::listing(
        items.is_empty(),
        "OK",
        "No items on this order",
        OrderLineList { items },
        meta,
    ))
}

pub async fn item_quantity(
    state: &AppState,
    order_id: Uuid,
    item_id: Uuid,
) -> AppResult<ApiResponse<ItemQuantity>> {
    ensure_order(&state.orm, order_id).await?;

    let rows: Vec<OrderItem> = OrderItems::find()
        .filter(
            Condition::all()
                .add(OrderItemCol::OrderId.eq(order_id))
                .add(OrderItemCol::ItemId.eq(item_id)),
        )
        .order_by_asc(OrderItemCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

    let message = if rows.is_empty() { "Item not on this order" } else { "OK" };
    Ok(ApiResponse::success(
        message,
        ItemQuantity {
            item_id,
            quantity: rows.len(),
            rows,
        },
        Some(Meta::empty()),
    ))
}

/// Re-sums the unit prices of every attached row and stores the result.
pub(crate) async fn recompute_total<C>(conn: &C, order: OrderModel) -> AppResult<OrderModel>
where
    C: ConnectionTrait,
{
    let prices: Vec<Decimal> = OrderItems::find()
        .select_only()
        .column(ItemCol::Price)
        .join(JoinType::InnerJoin, order_items::Relation::Items.def())
        .filter(OrderItemCol::OrderId.eq(order.id))
        .into_tuple::<Decimal>()
        .all(conn)
        .await?;

    let total = ordering::total_of_units(prices);
    let version = order.version + 1;

    let mut active: OrderActive = order.into();
    active.total_price = Set(Some(total));
    active.version = Set(version);
    active.updated_at = Set(Utc::now().into());
    let order = active.update(conn).await?;

    tracing::debug!(order_id = %order.id, total = %total, "order total recomputed");
    Ok(order)
}

pub(crate) async fn order_lines<C>(conn: &C, order_id: Uuid) -> AppResult<Vec<OrderLine>>
where
    C: ConnectionTrait,
{
    let rows = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order_id))
        .order_by_asc(OrderItemCol::CreatedAt)
        .order_by_asc(OrderItemCol::Id)
        .find_also_related(Items)
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(row, item)| {
            item.map(|item| OrderLine {
                order_item_id: row.id,
                item: item.into(),
            })
        })
        .collect())
}

/// Fetch an order and hold its row lock until the transaction ends.
async fn lock_order<C>(conn: &C, id: Uuid) -> AppResult<OrderModel>
where
    C: ConnectionTrait,
{
    Orders::find_by_id(id)
        .lock(LockType::Update)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found("order"))
}

async fn ensure_order<C>(conn: &C, id: Uuid) -> AppResult<()>
where
    C: ConnectionTrait,
{
    Orders::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found("order"))?;
    Ok(())
}

async fn ensure_user<C>(conn: &C, id: Uuid) -> AppResult<()>
where
    C: ConnectionTrait,
{
    Users::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found("user"))?;
    Ok(())
}

async fn ensure_payment_type<C>(conn: &C, id: Uuid) -> AppResult<()>
where
    C: ConnectionTrait,
{
    PaymentTypes::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found("payment type"))?;
    Ok(())
}
