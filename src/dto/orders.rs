use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Item, Order, OrderItem};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
    pub payment_type_id: Option<Uuid>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub order_type: String,
}

/// Full overwrite of an open order. Omitted optional fields are cleared.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub user_id: Uuid,
    pub payment_type_id: Option<Uuid>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub order_type: String,
    pub tip: Option<Decimal>,
    pub comments: Option<String>,
    /// Version the caller last read; stale writes are rejected.
    pub version: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CloseOrderRequest {
    pub payment_type_id: Option<Uuid>,
    pub tip: Option<Decimal>,
    pub comments: Option<String>,
}

/// One attached unit: the join row id plus the menu item it points to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderLine {
    pub order_item_id: Uuid,
    pub item: Item,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineList {
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttachedItem {
    pub order_item: OrderItem,
    pub order: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DetachedItem {
    pub removed: bool,
    pub order: Order,
}

/// Rows of a single item within an order; `quantity` is their count.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemQuantity {
    pub item_id: Uuid,
    pub quantity: usize,
    pub rows: Vec<OrderItem>,
}
