use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{items, order_items, orders, payment_types, revenues, users};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub uid: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentType {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub payment_type_id: Option<Uuid>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub order_type: String,
    pub total_price: Option<Decimal>,
    pub is_open: bool,
    pub tip: Option<Decimal>,
    pub date_closed: Option<DateTime<Utc>>,
    pub comments: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub item_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Revenue {
    pub id: Uuid,
    pub order_id: Uuid,
    pub payment_type_id: Uuid,
    pub order_total: Option<Decimal>,
    pub tip: Option<Decimal>,
    pub order_type: String,
    pub date_closed: DateTime<Utc>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            uid: model.uid,
            name: model.name,
            email: model.email,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            price: model.price,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<payment_types::Model> for PaymentType {
    fn from(model: payment_types::Model) -> Self {
        Self {
            id: model.id,
            kind: model.kind,
        }
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            payment_type_id: model.payment_type_id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            order_type: model.order_type,
            total_price: model.total_price,
            is_open: model.is_open,
            tip: model.tip,
            date_closed: model.date_closed.map(|dt| dt.with_timezone(&Utc)),
            comments: model.comments,
            version: model.version,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<order_items::Model> for OrderItem {
    fn from(model: order_items::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            item_id: model.item_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<revenues::Model> for Revenue {
    fn from(model: revenues::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            payment_type_id: model.payment_type_id,
            order_total: model.order_total,
            tip: model.tip,
            order_type: model.order_type,
            date_closed: model.date_closed.with_timezone(&Utc),
        }
    }
}
