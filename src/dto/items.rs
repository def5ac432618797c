use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Item;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ItemList {
    #[schema(value_type = Vec<Item>)]
    pub items: Vec<Item>,
}
