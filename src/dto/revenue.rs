use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Revenue;

/// Revenue is derived from the stored order; only its id is accepted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRevenueRequest {
    pub order_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueTotal {
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RevenueList {
    #[schema(value_type = Vec<Revenue>)]
    pub items: Vec<Revenue>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueDeletion {
    pub order_id: Uuid,
    pub deleted: bool,
}
