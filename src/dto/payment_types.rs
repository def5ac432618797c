use serde::Serialize;
use utoipa::ToSchema;

use crate::models::PaymentType;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentTypeList {
    #[schema(value_type = Vec<PaymentType>)]
    pub items: Vec<PaymentType>,
}
