use sea_orm::entity::prelude::*;

/// Ledger row derived from a closed order. Never updated; outlives its order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "revenues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_id: Uuid,
    pub payment_type_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub order_total: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub tip: Option<Decimal>,
    pub order_type: String,
    pub date_closed: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::payment_types::Entity",
        from = "Column::PaymentTypeId",
        to = "super::payment_types::Column::Id"
    )]
    PaymentTypes,
}

impl Related<super::payment_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
