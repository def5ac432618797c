use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub payment_type_id: Option<Uuid>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub order_type: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub total_price: Option<Decimal>,
    pub is_open: bool,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub tip: Option<Decimal>,
    pub date_closed: Option<DateTimeWithTimeZone>,
    pub comments: Option<String>,
    pub version: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::payment_types::Entity",
        from = "Column::PaymentTypeId",
        to = "super::payment_types::Column::Id"
    )]
    PaymentTypes,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::payment_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentTypes.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
