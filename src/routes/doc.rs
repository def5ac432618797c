use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        items::{CreateItemRequest, ItemList, UpdateItemRequest},
        orders::{
            AttachedItem, CloseOrderRequest, CreateOrderRequest, DetachedItem, ItemQuantity,
            OrderLine, OrderLineList, OrderList, OrderWithItems, UpdateOrderRequest,
        },
        payment_types::PaymentTypeList,
        revenue::{CreateRevenueRequest, RevenueDeletion, RevenueList, RevenueTotal},
        users::{RegisterRequest, UserList},
    },
    models::{Item, Order, OrderItem, PaymentType, Revenue, User},
    response::{ApiResponse, Meta},
    routes::{health, items, orders, params, payment_types, revenue, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness,
        users::check_user,
        users::register,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        orders::close_order,
        orders::recompute_price,
        orders::list_order_items,
        orders::item_quantity,
        orders::attach_item,
        orders::detach_item,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        payment_types::list_payment_types,
        payment_types::get_payment_type,
        revenue::record_revenue,
        revenue::total_revenue,
        revenue::list_revenue,
        revenue::delete_revenue
    ),
    components(
        schemas(
            User,
            Item,
            PaymentType,
            Order,
            OrderItem,
            Revenue,
            RegisterRequest,
            UserList,
            CreateOrderRequest,
            UpdateOrderRequest,
            CloseOrderRequest,
            OrderLine,
            OrderLineList,
            OrderList,
            OrderWithItems,
            AttachedItem,
            DetachedItem,
            ItemQuantity,
            CreateItemRequest,
            UpdateItemRequest,
            ItemList,
            PaymentTypeList,
            CreateRevenueRequest,
            RevenueTotal,
            RevenueList,
            RevenueDeletion,
            params::Pagination,
            params::SortOrder,
            params::ItemSortBy,
            health::HealthData,
            Meta,
            ApiResponse<Order>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>,
            ApiResponse<Item>,
            ApiResponse<ItemList>,
            ApiResponse<Revenue>,
            ApiResponse<RevenueTotal>
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Users", description = "Registration and lookup by external uid"),
        (name = "Orders", description = "Order lifecycle and pricing"),
        (name = "Items", description = "Menu items"),
        (name = "PaymentTypes", description = "Payment type lookups"),
        (name = "Revenue", description = "Revenue ledger"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
