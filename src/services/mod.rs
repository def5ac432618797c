pub mod item_service;
pub mod order_service;
pub mod payment_type_service;
pub mod revenue_service;
pub mod user_service;
