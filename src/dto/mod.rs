pub mod items;
pub mod orders;
pub mod payment_types;
pub mod revenue;
pub mod users;
