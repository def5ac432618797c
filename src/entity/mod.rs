pub mod items;
pub mod order_items;
pub mod orders;
pub mod payment_types;
pub mod revenues;
pub mod users;

pub use items::Entity as Items;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use payment_types::Entity as PaymentTypes;
pub use revenues::Entity as Revenues;
pub use users::Entity as Users;
