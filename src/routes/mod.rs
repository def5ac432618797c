use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod items;
pub mod orders;
pub mod params;
pub mod payment_types;
pub mod revenue;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(revenue::router())
        .nest("/orders", orders::router())
        .nest("/items", items::router())
        .nest("/paymentTypes", payment_types::router())
}
