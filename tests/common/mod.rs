#![allow(dead_code)]

use pizza_order_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    entity::{
        items::ActiveModel as ItemActive, payment_types::ActiveModel as PaymentTypeActive,
        users::ActiveModel as UserActive,
    },
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

/// Connects to the test database, or returns `None` so the caller can skip.
///
/// Tests never truncate: every fixture is created with unique names so the
/// flows can run in parallel against a shared database.
pub async fn setup_state() -> anyhow::Result<Option<AppState>> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run database flow tests."
            );
            return Ok(None);
        }
    };

    let pool = create_pool(&database_url, 5).await?;
    run_migrations(&pool).await?;
    let orm = create_orm_conn(&database_url, 5).await?;

    Ok(Some(AppState::new(pool, orm)))
}

pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub async fn create_user(state: &AppState) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        uid: Set(unique("uid")),
        name: Set("Test Customer".into()),
        email: Set("customer@example.com".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(user.id)
}

pub async fn create_item(state: &AppState, cents: i64) -> anyhow::Result<Uuid> {
    let item = ItemActive {
        id: Set(Uuid::new_v4()),
        name: Set(unique("item")),
        image_url: Set(String::new()),
        price: Set(money(cents)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(item.id)
}

pub async fn create_payment_type(state: &AppState) -> anyhow::Result<Uuid> {
    let payment_type = PaymentTypeActive {
        id: Set(Uuid::new_v4()),
        kind: Set(unique("card")),
    }
    .insert(&state.orm)
    .await?;
    Ok(payment_type.id)
}
