use pizza_order_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};
use rust_decimal::Decimal;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    seed_payment_types(&pool).await?;
    seed_items(&pool).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_payment_types(pool: &DbPool) -> anyhow::Result<()> {
    for kind in ["Cash", "Credit Card", "Debit Card", "Mobile Payment"] {
        sqlx::query(
            r#"
            INSERT INTO payment_types (id, type)
            VALUES ($1, $2)
            ON CONFLICT (type) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(kind)
        .execute(pool)
        .await?;
    }

    println!("Seeded payment types");
    Ok(())
}

async fn seed_items(pool: &DbPool) -> anyhow::Result<()> {
    // (name, image url, price in cents)
    let items = vec![
        ("Cheese Pizza", "https://images.example.com/cheese.png", 1200),
        ("Pepperoni Pizza", "https://images.example.com/pepperoni.png", 1450),
        ("Veggie Pizza", "https://images.example.com/veggie.png", 1350),
        ("Garlic Knots", "https://images.example.com/knots.png", 600),
        ("Wings", "https://images.example.com/wings.png", 1100),
        ("Soda", "https://images.example.com/soda.png", 250),
    ];

    for (name, image_url, cents) in items {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, image_url, price)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(image_url)
        .bind(Decimal::new(cents, 2))
        .execute(pool)
        .await?;
    }

    println!("Seeded menu items");
    Ok(())
}
