mod common;

use common::{create_payment_type, money, setup_state, unique};
use pizza_order_api::{
    dto::items::{CreateItemRequest, UpdateItemRequest},
    error::AppError,
    routes::params::ItemQuery,
    services::{item_service, payment_type_service},
};
use rust_decimal::Decimal;
use uuid::Uuid;

#[tokio::test]
async fn menu_item_crud_and_search() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let name = unique("Margherita");

    let created = item_service::create_item(
        &state,
        CreateItemRequest {
            name: name.clone(),
            image_url: "margherita.png".into(),
            price: money(1200),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(created.price, money(1200));

    let fetched = item_service::get_item(&state, created.id).await?.data.unwrap();
    assert_eq!(fetched.name, name);

    // Only the price is sent, so name and image stay.
    let updated = item_service::update_item(
        &state,
        created.id,
        UpdateItemRequest {
            price: Some(money(1350)),
            ..Default::default()
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.price, money(1350));
    assert_eq!(updated.name, name);
    assert_eq!(updated.image_url, "margherita.png");

    let found = item_service::list_items(
        &state,
        ItemQuery {
            q: Some(name.to_uppercase()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(found.message, "Items");
    let found = found.data.unwrap().items;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, created.id);

    let nothing = item_service::list_items(
        &state,
        ItemQuery {
            q: Some(unique("no-such-pizza")),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(nothing.message, "No items");
    assert!(nothing.data.unwrap().items.is_empty());

    let too_big = item_service::update_item(
        &state,
        created.id,
        UpdateItemRequest {
            price: Some(Decimal::MAX),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(too_big, Err(AppError::BadRequest(_))));

    item_service::delete_item(&state, created.id).await?;
    let gone = item_service::get_item(&state, created.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));
    let again = item_service::delete_item(&state, created.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn negative_price_never_reaches_the_menu() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let name = unique("Refund Pizza");

    let created = item_service::create_item(
        &state,
        CreateItemRequest {
            name: name.clone(),
            image_url: String::new(),
            price: money(-100),
        },
    )
    .await;
    assert!(matches!(created, Err(AppError::BadRequest(_))));

    let listed = item_service::list_items(
        &state,
        ItemQuery {
            q: Some(name),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(listed.message, "No items");

    Ok(())
}

#[tokio::test]
async fn payment_types_are_listed_and_fetched() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let id = create_payment_type(&state).await?;

    let one = payment_type_service::get_payment_type(&state, id)
        .await?
        .data
        .unwrap();
    assert_eq!(one.id, id);
    assert!(one.kind.starts_with("card-"));

    let all = payment_type_service::list_payment_types(&state).await?;
    assert_eq!(all.message, "OK");
    let meta_total = all.meta.as_ref().and_then(|m| m.total);
    let items = all.data.unwrap().items;
    assert!(items.iter().any(|p| p.id == id));
    assert_eq!(meta_total, Some(items.len() as i64));

    let missing = payment_type_service::get_payment_type(&state, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
