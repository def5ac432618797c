mod common;

use common::{create_item, create_payment_type, create_user, money, setup_state, unique};
use pizza_order_api::{
    dto::{
        orders::{CloseOrderRequest, CreateOrderRequest},
        revenue::CreateRevenueRequest,
        users::RegisterRequest,
    },
    error::AppError,
    services::{order_service, revenue_service, user_service},
    state::AppState,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Opens an order, attaches the given items and closes it without a tip.
async fn closed_order(
    state: &AppState,
    user_id: Uuid,
    payment_type_id: Uuid,
    item_cents: &[i64],
) -> anyhow::Result<Uuid> {
    let order_id = order_service::create_order(
        state,
        CreateOrderRequest {
            user_id,
            payment_type_id: Some(payment_type_id),
            name: "Counter".into(),
            phone: None,
            email: None,
            order_type: "In Person".into(),
        },
    )
    .await?
    .data
    .unwrap()
    .id;

    for cents in item_cents {
        let item_id = create_item(state, *cents).await?;
        order_service::attach_item(state, order_id, item_id).await?;
    }

    order_service::close_order(
        state,
        order_id,
        CloseOrderRequest {
            payment_type_id: Some(payment_type_id),
            ..Default::default()
        },
    )
    .await?;
    Ok(order_id)
}

// Revenue rows are only written here, so the ledger total moves by exactly
// what this test records.
#[tokio::test]
async fn revenue_ledger_tracks_closed_orders() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let user_id = create_user(&state).await?;
    let payment_type_id = create_payment_type(&state).await?;

    let start = revenue_service::total_revenue(&state).await?.data.unwrap();

    let ten = closed_order(&state, user_id, payment_type_id, &[1000]).await?;
    let twenty_five_fifty = closed_order(&state, user_id, payment_type_id, &[2000, 550]).await?;
    let zero = closed_order(&state, user_id, payment_type_id, &[]).await?;

    for order_id in [ten, twenty_five_fifty, zero] {
        let revenue = revenue_service::record_revenue(&state, CreateRevenueRequest { order_id })
            .await?
            .data
            .unwrap();
        assert_eq!(revenue.order_id, order_id);
        assert_eq!(revenue.payment_type_id, payment_type_id);
    }

    let after = revenue_service::total_revenue(&state).await?.data.unwrap();
    assert_eq!(after.total - start.total, money(3550));
    assert_eq!(after.count, start.count + 3);

    let twice =
        revenue_service::record_revenue(&state, CreateRevenueRequest { order_id: ten }).await;
    assert!(matches!(twice, Err(AppError::Conflict(_))));

    // The ledger outlives the order it was recorded from.
    order_service::delete_order(&state, twenty_five_fifty).await?;
    let after_order_delete = revenue_service::total_revenue(&state).await?.data.unwrap();
    assert_eq!(after_order_delete.total, after.total);
    assert_eq!(after_order_delete.count, after.count);
    let listed = revenue_service::list_revenue(&state).await?.data.unwrap();
    assert!(listed.items.iter().any(|r| r.order_id == twenty_five_fifty));

    let deleted = revenue_service::delete_revenue_for_order(&state, ten)
        .await?
        .data
        .unwrap();
    assert!(deleted.deleted);

    let resp = revenue_service::delete_revenue_for_order(&state, ten).await?;
    assert_eq!(resp.message, "Nothing to delete");
    assert!(!resp.data.unwrap().deleted);

    let end = revenue_service::total_revenue(&state).await?.data.unwrap();
    assert_eq!(end.total - start.total, money(2550));

    // Open orders and unknown orders never reach the ledger.
    let open_order = order_service::create_order(
        &state,
        CreateOrderRequest {
            user_id,
            payment_type_id: Some(payment_type_id),
            name: "Still eating".into(),
            phone: None,
            email: None,
            order_type: "In Person".into(),
        },
    )
    .await?
    .data
    .unwrap()
    .id;
    let open = revenue_service::record_revenue(
        &state,
        CreateRevenueRequest {
            order_id: open_order,
        },
    )
    .await;
    assert!(matches!(open, Err(AppError::BadRequest(_))));

    let missing = revenue_service::record_revenue(
        &state,
        CreateRevenueRequest {
            order_id: Uuid::new_v4(),
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let listed = revenue_service::list_revenue(&state).await?.data.unwrap();
    assert!(
        listed
            .items
            .iter()
            .any(|r| r.order_id == zero && r.order_total == Some(Decimal::ZERO))
    );

    Ok(())
}

#[tokio::test]
async fn registered_user_is_found_by_uid() -> anyhow::Result<()> {
    let Some(state) = setup_state().await? else {
        return Ok(());
    };
    let uid = unique("abc");

    let missing = user_service::check_user(&state, &uid).await?;
    assert_eq!(missing.message, "User is not registered");
    assert!(missing.data.unwrap().items.is_empty());

    let registered = user_service::register_user(
        &state,
        RegisterRequest {
            uid: uid.clone(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
        },
    )
    .await?
    .data
    .unwrap();

    let found = user_service::check_user(&state, &uid).await?.data.unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].id, registered.id);
    assert_eq!(found.items[0].uid, uid);

    let duplicate = user_service::register_user(
        &state,
        RegisterRequest {
            uid,
            name: "Ada again".into(),
            email: "ada@example.com".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}
