//! Real cart engine and clients over a scripted transport.

use inventory_pos::cart::{CartError, CartState};
use inventory_pos::config::PosConfig;
use inventory_pos::gateway::mock::MockTransport;
use inventory_pos::gateway::{ApiError, Method};
use inventory_pos::lifecycle::PosSystem;
use inventory_pos::model::{Product, ProductId};
use inventory_pos::session::{guard, Navigation, SessionState, View};
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::oneshot;

fn espresso() -> Product {
    Product::new(1, "Espresso Beans", Decimal::new(1000, 2), 5)
}

fn oat_milk() -> Product {
    Product::new(2, "Oat Milk", Decimal::new(350, 2), 1)
}

fn system(mock: &MockTransport) -> PosSystem {
    PosSystem::with_transport(Arc::new(mock.clone()), &PosConfig::default())
}

fn listing() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Espresso Beans", "price": 10.0, "stock_quantity": 3},
        {"id": 2, "name": "Oat Milk", "price": 3.5, "stock_quantity": 0},
    ])
}

#[tokio::test]
async fn test_checkout_submits_once_and_clears_cart() {
    let mock = MockTransport::new();
    mock.expect(Method::Post, "/sales/").return_json(
        201,
        json!({"id": 41, "customer_name": "Jane", "total_amount": 23.5, "status": "completed"}),
    );
    mock.expect(Method::Get, "/products/").return_json(200, listing());
    let system = system(&mock);

    system.cart.add_item(espresso()).await.unwrap();
    system.cart.add_item(espresso()).await.unwrap();
    system.cart.add_item(oat_milk()).await.unwrap();
    assert_eq!(system.cart.total().await.unwrap(), Decimal::new(2350, 2));

    let rejected = system.cart.update_quantity(ProductId(1), 6).await;
    assert!(matches!(rejected, Err(CartError::InsufficientStock { .. })));
    assert_eq!(system.cart.total().await.unwrap(), Decimal::new(2350, 2));

    let receipt = system.cart.checkout(Some("Jane")).await.unwrap();

    assert_eq!(receipt.total, Decimal::new(2350, 2));
    assert_eq!(receipt.sale.and_then(|s| s.id), Some(41));
    let posted = mock.requests_to(Method::Post, "/sales/");
    assert_eq!(posted.len(), 1);
    assert_eq!(
        posted[0].json(),
        Some(&json!({
            "items": [
                {"product_id": 1, "quantity": 2, "price_at_sale": 10.0},
                {"product_id": 2, "quantity": 1, "price_at_sale": 3.5},
            ],
            "customer_name": "Jane",
        }))
    );

    let snapshot = system.cart.snapshot().await.unwrap();
    assert_eq!(snapshot.state, CartState::Empty);
    assert_eq!(system.catalog.find(ProductId(1)).unwrap().stock_quantity, 3);
    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_checkout_sends_nothing() {
    let mock = MockTransport::new();
    let system = system(&mock);

    let result = system.cart.checkout(Some("Jane")).await;

    assert_eq!(result, Err(CartError::EmptyCart));
    assert!(mock.requests().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_checkout_keeps_cart() {
    let mock = MockTransport::new();
    mock.expect(Method::Post, "/sales/")
        .return_json(500, json!({"detail": "database unavailable"}));
    let system = system(&mock);
    system.cart.add_item(espresso()).await.unwrap();

    let result = system.cart.checkout(None).await;

    assert_eq!(
        result,
        Err(CartError::Submission(ApiError::Api {
            status: 500,
            message: "database unavailable".into()
        }))
    );
    let snapshot = system.cart.snapshot().await.unwrap();
    assert_eq!(snapshot.lines.len(), 1);
    assert_eq!(snapshot.lines[0].quantity, 1);
    assert!(!snapshot.checkout_pending);
    // No refresh after a failed sale.
    assert!(mock.requests_to(Method::Get, "/products/").is_empty());
    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_in_flight_blocks_changes() {
    let mock = MockTransport::new();
    let (release, gate) = oneshot::channel();
    mock.expect(Method::Post, "/sales/")
        .wait_for(gate)
        .return_json(201, json!({"id": 7}));
    mock.expect(Method::Get, "/products/").return_json(200, listing());
    let system = system(&mock);
    system.cart.add_item(espresso()).await.unwrap();

    let cart = system.cart.clone();
    let first = tokio::spawn(async move { cart.checkout(None).await });

    // Wait until the engine reports the checkout as pending.
    loop {
        if system.cart.snapshot().await.unwrap().checkout_pending {
            break;
        }
        tokio::task::yield_now().await;
    }

    assert_eq!(
        system.cart.checkout(None).await,
        Err(CartError::CheckoutInProgress)
    );
    assert_eq!(
        system.cart.add_item(espresso()).await,
        Err(CartError::CheckoutInProgress)
    );
    assert_eq!(
        system.cart.remove_item(ProductId(1)).await,
        Err(CartError::CheckoutInProgress)
    );

    release.send(()).unwrap();
    let receipt = first.await.unwrap().unwrap();

    assert_eq!(receipt.total, Decimal::new(1000, 2));
    assert_eq!(mock.requests_to(Method::Post, "/sales/").len(), 1);
    assert!(system.cart.snapshot().await.unwrap().is_empty());
    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_expired_session_redirects_to_login() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/auth/me").return_json(
        200,
        json!({"id": 5, "name": "Bo", "email": "bo@example.com", "role": "employee"}),
    );
    mock.expect(Method::Get, "/products/").return_json(200, listing());
    mock.expect(Method::Post, "/sales/").return_status(401);
    let system = system(&mock);

    let state = system.start().await;
    assert!(state.is_authenticated());
    assert_eq!(
        guard(View::Admin, &state),
        Navigation::Redirect(View::Dashboard)
    );

    let product = system.catalog.find(ProductId(1)).unwrap();
    system.cart.add_item(product).await.unwrap();
    let result = system.cart.checkout(None).await;

    assert_eq!(result, Err(CartError::Submission(ApiError::Unauthorized)));
    let state = system.session.context().state();
    assert_eq!(state, SessionState::Expired);
    assert_eq!(guard(View::Sales, &state), Navigation::Redirect(View::Login));
    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_admin_overview_loads_concurrently() {
    let mock = MockTransport::new();
    mock.expect(Method::Get, "/auth/me").return_json(
        200,
        json!({"id": 1, "name": "Ada", "email": "ada@example.com", "role": "admin"}),
    );
    mock.expect(Method::Get, "/products/").return_json(200, json!([]));
    mock.expect(Method::Get, "/customers/analytics")
        .return_json(200, json!({"total_sales": 120.5, "count": 3}));
    mock.expect(Method::Get, "/customers/").return_json(
        200,
        json!([{"id": 1, "name": "Jane", "email": null}]),
    );
    mock.expect(Method::Get, "/sales/").return_json(
        200,
        json!([{"id": 9, "customer_name": null, "total_amount": 12.0, "status": "completed"}]),
    );
    let system = system(&mock);
    system.start().await;

    let overview = system.admin_overview().await.unwrap();

    assert_eq!(overview.analytics.total_sales, Decimal::new(1205, 1));
    assert_eq!(overview.customers[0].email, "");
    assert_eq!(overview.sales[0].customer_label(), "Walk-in Customer");
    mock.verify();
    system.shutdown().await.unwrap();
}
