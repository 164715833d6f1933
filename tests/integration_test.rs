use chrono::{Duration, Utc};
use order_client::clients::OrderClient;
use order_client::model::{OrderData, OrderItem, PayMethod};
use order_client::order::{calculate_order_total, format_price, validate_order_data};
use order_client::transport::mock::MockTransport;
use serde_json::json;

/// Full client-side flow: price a basket, validate the draft, submit it and
/// follow the order through a status change and a cancellation.
#[tokio::test]
async fn test_order_lifecycle_against_mock_api() {
    let items = [OrderItem::new(1000.0, 2), OrderItem::new(500.0, 1)];
    let total = calculate_order_total(&items, 0.18);
    assert_eq!(format_price(total.total), "2\u{202F}950\u{A0}F\u{A0}CFA");

    let draft = OrderData {
        plat: Some("Mafé".to_string()),
        customer: Some("Fatou".to_string()),
        category: Some("Plats".to_string()),
        price: Some(total.total),
        delivery_date: Some((Utc::now() + Duration::days(2)).to_rfc3339()),
        pay_method: Some(PayMethod::MtnMomo.label().to_string()),
    };
    assert!(validate_order_data(&draft).is_empty());

    let mut mock = MockTransport::new();
    mock.expect_post("/orders").return_ok(json!({
        "orderId": "ord_100",
        "plat": "Mafé",
        "price": 2950.0,
        "status": "en_attente"
    }));
    mock.expect_patch("/orders/ord_100/status").return_ok(json!({
        "orderId": "ord_100",
        "status": "en_preparation"
    }));
    mock.expect_patch("/orders/ord_100/cancel").return_ok(json!({
        "orderId": "ord_100",
        "status": "annulee",
        "reason": "Client absent"
    }));

    let client = OrderClient::new(mock.transport());

    let created = client.create_order(&draft).await.expect("Failed to create order");
    assert_eq!(created.status(), Some("en_attente"));
    let order_id = created.order_id().expect("Server did not assign an id");

    let updated = client
        .update_order_status(&order_id, "en_preparation")
        .await
        .expect("Failed to update status");
    assert_eq!(updated.status(), Some("en_preparation"));

    let cancelled = client
        .cancel_order(&order_id, Some("Client absent"))
        .await
        .expect("Failed to cancel order");
    assert_eq!(cancelled.reason(), Some("Client absent"));

    mock.verify();
}

/// Concurrent calls through cloned clients are independent of each other.
#[tokio::test]
async fn test_concurrent_calls_share_nothing() {
    let mut mock = MockTransport::new();
    for _ in 0..10 {
        mock.expect_get("/orders/user").return_ok(json!([{ "orderId": "ord_1" }]));
    }

    let client = OrderClient::new(mock.transport());

    let mut handles = vec![];
    for _ in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.get_user_orders().await }));
    }

    for handle in handles {
        let orders = handle.await.unwrap().unwrap();
        assert_eq!(orders.len(), 1);
    }

    assert_eq!(mock.requests().len(), 10);
    mock.verify();
}
