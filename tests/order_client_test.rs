use order_client::clients::{OrderClient, DEFAULT_CANCEL_REASON};
use order_client::model::{OrderData, OrderId};
use order_client::order::OrderOperation;
use order_client::transport::mock::MockTransport;
use order_client::transport::{ApiResponse, Filters, Method, TransportError};
use serde_json::{json, Value};

fn order_json(id: &str, status: &str) -> Value {
    json!({
        "orderId": id,
        "plat": "Yassa poulet",
        "customer": "Moussa",
        "category": "Plats",
        "price": 2500,
        "deliveryDate": "2030-05-01T12:00:00Z",
        "payMethod": "Orange Money",
        "status": status
    })
}

fn filters(pairs: &[(&str, &str)]) -> Filters {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn test_get_user_orders_decodes_list() {
    let mut mock = MockTransport::new();
    mock.expect_get("/orders/user")
        .return_ok(json!([order_json("ord_1", "en_attente"), order_json("ord_2", "livree")]));

    let client = OrderClient::new(mock.transport());
    let orders = client.get_user_orders().await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order_id(), Some(OrderId::from("ord_1")));
    assert_eq!(orders[1].status(), Some("livree"));
    assert!(mock.requests()[0].params.is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_lists_fall_back_to_empty() {
    let mut mock = MockTransport::new();
    mock.expect_get("/orders/user").return_response(ApiResponse::empty());
    mock.expect_get("/orders/user").return_ok(Value::Null);
    mock.expect_get("/orders").return_ok(json!(false));
    mock.expect_get("/orders").return_ok(json!(""));

    let client = OrderClient::new(mock.transport());

    assert!(client.get_user_orders().await.unwrap().is_empty());
    assert!(client.get_user_orders().await.unwrap().is_empty());
    assert!(client.get_all_orders(&Filters::new()).await.unwrap().is_empty());
    assert!(client.get_all_orders(&Filters::new()).await.unwrap().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_orders_are_returned_as_the_server_sent_them() {
    let populated = json!({
        "orderId": "ord_1",
        "plat": { "_id": "p1", "name": "Yassa" },
        "customer": { "_id": "c1", "name": "Moussa" },
        "price": 3500,
        "status": "en_attente"
    });
    let mut mock = MockTransport::new();
    mock.expect_get("/orders/user").return_ok(json!([populated.clone(), { "orderId": "ord_2" }]));
    mock.expect_get("/orders/ord_1").return_ok(populated.clone());

    let client = OrderClient::new(mock.transport());

    let orders = client.get_user_orders().await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].plat().and_then(|p| p.get("name")), Some(&json!("Yassa")));
    assert_eq!(orders[1].plat(), None);

    let order = client.get_order_by_id(&"ord_1".into()).await.unwrap();
    assert_eq!(serde_json::to_value(&order).unwrap(), populated);
    mock.verify();
}

#[tokio::test]
async fn test_filters_are_forwarded_verbatim() {
    let mut mock = MockTransport::new();
    mock.expect_get("/orders").return_ok(json!([]));
    mock.expect_get("/orders/stats").return_ok(json!({ "total": 12, "revenue": 42000 }));

    let client = OrderClient::new(mock.transport());
    let list_filters = Filters::new()
        .with("status", "en_attente")
        .with("page", 2)
        .with("customer", "Awa Diop");
    let stats_filters = filters(&[("from", "2030-01-01"), ("to", "2030-01-31")]);

    client.get_all_orders(&list_filters).await.unwrap();
    let stats = client.get_order_stats(&stats_filters).await.unwrap();

    assert_eq!(stats, json!({ "total": 12, "revenue": 42000 }));

    let requests = mock.requests();
    assert_eq!(requests[0].params, list_filters);
    let keys: Vec<&str> = requests[0].params.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["status", "page", "customer"]);
    assert_eq!(requests[1].params, stats_filters);
    mock.verify();
}

#[tokio::test]
async fn test_get_order_by_id() {
    let mut mock = MockTransport::new();
    mock.expect_get("/orders/ord_9").return_ok(order_json("ord_9", "en_cours"));
    mock.expect_get("/orders/missing").return_err(TransportError::without_message().with_status(404));

    let client = OrderClient::new(mock.transport());

    let order = client.get_order_by_id(&"ord_9".into()).await.unwrap();
    assert_eq!(order.plat(), Some(&json!("Yassa poulet")));

    let err = client.get_order_by_id(&"missing".into()).await.unwrap_err();
    assert_eq!(err.to_string(), "Commande non trouvée");
    assert_eq!(err.operation(), OrderOperation::FetchOrder);
    mock.verify();
}

#[tokio::test]
async fn test_create_order_posts_payload() {
    let mut mock = MockTransport::new();
    mock.expect_post("/orders").return_ok(order_json("ord_new", "en_attente"));

    let client = OrderClient::new(mock.transport());
    let data = OrderData {
        plat: Some("Yassa poulet".to_string()),
        customer: Some("Moussa".to_string()),
        category: Some("Plats".to_string()),
        price: Some(2500.0),
        delivery_date: Some("2030-05-01T12:00:00Z".to_string()),
        pay_method: Some("Orange Money".to_string()),
    };

    let order = client.create_order(&data).await.unwrap();
    assert_eq!(order.order_id(), Some(OrderId::from("ord_new")));

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.body,
        Some(json!({
            "plat": "Yassa poulet",
            "customer": "Moussa",
            "category": "Plats",
            "price": 2500.0,
            "deliveryDate": "2030-05-01T12:00:00Z",
            "payMethod": "Orange Money"
        }))
    );
    mock.verify();
}

#[tokio::test]
async fn test_create_order_error_messages() {
    let mut mock = MockTransport::new();
    mock.expect_post("/orders").return_err(TransportError::new("Network error"));
    mock.expect_post("/orders").return_err(TransportError::without_message());

    let client = OrderClient::new(mock.transport());

    let err = client.create_order(&OrderData::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Network error");

    let err = client.create_order(&OrderData::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Impossible de créer la commande");
    assert_eq!(err.operation(), OrderOperation::CreateOrder);
    mock.verify();
}

#[tokio::test]
async fn test_create_order_rejects_malformed_payload() {
    let mut mock = MockTransport::new();
    mock.expect_post("/orders").return_ok(json!("ord_new"));
    mock.expect_post("/orders").return_response(ApiResponse::empty());

    let client = OrderClient::new(mock.transport());

    let err = client.create_order(&OrderData::default()).await.unwrap_err();
    assert_eq!(err.operation(), OrderOperation::CreateOrder);
    assert!(err.to_string().contains("invalid type"), "{}", err);

    let err = client.create_order(&OrderData::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "Impossible de créer la commande");
}

#[tokio::test]
async fn test_update_order_status_sends_status_body() {
    let mut mock = MockTransport::new();
    mock.expect_patch("/orders/ord_3/status").return_ok(order_json("ord_3", "livree"));

    let client = OrderClient::new(mock.transport());
    let order = client.update_order_status(&"ord_3".into(), "livree").await.unwrap();

    assert_eq!(order.status(), Some("livree"));
    assert_eq!(mock.requests()[0].body, Some(json!({ "status": "livree" })));
    mock.verify();
}

#[tokio::test]
async fn test_cancel_order_reason() {
    let mut mock = MockTransport::new();
    let mut cancelled = order_json("ord_4", "annulee");
    cancelled["reason"] = json!(DEFAULT_CANCEL_REASON);
    mock.expect_patch("/orders/ord_4/cancel").return_ok(cancelled);
    mock.expect_patch("/orders/ord_4/cancel").return_ok(order_json("ord_4", "annulee"));

    let client = OrderClient::new(mock.transport());

    let order = client.cancel_order(&"ord_4".into(), None).await.unwrap();
    assert_eq!(order.reason(), Some("Annulée par l'utilisateur"));

    client.cancel_order(&"ord_4".into(), Some("Livraison trop tardive")).await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].body, Some(json!({ "reason": "Annulée par l'utilisateur" })));
    assert_eq!(requests[1].body, Some(json!({ "reason": "Livraison trop tardive" })));
    mock.verify();
}

#[tokio::test]
async fn test_add_order_review_returns_review() {
    let mut mock = MockTransport::new();
    let review = json!({ "rating": 5, "comment": "Excellent" });
    mock.expect_post("/orders/ord_5/review")
        .return_ok(json!({ "reviewId": "rev_1", "rating": 5, "comment": "Excellent" }));

    let client = OrderClient::new(mock.transport());
    let created = client.add_order_review(&"ord_5".into(), &review).await.unwrap();

    assert_eq!(created["reviewId"], json!("rev_1"));
    assert_eq!(mock.requests()[0].body, Some(review));
    mock.verify();
}

#[tokio::test]
async fn test_each_operation_has_its_fallback() {
    let mut mock = MockTransport::new();
    let silent = TransportError::without_message;
    mock.expect_get("/orders/user").return_err(silent());
    mock.expect_get("/orders").return_err(silent());
    mock.expect_get("/orders/stats").return_err(silent());
    mock.expect_patch("/orders/x/status").return_err(silent());
    mock.expect_patch("/orders/x/cancel").return_err(silent());
    mock.expect_post("/orders/x/review").return_err(silent());

    let client = OrderClient::new(mock.transport());
    let id = OrderId::from("x");
    let none = Filters::new();

    let messages = vec![
        client.get_user_orders().await.unwrap_err().to_string(),
        client.get_all_orders(&none).await.unwrap_err().to_string(),
        client.get_order_stats(&none).await.unwrap_err().to_string(),
        client.update_order_status(&id, "livree").await.unwrap_err().to_string(),
        client.cancel_order(&id, None).await.unwrap_err().to_string(),
        client.add_order_review(&id, &json!({})).await.unwrap_err().to_string(),
    ];

    assert_eq!(
        messages,
        vec![
            "Impossible de récupérer les commandes",
            "Impossible de récupérer les commandes",
            "Impossible de récupérer les statistiques",
            "Impossible de mettre à jour le statut",
            "Impossible d'annuler la commande",
            "Impossible d'ajouter l'avis",
        ]
    );
    mock.verify();
}
