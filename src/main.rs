//! Demo: validates and prices a sample basket locally, then lists the current
//! user's orders from the configured API.

use chrono::{Duration, Utc};
use order_client::lifecycle::{setup_tracing, ClientConfig};
use order_client::model::{OrderData, OrderItem, PayMethod};
use order_client::order::{calculate_order_total, format_date, format_price, validate_order_data};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ClientConfig::from_env();
    info!(base_url = %config.base_url, "Starting order client demo");

    let items = [OrderItem::new(3500.0, 2), OrderItem::new(1000.0, 1)];
    let total = calculate_order_total(&items, 0.18);
    info!(
        subtotal = %format_price(total.subtotal),
        tax = %format_price(total.tax),
        total = %format_price(total.total),
        item_count = total.item_count,
        "Basket priced"
    );

    let delivery = Utc::now() + Duration::days(1);
    let draft = OrderData {
        plat: Some("Thieboudienne".to_string()),
        customer: Some("Awa Diop".to_string()),
        category: Some("Plats".to_string()),
        price: Some(total.total),
        delivery_date: Some(delivery.to_rfc3339()),
        pay_method: Some(PayMethod::Wave.label().to_string()),
    };

    let issues = validate_order_data(&draft);
    if issues.is_empty() {
        info!(delivery = %format_date(delivery), "Draft order is valid");
    } else {
        for issue in &issues {
            warn!(%issue, "Draft order rejected");
        }
    }

    let client = config.connect().map_err(|e| e.to_string())?;

    let span = tracing::info_span!("fetch_orders");
    match client.get_user_orders().instrument(span).await {
        Ok(orders) => {
            info!(count = orders.len(), "Orders fetched");
            for order in &orders {
                info!(
                    order_id = ?order.order_id(),
                    status = order.status().unwrap_or("-"),
                    price = %order.price().map(format_price).unwrap_or_default(),
                    "Order"
                );
            }
        }
        Err(e) => error!(error = %e, "Could not fetch orders"),
    }

    Ok(())
}
