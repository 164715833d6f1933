//! Basket totals.

use crate::model::{OrderItem, OrderTotal};

/// Sums `items` and applies `tax_rate` (pass `0.0` for no tax).
///
/// Inputs are trusted: negative prices, quantities or rates flow through the
/// arithmetic unchanged.
pub fn calculate_order_total(items: &[OrderItem], tax_rate: f64) -> OrderTotal {
    let subtotal: f64 = items
        .iter()
        .map(|item| item.price * item.quantity as f64)
        .sum();
    let tax = subtotal * tax_rate;

    OrderTotal {
        subtotal,
        tax,
        total: subtotal + tax,
        item_count: items.iter().map(|item| item.quantity).sum(),
    }
}
