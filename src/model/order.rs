//! Order resources as the order API sends and receives them.
//!
//! Wire names are camelCase. An [`Order`] keeps the server's object exactly
//! as it arrived: references such as `plat` or `customer` may come back as a
//! bare id or as a populated document, and numbers keep their original form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Opaque identifier assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An order as returned by the server.
///
/// The object is held untouched and serialises back to the same JSON. The
/// accessors read the well-known fields without constraining their shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Map<String, Value>);

impl Order {
    /// `orderId`, when the server sent one as a string or number.
    pub fn order_id(&self) -> Option<OrderId> {
        match self.0.get("orderId")? {
            Value::String(id) => Some(OrderId(id.clone())),
            Value::Number(id) => Some(OrderId(id.to_string())),
            _ => None,
        }
    }

    /// Dish reference: an id or a populated document.
    pub fn plat(&self) -> Option<&Value> {
        self.0.get("plat")
    }

    /// Customer reference: an id or a populated document.
    pub fn customer(&self) -> Option<&Value> {
        self.0.get("customer")
    }

    pub fn category(&self) -> Option<&Value> {
        self.0.get("category")
    }

    pub fn price(&self) -> Option<f64> {
        self.0.get("price").and_then(Value::as_f64)
    }

    pub fn delivery_date(&self) -> Option<&str> {
        self.str_field("deliveryDate")
    }

    pub fn pay_method(&self) -> Option<&str> {
        self.str_field("payMethod")
    }

    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    /// Cancellation reason, set once the order is cancelled.
    pub fn reason(&self) -> Option<&str> {
        self.str_field("reason")
    }

    /// Any field by its wire name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Order {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Payload for creating a new order. Also the input to validation.
///
/// Every field is optional: validation reports what is missing rather than
/// failing to build the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_method: Option<String>,
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayMethod {
    #[serde(rename = "MTN MoMo")]
    MtnMomo,
    #[serde(rename = "Orange Money")]
    OrangeMoney,
    #[serde(rename = "Wave")]
    Wave,
}

impl PayMethod {
    pub const ALL: [PayMethod; 3] = [PayMethod::MtnMomo, PayMethod::OrangeMoney, PayMethod::Wave];

    /// The label the API uses.
    pub fn label(self) -> &'static str {
        match self {
            PayMethod::MtnMomo => "MTN MoMo",
            PayMethod::OrangeMoney => "Orange Money",
            PayMethod::Wave => "Wave",
        }
    }

    /// Exact, case-sensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl Display for PayMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of a basket, used only for total calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub price: f64,
    pub quantity: i64,
}

impl OrderItem {
    pub fn new(price: f64, quantity: i64) -> Self {
        Self { price, quantity }
    }
}

/// Result of [`calculate_order_total`](crate::order::calculate_order_total).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotal {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub item_count: i64,
}

/// Review payload; shape is decided by the caller and the server.
pub type ReviewData = Value;

/// Statistics object returned by `/orders/stats`.
pub type OrderStats = Value;
