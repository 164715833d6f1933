//! # Order Client
//!
//! Provides a high-level API over the remote order API.
//! It wraps an [`HttpTransport`] and turns every failure into an [`OrderError`].
use crate::model::{Order, OrderData, OrderId, OrderStats, ReviewData};
use crate::order::{OrderError, OrderOperation};
use crate::transport::{ApiResponse, Filters, HttpTransport, TransportError};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Collection root of the order API.
pub const ORDERS_PATH: &str = "/orders";

/// Reason sent by [`OrderClient::cancel_order`] when the caller gives none.
pub const DEFAULT_CANCEL_REASON: &str = "Annulée par l'utilisateur";

/// Client for the order API.
///
/// Holds nothing but the injected transport, so clones are cheap and calls
/// made concurrently from several tasks are independent of each other. There
/// is no cache: each method is one round trip, and whatever the server returns
/// for a mutation is handed back untouched.
#[derive(Clone)]
pub struct OrderClient {
    inner: Arc<dyn HttpTransport>,
}

impl OrderClient {
    pub fn new(inner: Arc<dyn HttpTransport>) -> Self {
        Self { inner }
    }

    /// Orders belonging to the authenticated user.
    ///
    /// An absent or empty `data` field yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_user_orders(&self) -> Result<Vec<Order>, OrderError> {
        let operation = OrderOperation::FetchUserOrders;
        debug!("Sending request");

        let response = self
            .inner
            .get(&format!("{}/user", ORDERS_PATH), &Filters::new())
            .await
            .map_err(|e| transport_failure(operation, None, e))?;

        decode_list(operation, response)
    }

    /// Every order, narrowed by `filters` (forwarded as query parameters).
    ///
    /// Meant for back-office callers; access control is the server's job.
    #[instrument(skip(self))]
    pub async fn get_all_orders(&self, filters: &Filters) -> Result<Vec<Order>, OrderError> {
        let operation = OrderOperation::FetchAllOrders;
        debug!("Sending request");

        let response = self
            .inner
            .get(ORDERS_PATH, filters)
            .await
            .map_err(|e| transport_failure(operation, None, e))?;

        decode_list(operation, response)
    }

    #[instrument(skip(self, order_id), fields(order_id = %order_id))]
    pub async fn get_order_by_id(&self, order_id: &OrderId) -> Result<Order, OrderError> {
        let operation = OrderOperation::FetchOrder;
        debug!("Sending request");

        let response = self
            .inner
            .get(&order_path(order_id, None), &Filters::new())
            .await
            .map_err(|e| transport_failure(operation, Some(order_id), e))?;

        decode_required(operation, Some(order_id), response)
    }

    /// Aggregated statistics, narrowed by `filters`. Returned as the server sent them.
    #[instrument(skip(self))]
    pub async fn get_order_stats(&self, filters: &Filters) -> Result<OrderStats, OrderError> {
        let operation = OrderOperation::FetchStats;
        debug!("Sending request");

        let response = self
            .inner
            .get(&format!("{}/stats", ORDERS_PATH), filters)
            .await
            .map_err(|e| transport_failure(operation, None, e))?;

        Ok(response.data.unwrap_or(Value::Null))
    }

    /// Submits a new order. The result is the server's order, normally carrying
    /// the server-assigned `orderId`.
    ///
    /// No validation happens here; see [`validate_order_data`](crate::order::validate_order_data).
    #[instrument(skip(self, order_data))]
    pub async fn create_order(&self, order_data: &OrderData) -> Result<Order, OrderError> {
        let operation = OrderOperation::CreateOrder;
        debug!(?order_data, "create_order called");

        let body = serde_json::to_value(order_data)
            .map_err(|e| OrderError::new(operation, Some(&e.to_string())))?;

        info!("Sending create_order to API");
        let response = self
            .inner
            .post(ORDERS_PATH, body)
            .await
            .map_err(|e| transport_failure(operation, None, e))?;

        let order: Order = decode_required(operation, None, response)?;
        info!(order_id = ?order.order_id(), "Order created");
        Ok(order)
    }

    /// Moves an order to `status`. The server decides which values are legal.
    #[instrument(skip(self, order_id), fields(order_id = %order_id))]
    pub async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: &str,
    ) -> Result<Order, OrderError> {
        let operation = OrderOperation::UpdateStatus;
        debug!("Sending request");

        let response = self
            .inner
            .patch(&order_path(order_id, Some("status")), json!({ "status": status }))
            .await
            .map_err(|e| transport_failure(operation, Some(order_id), e))?;

        decode_required(operation, Some(order_id), response)
    }

    /// Cancels an order, with [`DEFAULT_CANCEL_REASON`] when `reason` is `None`.
    ///
    /// Whether the order can still be cancelled is for the server to decide.
    #[instrument(skip(self, order_id), fields(order_id = %order_id))]
    pub async fn cancel_order(
        &self,
        order_id: &OrderId,
        reason: Option<&str>,
    ) -> Result<Order, OrderError> {
        let operation = OrderOperation::CancelOrder;
        let reason = reason.unwrap_or(DEFAULT_CANCEL_REASON);
        debug!("Sending request");

        let response = self
            .inner
            .patch(&order_path(order_id, Some("cancel")), json!({ "reason": reason }))
            .await
            .map_err(|e| transport_failure(operation, Some(order_id), e))?;

        decode_required(operation, Some(order_id), response)
    }

    /// Attaches a review to an order and returns the created review.
    #[instrument(skip(self, order_id, review_data), fields(order_id = %order_id))]
    pub async fn add_order_review(
        &self,
        order_id: &OrderId,
        review_data: &ReviewData,
    ) -> Result<Value, OrderError> {
        let operation = OrderOperation::AddReview;
        debug!(?review_data, "Sending request");

        let response = self
            .inner
            .post(&order_path(order_id, Some("review")), review_data.clone())
            .await
            .map_err(|e| transport_failure(operation, Some(order_id), e))?;

        Ok(response.data.unwrap_or(Value::Null))
    }
}

fn order_path(order_id: &OrderId, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("{}/{}/{}", ORDERS_PATH, order_id, action),
        None => format!("{}/{}", ORDERS_PATH, order_id),
    }
}

fn transport_failure(
    operation: OrderOperation,
    order_id: Option<&OrderId>,
    e: TransportError,
) -> OrderError {
    error!(%operation, ?order_id, status = ?e.status, error = %e, "Order request failed");
    OrderError::from_transport(operation, &e)
}

fn decode_failure(
    operation: OrderOperation,
    order_id: Option<&OrderId>,
    e: serde_json::Error,
) -> OrderError {
    error!(%operation, ?order_id, error = %e, "Unexpected order payload");
    OrderError::new(operation, Some(&e.to_string()))
}

/// Lists fall back to empty when `data` is absent or falsy.
fn decode_list(operation: OrderOperation, response: ApiResponse) -> Result<Vec<Order>, OrderError> {
    match response.truthy_data() {
        Some(data) => {
            let orders: Vec<Order> = serde_json::from_value(data.clone())
                .map_err(|e| decode_failure(operation, None, e))?;
            debug!(count = orders.len(), "Orders received");
            Ok(orders)
        }
        None => Ok(Vec::new()),
    }
}

/// Single resources have no fallback: a missing `data` field is a failure.
fn decode_required<T: DeserializeOwned>(
    operation: OrderOperation,
    order_id: Option<&OrderId>,
    response: ApiResponse,
) -> Result<T, OrderError> {
    let Some(data) = response.data else {
        error!(%operation, ?order_id, "Response carried no data");
        return Err(OrderError::new(operation, None));
    };
    serde_json::from_value(data).map_err(|e| decode_failure(operation, order_id, e))
}
