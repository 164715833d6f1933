//! Error types for order operations.

use crate::transport::TransportError;
use std::fmt;
use thiserror::Error;

/// The facade call that produced an [`OrderError`].
///
/// Each operation carries its own user-facing fallback, shown when the
/// underlying failure has no message of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOperation {
    FetchUserOrders,
    FetchAllOrders,
    FetchOrder,
    CreateOrder,
    UpdateStatus,
    CancelOrder,
    AddReview,
    FetchStats,
}

impl OrderOperation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            OrderOperation::FetchUserOrders | OrderOperation::FetchAllOrders => {
                "Impossible de récupérer les commandes"
            }
            OrderOperation::FetchOrder => "Commande non trouvée",
            OrderOperation::CreateOrder => "Impossible de créer la commande",
            OrderOperation::UpdateStatus => "Impossible de mettre à jour le statut",
            OrderOperation::CancelOrder => "Impossible d'annuler la commande",
            OrderOperation::AddReview => "Impossible d'ajouter l'avis",
            OrderOperation::FetchStats => "Impossible de récupérer les statistiques",
        }
    }

    fn name(self) -> &'static str {
        match self {
            OrderOperation::FetchUserOrders => "get_user_orders",
            OrderOperation::FetchAllOrders => "get_all_orders",
            OrderOperation::FetchOrder => "get_order_by_id",
            OrderOperation::CreateOrder => "create_order",
            OrderOperation::UpdateStatus => "update_order_status",
            OrderOperation::CancelOrder => "cancel_order",
            OrderOperation::AddReview => "add_order_review",
            OrderOperation::FetchStats => "get_order_stats",
        }
    }
}

impl fmt::Display for OrderOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed order operation.
///
/// There is one kind of failure: the call did not succeed. `Display` yields
/// only the user-facing message; [`operation`](Self::operation) tells which
/// call raised it.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct OrderError {
    operation: OrderOperation,
    message: String,
}

impl OrderError {
    /// Uses `message` when it is non-empty, else the operation's fallback.
    pub fn new(operation: OrderOperation, message: Option<&str>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| operation.fallback_message())
            .to_string();
        Self { operation, message }
    }

    pub fn from_transport(operation: OrderOperation, error: &TransportError) -> Self {
        Self::new(operation, error.message())
    }

    pub fn operation(&self) -> OrderOperation {
        self.operation
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
