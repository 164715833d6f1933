//! Client-side checks run before an order is submitted.
//!
//! Validation is advisory: problems come back as data and the caller decides
//! whether to submit anyway. All checks run; none short-circuits another.

use crate::model::{OrderData, PayMethod};
use crate::order::format::parse_date;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// A single problem found in an [`OrderData`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Le plat est requis")]
    MissingPlat,

    #[error("Le client est requis")]
    MissingCustomer,

    #[error("La catégorie est requise")]
    MissingCategory,

    #[error("Le prix doit être supérieur à 0")]
    InvalidPrice,

    #[error("La date de livraison est requise")]
    MissingDeliveryDate,

    #[error("La date de livraison doit être dans le futur")]
    DeliveryDateNotInFuture,

    #[error("Méthode de paiement invalide")]
    InvalidPayMethod,
}

/// Validates `data` against the current wall-clock time.
///
/// The delivery-date check compares against the exact instant of the call, so
/// a date a few milliseconds ahead can pass here and fail a moment later.
pub fn validate_order_data(data: &OrderData) -> Vec<String> {
    validate_order_data_at(data, Utc::now())
}

/// Same as [`validate_order_data`] with an explicit reference instant.
pub fn validate_order_data_at(data: &OrderData, now: DateTime<Utc>) -> Vec<String> {
    validation_issues(data, now)
        .into_iter()
        .map(|issue| issue.to_string())
        .collect()
}

/// Runs every check and returns the problems in check order.
pub fn validation_issues(data: &OrderData, now: DateTime<Utc>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if is_blank(&data.plat) {
        issues.push(ValidationIssue::MissingPlat);
    }
    if is_blank(&data.customer) {
        issues.push(ValidationIssue::MissingCustomer);
    }
    if is_blank(&data.category) {
        issues.push(ValidationIssue::MissingCategory);
    }

    // `!(p > 0)` so NaN is rejected too
    if !data.price.is_some_and(|p| p > 0.0) {
        issues.push(ValidationIssue::InvalidPrice);
    }

    match data.delivery_date.as_deref().filter(|d| !d.is_empty()) {
        None => issues.push(ValidationIssue::MissingDeliveryDate),
        // unparseable dates are not checked here
        Some(raw) => {
            if parse_date(raw).is_some_and(|date| date <= now) {
                issues.push(ValidationIssue::DeliveryDateNotInFuture);
            }
        }
    }

    if let Some(method) = data.pay_method.as_deref().filter(|m| !m.is_empty()) {
        if PayMethod::from_label(method).is_none() {
            issues.push(ValidationIssue::InvalidPayMethod);
        }
    }

    issues
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
