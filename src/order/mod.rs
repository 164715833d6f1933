//! Order-specific logic that runs on the client: errors, validation, totals
//! and display formatting.

pub mod error;
pub mod format;
pub mod total;
pub mod validation;

pub use error::*;
pub use format::{format_date, format_price, parse_date, DateInput};
pub use total::calculate_order_total;
pub use validation::*;
