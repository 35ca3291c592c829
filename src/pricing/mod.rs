//! Pricing engine module for lift passes.
//!
//! Computes day and night ticket costs from a base price, the customer's
//! age and the requested date, with a Monday reduction that holidays cancel.

pub mod calculators;
pub mod date;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_cost, ceil_price, is_holiday};
pub use date::{parse_date, CivilDate};
pub use models::TicketType;
pub use routes::router;
pub use services::PricingError;
