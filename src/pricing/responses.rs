//! Response DTOs for pricing API endpoints.

use serde::Serialize;

/// Response for `GET /prices`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostResponse {
    pub cost: u32,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
