use serde::{Deserialize, Serialize};

/// Fields collected by the checkout form.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub address: String,
    pub payment_method: String,
}

/// Result of a successful checkout: the composed order text and the
/// messaging deep link carrying it.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOutcome {
    pub message: String,
    pub url: String,
}
