//! Server-provided PayPal connection state.

use serde::{Deserialize, Serialize};

/// PayPal connection details for the current seller, as sent by the server.
///
/// Eligibility flags are decided server-side and taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayPalConnect {
    pub email: Option<String>,
    /// Merchant id of the linked account; `None` when nothing is linked.
    pub charge_processor_merchant_id: Option<String>,
    /// Whether the linked account finished verification.
    pub charge_processor_verified: bool,
    pub needs_email_confirmation: bool,
    /// Countries where PayPal payments are unavailable.
    pub unsupported_countries: Vec<String>,
    /// Whether connect/disconnect controls are offered at all.
    pub show_paypal_connect: bool,
    /// Whether the seller meets the requirements to connect.
    pub allow_paypal_connect: bool,
    /// False while the account backs active subscription or preorder payments.
    pub paypal_disconnect_allowed: bool,
}

impl PayPalConnect {
    /// Merchant id, treating an empty string as unlinked.
    pub fn merchant_id(&self) -> Option<&str> {
        self.charge_processor_merchant_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

/// Body returned by the disconnect endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisconnectResponse {
    pub success: bool,
}
