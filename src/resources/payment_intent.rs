//! Payment intent and setup intent resources (compact expansion targets).

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::object::Object;
use crate::params::{Currency, Metadata};
use crate::resources::customer::Customer;

/// A payment intent tracking the lifecycle of a payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentIntent {
    /// Unique identifier.
    pub id: String,
    /// Always `"payment_intent"`.
    pub object: String,
    /// Amount intended to be collected, in minor units.
    pub amount: i64,
    /// Secret used client-side to complete the payment.
    pub client_secret: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Customer the intent belongs to.
    pub customer: Option<Expandable<Customer>>,
    /// Arbitrary description.
    pub description: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Intent status (e.g. `requires_payment_method`, `succeeded`).
    pub status: String,
}

impl Object for PaymentIntent {
    const OBJECT: &'static str = "payment_intent";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A setup intent for collecting payment credentials without charging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupIntent {
    /// Unique identifier.
    pub id: String,
    /// Always `"setup_intent"`.
    pub object: String,
    /// Secret used client-side to complete the setup.
    pub client_secret: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Customer the intent belongs to.
    pub customer: Option<Expandable<Customer>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Intent status.
    pub status: String,
}

impl Object for SetupIntent {
    const OBJECT: &'static str = "setup_intent";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_decode() {
        let json = r#"{"id": "pi_1", "amount": 5000, "status": "succeeded"}"#;
        let intent: PaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.amount, 5000);
        assert_eq!(intent.status, "succeeded");
    }
}
