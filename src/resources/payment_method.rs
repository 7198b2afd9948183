//! Payment method resource (compact expansion target).

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::object::Object;
use crate::params::Metadata;
use crate::resources::customer::Customer;

/// Card details attached to a payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodCard {
    /// Card brand (e.g. `visa`, `mastercard`).
    pub brand: String,
    /// Two-letter country code of the issuing bank.
    pub country: String,
    /// Expiration month.
    pub exp_month: i64,
    /// Expiration year.
    pub exp_year: i64,
    /// Uniquely identifies the card number.
    pub fingerprint: String,
    /// Funding type: `credit`, `debit`, `prepaid`, or `unknown`.
    pub funding: String,
    /// Last four digits of the card number.
    pub last4: String,
}

/// A reusable payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethod {
    /// Unique identifier.
    pub id: String,
    /// Always `"payment_method"`.
    pub object: String,
    /// Card details, present when `payment_method_type` is `card`.
    pub card: Option<PaymentMethodCard>,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Customer the method is attached to.
    pub customer: Option<Expandable<Customer>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Payment method type (e.g. `card`).
    #[serde(rename = "type")]
    pub payment_method_type: String,
}

impl Object for PaymentMethod {
    const OBJECT: &'static str = "payment_method";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_decode() {
        let json = r#"{
            "id": "pm_1",
            "type": "card",
            "card": {"brand": "visa", "last4": "4242", "exp_month": 4, "exp_year": 2030},
            "customer": "cus_3"
        }"#;
        let method: PaymentMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.payment_method_type, "card");
        assert_eq!(method.card.unwrap().last4, "4242");
        assert_eq!(method.customer.unwrap().id(), "cus_3");
    }
}
