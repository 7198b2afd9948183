//! Charge resource (compact expansion target).

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::object::Object;
use crate::params::{Currency, Metadata};
use crate::resources::customer::Customer;

/// A charge against a payment source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Charge {
    /// Unique identifier.
    pub id: String,
    /// Always `"charge"`.
    pub object: String,
    /// Amount intended to be collected, in minor units.
    pub amount: i64,
    /// Amount refunded so far, in minor units.
    pub amount_refunded: i64,
    /// Whether the charge has been fully captured.
    pub captured: bool,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Customer the charge belongs to.
    pub customer: Option<Expandable<Customer>>,
    /// Arbitrary description.
    pub description: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Whether the charge succeeded.
    pub paid: bool,
    /// Whether the charge has been fully refunded.
    pub refunded: bool,
    /// Status: `succeeded`, `pending`, or `failed`.
    pub status: String,
}

impl Object for Charge {
    const OBJECT: &'static str = "charge";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_with_unexpanded_customer() {
        let json = r#"{"id": "ch_1", "amount": 999, "currency": "eur", "customer": "cus_7"}"#;
        let charge: Charge = serde_json::from_str(json).unwrap();
        assert_eq!(charge.customer.as_ref().unwrap().id(), "cus_7");
        assert!(!charge.customer.unwrap().is_expanded());
    }
}
