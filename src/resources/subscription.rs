//! Subscription resource (compact expansion target).

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::object::Object;
use crate::params::Metadata;
use crate::resources::customer::Customer;
use crate::resources::plan::Plan;

/// A customer subscription to a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    /// Unique identifier.
    pub id: String,
    /// Always `"subscription"`.
    pub object: String,
    /// Whether the subscription cancels at period end.
    pub cancel_at_period_end: bool,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// End of the current billing period (unix timestamp).
    pub current_period_end: i64,
    /// Start of the current billing period (unix timestamp).
    pub current_period_start: i64,
    /// Customer the subscription belongs to.
    pub customer: Option<Expandable<Customer>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Plan the subscription bills against.
    pub plan: Option<Plan>,
    /// Quantity of the plan.
    pub quantity: i64,
    /// Subscription status (e.g. `active`, `past_due`, `canceled`).
    pub status: String,
}

impl Object for Subscription {
    const OBJECT: &'static str = "subscription";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for one subscription item on an invoice preview.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionItemsParams {
    /// Whether to delete this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    /// Subscription item identifier, when modifying an existing item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Plan to bill against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Quantity of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_decode() {
        let json = r#"{"id": "sub_1", "status": "active", "customer": "cus_1", "quantity": 2}"#;
        let subscription: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(subscription.status, "active");
        assert_eq!(subscription.quantity, 2);
        assert_eq!(subscription.customer.unwrap().id(), "cus_1");
    }
}
