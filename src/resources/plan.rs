//! Plan resource (compact expansion target).

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::object::Object;
use crate::params::{Currency, Metadata};
use crate::resources::product::Product;

/// A pricing plan for recurring billing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    /// Unique identifier.
    pub id: String,
    /// Always `"plan"`.
    pub object: String,
    /// Whether the plan can be used for new subscriptions.
    pub active: bool,
    /// Amount charged per billing period, in minor units.
    pub amount: i64,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Billing frequency: `day`, `week`, `month`, or `year`.
    pub interval: String,
    /// Number of intervals between billings.
    pub interval_count: i64,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Display name of the plan.
    pub nickname: String,
    /// Product the plan belongs to.
    pub product: Option<Expandable<Product>>,
}

impl Object for Plan {
    const OBJECT: &'static str = "plan";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_with_unexpanded_product() {
        let json = r#"{"id": "plan_1", "amount": 1500, "interval": "month", "product": "prod_9"}"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.product.unwrap().id(), "prod_9");
    }
}
