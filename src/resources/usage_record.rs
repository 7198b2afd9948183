//! Usage record resource and parameters.

use serde::{Deserialize, Serialize};

use crate::form::FormParams;
use crate::object::Object;
use crate::params::Params;

/// Adds the reported quantity to the running total for the period.
pub const USAGE_RECORD_ACTION_INCREMENT: &str = "increment";
/// Replaces the running total for the period with the reported quantity.
pub const USAGE_RECORD_ACTION_SET: &str = "set";

/// A reported unit of usage on a metered subscription item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageRecord {
    /// Unique identifier.
    pub id: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Usage quantity reported.
    pub quantity: i64,
    /// Subscription item the usage was reported against.
    pub subscription_item: String,
    /// Time the usage occurred (unix timestamp).
    pub timestamp: i64,
}

impl Object for UsageRecord {
    const OBJECT: &'static str = "usage_record";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for reporting usage on a subscription item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageRecordParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// How the quantity applies to the running total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Usage quantity to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Subscription item to report against. Addressed in the URL.
    #[serde(skip)]
    pub subscription_item: Option<String>,
    /// Time the usage occurred (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl FormParams for UsageRecordParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form;

    #[test]
    fn test_usage_record_decode() {
        let json = r#"{
            "id": "mbur_1",
            "quantity": 42,
            "subscription_item": "si_1",
            "timestamp": 1565045678
        }"#;
        let record: UsageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.quantity, 42);
        assert_eq!(record.subscription_item, "si_1");
    }

    #[test]
    fn test_usage_record_params_skip_subscription_item() {
        let params = UsageRecordParams {
            action: Some(USAGE_RECORD_ACTION_INCREMENT.to_owned()),
            quantity: Some(42),
            subscription_item: Some("si_1".to_owned()),
            timestamp: Some(1_565_045_678),
            ..UsageRecordParams::default()
        };
        let encoded = to_form(&params).unwrap();
        assert_eq!(encoded, "action=increment&quantity=42&timestamp=1565045678");
    }
}
