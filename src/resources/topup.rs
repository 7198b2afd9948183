//! Top-up resource and parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::expand::Expandable;
use crate::form::{FormParams, FormValues};
use crate::list::{ListParams, RangeQueryParams};
use crate::object::Object;
use crate::params::{Currency, Params};
use crate::resources::balance::BalanceTransaction;
use crate::resources::payment_source::PaymentSource;
use crate::resources::source::SourceParams;

/// A top-up adding funds to the account balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topup {
    /// Unique identifier.
    pub id: String,
    /// Always `"topup"`.
    pub object: String,
    /// Amount transferred, in minor units.
    pub amount: i64,
    /// When the funds arrived, for completed top-ups (unix timestamp).
    pub arrival_date: i64,
    /// Balance transaction describing the funds movement.
    pub balance_transaction: Option<Expandable<BalanceTransaction>>,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Arbitrary description.
    pub description: String,
    /// When the funds are expected to arrive (unix timestamp).
    pub expected_availability_date: i64,
    /// Error code, for failed top-ups.
    pub failure_code: String,
    /// Human-readable failure message.
    pub failure_message: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Source the funds were drawn from.
    pub source: Option<Expandable<PaymentSource>>,
    /// Descriptor shown on the bank statement.
    pub statement_descriptor: String,
    /// Status: `canceled`, `failed`, `pending`, `reversed`, or `succeeded`.
    pub status: String,
    /// Group the top-up belongs to, for transfer grouping.
    pub transfer_group: String,
}

impl Object for Topup {
    const OBJECT: &'static str = "topup";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for creating or updating a top-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopupParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Amount to transfer, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Arbitrary description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Source to draw the funds from; encoded under its own keys.
    #[serde(skip)]
    pub source: Option<SourceParams>,
    /// Descriptor shown on the bank statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Group the top-up belongs to, for transfer grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_group: Option<String>,
}

impl TopupParams {
    /// Sets the funding source from a raw JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::UnsupportedSourceType`] when the value is
    /// not a token string or a supported source object.
    pub fn set_source(&mut self, value: &Value) -> Result<()> {
        self.source = Some(SourceParams::from_value(value)?);
        Ok(())
    }
}

impl FormParams for TopupParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        if let Some(source) = &self.source {
            source.append_to(form, key_parts)?;
        }
        Ok(())
    }
}

/// Parameters for listing top-ups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopupListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by exact creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Filter by creation time range. Shares the `created` wire key with
    /// [`Self::created`]; when both are set the range wins.
    #[serde(rename = "created", skip_serializing_if = "Option::is_none")]
    pub created_range: Option<RangeQueryParams>,
}

impl FormParams for TopupListParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form_values;
    use serde_json::json;

    #[test]
    fn test_topup_decode_with_source() {
        let json = r#"{
            "id": "tu_1",
            "object": "topup",
            "amount": 10000,
            "status": "pending",
            "balance_transaction": "txn_1",
            "source": {"id": "src_1", "object": "source", "type": "ach_credit_transfer"}
        }"#;
        let topup: Topup = serde_json::from_str(json).unwrap();
        assert_eq!(topup.balance_transaction.as_ref().unwrap().id(), "txn_1");
        let source = topup.source.unwrap();
        assert!(source.is_expanded());
        assert_eq!(source.id(), "src_1");
    }

    #[test]
    fn test_set_source_token_encodes_bare_key() {
        let mut params = TopupParams {
            amount: Some(2500),
            currency: Some("usd".to_owned()),
            ..TopupParams::default()
        };
        params.set_source(&json!("tok_visa")).unwrap();

        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("amount"), Some("2500"));
        assert_eq!(form.last("source"), Some("tok_visa"));
    }

    #[test]
    fn test_created_range_wins_over_scalar_created() {
        let params = TopupListParams {
            created: Some(1500000000),
            created_range: Some(RangeQueryParams {
                gte: Some(1500000000),
                lt: Some(1600000000),
                ..RangeQueryParams::default()
            }),
            ..TopupListParams::default()
        };

        let form = to_form_values(&params).unwrap();
        assert!(form.last("created").is_none());
        assert_eq!(form.last("created[gte]"), Some("1500000000"));
        assert_eq!(form.last("created[lt]"), Some("1600000000"));
    }

    #[test]
    fn test_set_source_rejects_unsupported_object() {
        let mut params = TopupParams::default();
        let err = params.set_source(&json!({"object": "gift_card"})).unwrap_err();
        assert!(err.to_string().contains("gift_card"));
    }
}
