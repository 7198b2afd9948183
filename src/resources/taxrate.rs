//! Tax rate resource and parameters.

use serde::{Deserialize, Serialize};

use crate::form::FormParams;
use crate::list::{ListParams, RangeQueryParams};
use crate::object::Object;
use crate::params::Metadata;

/// A tax rate applied to invoice line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRate {
    /// Unique identifier.
    pub id: String,
    /// Always `"tax_rate"`.
    pub object: String,
    /// Whether the rate can be applied to new invoices.
    pub active: bool,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Arbitrary description, not shown to customers.
    pub description: String,
    /// Name shown on invoices.
    pub display_name: String,
    /// Whether the rate is inclusive.
    pub inclusive: bool,
    /// Jurisdiction the rate applies in.
    pub jurisdiction: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// The rate, as a percentage.
    pub percentage: f64,
}

impl Object for TaxRate {
    const OBJECT: &'static str = "tax_rate";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for creating or updating a tax rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaxRateParams {
    /// Whether the rate can be applied to new invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Arbitrary description, not shown to customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name shown on invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the rate is inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    /// Jurisdiction the rate applies in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    /// The rate, as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Free-form metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl FormParams for TaxRateParams {}

/// Percentage bounds for filtering tax rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaxRatePercentageRangeQueryParams {
    /// Strictly-greater-than bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,
    /// Greater-than-or-equal bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
    /// Strictly-less-than bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
    /// Less-than-or-equal bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
}

/// Parameters for listing tax rates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaxRateListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Filter by exact creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Filter by creation time range. Shares the `created` wire key with
    /// [`Self::created`]; when both are set the range wins.
    #[serde(rename = "created", skip_serializing_if = "Option::is_none")]
    pub created_range: Option<RangeQueryParams>,
    /// Filter by inclusive flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
    /// Filter by exact percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    /// Filter by percentage range. Shares the `percentage` wire key with
    /// [`Self::percentage`]; when both are set the range wins.
    #[serde(rename = "percentage", skip_serializing_if = "Option::is_none")]
    pub percentage_range: Option<TaxRatePercentageRangeQueryParams>,
}

impl FormParams for TaxRateListParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form;

    #[test]
    fn test_tax_rate_decode() {
        let json = r#"{"id": "txr_1", "object": "tax_rate", "percentage": 19.0, "jurisdiction": "DE", "inclusive": true}"#;
        let rate: TaxRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.percentage, 19.0);
        assert_eq!(rate.jurisdiction, "DE");
        assert!(rate.inclusive);
    }

    #[test]
    fn test_tax_rate_params_encode() {
        let params = TaxRateParams {
            display_name: Some("VAT".to_owned()),
            percentage: Some(21.0),
            inclusive: Some(false),
            ..TaxRateParams::default()
        };
        let encoded = to_form(&params).unwrap();
        assert_eq!(encoded, "display_name=VAT&inclusive=false&percentage=21.0");
    }

    #[test]
    fn test_tax_rate_list_params_percentage_range() {
        let params = TaxRateListParams {
            percentage_range: Some(TaxRatePercentageRangeQueryParams {
                gte: Some(5.0),
                lt: Some(10.0),
                ..TaxRatePercentageRangeQueryParams::default()
            }),
            ..TaxRateListParams::default()
        };
        let encoded = to_form(&params).unwrap();
        assert_eq!(encoded, "percentage%5Bgte%5D=5.0&percentage%5Blt%5D=10.0");
    }
}
