//! Product resource and parameters.

use serde::{Deserialize, Serialize};

use crate::form::FormParams;
use crate::list::{ListParams, RangeQueryParams};
use crate::object::Object;
use crate::params::{Metadata, Params};

/// Type of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// A physical good, sold through SKUs.
    Good,
    /// A service, billed through plans.
    Service,
}

/// Shipping dimensions of a product or SKU.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageDimensions {
    /// Height in inches.
    pub height: f64,
    /// Length in inches.
    pub length: f64,
    /// Weight in ounces.
    pub weight: f64,
    /// Width in inches.
    pub width: f64,
}

/// A product available for purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Unique identifier.
    pub id: String,
    /// Always `"product"`.
    pub object: String,
    /// Whether the product is available for purchase.
    pub active: bool,
    /// Attribute names SKUs can vary on.
    pub attributes: Vec<String>,
    /// Short caption.
    pub caption: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Events that deactivate the product.
    pub deactivate_on: Vec<String>,
    /// Full description.
    pub description: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Product name.
    pub name: String,
    /// Shipping dimensions.
    pub package_dimensions: Option<PackageDimensions>,
    /// Whether the product ships.
    pub shippable: bool,
    /// Statement descriptor, for service products.
    pub statement_descriptor: String,
    /// Product type.
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    /// Label for units of the product, for service products.
    pub unit_label: String,
    /// Product page URL.
    pub url: String,
    /// Last-update time as a unix timestamp.
    pub updated: i64,
}

impl Object for Product {
    const OBJECT: &'static str = "product";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Shipping-dimension parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackageDimensionsParams {
    /// Height in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Length in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Weight in ounces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Width in inches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Parameters for creating or updating a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Whether the product is available for purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Attribute names SKUs can vary on.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Short caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Events that deactivate the product.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deactivate_on: Vec<String>,
    /// Full description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier to create the product under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Image URLs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shipping dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_dimensions: Option<PackageDimensionsParams>,
    /// Whether the product ships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shippable: Option<bool>,
    /// Statement descriptor, for service products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Product type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    /// Label for units of the product, for service products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_label: Option<String>,
    /// Product page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FormParams for ProductParams {}

/// Parameters for listing products.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductListParams {
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
    /// Filter to the given identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Filter by shippable flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shippable: Option<bool>,
    /// Filter by product page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Filter by product type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

impl FormParams for ProductListParams {}
