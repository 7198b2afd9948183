//! SKU resource and parameters.

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::form::FormParams;
use crate::list::ListParams;
use crate::object::Object;
use crate::params::{Currency, Metadata, Params};
use crate::resources::product::{PackageDimensions, PackageDimensionsParams, Product};

/// How a SKU's inventory is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkuInventoryType {
    /// Tracked in coarse buckets.
    Bucket,
    /// Tracked as an exact quantity.
    Finite,
    /// Not tracked.
    Infinite,
}

/// Bucket value for bucket-tracked inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkuInventoryValue {
    /// Plenty in stock.
    InStock,
    /// Limited stock remaining.
    Limited,
    /// Out of stock.
    OutOfStock,
}

/// Inventory state of a SKU.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    /// Exact quantity, for finite inventory.
    pub quantity: i64,
    /// How the inventory is tracked.
    #[serde(rename = "type")]
    pub inventory_type: Option<SkuInventoryType>,
    /// Bucket value, for bucket inventory.
    pub value: Option<SkuInventoryValue>,
}

/// A purchasable variation of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sku {
    /// Unique identifier.
    pub id: String,
    /// Always `"sku"`.
    pub object: String,
    /// Whether the SKU is available for purchase.
    pub active: bool,
    /// Attribute values distinguishing this SKU.
    pub attributes: Metadata,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Full description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Inventory state.
    pub inventory: Option<Inventory>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Shipping dimensions.
    pub package_dimensions: Option<PackageDimensions>,
    /// Price, in minor units.
    pub price: i64,
    /// Product the SKU belongs to.
    pub product: Option<Expandable<Product>>,
    /// Last-update time as a unix timestamp.
    pub updated: i64,
}

impl Object for Sku {
    const OBJECT: &'static str = "sku";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Inventory parameters on a SKU.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryParams {
    /// Exact quantity, for finite inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// How the inventory is tracked.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub inventory_type: Option<String>,
    /// Bucket value, for bucket inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Parameters for creating or updating a SKU.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkuParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Whether the SKU is available for purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Attribute values distinguishing this SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Metadata>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Full description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier to create the SKU under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Inventory state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<InventoryParams>,
    /// Shipping dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_dimensions: Option<PackageDimensionsParams>,
    /// Price, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    /// Product the SKU belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl FormParams for SkuParams {}

/// Parameters for listing SKUs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkuListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Filter by attribute values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Metadata>,
    /// Filter to the given identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Only SKUs that are in stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    /// Filter by product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl FormParams for SkuListParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form;

    #[test]
    fn test_sku_decode_with_unexpanded_product() {
        let json = r#"{
            "id": "sku_1",
            "object": "sku",
            "price": 1500,
            "currency": "usd",
            "attributes": {"size": "M", "color": "navy"},
            "inventory": {"type": "finite", "quantity": 40},
            "product": "prod_1"
        }"#;
        let sku: Sku = serde_json::from_str(json).unwrap();
        assert_eq!(sku.price, 1500);
        assert_eq!(sku.attributes.get("size").unwrap(), "M");
        let inventory = sku.inventory.unwrap();
        assert_eq!(inventory.inventory_type, Some(SkuInventoryType::Finite));
        assert_eq!(inventory.quantity, 40);
        assert_eq!(sku.product.unwrap().id(), "prod_1");
    }

    #[test]
    fn test_sku_params_encode_attributes_by_key() {
        let mut attributes = Metadata::new();
        attributes.insert("size".to_owned(), "M".to_owned());
        let params = SkuParams {
            attributes: Some(attributes),
            price: Some(1500),
            product: Some("prod_1".to_owned()),
            ..SkuParams::default()
        };
        let encoded = to_form(&params).unwrap();
        assert_eq!(
            encoded,
            "attributes%5Bsize%5D=M&price=1500&product=prod_1"
        );
    }
}
