//! Shipping detail hashes shared by sources, checkout sessions, and customers.

use serde::{Deserialize, Serialize};

use crate::resources::address::{Address, AddressParams};

/// Shipping information on a response resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingDetails {
    /// Shipping address.
    pub address: Option<Address>,
    /// Delivery service that shipped the order.
    pub carrier: String,
    /// Recipient name.
    pub name: String,
    /// Recipient phone (including extension).
    pub phone: String,
    /// Tracking number provided by the carrier.
    pub tracking_number: String,
}

/// Shipping information on a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerShippingDetails {
    /// Shipping address.
    pub address: Option<Address>,
    /// Recipient name.
    pub name: String,
    /// Recipient phone (including extension).
    pub phone: String,
}

/// Shipping parameters for create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShippingDetailsParams {
    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    /// Delivery service that will ship the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Recipient phone (including extension).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Tracking number provided by the carrier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_details_decode() {
        let json = r#"{"address": {"city": "Oslo"}, "name": "Kim", "carrier": "DHL"}"#;
        let shipping: ShippingDetails = serde_json::from_str(json).unwrap();
        assert_eq!(shipping.address.unwrap().city, "Oslo");
        assert_eq!(shipping.carrier, "DHL");
        assert!(shipping.tracking_number.is_empty());
    }
}
