//! Common address hashes.

use serde::{Deserialize, Serialize};

/// An address as it appears on response resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// City, district, suburb, town, or village.
    pub city: String,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    pub country: String,
    /// Address line 1 (street address, PO box).
    pub line1: String,
    /// Address line 2 (apartment, suite, unit).
    pub line2: String,
    /// ZIP or postal code.
    pub postal_code: String,
    /// State, county, province, or region.
    pub state: String,
}

/// Address parameters for create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddressParams {
    /// City, district, suburb, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Address line 1 (street address, PO box).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Address line 2 (apartment, suite, unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// ZIP or postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// State, county, province, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_decodes_partial_payload() {
        let address: Address =
            serde_json::from_str(r#"{"city": "Berlin", "country": "DE"}"#).unwrap();
        assert_eq!(address.city, "Berlin");
        assert_eq!(address.country, "DE");
        assert!(address.line1.is_empty());
    }

    #[test]
    fn test_address_params_skip_unset() {
        let params = AddressParams { city: Some("Berlin".to_owned()), ..AddressParams::default() };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"city": "Berlin"}));
    }
}
