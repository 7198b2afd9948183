//! Card resource.

use serde::{Deserialize, Serialize};

use crate::object::Object;
use crate::params::{Currency, Metadata};
use crate::resources::address::Address;

/// A payment card attached to an account or customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    /// Unique identifier.
    pub id: String,
    /// Always `"card"`.
    pub object: String,
    /// Billing address, when collected.
    pub address: Option<Address>,
    /// Card brand (e.g. `Visa`).
    pub brand: String,
    /// Two-letter country code of the issuing bank.
    pub country: String,
    /// Currency payouts are made in, for external-account cards.
    pub currency: Currency,
    /// CVC verification result, when checked.
    pub cvc_check: String,
    /// Expiration month (1-12).
    pub exp_month: i64,
    /// Expiration year (four digits).
    pub exp_year: i64,
    /// Fingerprint uniquely identifying this card number.
    pub fingerprint: String,
    /// Funding type: `credit`, `debit`, `prepaid`, or `unknown`.
    pub funding: String,
    /// Last four digits of the card number.
    pub last4: String,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Cardholder name.
    pub name: String,
}

impl Object for Card {
    const OBJECT: &'static str = "card";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Card parameters for source attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardParams {
    /// Card verification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    /// Expiration month (1-12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<String>,
    /// Expiration year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<String>,
    /// Cardholder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_decode() {
        let json = r#"{
            "id": "card_1",
            "object": "card",
            "brand": "Visa",
            "exp_month": 8,
            "exp_year": 2027,
            "funding": "credit",
            "last4": "4242"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.brand, "Visa");
        assert_eq!(card.exp_month, 8);
        assert_eq!(card.last4, "4242");
    }
}
