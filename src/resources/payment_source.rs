//! Polymorphic payment source resource.
//!
//! The server returns a charge/top-up source as whichever concrete resource
//! backs it, discriminated by the `object` field. The whole payload is the
//! variant's shape, so decoding splits on the tag and hands the same tree to
//! the matching resource type.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::object::Object;
use crate::resources::bank_account::BankAccount;
use crate::resources::card::Card;
use crate::resources::source::Source;
use crate::variant::TaggedPayload;

/// The concrete resource backing a payment source.
///
/// Exactly one variant is populated by construction. An unrecognized
/// `object` tag keeps the raw payload instead of failing the decode.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentSourceVariant {
    /// A bank account (`"object": "bank_account"`).
    BankAccount(Box<BankAccount>),
    /// A card (`"object": "card"`).
    Card(Box<Card>),
    /// A source object (`"object": "source"`).
    Source(Box<Source>),
    /// A tag this enumeration does not know about; the raw payload is kept.
    Unknown(Map<String, Value>),
}

/// A payment source attached to a charge or top-up.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSource {
    /// Unique identifier of the underlying resource.
    pub id: String,
    /// The literal `object` value the server sent.
    pub source_type: String,
    /// The typed (or raw) payload.
    pub variant: PaymentSourceVariant,
}

impl PaymentSource {
    /// The bank account payload, when the source is one.
    #[must_use]
    pub fn bank_account(&self) -> Option<&BankAccount> {
        match &self.variant {
            PaymentSourceVariant::BankAccount(account) => Some(account),
            _ => None,
        }
    }

    /// The card payload, when the source is one.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match &self.variant {
            PaymentSourceVariant::Card(card) => Some(card),
            _ => None,
        }
    }

    /// The source-object payload, when the source is one.
    #[must_use]
    pub fn source(&self) -> Option<&Source> {
        match &self.variant {
            PaymentSourceVariant::Source(source) => Some(source),
            _ => None,
        }
    }
}

impl Object for PaymentSource {
    const OBJECT: &'static str = "payment_source";

    fn id(&self) -> &str {
        &self.id
    }
}

impl<'de> Deserialize<'de> for PaymentSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let payload = TaggedPayload::new(raw, "object");
        let id = payload.id().to_owned();
        let source_type = payload.tag().to_owned();
        let variant = match payload.tag() {
            "bank_account" => {
                PaymentSourceVariant::BankAccount(payload.decode().map_err(DeError::custom)?)
            }
            "card" => PaymentSourceVariant::Card(payload.decode().map_err(DeError::custom)?),
            "source" => PaymentSourceVariant::Source(payload.decode().map_err(DeError::custom)?),
            _ => PaymentSourceVariant::Unknown(payload.into_map()),
        };
        Ok(Self {
            id,
            source_type,
            variant,
        })
    }
}

impl Serialize for PaymentSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.variant {
            PaymentSourceVariant::BankAccount(account) => account.serialize(serializer),
            PaymentSourceVariant::Card(card) => card.serialize(serializer),
            PaymentSourceVariant::Source(source) => source.serialize(serializer),
            PaymentSourceVariant::Unknown(map) => map.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_source_populates_card_only() {
        let json = r#"{"id": "card_1", "object": "card", "last4": "4242", "brand": "Visa"}"#;
        let source: PaymentSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.id, "card_1");
        assert_eq!(source.source_type, "card");
        assert_eq!(source.card().unwrap().last4, "4242");
        assert!(source.bank_account().is_none());
        assert!(source.source().is_none());
    }

    #[test]
    fn test_bank_account_source() {
        let json = r#"{"id": "ba_1", "object": "bank_account", "last4": "6789"}"#;
        let source: PaymentSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.bank_account().unwrap().last4, "6789");
        assert!(source.card().is_none());
    }

    #[test]
    fn test_unknown_object_tag_is_preserved() {
        let json = r#"{"id": "src_x", "object": "crypto_wallet", "network": "test"}"#;
        let source: PaymentSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.source_type, "crypto_wallet");
        assert!(source.card().is_none());
        assert!(source.bank_account().is_none());
        match &source.variant {
            PaymentSourceVariant::Unknown(map) => {
                assert_eq!(map.get("network").unwrap(), "test");
            }
            other => panic!("expected unknown variant, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_is_idempotent() {
        let json = r#"{"id": "card_1", "object": "card", "last4": "4242"}"#;
        let first: PaymentSource = serde_json::from_str(json).unwrap();
        let second: PaymentSource = serde_json::from_str(json).unwrap();
        assert_eq!(first, second);
    }
}
