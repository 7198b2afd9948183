//! Shared decoding support for discriminator-driven resources.
//!
//! Several resources carry a `type`-style discriminator whose value selects
//! which nested shape is present: external accounts dispatch on `object`,
//! sources nest their type-specific data under a key equal to the `type`
//! value. [`TaggedPayload`] does the shared splitting once; each resource's
//! `Deserialize` impl then matches the tag against its closed variant set.
//!
//! An unrecognized tag is never an error here: the literal tag string and the
//! raw payload are preserved so a client built against an older enumeration
//! keeps working when the server introduces a new variant.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A raw payload split into its discriminator tag and value tree.
#[derive(Debug, Clone)]
pub struct TaggedPayload {
    tag: String,
    value: Value,
}

impl TaggedPayload {
    /// Splits a decoded value on the named discriminator field.
    ///
    /// A missing or non-string discriminator yields an empty tag; whether
    /// that is acceptable is up to the resource decoding the common fields.
    #[must_use]
    pub fn new(value: Value, discriminator: &str) -> Self {
        let tag = value
            .get(discriminator)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        Self { tag, value }
    }

    /// The server's literal discriminator value.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The payload's `id` field, empty when absent.
    #[must_use]
    pub fn id(&self) -> &str {
        self.value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Decodes the whole payload as `T`.
    ///
    /// Used both for the unconditional common fields and for variants whose
    /// shape is the entire object (e.g. external accounts).
    ///
    /// # Errors
    ///
    /// Propagates the underlying decode error for malformed fields.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.value)
    }

    /// The sub-object nested under a key equal to the tag, if present.
    ///
    /// Sources store their type-specific data this way (`{"type": "ach",
    /// "ach": {...}}`).
    #[must_use]
    pub fn keyed_payload(&self) -> Option<&Map<String, Value>> {
        self.value.get(&self.tag).and_then(Value::as_object)
    }

    /// Consumes the payload, yielding the raw object map.
    ///
    /// This is the forward-compatibility fallback for unknown tags; a
    /// non-object payload yields an empty map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        match self.value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_extraction() {
        let payload = TaggedPayload::new(json!({"object": "card", "last4": "4242"}), "object");
        assert_eq!(payload.tag(), "card");
    }

    #[test]
    fn test_missing_discriminator_yields_empty_tag() {
        let payload = TaggedPayload::new(json!({"last4": "4242"}), "object");
        assert_eq!(payload.tag(), "");
    }

    #[test]
    fn test_non_string_discriminator_yields_empty_tag() {
        let payload = TaggedPayload::new(json!({"object": 7}), "object");
        assert_eq!(payload.tag(), "");
    }

    #[test]
    fn test_decode_whole_payload() {
        #[derive(Debug, serde::Deserialize)]
        struct Common {
            id: String,
        }

        let payload = TaggedPayload::new(json!({"id": "ba_1", "object": "bank_account"}), "object");
        let common: Common = payload.decode().unwrap();
        assert_eq!(common.id, "ba_1");
    }

    #[test]
    fn test_keyed_payload() {
        let payload = TaggedPayload::new(
            json!({"type": "ach_credit_transfer", "ach_credit_transfer": {"routing_number": "110000000"}}),
            "type",
        );
        let keyed = payload.keyed_payload().unwrap();
        assert_eq!(keyed.get("routing_number").unwrap(), "110000000");
    }

    #[test]
    fn test_keyed_payload_absent_for_unknown_tag() {
        let payload = TaggedPayload::new(json!({"type": "hologram"}), "type");
        assert!(payload.keyed_payload().is_none());
    }

    #[test]
    fn test_into_map_preserves_raw_payload() {
        let payload = TaggedPayload::new(json!({"object": "hologram", "shine": true}), "object");
        let map = payload.into_map();
        assert_eq!(map.get("shine").unwrap(), &json!(true));
    }
}
