//! Generic expandable references.
//!
//! Relation fields in API responses arrive either as a bare identifier string
//! or, when the request asked for expansion, as the fully populated nested
//! object. [`Expandable`] decodes both shapes once, generically, so resource
//! structs never hand-roll the string-or-object logic per field.
//!
//! Absent or `null` fields are modelled as `Option<Expandable<T>>`; `None` is
//! not an error and must not be read as "resource does not exist".
//!
//! # Examples
//!
//! ```
//! use payrail::expand::Expandable;
//! use payrail::resources::account::Account;
//!
//! let bare: Expandable<Account> = serde_json::from_str(r#""acct_1""#)?;
//! assert_eq!(bare.id(), "acct_1");
//! assert!(bare.as_object().is_none());
//!
//! let full: Expandable<Account> =
//!     serde_json::from_str(r#"{"id": "acct_1", "email": "a@b.com"}"#)?;
//! assert_eq!(full.id(), "acct_1");
//! assert_eq!(full.as_object().unwrap().email, "a@b.com");
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::object::Object;

/// A reference that is either a bare identifier or the expanded resource.
///
/// After decoding, the identifier is always reachable through [`id`](Self::id)
/// whether or not the full object was present.
#[derive(Debug, Clone, PartialEq)]
pub enum Expandable<T> {
    /// The server sent only the resource identifier.
    Id(String),
    /// The server inlined the full resource.
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// The referenced resource's identifier.
    ///
    /// For the expanded form this reads the identifier out of the nested
    /// object itself.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(obj) => obj.id(),
        }
    }

    /// The full resource, if the reference was expanded.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(obj) => Some(obj),
        }
    }

    /// Consumes the reference, yielding the full resource if expanded.
    #[must_use]
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(obj) => Some(*obj),
        }
    }

    /// Whether the full resource is present.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl<'de, T> Deserialize<'de> for Expandable<T>
where
    T: Object + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExpandableVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ExpandableVisitor<T>
        where
            T: Object + Deserialize<'de>,
        {
            type Value = Expandable<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, "an id string or a {} object", T::OBJECT)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Expandable::Id(value.to_owned()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Expandable::Id(value))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                T::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(|obj| Expandable::Object(Box::new(obj)))
            }
        }

        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

impl<T> Serialize for Expandable<T>
where
    T: Object + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Id(id) => serializer.serialize_str(id),
            Self::Object(obj) => obj.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::account::Account;
    use crate::resources::product::Product;

    #[test]
    fn test_bare_id_decodes_to_id_variant() {
        let reference: Expandable<Account> = serde_json::from_str(r#""acct_1""#).unwrap();
        assert_eq!(reference.id(), "acct_1");
        assert!(!reference.is_expanded());
        assert!(reference.as_object().is_none());
    }

    #[test]
    fn test_full_object_decodes_to_object_variant() {
        let json = r#"{"id": "acct_1", "email": "a@b.com", "country": "US", "charges_enabled": true}"#;
        let reference: Expandable<Account> = serde_json::from_str(json).unwrap();
        assert_eq!(reference.id(), "acct_1");
        let account = reference.as_object().unwrap();
        assert_eq!(account.email, "a@b.com");
        assert_eq!(account.country, "US");
        assert!(account.charges_enabled);
    }

    #[test]
    fn test_identifier_comes_from_object_id_field() {
        let json = r#"{"id": "prod_9", "name": "Widget"}"#;
        let reference: Expandable<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(reference.id(), "prod_9");
    }

    #[test]
    fn test_malformed_payload_is_a_decode_error() {
        let result: Result<Expandable<Account>, _> = serde_json::from_str("42");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("an id string or a account object"));
    }

    #[test]
    fn test_null_field_is_absent_not_an_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Holder {
            account: Option<Expandable<Account>>,
        }

        let holder: Holder = serde_json::from_str(r#"{"account": null}"#).unwrap();
        assert!(holder.account.is_none());

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.account.is_none());
    }

    #[test]
    fn test_serialize_id_as_bare_string() {
        let reference: Expandable<Account> = Expandable::Id("acct_1".to_owned());
        assert_eq!(serde_json::to_string(&reference).unwrap(), r#""acct_1""#);
    }

    #[test]
    fn test_decode_idempotence() {
        let json = r#"{"id": "acct_1", "email": "a@b.com"}"#;
        let first: Expandable<Account> = serde_json::from_str(json).unwrap();
        let second: Expandable<Account> = serde_json::from_str(json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_into_object() {
        let json = r#"{"id": "acct_1"}"#;
        let reference: Expandable<Account> = serde_json::from_str(json).unwrap();
        let account = reference.into_object().unwrap();
        assert_eq!(account.id, "acct_1");

        let bare: Expandable<Account> = Expandable::Id("acct_2".to_owned());
        assert!(bare.into_object().is_none());
    }
}
