//! The [`Object`] trait and the response decode entry point.
//!
//! Every response resource in the catalogue implements [`Object`], which ties
//! the Rust type to its API object name and exposes the identifier that
//! [`crate::expand::Expandable`] relies on.

use serde::de::DeserializeOwned;

use crate::error::{ModelError, Result};

/// An API resource with a stable object name and an identifier.
///
/// `OBJECT` is the value of the resource's `object` field on the wire
/// (e.g. `"account"`). `id` returns the resource's identifier; resources
/// without a server-assigned identifier return an empty string.
pub trait Object {
    /// API object name of this resource.
    const OBJECT: &'static str;

    /// The resource identifier.
    fn id(&self) -> &str;
}

/// Decodes a raw response body into a resource.
///
/// This is the single decode entry point for response payloads: transport
/// code hands the raw bytes here and gets a populated resource back. Decode
/// failures surface as [`ModelError::Decode`] naming the resource type.
///
/// # Errors
///
/// Returns [`ModelError::Decode`] when the payload is malformed or does not
/// match the resource shape.
///
/// # Examples
///
/// ```
/// use payrail::object::from_json;
/// use payrail::resources::taxrate::TaxRate;
///
/// let body = br#"{"id": "txr_1", "object": "tax_rate", "percentage": 7.25}"#;
/// let rate: TaxRate = from_json(body)?;
/// assert_eq!(rate.id, "txr_1");
/// # Ok::<(), payrail::ModelError>(())
/// ```
pub fn from_json<T>(body: &[u8]) -> Result<T>
where
    T: Object + DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|err| ModelError::Decode {
        resource: T::OBJECT,
        detail: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::taxrate::TaxRate;

    #[test]
    fn test_from_json_decodes_resource() {
        let body = br#"{"id": "txr_42", "object": "tax_rate", "percentage": 20.0, "inclusive": true}"#;
        let rate: TaxRate = from_json(body).unwrap();
        assert_eq!(rate.id, "txr_42");
        assert!(rate.inclusive);
    }

    #[test]
    fn test_from_json_names_resource_on_failure() {
        let body = br#"{"id": 17}"#;
        let err = from_json::<TaxRate>(body).unwrap_err();
        assert!(err.to_string().contains("tax_rate"));
    }

    #[test]
    fn test_from_json_idempotent() {
        let body = br#"{"id": "txr_7", "percentage": 5.5, "jurisdiction": "DE"}"#;
        let first: TaxRate = from_json(body).unwrap();
        let second: TaxRate = from_json(body).unwrap();
        assert_eq!(first, second);
    }
}
