//! Shared request-parameter types.
//!
//! Every create/update parameter struct in the catalogue flattens a [`Params`]
//! into itself, and every list parameter struct flattens a
//! [`crate::list::ListParams`]. These carry the fields the API accepts on
//! every endpoint of the respective kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form key/value metadata attached to most resources.
///
/// A `BTreeMap` keeps form-encoded output deterministic.
pub type Metadata = BTreeMap<String, String>;

/// Three-letter ISO 4217 currency code, lowercase on the wire.
pub type Currency = String;

/// Parameters accepted by every create/update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Relation field paths to expand in the response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Metadata to set on the resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Params {
    /// Adds an expansion path.
    pub fn add_expand(&mut self, path: impl Into<String>) {
        self.expand.push(path.into());
    }

    /// Sets a single metadata entry.
    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.get_or_insert_with(Metadata::new).insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_expand() {
        let mut params = Params::default();
        params.add_expand("customer");
        params.add_expand("default_source");
        assert_eq!(params.expand, vec!["customer", "default_source"]);
    }

    #[test]
    fn test_add_metadata() {
        let mut params = Params::default();
        params.add_metadata("order_id", "6735");
        assert_eq!(params.metadata.unwrap().get("order_id").unwrap(), "6735");
    }

    #[test]
    fn test_empty_params_serialize_to_nothing() {
        let json = serde_json::to_value(Params::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
