//! Request-body form encoding.
//!
//! The API accepts request bodies as `application/x-www-form-urlencoded`
//! pairs with nested structures flattened into bracketed key paths:
//! `parent[child]`, `items[0][amount]`, `metadata[order_id]`. This module
//! turns any serializable parameter struct into that encoding.
//!
//! A handful of parameter structs need to emit values their typed fields
//! cannot express, such as the literal string `minimum` where a number of
//! days would normally go. Those structs implement
//! [`FormParams::append_extra`], which runs after the typed fields have been
//! appended so sentinel entries land last (last write wins).
//!
//! # Examples
//!
//! ```
//! use payrail::form::{to_form, FormParams};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct ChargeParams {
//!     amount: i64,
//!     currency: String,
//! }
//!
//! impl FormParams for ChargeParams {}
//!
//! let params = ChargeParams { amount: 2000, currency: "usd".to_owned() };
//! assert_eq!(to_form(&params)?, "amount=2000&currency=usd");
//! # Ok::<(), payrail::ModelError>(())
//! ```

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{ModelError, Result};

#[cfg(test)]
mod tests;

/// An ordered, append-only collection of form key/value pairs.
///
/// Duplicate keys are allowed; readers that care take the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one key/value pair.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// All pairs in append order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// The last value appended under `key`, if any.
    #[must_use]
    pub fn last(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no pairs have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encodes the pairs as an `application/x-www-form-urlencoded`
    /// body.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Joins key-path parts into bracketed notation.
///
/// The first part is bare, every following part is bracketed:
/// `["settings", "payouts", "schedule"]` becomes
/// `settings[payouts][schedule]`. An empty slice yields an empty key.
#[must_use]
pub fn format_key<S: AsRef<str>>(parts: &[S]) -> String {
    let mut iter = parts.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };
    let mut key = first.as_ref().to_owned();
    for part in iter {
        key.push('[');
        key.push_str(part.as_ref());
        key.push(']');
    }
    key
}

/// A parameter struct that can be form-encoded.
///
/// Most implementations are empty: the typed fields carry everything. The
/// few structs with sentinel or type-keyed values override
/// [`append_extra`](Self::append_extra); parents of such structs forward the
/// call with the nested key path.
pub trait FormParams: Serialize {
    /// Appends entries the typed fields cannot express.
    ///
    /// Runs after the typed fields, so appended entries take precedence
    /// under last-write-wins reading.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParams`] when the caller-supplied fields
    /// are inconsistent (e.g. type-keyed data without a type).
    fn append_extra(&self, _form: &mut FormValues, _key_parts: &[&str]) -> Result<()> {
        Ok(())
    }
}

/// Flattens a parameter struct into ordered form pairs.
///
/// Nulls are skipped entirely; booleans encode as `true`/`false`; sequence
/// elements get index-suffixed keys; map entries use the caller-supplied key.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParams`] if the struct cannot be serialized
/// or its `append_extra` hook rejects the field combination.
pub fn to_form_values<P: FormParams>(params: &P) -> Result<FormValues> {
    let tree = serde_json::to_value(params)
        .map_err(|err| ModelError::InvalidParams(err.to_string()))?;
    let mut form = FormValues::new();
    let mut key_parts: Vec<String> = Vec::new();
    flatten_into(&mut form, &mut key_parts, &tree);
    params.append_extra(&mut form, &[])?;
    Ok(form)
}

/// Flattens and percent-encodes a parameter struct in one step.
///
/// # Errors
///
/// Same failure modes as [`to_form_values`].
pub fn to_form<P: FormParams>(params: &P) -> Result<String> {
    Ok(to_form_values(params)?.encode())
}

/// Flattens a serializable value under an existing key-path prefix.
///
/// Used by `append_extra` hooks that place a nested params struct somewhere
/// the typed fields cannot, such as a source's `card[…]` entries.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParams`] if the value cannot be serialized.
pub fn append_params<P: Serialize>(
    form: &mut FormValues,
    key_parts: &[&str],
    params: &P,
) -> Result<()> {
    let tree = serde_json::to_value(params)
        .map_err(|err| ModelError::InvalidParams(err.to_string()))?;
    let mut parts: Vec<String> = key_parts.iter().map(|part| (*part).to_owned()).collect();
    flatten_into(form, &mut parts, &tree);
    Ok(())
}

fn flatten_into(form: &mut FormValues, key_parts: &mut Vec<String>, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => form.add(format_key(key_parts), if *flag { "true" } else { "false" }),
        Value::Number(number) => form.add(format_key(key_parts), number.to_string()),
        Value::String(text) => form.add(format_key(key_parts), text.as_str()),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                key_parts.push(index.to_string());
                flatten_into(form, key_parts, item);
                key_parts.pop();
            }
        }
        Value::Object(map) => {
            for (key, nested) in map {
                key_parts.push(key.clone());
                flatten_into(form, key_parts, nested);
                key_parts.pop();
            }
        }
    }
}

/// Builds the child key path for forwarding `append_extra` to a nested
/// params struct.
#[must_use]
pub fn child_key<'a>(key_parts: &[&'a str], child: &'a str) -> Vec<&'a str> {
    let mut parts = key_parts.to_vec();
    parts.push(child);
    parts
}
