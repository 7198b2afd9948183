//! The generic list envelope and list-request parameters.
//!
//! Every collection-returning endpoint wraps its items in the same envelope:
//! an ordered `data` array plus pagination metadata. [`List`] models that
//! envelope once, parameterized by the element type, instead of one
//! hand-written wrapper per resource.

use serde::{Deserialize, Serialize};

/// A page of resources as returned from a list endpoint.
///
/// The ordering of `data` is server-defined and preserved as-is; it is never
/// re-sorted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Always `"list"` on the wire.
    #[serde(default)]
    pub object: String,
    /// The items on this page, in server order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Whether more items exist beyond this page.
    #[serde(default)]
    pub has_more: bool,
    /// Total item count, when the endpoint reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// URL of the list endpoint this page came from.
    #[serde(default)]
    pub url: String,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            object: String::new(),
            data: Vec::new(),
            has_more: false,
            total_count: None,
            url: String::new(),
        }
    }
}

/// Parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListParams {
    /// Cursor: return items before this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    /// Relation field paths to expand in the response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Page size limit (1-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Cursor: return items after this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}

/// A range filter over a unix-timestamp field (e.g. `created`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeQueryParams {
    /// Strictly greater than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    /// Greater than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<i64>,
    /// Strictly less than.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
    /// Less than or equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<i64>,
}
