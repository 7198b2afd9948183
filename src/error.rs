//! Error types for the Payrail data model.
//!
//! This module defines all error types that can occur while decoding API
//! responses or encoding request parameters. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! Note that an *unrecognized discriminator* on a polymorphic resource is
//! deliberately not an error: a client built against an older variant
//! enumeration must keep working when the server introduces a new tag. See
//! [`crate::variant`] for that fallback.
//!
//! # Examples
//!
//! ```
//! use payrail::error::{ModelError, Result};
//!
//! fn require_currency(currency: Option<&str>) -> Result<String> {
//!     currency
//!         .map(ToOwned::to_owned)
//!         .ok_or_else(|| ModelError::InvalidParams("currency is required".to_owned()))
//! }
//! ```

use thiserror::Error;

/// Result type alias for model operations.
///
/// All fallible decode and encode functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while decoding responses or encoding parameters.
///
/// All variants carry enough context to identify which resource and field
/// were being processed when the failure occurred.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ModelError {
    /// A response payload was malformed or type-mismatched.
    ///
    /// `resource` is the API object name (e.g. `"account"`), and `detail`
    /// describes the failing field and location as reported by the decoder.
    /// Decode errors are always propagated to the caller of the decode entry
    /// point; they are never recovered internally.
    #[error("failed to decode {resource}: {detail}")]
    Decode {
        /// API object name of the resource being decoded.
        resource: &'static str,
        /// Field path and location detail from the underlying decoder.
        detail: String,
    },

    /// A polymorphic source constructor was given a payload outside the
    /// closed supported set.
    ///
    /// Surfaced synchronously at construction time, before any network
    /// interaction would occur. The string is the unsupported `object`
    /// discriminator (or a description of the rejected payload shape).
    #[error("unsupported source type: {0}")]
    UnsupportedSourceType(String),

    /// Caller-supplied parameters are inconsistent and cannot be encoded.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let error = ModelError::Decode {
            resource: "account",
            detail: "invalid type: integer `3`, expected a string at line 1 column 9".to_owned(),
        };
        assert!(error.to_string().starts_with("failed to decode account:"));
    }

    #[test]
    fn test_unsupported_source_type_display() {
        let error = ModelError::UnsupportedSourceType("gift_card".to_owned());
        assert_eq!(error.to_string(), "unsupported source type: gift_card");
    }

    #[test]
    fn test_invalid_params_display() {
        let error = ModelError::InvalidParams("type_data requires type".to_owned());
        assert!(error.to_string().contains("type_data requires type"));
    }
}
