//! Typed data model for the Payrail payments API.
//!
//! This crate maps the API's JSON responses and form-encoded request
//! parameters onto plain Rust types. It covers three concerns:
//!
//! - **Response decoding.** Every resource implements [`Object`] and derives
//!   `Deserialize`; [`from_json`] is the decode entry point. Relation fields
//!   are [`Expandable<T>`](Expandable), which decodes either a bare id string
//!   or the full object depending on whether the request asked for expansion.
//!   Polymorphic resources (external accounts, payment sources) keep an
//!   unrecognized discriminator as raw data instead of failing.
//! - **Parameter encoding.** Parameter structs implement [`FormParams`] and
//!   encode to the API's bracketed form notation via [`to_form`]
//!   (`settings[payouts][schedule][interval]=manual`). Fields the API takes
//!   as literal sentinels rather than typed values are emitted through
//!   [`FormParams::append_extra`] hooks.
//! - **Pagination.** List endpoints decode into [`List<T>`](List) and take
//!   cursor parameters through [`ListParams`].
//!
//! # Quick start
//!
//! Decode a response with an unexpanded relation:
//!
//! ```
//! use payrail::resources::topup::Topup;
//! use payrail::from_json;
//!
//! let body = br#"{
//!     "id": "tu_1",
//!     "object": "topup",
//!     "amount": 10000,
//!     "currency": "usd",
//!     "balance_transaction": "txn_1"
//! }"#;
//! let topup: Topup = from_json(body)?;
//! assert_eq!(topup.balance_transaction.as_ref().unwrap().id(), "txn_1");
//! assert!(!topup.balance_transaction.unwrap().is_expanded());
//! # Ok::<(), payrail::ModelError>(())
//! ```
//!
//! Encode request parameters:
//!
//! ```
//! use payrail::form::to_form;
//! use payrail::resources::taxrate::TaxRateParams;
//!
//! let params = TaxRateParams {
//!     display_name: Some("VAT".to_owned()),
//!     percentage: Some(21.0),
//!     inclusive: Some(false),
//!     ..TaxRateParams::default()
//! };
//! assert_eq!(
//!     to_form(&params)?,
//!     "display_name=VAT&inclusive=false&percentage=21.0"
//! );
//! # Ok::<(), payrail::ModelError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod expand;
pub mod form;
pub mod list;
pub mod object;
pub mod params;
pub mod resources;
pub mod variant;

pub use crate::error::{ModelError, Result};
pub use crate::expand::Expandable;
pub use crate::form::{to_form, to_form_values, FormParams, FormValues};
pub use crate::list::{List, ListParams, RangeQueryParams};
pub use crate::object::{from_json, Object};
pub use crate::params::{Currency, Metadata, Params};
