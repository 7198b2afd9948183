//! Issuing transaction resource and parameters.

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::form::FormParams;
use crate::list::{ListParams, RangeQueryParams};
use crate::object::Object;
use crate::params::{Currency, Metadata, Params};
use crate::resources::balance::BalanceTransaction;

/// Type of an issuing transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuingTransactionType {
    /// A captured purchase.
    Capture,
    /// An ATM withdrawal.
    CashWithdrawal,
    /// A refund from a merchant.
    Refund,
    /// A reversal of a refund.
    RefundReversal,
}

/// An approved purchase authorization on an issued card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingAuthorization {
    /// Unique identifier.
    pub id: String,
    /// Always `"issuing.authorization"`.
    pub object: String,
    /// Whether the authorization was approved.
    pub approved: bool,
    /// Authorized amount, in minor units.
    pub authorized_amount: i64,
    /// Three-letter currency code of the authorized amount.
    pub authorized_currency: Currency,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Authorization status.
    pub status: String,
}

impl Object for IssuingAuthorization {
    const OBJECT: &'static str = "issuing.authorization";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A card issued to a cardholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingCard {
    /// Unique identifier.
    pub id: String,
    /// Always `"issuing.card"`.
    pub object: String,
    /// Card brand.
    pub brand: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Expiration month.
    pub exp_month: i64,
    /// Expiration year.
    pub exp_year: i64,
    /// Last four digits of the card number.
    pub last4: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Card status.
    pub status: String,
}

impl Object for IssuingCard {
    const OBJECT: &'static str = "issuing.card";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The person or business cards are issued to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingCardholder {
    /// Unique identifier.
    pub id: String,
    /// Always `"issuing.cardholder"`.
    pub object: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Email address.
    pub email: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Full name.
    pub name: String,
    /// Cardholder status.
    pub status: String,
}

impl Object for IssuingCardholder {
    const OBJECT: &'static str = "issuing.cardholder";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A dispute raised against an issuing transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingDispute {
    /// Unique identifier.
    pub id: String,
    /// Always `"issuing.dispute"`.
    pub object: String,
    /// Disputed amount, in minor units.
    pub amount: i64,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Dispute status.
    pub status: String,
}

impl Object for IssuingDispute {
    const OBJECT: &'static str = "issuing.dispute";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Details of the merchant behind an issuing transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingMerchantData {
    /// Merchant category code.
    pub category: String,
    /// Merchant city.
    pub city: String,
    /// Merchant country.
    pub country: String,
    /// Merchant name.
    pub name: String,
    /// Merchant network identifier.
    pub network_id: String,
    /// Merchant postal code.
    pub postal_code: String,
    /// Merchant state or province.
    pub state: String,
}

/// A funds movement on an issued card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingTransaction {
    /// Unique identifier.
    pub id: String,
    /// Always `"issuing.transaction"`.
    pub object: String,
    /// Transaction amount, in minor units.
    pub amount: i64,
    /// Authorization the transaction settles.
    pub authorization: Option<Expandable<IssuingAuthorization>>,
    /// Balance transaction describing the funds movement.
    pub balance_transaction: Option<Expandable<BalanceTransaction>>,
    /// Card the transaction was made on.
    pub card: Option<Expandable<IssuingCard>>,
    /// Cardholder the card belongs to.
    pub cardholder: Option<Expandable<IssuingCardholder>>,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Dispute raised against the transaction.
    pub dispute: Option<Expandable<IssuingDispute>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Details of the merchant.
    pub merchant_data: Option<IssuingMerchantData>,
    /// Amount in the merchant's currency, in minor units.
    pub merchant_amount: i64,
    /// Three-letter currency code of the merchant amount.
    pub merchant_currency: Currency,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Transaction type.
    #[serde(rename = "type")]
    pub transaction_type: Option<IssuingTransactionType>,
}

impl Object for IssuingTransaction {
    const OBJECT: &'static str = "issuing.transaction";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Parameters for retrieving or updating an issuing transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssuingTransactionParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
}

impl FormParams for IssuingTransactionParams {}

/// Parameters for listing issuing transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssuingTransactionListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// Filter by cardholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<String>,
    /// Filter by exact creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Filter by creation time range. Shares the `created` wire key with
    /// [`Self::created`]; when both are set the range wins.
    #[serde(rename = "created", skip_serializing_if = "Option::is_none")]
    pub created_range: Option<RangeQueryParams>,
    /// Filter by dispute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispute: Option<String>,
}

impl FormParams for IssuingTransactionListParams {}
