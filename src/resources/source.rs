//! Source resource and parameters.
//!
//! Sources carry their type-specific data nested under a JSON key equal to
//! the `type` value (`{"type": "ach_credit_transfer", "ach_credit_transfer":
//! {...}}`). Decoding extracts that keyed sub-map into
//! [`Source::type_data`]; encoding emits [`SourceObjectParams::type_data`]
//! entries under the same keyed path.

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::form::{append_params, child_key, format_key, FormParams, FormValues};
use crate::object::Object;
use crate::params::{Currency, Metadata, Params};
use crate::resources::address::{Address, AddressParams};
use crate::resources::bank_account::BankAccountParams;
use crate::resources::card::CardParams;
use crate::resources::shipping::{ShippingDetails, ShippingDetailsParams};

/// Status of a code-verification flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCodeVerificationFlowStatus {
    /// Verification failed.
    Failed,
    /// Verification not yet attempted or completed.
    Pending,
    /// Verification succeeded.
    Succeeded,
}

/// Authentication flow of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFlow {
    /// Customer verifies a code sent out of band.
    CodeVerification,
    /// No authentication flow.
    None,
    /// Customer pushes funds to a generated address.
    Receiver,
    /// Customer is redirected to authenticate.
    Redirect,
}

/// Acceptance status of a source mandate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMandateAcceptanceStatus {
    /// The customer accepted the mandate.
    Accepted,
    /// The customer refused the mandate.
    Refused,
}

/// How mandate notifications are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMandateNotificationMethod {
    /// Notifications sent by email.
    Email,
    /// The integration delivers notifications itself.
    Manual,
    /// No notifications.
    None,
}

/// Type of an item on a source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceOrderItemType {
    /// A discount line.
    Discount,
    /// A purchasable SKU.
    Sku,
    /// A shipping line.
    Shipping,
    /// A tax line.
    Tax,
}

/// Failure reason of a redirect flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRedirectFlowFailureReason {
    /// The bank declined the authentication.
    Declined,
    /// An error occurred during processing.
    ProcessingError,
    /// The customer aborted the redirect.
    UserAbort,
}

/// Status of a redirect flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRedirectFlowStatus {
    /// Authentication failed.
    Failed,
    /// No redirect required.
    NotRequired,
    /// Redirect not yet completed.
    Pending,
    /// Authentication succeeded.
    Succeeded,
}

/// How refund attributes are collected from a receiver's customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRefundAttributesMethod {
    /// Attributes requested by email.
    Email,
    /// The integration collects attributes itself.
    Manual,
}

/// Status of a receiver's refund attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRefundAttributesStatus {
    /// Attributes are on file.
    Available,
    /// Attributes have not been collected.
    Missing,
    /// Attributes have been requested from the customer.
    Requested,
}

/// Lifecycle status of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    /// The source was canceled.
    Canceled,
    /// The source can be charged.
    Chargeable,
    /// A single-use source was consumed.
    Consumed,
    /// The source failed to become chargeable.
    Failed,
    /// The source is awaiting authentication.
    Pending,
}

/// Whether a source can be charged more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceUsage {
    /// The source can be charged repeatedly.
    Reusable,
    /// The source is consumed by its first charge.
    SingleUse,
}

/// Owner details on a source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOwner {
    /// Owner address as supplied.
    pub address: Option<Address>,
    /// Owner email as supplied.
    pub email: String,
    /// Owner name as supplied.
    pub name: String,
    /// Owner phone as supplied.
    pub phone: String,
    /// Address verified against the authentication flow.
    pub verified_address: Option<Address>,
    /// Email verified against the authentication flow.
    pub verified_email: String,
    /// Name verified against the authentication flow.
    pub verified_name: String,
    /// Phone verified against the authentication flow.
    pub verified_phone: String,
}

/// State of a redirect authentication flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectFlow {
    /// Why the redirect failed, when it did.
    pub failure_reason: Option<SourceRedirectFlowFailureReason>,
    /// URL the customer returns to after authenticating.
    pub return_url: String,
    /// Flow status.
    pub status: Option<SourceRedirectFlowStatus>,
    /// URL the customer authenticates at.
    pub url: String,
}

/// State of a receiver authentication flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiverFlow {
    /// Address the customer pushes funds to.
    pub address: String,
    /// Amount charged so far, in minor units.
    pub amount_charged: i64,
    /// Amount received so far, in minor units.
    pub amount_received: i64,
    /// Amount returned so far, in minor units.
    pub amount_returned: i64,
    /// How refund attributes are collected.
    pub refund_attributes_method: Option<SourceRefundAttributesMethod>,
    /// Status of the refund attributes.
    pub refund_attributes_status: Option<SourceRefundAttributesStatus>,
}

/// State of a code-verification authentication flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeVerificationFlow {
    /// Verification attempts left.
    pub attempts_remaining: i64,
    /// Flow status.
    pub status: Option<SourceCodeVerificationFlowStatus>,
}

/// Acceptance state of a source mandate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceMandateAcceptance {
    /// When the mandate was accepted or refused (unix timestamp).
    pub date: i64,
    /// IP address the decision was made from.
    pub ip: String,
    /// Acceptance status.
    pub status: Option<SourceMandateAcceptanceStatus>,
    /// User agent the decision was made from.
    pub user_agent: String,
}

/// A source mandate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceMandate {
    /// Acceptance state.
    pub acceptance: Option<SourceMandateAcceptance>,
    /// How notifications are delivered.
    pub notification_method: Option<SourceMandateNotificationMethod>,
    /// Mandate reference shown to the customer.
    pub reference: String,
    /// URL of the mandate document.
    pub url: String,
}

/// An item on a source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOrderItem {
    /// Line amount, in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Line description.
    pub description: String,
    /// Quantity purchased.
    pub quantity: i64,
    /// Line type.
    #[serde(rename = "type")]
    pub item_type: Option<SourceOrderItemType>,
}

/// A source order attached to a source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOrder {
    /// Order total, in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Email of the purchaser.
    pub email: String,
    /// Order lines.
    pub items: Vec<SourceOrderItem>,
    /// Shipping details for physical goods.
    pub shipping: Option<ShippingDetails>,
}

/// A payment source created through the unified sources API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Source {
    /// Unique identifier.
    pub id: String,
    /// Always `"source"`.
    pub object: String,
    /// Amount, for single-use sources, in minor units.
    pub amount: i64,
    /// Secret used client-side to complete a flow.
    pub client_secret: String,
    /// Code-verification flow state, when the flow is one.
    pub code_verification: Option<CodeVerificationFlow>,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Identifier of the customer the source is attached to.
    pub customer: String,
    /// Authentication flow.
    pub flow: Option<SourceFlow>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Mandate, for debit-style sources.
    pub mandate: Option<SourceMandate>,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Owner details.
    pub owner: Option<SourceOwner>,
    /// Receiver flow state, when the flow is one.
    pub receiver: Option<ReceiverFlow>,
    /// Redirect flow state, when the flow is one.
    pub redirect: Option<RedirectFlow>,
    /// Descriptor shown on the customer's statement.
    pub statement_descriptor: String,
    /// Order attached to the source, when purchasing goods.
    pub source_order: Option<SourceOrder>,
    /// Lifecycle status.
    pub status: Option<SourceStatus>,
    /// Source type (e.g. `ach_credit_transfer`, `sepa_debit`).
    #[serde(rename = "type")]
    pub source_type: String,
    /// Type-specific data, nested on the wire under a key equal to
    /// `source_type`. Not re-emitted on serialization.
    #[serde(skip_serializing)]
    pub type_data: Map<String, Value>,
    /// Whether the source can be charged more than once.
    pub usage: Option<SourceUsage>,
}

impl Object for Source {
    const OBJECT: &'static str = "source";

    fn id(&self) -> &str {
        &self.id
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let payload = crate::variant::TaggedPayload::new(raw, "type");
        let mut source: Source = payload
            .decode::<SourceFields>()
            .map_err(DeError::custom)?
            .into();
        if let Some(keyed) = payload.keyed_payload() {
            source.type_data = keyed.clone();
        }
        Ok(source)
    }
}

// Mirror of `Source` with derived decoding; the keyed `type_data` sub-map is
// filled in afterwards.
#[derive(Deserialize)]
#[serde(default)]
struct SourceFields {
    id: String,
    object: String,
    amount: i64,
    client_secret: String,
    code_verification: Option<CodeVerificationFlow>,
    created: i64,
    currency: Currency,
    customer: String,
    flow: Option<SourceFlow>,
    livemode: bool,
    mandate: Option<SourceMandate>,
    metadata: Metadata,
    owner: Option<SourceOwner>,
    receiver: Option<ReceiverFlow>,
    redirect: Option<RedirectFlow>,
    statement_descriptor: String,
    source_order: Option<SourceOrder>,
    status: Option<SourceStatus>,
    #[serde(rename = "type")]
    source_type: String,
    usage: Option<SourceUsage>,
}

impl Default for SourceFields {
    fn default() -> Self {
        Self {
            id: String::new(),
            object: String::new(),
            amount: 0,
            client_secret: String::new(),
            code_verification: None,
            created: 0,
            currency: Currency::new(),
            customer: String::new(),
            flow: None,
            livemode: false,
            mandate: None,
            metadata: Metadata::new(),
            owner: None,
            receiver: None,
            redirect: None,
            statement_descriptor: String::new(),
            source_order: None,
            status: None,
            source_type: String::new(),
            usage: None,
        }
    }
}

impl From<SourceFields> for Source {
    fn from(fields: SourceFields) -> Self {
        Self {
            id: fields.id,
            object: fields.object,
            amount: fields.amount,
            client_secret: fields.client_secret,
            code_verification: fields.code_verification,
            created: fields.created,
            currency: fields.currency,
            customer: fields.customer,
            flow: fields.flow,
            livemode: fields.livemode,
            mandate: fields.mandate,
            metadata: fields.metadata,
            owner: fields.owner,
            receiver: fields.receiver,
            redirect: fields.redirect,
            statement_descriptor: fields.statement_descriptor,
            source_order: fields.source_order,
            status: fields.status,
            source_type: fields.source_type,
            type_data: Map::new(),
            usage: fields.usage,
        }
    }
}

/// Owner parameters on source creation or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceOwnerParams {
    /// Owner address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    /// Owner email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Owner name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Redirect parameters on source creation or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RedirectParams {
    /// URL the customer returns to after authenticating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// One item on a source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceOrderItemsParams {
    /// Line amount, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Identifier of the SKU or discount the line refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Quantity purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Line type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

/// Source order parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceOrderParams {
    /// Order lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SourceOrderItemsParams>,
    /// Shipping details for physical goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetailsParams>,
}

/// Offline mandate-acceptance parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceMandateAcceptanceOfflineParams {
    /// Email the mandate was delivered to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Online mandate-acceptance parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceMandateAcceptanceOnlineParams {
    /// When the mandate was accepted (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// IP address the acceptance was made from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// User agent the acceptance was made from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Mandate-acceptance parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceMandateAcceptanceParams {
    /// When the decision was made (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// IP address the decision was made from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Offline acceptance details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<SourceMandateAcceptanceOfflineParams>,
    /// Online acceptance details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<SourceMandateAcceptanceOnlineParams>,
    /// Acceptance status: `accepted` or `refused`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// How the acceptance was collected: `online` or `offline`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub acceptance_type: Option<String>,
    /// User agent the decision was made from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Mandate parameters on source creation or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceMandateParams {
    /// Acceptance details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance: Option<SourceMandateAcceptanceParams>,
    /// Mandate amount, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Debit interval: `one_time`, `scheduled`, or `variable`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// How notifications are delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_method: Option<String>,
}

/// Receiver parameters on source creation or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceReceiverParams {
    /// How refund attributes are collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_attributes_method: Option<String>,
}

/// Parameters for creating or updating a source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceObjectParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Amount, for single-use sources, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Customer to attach the source to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Authentication flow to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    /// Mandate details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate: Option<SourceMandateParams>,
    /// Source to clone, for cloning flows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_source: Option<String>,
    /// Owner details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<SourceOwnerParams>,
    /// Receiver flow details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<SourceReceiverParams>,
    /// Redirect flow details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RedirectParams>,
    /// Order details, when purchasing goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_order: Option<SourceOrderParams>,
    /// Descriptor shown on the customer's statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Token to create the source from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Source type to create.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Type-specific entries, emitted under `<type>[<key>]`. Requires
    /// `source_type` to be set.
    #[serde(skip)]
    pub type_data: Metadata,
    /// Whether the source can be charged more than once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl FormParams for SourceObjectParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        if self.type_data.is_empty() {
            return Ok(());
        }
        let Some(source_type) = self.source_type.as_deref() else {
            return Err(ModelError::InvalidParams(
                "type_data requires an explicit source type".to_owned(),
            ));
        };
        for (key, value) in &self.type_data {
            let parts = child_key(key_parts, source_type);
            form.add(format_key(&child_key(&parts, key)), value.as_str());
        }
        Ok(())
    }
}

/// Parameters for detaching a source from a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SourceObjectDetachParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Customer to detach from; part of the URL, not the body.
    #[serde(skip)]
    pub customer: Option<String>,
}

impl FormParams for SourceObjectDetachParams {}

/// A charge or top-up source expressed as creation parameters.
///
/// The supported set is closed: a token string, card parameters, or bank
/// account parameters. Anything else is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceParams {
    /// An opaque token obtained client-side.
    Token(String),
    /// Raw card details.
    Card(Box<CardParams>),
    /// Raw bank account details.
    BankAccount(Box<BankAccountParams>),
}

impl SourceParams {
    /// Builds source parameters from a raw JSON value.
    ///
    /// A string is taken as a token; an object dispatches on its `object`
    /// field over the supported set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnsupportedSourceType`] for any other shape or
    /// `object` value.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(token) => Ok(Self::Token(token.clone())),
            Value::Object(map) => match map.get("object").and_then(Value::as_str) {
                Some("card") => {
                    let card = CardParams::deserialize(value)
                        .map_err(|err| ModelError::InvalidParams(err.to_string()))?;
                    Ok(Self::Card(Box::new(card)))
                }
                Some("bank_account") => {
                    let account = BankAccountParams::deserialize(value)
                        .map_err(|err| ModelError::InvalidParams(err.to_string()))?;
                    Ok(Self::BankAccount(Box::new(account)))
                }
                Some(other) => Err(ModelError::UnsupportedSourceType(other.to_owned())),
                None => Err(ModelError::UnsupportedSourceType(
                    "object without a discriminator".to_owned(),
                )),
            },
            other => Err(ModelError::UnsupportedSourceType(format!(
                "unexpected JSON {other}"
            ))),
        }
    }

    /// Appends the source under the conventional key for its kind: a bare
    /// `source` for tokens, `card[…]` for card details, `source[…]` with an
    /// `object` marker for bank accounts.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParams`] if the nested details cannot be
    /// serialized.
    pub fn append_to(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        match self {
            Self::Token(token) => {
                form.add(format_key(&child_key(key_parts, "source")), token.as_str());
                Ok(())
            }
            Self::Card(card) => {
                let parts = child_key(key_parts, "card");
                form.add(format_key(&child_key(&parts, "object")), "card");
                append_params(form, &parts, card.as_ref())
            }
            Self::BankAccount(account) => {
                let parts = child_key(key_parts, "source");
                form.add(format_key(&child_key(&parts, "object")), "bank_account");
                append_params(form, &parts, account.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form_values;
    use serde_json::json;

    #[test]
    fn test_source_decode_extracts_type_data() {
        let json = r#"{
            "id": "src_1",
            "object": "source",
            "type": "ach_credit_transfer",
            "status": "pending",
            "flow": "receiver",
            "ach_credit_transfer": {
                "routing_number": "110000000",
                "account_number": "test_52796e3294dc"
            }
        }"#;
        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(source.source_type, "ach_credit_transfer");
        assert_eq!(source.status, Some(SourceStatus::Pending));
        assert_eq!(
            source.type_data.get("routing_number").unwrap(),
            "110000000"
        );
    }

    #[test]
    fn test_source_unknown_type_keeps_tag_without_data() {
        let json = r#"{"id": "src_2", "object": "source", "type": "hologram"}"#;
        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(source.source_type, "hologram");
        assert!(source.type_data.is_empty());
    }

    #[test]
    fn test_type_data_encodes_under_type_key() {
        let mut params = SourceObjectParams {
            source_type: Some("sepa_debit".to_owned()),
            currency: Some("eur".to_owned()),
            ..SourceObjectParams::default()
        };
        params
            .type_data
            .insert("iban".to_owned(), "DE89370400440532013000".to_owned());

        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("currency"), Some("eur"));
        assert_eq!(form.last("sepa_debit[iban]"), Some("DE89370400440532013000"));
    }

    #[test]
    fn test_type_data_without_type_is_rejected() {
        let mut params = SourceObjectParams::default();
        params.type_data.insert("iban".to_owned(), "DE89".to_owned());

        let err = to_form_values(&params).unwrap_err();
        assert!(matches!(err, ModelError::InvalidParams(_)));
    }

    #[test]
    fn test_source_params_from_token() {
        let params = SourceParams::from_value(&json!("tok_visa")).unwrap();
        assert_eq!(params, SourceParams::Token("tok_visa".to_owned()));
    }

    #[test]
    fn test_source_params_from_card_object() {
        let value = json!({"object": "card", "number": "4242424242424242", "exp_month": "4"});
        let params = SourceParams::from_value(&value).unwrap();
        let mut form = FormValues::new();
        params.append_to(&mut form, &[]).unwrap();
        assert_eq!(form.last("card[object]"), Some("card"));
        assert_eq!(form.last("card[number]"), Some("4242424242424242"));
    }

    #[test]
    fn test_source_params_rejects_unknown_object() {
        let err = SourceParams::from_value(&json!({"object": "crypto_wallet"})).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedSourceType(_)));
    }
}
