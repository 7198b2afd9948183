//! Account resource, settings, and parameters.
//!
//! External accounts are the discriminated shape here: the server returns a
//! bank account or a card in the same list, discriminated by `object`, with
//! the whole payload being the variant's shape.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::expand::Expandable;
use crate::form::{child_key, format_key, FormParams, FormValues};
use crate::list::{List, ListParams};
use crate::object::Object;
use crate::params::{Currency, Metadata, Params};
use crate::resources::address::Address;
use crate::resources::bank_account::BankAccount;
use crate::resources::card::Card;
use crate::resources::file::File;
use crate::resources::person::{Person, PersonParams};
use crate::variant::TaggedPayload;

/// Type of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Fully platform-managed account.
    Custom,
    /// Account with an Express dashboard.
    Express,
    /// Independently operated account.
    Standard,
}

/// A capability that can be requested for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCapability {
    /// Accepting card payments.
    CardPayments,
    /// Legacy payments support.
    LegacyPayments,
    /// Receiving transfers.
    Transfers,
}

/// Status of a capability on an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCapabilityStatus {
    /// The capability is enabled.
    Active,
    /// The capability is disabled.
    Inactive,
    /// The capability is awaiting requirements.
    Pending,
}

/// Business type of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountBusinessType {
    /// A company.
    Company,
    /// A government entity.
    GovernmentEntity,
    /// An individual.
    Individual,
    /// A non-profit organization.
    NonProfit,
}

/// Legal structure of the company behind an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCompanyStructure {
    /// A government instrumentality.
    GovernmentInstrumentality,
    /// A governmental unit.
    GovernmentalUnit,
    /// An incorporated non-profit.
    IncorporatedNonProfit,
    /// A multi-member LLC.
    MultiMemberLlc,
    /// A private corporation.
    PrivateCorporation,
    /// A private partnership.
    PrivatePartnership,
    /// A public corporation.
    PublicCorporation,
    /// A public partnership.
    PublicPartnership,
    /// A tax-exempt government instrumentality.
    TaxExemptGovernmentInstrumentality,
    /// An unincorporated association.
    UnincorporatedAssociation,
    /// An unincorporated non-profit.
    UnincorporatedNonProfit,
}

/// Why charges and payouts are disabled on an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRequirementsDisabledReason {
    /// Required fields have not been provided.
    FieldsNeeded,
    /// The account appears on a prohibited-persons or companies list.
    Listed,
    /// Another reason.
    Other,
    /// Rejected for suspected fraud.
    #[serde(rename = "rejected.fraud")]
    RejectedFraud,
    /// Rejected for appearing on a prohibited list.
    #[serde(rename = "rejected.listed")]
    RejectedListed,
    /// Rejected for another reason.
    #[serde(rename = "rejected.other")]
    RejectedOther,
    /// Rejected for violating the terms of service.
    #[serde(rename = "rejected.terms_of_service")]
    RejectedTermsOfService,
    /// The account is under review.
    UnderReview,
}

/// How often payouts run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutInterval {
    /// Payouts run every day.
    Daily,
    /// Payouts are triggered by the integration.
    Manual,
    /// Payouts run monthly.
    Monthly,
    /// Payouts run weekly.
    Weekly,
}

/// Reason for rejecting an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRejectReason {
    /// Suspected fraud.
    Fraud,
    /// Another reason.
    Other,
    /// Terms-of-service violation.
    TermsOfService,
}

/// Machine-readable verification state of a company document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCompanyVerificationDocumentDetailsCode {
    /// The uploaded file was corrupt.
    DocumentCorrupt,
    /// The document appears to be a copy.
    DocumentFailedCopy,
    /// The document failed for another reason.
    DocumentFailedOther,
    /// A test-mode document was uploaded in live mode.
    DocumentFailedTestMode,
    /// The document appears fraudulent.
    DocumentFraudulent,
    /// The document is invalid.
    DocumentInvalid,
    /// The document appears manipulated.
    DocumentManipulated,
    /// The document is not readable.
    DocumentNotReadable,
    /// No document was uploaded.
    DocumentNotUploaded,
    /// The uploaded file was too large.
    DocumentTooLarge,
}

/// An address on an account or its company.
///
/// `town` is only used for Kana/Kanji representations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAddress {
    /// City, district, suburb, or village.
    pub city: String,
    /// Two-letter country code.
    pub country: String,
    /// Address line 1.
    pub line1: String,
    /// Address line 2.
    pub line2: String,
    /// ZIP or postal code.
    pub postal_code: String,
    /// State, county, province, or region.
    pub state: String,
    /// Town or cho-me.
    pub town: String,
}

/// Public-facing business information on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountBusinessProfile {
    /// Merchant category code.
    pub mcc: String,
    /// Customer-facing business name.
    pub name: String,
    /// Description of the products sold.
    pub product_description: String,
    /// Publicly available support address.
    pub support_address: Option<Address>,
    /// Publicly available support email.
    pub support_email: String,
    /// Publicly available support phone number.
    pub support_phone: String,
    /// Publicly available support URL.
    pub support_url: String,
    /// Business website URL.
    pub url: String,
}

/// Capabilities enabled on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountCapabilities {
    /// Card payments capability status.
    pub card_payments: Option<AccountCapabilityStatus>,
    /// Legacy payments capability status.
    pub legacy_payments: Option<AccountCapabilityStatus>,
    /// Transfers capability status.
    pub transfers: Option<AccountCapabilityStatus>,
}

/// Verification state of a company document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountCompanyVerificationDocument {
    /// Back of the document.
    pub back: Option<File>,
    /// Human-readable details on the verification state.
    pub details: String,
    /// Machine-readable verification code.
    pub details_code: Option<AccountCompanyVerificationDocumentDetailsCode>,
    /// Front of the document.
    pub front: Option<File>,
}

/// Verification state of a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountCompanyVerification {
    /// Document verification state.
    pub document: Option<AccountCompanyVerificationDocument>,
}

/// The company or business behind an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountCompany {
    /// Registered address.
    pub address: Option<AccountAddress>,
    /// Kana variant of the address (Japan only).
    pub address_kana: Option<AccountAddress>,
    /// Kanji variant of the address (Japan only).
    pub address_kanji: Option<AccountAddress>,
    /// Whether all directors have been provided.
    pub directors_provided: bool,
    /// Whether all executives have been provided.
    pub executives_provided: bool,
    /// Legal name.
    pub name: String,
    /// Kana variant of the legal name (Japan only).
    pub name_kana: String,
    /// Kanji variant of the legal name (Japan only).
    pub name_kanji: String,
    /// Whether all owners have been provided.
    pub owners_provided: bool,
    /// Company phone number.
    pub phone: String,
    /// Legal structure.
    pub structure: Option<AccountCompanyStructure>,
    /// Whether a tax ID is on file.
    pub tax_id_provided: bool,
    /// Jurisdiction the tax ID was registered in.
    pub tax_id_registrar: String,
    /// Whether a VAT number is on file.
    pub vat_id_provided: bool,
    /// Verification state.
    pub verification: Option<AccountCompanyVerification>,
}

/// Card decline behavior for an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDeclineOn {
    /// Decline charges that fail address verification.
    pub avs_failure: bool,
    /// Decline charges that fail CVC verification.
    pub cvc_failure: bool,
}

/// An account's payout schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountPayoutSchedule {
    /// Days charges are held before being paid out.
    pub delay_days: i64,
    /// How often payouts run.
    pub interval: Option<PayoutInterval>,
    /// Day of the month payouts run on, for monthly schedules.
    pub monthly_anchor: i64,
    /// Day of the week payouts run on, for weekly schedules.
    pub weekly_anchor: String,
}

/// Information that still needs to be collected for an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRequirements {
    /// Deadline for providing the currently-due fields (unix timestamp).
    pub current_deadline: i64,
    /// Fields that need to be collected now.
    pub currently_due: Vec<String>,
    /// Why the account is disabled, when it is.
    pub disabled_reason: Option<AccountRequirementsDisabledReason>,
    /// Fields that will eventually need to be collected.
    pub eventually_due: Vec<String>,
    /// Fields whose deadline has passed.
    pub past_due: Vec<String>,
    /// Fields currently being verified.
    pub pending_verification: Vec<String>,
}

/// Branding settings on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsBranding {
    /// Square icon shown next to the business name.
    pub icon: Option<File>,
    /// Logo shown on checkout surfaces.
    pub logo: Option<File>,
    /// CSS hex color used on branded surfaces.
    pub primary_color: String,
}

/// Card-charging settings on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsCardPayments {
    /// Automatic decline behavior.
    pub decline_on: Option<AccountDeclineOn>,
    /// Prefix for the dynamic statement descriptor.
    pub statement_descriptor_prefix: String,
}

/// Dashboard settings on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsDashboard {
    /// Name shown in the dashboard.
    pub display_name: String,
    /// Timezone used in the dashboard.
    pub timezone: String,
}

/// Payment settings that apply across payment methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsPayments {
    /// Default statement descriptor.
    pub statement_descriptor: String,
    /// Kana variant of the descriptor (Japan only).
    pub statement_descriptor_kana: String,
    /// Kanji variant of the descriptor (Japan only).
    pub statement_descriptor_kanji: String,
}

/// Payout settings on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsPayouts {
    /// Whether failed payouts are debited back from the bank account.
    pub debit_negative_balances: bool,
    /// Payout schedule.
    pub schedule: Option<AccountPayoutSchedule>,
    /// Statement descriptor on payouts.
    pub statement_descriptor: String,
}

/// Settings controlling how an account functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettings {
    /// Branding settings.
    pub branding: Option<AccountSettingsBranding>,
    /// Card-charging settings.
    pub card_payments: Option<AccountSettingsCardPayments>,
    /// Dashboard settings.
    pub dashboard: Option<AccountSettingsDashboard>,
    /// Cross-method payment settings.
    pub payments: Option<AccountSettingsPayments>,
    /// Payout settings.
    pub payouts: Option<AccountSettingsPayouts>,
}

/// Acceptance of the terms of service for an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountTosAcceptance {
    /// When the terms were accepted (unix timestamp).
    pub date: i64,
    /// IP address the terms were accepted from.
    pub ip: String,
    /// User agent the terms were accepted from.
    pub user_agent: String,
}

/// A merchant account on the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Unique identifier.
    pub id: String,
    /// Always `"account"`.
    pub object: String,
    /// Public-facing business information.
    pub business_profile: Option<AccountBusinessProfile>,
    /// Business type.
    pub business_type: Option<AccountBusinessType>,
    /// Capabilities enabled on the account.
    pub capabilities: Option<AccountCapabilities>,
    /// Whether the account can create charges.
    pub charges_enabled: bool,
    /// The company behind the account, for company accounts.
    pub company: Option<AccountCompany>,
    /// Two-letter country code.
    pub country: String,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Default currency for payouts.
    pub default_currency: Currency,
    /// Whether the account has been deleted.
    pub deleted: bool,
    /// Whether onboarding details have been submitted.
    pub details_submitted: bool,
    /// Account email.
    pub email: String,
    /// Bank accounts and cards payouts are sent to.
    pub external_accounts: Option<List<ExternalAccount>>,
    /// The individual behind the account, for individual accounts.
    pub individual: Option<Person>,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Whether the account can receive payouts.
    pub payouts_enabled: bool,
    /// Information that still needs to be collected.
    pub requirements: Option<AccountRequirements>,
    /// Settings controlling how the account functions.
    pub settings: Option<AccountSettings>,
    /// Terms-of-service acceptance state.
    pub tos_acceptance: Option<AccountTosAcceptance>,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
}

impl Object for Account {
    const OBJECT: &'static str = "account";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The concrete resource backing an external account.
///
/// Exactly one variant is populated by construction. An unrecognized
/// `object` tag keeps the raw payload instead of failing the decode.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalAccountVariant {
    /// A bank account (`"object": "bank_account"`).
    BankAccount(Box<BankAccount>),
    /// A card (`"object": "card"`).
    Card(Box<Card>),
    /// A tag this enumeration does not know about; the raw payload is kept.
    Unknown(Map<String, Value>),
}

/// A bank account or card that payouts are sent to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalAccount {
    /// Unique identifier of the underlying resource.
    pub id: String,
    /// The literal `object` value the server sent.
    pub account_type: String,
    /// The typed (or raw) payload.
    pub variant: ExternalAccountVariant,
}

impl ExternalAccount {
    /// The bank account payload, when the external account is one.
    #[must_use]
    pub fn bank_account(&self) -> Option<&BankAccount> {
        match &self.variant {
            ExternalAccountVariant::BankAccount(account) => Some(account),
            _ => None,
        }
    }

    /// The card payload, when the external account is one.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match &self.variant {
            ExternalAccountVariant::Card(card) => Some(card),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ExternalAccount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let payload = TaggedPayload::new(raw, "object");
        let id = payload.id().to_owned();
        let account_type = payload.tag().to_owned();
        let variant = match payload.tag() {
            "bank_account" => {
                ExternalAccountVariant::BankAccount(payload.decode().map_err(DeError::custom)?)
            }
            "card" => ExternalAccountVariant::Card(payload.decode().map_err(DeError::custom)?),
            _ => ExternalAccountVariant::Unknown(payload.into_map()),
        };
        Ok(Self {
            id,
            account_type,
            variant,
        })
    }
}

impl Serialize for ExternalAccount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.variant {
            ExternalAccountVariant::BankAccount(account) => account.serialize(serializer),
            ExternalAccountVariant::Card(card) => card.serialize(serializer),
            ExternalAccountVariant::Unknown(map) => map.serialize(serializer),
        }
    }
}

/// Business-profile parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountBusinessProfileParams {
    /// Merchant category code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
    /// Customer-facing business name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the products sold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    /// Publicly available support email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    /// Publicly available support phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
    /// Publicly available support URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    /// Business website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Address parameters on an account or its company.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountAddressParams {
    /// City, district, suburb, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Address line 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Address line 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// ZIP or postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// State, county, province, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Town or cho-me (Kana/Kanji addresses only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
}

/// Company-document verification parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountCompanyVerificationDocumentParams {
    /// File identifier for the back of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    /// File identifier for the front of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
}

/// Company verification parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountCompanyVerificationParams {
    /// Document to verify the company with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<AccountCompanyVerificationDocumentParams>,
}

/// Company parameters on account creation or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountCompanyParams {
    /// Registered address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AccountAddressParams>,
    /// Kana variant of the address (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kana: Option<AccountAddressParams>,
    /// Kanji variant of the address (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kanji: Option<AccountAddressParams>,
    /// Whether all directors have been provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors_provided: Option<bool>,
    /// Whether all executives have been provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executives_provided: Option<bool>,
    /// Legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Kana variant of the legal name (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_kana: Option<String>,
    /// Kanji variant of the legal name (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_kanji: Option<String>,
    /// Whether all owners have been provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners_provided: Option<bool>,
    /// Legal structure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    /// Company phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company tax ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Jurisdiction the tax ID was registered in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id_registrar: Option<String>,
    /// Company VAT number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    /// Verification documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<AccountCompanyVerificationParams>,
}

/// Automatic card-decline parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountDeclineSettingsParams {
    /// Decline charges that fail address verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_failure: Option<bool>,
    /// Decline charges that fail CVC verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc_failure: Option<bool>,
}

/// Branding settings parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSettingsBrandingParams {
    /// File identifier of the square icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// File identifier of the logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// CSS hex color used on branded surfaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}

/// Card-charging settings parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSettingsCardPaymentsParams {
    /// Automatic decline behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_on: Option<AccountDeclineSettingsParams>,
    /// Prefix for the dynamic statement descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_prefix: Option<String>,
}

/// Dashboard settings parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSettingsDashboardParams {
    /// Name shown in the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Timezone used in the dashboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Cross-method payment settings parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSettingsPaymentsParams {
    /// Default statement descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Kana variant of the descriptor (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_kana: Option<String>,
    /// Kanji variant of the descriptor (Japan only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_kanji: Option<String>,
}

/// Payout schedule parameters.
///
/// `delay_days` normally takes a number of days; `delay_days_minimum` emits
/// the literal `minimum` under the same key instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PayoutScheduleParams {
    /// Days to hold charges before paying out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_days: Option<i64>,
    /// Use the minimum delay for the account's country.
    #[serde(skip)]
    pub delay_days_minimum: bool,
    /// How often payouts run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Day of the month payouts run on, for monthly schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_anchor: Option<i64>,
    /// Day of the week payouts run on, for weekly schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_anchor: Option<String>,
}

impl FormParams for PayoutScheduleParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        if self.delay_days_minimum {
            if self.delay_days.is_some() {
                tracing::warn!(
                    key = %format_key(&child_key(key_parts, "delay_days")),
                    "delay_days and delay_days_minimum both set; the sentinel wins"
                );
            }
            form.add(format_key(&child_key(key_parts, "delay_days")), "minimum");
        }
        Ok(())
    }
}

/// Payout settings parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSettingsPayoutsParams {
    /// Whether failed payouts are debited back from the bank account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_negative_balances: Option<bool>,
    /// Payout schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<PayoutScheduleParams>,
    /// Statement descriptor on payouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

impl FormParams for AccountSettingsPayoutsParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        if let Some(schedule) = &self.schedule {
            schedule.append_extra(form, &child_key(key_parts, "schedule"))?;
        }
        Ok(())
    }
}

/// Account settings parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountSettingsParams {
    /// Branding settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<AccountSettingsBrandingParams>,
    /// Card-charging settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_payments: Option<AccountSettingsCardPaymentsParams>,
    /// Dashboard settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<AccountSettingsDashboardParams>,
    /// Cross-method payment settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<AccountSettingsPaymentsParams>,
    /// Payout settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payouts: Option<AccountSettingsPayoutsParams>,
}

impl FormParams for AccountSettingsParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        if let Some(payouts) = &self.payouts {
            payouts.append_extra(form, &child_key(key_parts, "payouts"))?;
        }
        Ok(())
    }
}

/// Terms-of-service acceptance parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountTosAcceptanceParams {
    /// When the terms were accepted (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// IP address the terms were accepted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// User agent the terms were accepted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Parameters referencing an external account on account creation.
///
/// Either `token` is set, or the bank account details are. With a token the
/// whole key collapses to the bare token value; otherwise an `object` marker
/// is appended alongside the typed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountExternalAccountParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Account number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Name of the account holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    /// Holder type: `individual` or `company`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<String>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Currency of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Routing transit number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Token standing in for the whole external account.
    #[serde(skip)]
    pub token: Option<String>,
}

impl FormParams for AccountExternalAccountParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        if let Some(token) = &self.token {
            form.add(format_key(key_parts), token.as_str());
        } else {
            form.add(format_key(&child_key(key_parts, "object")), "bank_account");
        }
        Ok(())
    }
}

/// Parameters for creating or updating an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Token standing in for the whole account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_token: Option<String>,
    /// Public-facing business information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_profile: Option<AccountBusinessProfileParams>,
    /// Business type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    /// The company behind the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<AccountCompanyParams>,
    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Default currency for payouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<Currency>,
    /// Account email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// External account payouts are sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_account: Option<AccountExternalAccountParams>,
    /// The individual behind the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<PersonParams>,
    /// Capabilities to request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requested_capabilities: Vec<AccountCapability>,
    /// Settings controlling how the account functions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<AccountSettingsParams>,
    /// Terms-of-service acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_acceptance: Option<AccountTosAcceptanceParams>,
    /// Account type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl FormParams for AccountParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        if let Some(external_account) = &self.external_account {
            external_account.append_extra(form, &child_key(key_parts, "external_account"))?;
        }
        if let Some(settings) = &self.settings {
            settings.append_extra(form, &child_key(key_parts, "settings"))?;
        }
        Ok(())
    }
}

/// Parameters for listing accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
}

impl FormParams for AccountListParams {}

/// Parameters for rejecting an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountRejectParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Why the account is being rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AccountRejectReason>,
}

impl FormParams for AccountRejectParams {}

/// An account held by the platform and referenced by expandable fields.
pub type AccountRef = Expandable<Account>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form_values;

    #[test]
    fn test_account_decode() {
        let json = r#"{
            "id": "acct_1",
            "object": "account",
            "type": "custom",
            "charges_enabled": true,
            "requirements": {"disabled_reason": "rejected.fraud", "currently_due": ["company.tax_id"]},
            "settings": {"payouts": {"schedule": {"delay_days": 7, "interval": "daily"}}}
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, Some(AccountType::Custom));
        assert_eq!(
            account.requirements.unwrap().disabled_reason,
            Some(AccountRequirementsDisabledReason::RejectedFraud)
        );
        let schedule = account.settings.unwrap().payouts.unwrap().schedule.unwrap();
        assert_eq!(schedule.delay_days, 7);
        assert_eq!(schedule.interval, Some(PayoutInterval::Daily));
    }

    #[test]
    fn test_external_account_card_populates_card_only() {
        let json = r#"{"id": "card_1", "object": "card", "last4": "4242"}"#;
        let external: ExternalAccount = serde_json::from_str(json).unwrap();
        assert_eq!(external.account_type, "card");
        assert_eq!(external.card().unwrap().last4, "4242");
        assert!(external.bank_account().is_none());
    }

    #[test]
    fn test_external_account_unknown_tag() {
        let json = r#"{"id": "xa_1", "object": "crypto_wallet", "network": "test"}"#;
        let external: ExternalAccount = serde_json::from_str(json).unwrap();
        assert_eq!(external.account_type, "crypto_wallet");
        assert!(external.card().is_none());
        assert!(external.bank_account().is_none());
        assert!(matches!(
            external.variant,
            ExternalAccountVariant::Unknown(_)
        ));
    }

    #[test]
    fn test_external_account_list_decode() {
        let json = r#"{
            "object": "list",
            "data": [
                {"id": "ba_1", "object": "bank_account", "last4": "6789"},
                {"id": "card_1", "object": "card", "last4": "4242"}
            ],
            "has_more": false
        }"#;
        let list: List<ExternalAccount> = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 2);
        assert!(list.data[0].bank_account().is_some());
        assert!(list.data[1].card().is_some());
    }

    #[test]
    fn test_payout_schedule_sentinel() {
        let params = AccountParams {
            settings: Some(AccountSettingsParams {
                payouts: Some(AccountSettingsPayoutsParams {
                    schedule: Some(PayoutScheduleParams {
                        delay_days_minimum: true,
                        interval: Some("daily".to_owned()),
                        ..PayoutScheduleParams::default()
                    }),
                    ..AccountSettingsPayoutsParams::default()
                }),
                ..AccountSettingsParams::default()
            }),
            ..AccountParams::default()
        };

        let form = to_form_values(&params).unwrap();
        assert_eq!(
            form.last("settings[payouts][schedule][delay_days]"),
            Some("minimum")
        );
        assert_eq!(
            form.last("settings[payouts][schedule][interval]"),
            Some("daily")
        );
    }

    #[test]
    fn test_sentinel_wins_over_typed_delay_days() {
        let params = AccountSettingsPayoutsParams {
            schedule: Some(PayoutScheduleParams {
                delay_days: Some(10),
                delay_days_minimum: true,
                ..PayoutScheduleParams::default()
            }),
            ..AccountSettingsPayoutsParams::default()
        };

        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("schedule[delay_days]"), Some("minimum"));
    }

    #[test]
    fn test_external_account_token_collapses_key() {
        let params = AccountParams {
            external_account: Some(AccountExternalAccountParams {
                token: Some("btok_123".to_owned()),
                ..AccountExternalAccountParams::default()
            }),
            ..AccountParams::default()
        };

        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("external_account"), Some("btok_123"));
        assert_eq!(form.last("external_account[object]"), None);
    }

    #[test]
    fn test_external_account_details_get_object_marker() {
        let params = AccountParams {
            external_account: Some(AccountExternalAccountParams {
                account_number: Some("000123456789".to_owned()),
                country: Some("US".to_owned()),
                currency: Some("usd".to_owned()),
                routing_number: Some("110000000".to_owned()),
                ..AccountExternalAccountParams::default()
            }),
            ..AccountParams::default()
        };

        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("external_account[object]"), Some("bank_account"));
        assert_eq!(
            form.last("external_account[account_number]"),
            Some("000123456789")
        );
    }
}
