//! Invoice resource, line items, and parameters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::expand::Expandable;
use crate::form::{child_key, format_key, FormParams, FormValues};
use crate::list::{List, ListParams, RangeQueryParams};
use crate::object::Object;
use crate::params::{Currency, Metadata, Params};
use crate::resources::account::Account;
use crate::resources::address::Address;
use crate::resources::charge::Charge;
use crate::resources::customer::{Customer, CustomerTaxExempt};
use crate::resources::payment_intent::PaymentIntent;
use crate::resources::payment_method::PaymentMethod;
use crate::resources::payment_source::PaymentSource;
use crate::resources::plan::Plan;
use crate::resources::shipping::CustomerShippingDetails;
use crate::resources::subscription::SubscriptionItemsParams;
use crate::resources::taxrate::TaxRate;

/// Type of an invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceLineType {
    /// A one-off invoice item.
    #[serde(rename = "invoiceitem")]
    InvoiceItem,
    /// A subscription charge.
    Subscription,
}

/// Why an invoice was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceBillingReason {
    /// Created manually.
    Manual,
    /// Created by a subscription (legacy reason).
    Subscription,
    /// First invoice of a new subscription.
    SubscriptionCreate,
    /// Regular billing-cycle invoice.
    SubscriptionCycle,
    /// A billing threshold was crossed.
    SubscriptionThreshold,
    /// A subscription was updated.
    SubscriptionUpdate,
    /// Preview of the next invoice.
    Upcoming,
}

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Still editable.
    Draft,
    /// Finalized and awaiting payment.
    Open,
    /// Paid in full.
    Paid,
    /// Written off as uncollectible.
    Uncollectible,
    /// Voided.
    Void,
}

/// How payment for an invoice is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceCollectionMethod {
    /// Charge the default payment method automatically.
    ChargeAutomatically,
    /// Email the invoice and await payment.
    SendInvoice,
}

/// A coupon-backed discount on a customer or invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    /// Always `"discount"`.
    pub object: String,
    /// Identifier of the customer the discount applies to.
    pub customer: String,
    /// When the discount ends (unix timestamp), for repeating coupons.
    pub end: i64,
    /// When the discount started (unix timestamp).
    pub start: i64,
    /// Identifier of the subscription the discount applies to, if any.
    pub subscription: String,
}

/// A custom field shown on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceCustomField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
}

/// A customer tax ID shown on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceCustomerTaxId {
    /// Tax ID type (e.g. `eu_vat`).
    #[serde(rename = "type")]
    pub id_type: String,
    /// The tax ID itself.
    pub value: String,
}

/// One of the tax amounts on an invoice or line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceTaxAmount {
    /// Tax amount, in minor units.
    pub amount: i64,
    /// Whether the tax is inclusive.
    pub inclusive: bool,
    /// Tax rate the amount was computed with.
    pub tax_rate: Option<Expandable<TaxRate>>,
}

/// The line items that crossed a billing threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceThresholdReasonItemReason {
    /// Line items that crossed the threshold.
    pub line_item_ids: Vec<String>,
    /// Usage level that crossed the threshold.
    pub usage_gte: i64,
}

/// Why a billing threshold triggered this invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceThresholdReason {
    /// Total amount threshold that was crossed, in minor units.
    pub amount_gte: i64,
    /// Per-item reasons.
    pub item_reasons: Vec<InvoiceThresholdReasonItemReason>,
}

/// Destination of the funds for an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceTransferData {
    /// Account the funds are transferred to.
    pub destination: Option<Expandable<Account>>,
}

/// A start/end date pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    /// Period end (unix timestamp).
    pub end: i64,
    /// Period start (unix timestamp).
    pub start: i64,
}

/// Timestamps at which an invoice changed status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceStatusTransitions {
    /// When the invoice was finalized.
    pub finalized_at: i64,
    /// When the invoice was marked uncollectible.
    pub marked_uncollectible_at: i64,
    /// When the invoice was paid.
    pub paid_at: i64,
    /// When the invoice was voided.
    pub voided_at: i64,
}

/// A line item on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceLine {
    /// Unique identifier.
    pub id: String,
    /// Always `"line_item"`.
    pub object: String,
    /// Line amount, in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Line description.
    pub description: String,
    /// Whether discounts apply to this line.
    pub discountable: bool,
    /// Identifier of the invoice item behind the line, if any.
    pub invoice_item: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// Period the line covers.
    pub period: Option<Period>,
    /// Plan the line bills against, for subscription lines.
    pub plan: Option<Plan>,
    /// Whether the line is a proration.
    pub proration: bool,
    /// Quantity billed.
    pub quantity: i64,
    /// Identifier of the subscription behind the line, if any.
    pub subscription: String,
    /// Identifier of the subscription item behind the line, if any.
    pub subscription_item: String,
    /// Tax amounts on the line.
    pub tax_amounts: Vec<InvoiceTaxAmount>,
    /// Tax rates applied to the line.
    pub tax_rates: Vec<TaxRate>,
    /// Line type.
    #[serde(rename = "type")]
    pub line_type: Option<InvoiceLineType>,
    /// Whether prorations on this line are unified.
    pub unified_proration: bool,
}

/// An invoice issued to a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Unique identifier.
    pub id: String,
    /// Always `"invoice"`.
    pub object: String,
    /// Country of the issuing account.
    pub account_country: String,
    /// Name of the issuing account.
    pub account_name: String,
    /// Amount due, in minor units.
    pub amount_due: i64,
    /// Amount paid so far, in minor units.
    pub amount_paid: i64,
    /// Amount remaining, in minor units.
    pub amount_remaining: i64,
    /// Platform fee, in minor units.
    pub application_fee_amount: i64,
    /// Number of payment attempts made.
    pub attempt_count: i64,
    /// Whether a payment attempt has been made.
    pub attempted: bool,
    /// Whether the invoice advances through collection automatically.
    pub auto_advance: bool,
    /// Why the invoice was created.
    pub billing_reason: Option<InvoiceBillingReason>,
    /// The latest charge against the invoice.
    pub charge: Option<Expandable<Charge>>,
    /// How payment is collected.
    pub collection_method: Option<InvoiceCollectionMethod>,
    /// Creation time as a unix timestamp.
    pub created: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Custom fields shown on the invoice.
    pub custom_fields: Vec<InvoiceCustomField>,
    /// Customer the invoice was issued to.
    pub customer: Option<Expandable<Customer>>,
    /// Customer address snapshotted at finalization.
    pub customer_address: Option<Address>,
    /// Customer email snapshotted at finalization.
    pub customer_email: String,
    /// Customer name snapshotted at finalization.
    pub customer_name: Option<String>,
    /// Customer phone snapshotted at finalization.
    pub customer_phone: Option<String>,
    /// Customer shipping details snapshotted at finalization.
    pub customer_shipping: Option<CustomerShippingDetails>,
    /// Customer tax-exemption state snapshotted at finalization.
    pub customer_tax_exempt: Option<CustomerTaxExempt>,
    /// Customer tax IDs snapshotted at finalization.
    pub customer_tax_ids: Vec<InvoiceCustomerTaxId>,
    /// Payment method charged by default.
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    /// Source charged by default.
    pub default_source: Option<Expandable<PaymentSource>>,
    /// Tax rates applied when no line-level rates are set.
    pub default_tax_rates: Vec<TaxRate>,
    /// Arbitrary description.
    pub description: String,
    /// Discount applied to the invoice.
    pub discount: Option<Discount>,
    /// When payment is due (unix timestamp), for invoices sent by email.
    pub due_date: i64,
    /// Customer balance after the invoice, in minor units.
    pub ending_balance: i64,
    /// Footer shown on the invoice.
    pub footer: String,
    /// URL of the hosted invoice page.
    pub hosted_invoice_url: String,
    /// URL of the invoice PDF.
    pub invoice_pdf: String,
    /// Line items on the invoice.
    pub lines: Option<List<InvoiceLine>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// When the next payment attempt runs (unix timestamp).
    pub next_payment_attempt: i64,
    /// Customer-facing invoice number.
    pub number: String,
    /// Whether the invoice has been paid.
    pub paid: bool,
    /// Payment intent collecting payment for the invoice.
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    /// End of the billing period (unix timestamp).
    pub period_end: i64,
    /// Start of the billing period (unix timestamp).
    pub period_start: i64,
    /// Credit notes issued after payment, in minor units.
    pub post_payment_credit_notes_amount: i64,
    /// Credit notes issued before payment, in minor units.
    pub pre_payment_credit_notes_amount: i64,
    /// Receipt number, once paid.
    pub receipt_number: String,
    /// Customer balance before the invoice, in minor units.
    pub starting_balance: i64,
    /// Statement descriptor override.
    pub statement_descriptor: String,
    /// Lifecycle status.
    pub status: Option<InvoiceStatus>,
    /// When the status last changed.
    pub status_transitions: InvoiceStatusTransitions,
    /// Identifier of the subscription the invoice belongs to, if any.
    pub subscription: String,
    /// Proration cutoff used for the subscription (unix timestamp).
    pub subscription_proration_date: i64,
    /// Sum of the line amounts, in minor units.
    pub subtotal: i64,
    /// Total tax, in minor units.
    pub tax: i64,
    /// Why a billing threshold triggered this invoice.
    pub threshold_reason: Option<InvoiceThresholdReason>,
    /// Invoice total, in minor units.
    pub total: i64,
    /// Aggregated tax amounts.
    pub total_tax_amounts: Vec<InvoiceTaxAmount>,
    /// Destination of the funds.
    pub transfer_data: Option<InvoiceTransferData>,
    /// When webhooks for the invoice were delivered (unix timestamp).
    pub webhooks_delivered_at: i64,
}

impl Object for Invoice {
    const OBJECT: &'static str = "invoice";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Period parameters on an upcoming invoice item.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceUpcomingInvoiceItemPeriodParams {
    /// Period end (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Period start (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
}

/// Invoice items to add or modify when previewing an upcoming invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceUpcomingInvoiceItemParams {
    /// Line amount, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether discounts apply to this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discountable: Option<bool>,
    /// Invoice item to modify, when previewing changes.
    #[serde(rename = "invoiceitem", skip_serializing_if = "Option::is_none")]
    pub invoice_item: Option<String>,
    /// Period the line covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<InvoiceUpcomingInvoiceItemPeriodParams>,
    /// Quantity billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Subscription schedule the item belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Tax rates to apply to the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tax_rates: Vec<String>,
    /// Per-unit amount, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount: Option<i64>,
    /// Per-unit amount with sub-minor-unit precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_amount_decimal: Option<Decimal>,
}

/// Custom-field parameters on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceCustomFieldParams {
    /// Field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Transfer-data parameters on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceTransferDataParams {
    /// Account to transfer the funds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Parameters for creating, updating, or previewing an invoice.
///
/// `subscription_billing_cycle_anchor` normally takes a timestamp; the
/// `…_now` / `…_unchanged` flags emit the literal `now` / `unchanged` under
/// the same key instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Whether the invoice advances through collection automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance: Option<bool>,
    /// Platform fee, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,
    /// How payment is collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<String>,
    /// Custom fields shown on the invoice.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<InvoiceCustomFieldParams>,
    /// Customer to invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Days until payment is due, for invoices sent by email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<i64>,
    /// Payment method charged by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_payment_method: Option<String>,
    /// Source charged by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_source: Option<String>,
    /// Tax rates applied when no line-level rates are set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_tax_rates: Vec<String>,
    /// Arbitrary description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When payment is due (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// Footer shown on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    /// Mark the invoice paid out of band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    /// Statement descriptor override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Subscription to invoice, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    /// Destination of the funds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<InvoiceTransferDataParams>,
    /// Coupon to apply, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    /// Invoice items to add or modify, when previewing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invoice_items: Vec<InvoiceUpcomingInvoiceItemParams>,
    /// New billing-cycle anchor (unix timestamp), when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_billing_cycle_anchor: Option<i64>,
    /// Reset the billing-cycle anchor to now.
    #[serde(skip)]
    pub subscription_billing_cycle_anchor_now: bool,
    /// Leave the billing-cycle anchor unchanged.
    #[serde(skip)]
    pub subscription_billing_cycle_anchor_unchanged: bool,
    /// Cancel the subscription at the given time, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_cancel_at: Option<i64>,
    /// Cancel the subscription at period end, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_cancel_at_period_end: Option<bool>,
    /// Cancel the subscription immediately, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_cancel_now: Option<bool>,
    /// Default tax rates for the subscription, when previewing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subscription_default_tax_rates: Vec<String>,
    /// Subscription items to add or modify, when previewing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subscription_items: Vec<SubscriptionItemsParams>,
    /// Plan to switch the subscription to, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<String>,
    /// Whether to prorate the subscription change, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_prorate: Option<bool>,
    /// Proration behavior for the subscription change, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_proration_behavior: Option<String>,
    /// Proration cutoff (unix timestamp), when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_proration_date: Option<i64>,
    /// New subscription quantity, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_quantity: Option<i64>,
    /// New trial end (unix timestamp), when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_trial_end: Option<i64>,
    /// Whether the trial comes from the plan, when previewing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_trial_from_plan: Option<bool>,
}

impl FormParams for InvoiceParams {
    fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> Result<()> {
        let anchor_key = || format_key(&child_key(key_parts, "subscription_billing_cycle_anchor"));
        if self.subscription_billing_cycle_anchor_now {
            if self.subscription_billing_cycle_anchor.is_some() {
                tracing::warn!(
                    key = %anchor_key(),
                    "billing-cycle anchor timestamp and `now` flag both set; the flag wins"
                );
            }
            form.add(anchor_key(), "now");
        }
        if self.subscription_billing_cycle_anchor_unchanged {
            if self.subscription_billing_cycle_anchor.is_some() {
                tracing::warn!(
                    key = %anchor_key(),
                    "billing-cycle anchor timestamp and `unchanged` flag both set; the flag wins"
                );
            }
            form.add(anchor_key(), "unchanged");
        }
        Ok(())
    }
}

/// Parameters for listing invoices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by collection method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<String>,
    /// Filter by customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Filter by exact creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Filter by creation time range. Shares the `created` wire key with
    /// [`Self::created`]; when both are set the range wins.
    #[serde(rename = "created", skip_serializing_if = "Option::is_none")]
    pub created_range: Option<RangeQueryParams>,
    /// Filter by exact due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    /// Filter by due date range. Shares the `due_date` wire key with
    /// [`Self::due_date`]; when both are set the range wins.
    #[serde(rename = "due_date", skip_serializing_if = "Option::is_none")]
    pub due_date_range: Option<RangeQueryParams>,
    /// Filter by status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl FormParams for InvoiceListParams {}

/// Parameters for listing the lines of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceLineListParams {
    /// Common pagination cursors and limits.
    #[serde(flatten)]
    pub list_params: ListParams,
    /// Filter by customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Invoice to list lines for; part of the URL, not the body.
    #[serde(skip)]
    pub id: Option<String>,
    /// Filter by subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl FormParams for InvoiceLineListParams {}

/// Parameters for finalizing an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceFinalizeParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Whether the invoice advances through collection automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance: Option<bool>,
}

impl FormParams for InvoiceFinalizeParams {}

/// Parameters for marking an invoice uncollectible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceMarkUncollectibleParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
}

impl FormParams for InvoiceMarkUncollectibleParams {}

/// Parameters for paying an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoicePayParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Forgive any remainder if the source's funds do not cover it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forgive: Option<bool>,
    /// Whether the customer is off-session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_session: Option<bool>,
    /// Mark the invoice paid without charging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_out_of_band: Option<bool>,
    /// Payment method to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Source to charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl FormParams for InvoicePayParams {}

/// Parameters for emailing an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceSendParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
}

impl FormParams for InvoiceSendParams {}

/// Parameters for voiding an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceVoidParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
}

impl FormParams for InvoiceVoidParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form_values;

    #[test]
    fn test_invoice_decode() {
        let json = r#"{
            "id": "in_1",
            "object": "invoice",
            "amount_due": 2000,
            "status": "open",
            "billing_reason": "subscription_cycle",
            "customer": "cus_1",
            "default_source": {"id": "card_1", "object": "card", "last4": "4242"},
            "lines": {
                "object": "list",
                "data": [{"id": "il_1", "amount": 2000, "type": "subscription"}],
                "has_more": false
            },
            "status_transitions": {"finalized_at": 1700000000}
        }"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.status, Some(InvoiceStatus::Open));
        assert_eq!(
            invoice.billing_reason,
            Some(InvoiceBillingReason::SubscriptionCycle)
        );
        assert_eq!(invoice.customer.as_ref().unwrap().id(), "cus_1");
        let default_source = invoice.default_source.unwrap();
        let source = default_source.as_object().unwrap();
        assert_eq!(source.card().unwrap().last4, "4242");
        assert_eq!(invoice.lines.unwrap().data[0].line_type, Some(InvoiceLineType::Subscription));
        assert_eq!(invoice.status_transitions.finalized_at, 1_700_000_000);
    }

    #[test]
    fn test_invoice_line_type_wire_tag() {
        let line_type: InvoiceLineType = serde_json::from_str(r#""invoiceitem""#).unwrap();
        assert_eq!(line_type, InvoiceLineType::InvoiceItem);
    }

    #[test]
    fn test_billing_cycle_anchor_now_sentinel() {
        let params = InvoiceParams {
            subscription: Some("sub_1".to_owned()),
            subscription_billing_cycle_anchor_now: true,
            ..InvoiceParams::default()
        };
        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("subscription_billing_cycle_anchor"), Some("now"));
        assert_eq!(form.last("subscription"), Some("sub_1"));
    }

    #[test]
    fn test_billing_cycle_anchor_flag_wins_over_timestamp() {
        let params = InvoiceParams {
            subscription_billing_cycle_anchor: Some(1_700_000_000),
            subscription_billing_cycle_anchor_unchanged: true,
            ..InvoiceParams::default()
        };
        let form = to_form_values(&params).unwrap();
        assert_eq!(
            form.last("subscription_billing_cycle_anchor"),
            Some("unchanged")
        );
    }

    #[test]
    fn test_upcoming_items_encode_with_decimal_unit_amount() {
        let params = InvoiceParams {
            customer: Some("cus_1".to_owned()),
            invoice_items: vec![InvoiceUpcomingInvoiceItemParams {
                quantity: Some(3),
                unit_amount_decimal: Some(Decimal::new(1255, 2)),
                ..InvoiceUpcomingInvoiceItemParams::default()
            }],
            ..InvoiceParams::default()
        };
        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("invoice_items[0][quantity]"), Some("3"));
        assert_eq!(
            form.last("invoice_items[0][unit_amount_decimal]"),
            Some("12.55")
        );
    }
}
