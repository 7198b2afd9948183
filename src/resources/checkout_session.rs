//! Checkout session resource and parameters.

use serde::{Deserialize, Serialize};

use crate::expand::Expandable;
use crate::form::FormParams;
use crate::object::Object;
use crate::params::{Currency, Metadata, Params};
use crate::resources::customer::Customer;
use crate::resources::payment_intent::{PaymentIntent, SetupIntent};
use crate::resources::plan::Plan;
use crate::resources::shipping::ShippingDetailsParams;
use crate::resources::sku::Sku;
use crate::resources::subscription::Subscription;

/// Wording of the checkout submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionSubmitType {
    /// Default wording.
    Auto,
    /// Booking wording.
    Book,
    /// Donation wording.
    Donate,
    /// Payment wording.
    Pay,
}

/// Type of a display item on a checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionDisplayItemType {
    /// An ad-hoc line.
    Custom,
    /// A plan line.
    Plan,
    /// A SKU line.
    Sku,
}

/// What the checkout session sets up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionMode {
    /// A one-time payment.
    Payment,
    /// Collecting payment credentials without charging.
    Setup,
    /// A recurring subscription.
    Subscription,
}

/// An ad-hoc display item on a checkout session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSessionDisplayItemCustom {
    /// Line description.
    pub description: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// Line name.
    pub name: String,
}

/// One of the items shown during checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSessionDisplayItem {
    /// Line amount, in minor units.
    pub amount: i64,
    /// Three-letter currency code.
    pub currency: Currency,
    /// Ad-hoc line details, for custom items.
    pub custom: Option<CheckoutSessionDisplayItemCustom>,
    /// Quantity purchased.
    pub quantity: i64,
    /// Plan line details, for plan items.
    pub plan: Option<Plan>,
    /// SKU line details, for SKU items.
    pub sku: Option<Sku>,
    /// Item type.
    #[serde(rename = "type")]
    pub item_type: Option<CheckoutSessionDisplayItemType>,
}

/// A hosted checkout session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSession {
    /// Unique identifier.
    pub id: String,
    /// Always `"checkout.session"`.
    pub object: String,
    /// URL the customer returns to on cancel.
    pub cancel_url: String,
    /// Reference supplied by the integration.
    pub client_reference_id: String,
    /// Customer the session is for.
    pub customer: Option<Expandable<Customer>>,
    /// Email used to prefill checkout.
    pub customer_email: String,
    /// Whether the session has been deleted.
    pub deleted: bool,
    /// Items shown during checkout.
    pub display_items: Vec<CheckoutSessionDisplayItem>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Locale checkout is shown in.
    pub locale: String,
    /// Free-form metadata.
    pub metadata: Metadata,
    /// What the session sets up.
    pub mode: Option<CheckoutSessionMode>,
    /// Payment intent created by the session, in payment mode.
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    /// Payment method types the session accepts.
    pub payment_method_types: Vec<String>,
    /// Setup intent created by the session, in setup mode.
    pub setup_intent: Option<Expandable<SetupIntent>>,
    /// Subscription created by the session, in subscription mode.
    pub subscription: Option<Expandable<Subscription>>,
    /// Wording of the submit button.
    pub submit_type: Option<CheckoutSessionSubmitType>,
    /// URL the customer returns to on success.
    pub success_url: String,
}

impl Object for CheckoutSession {
    const OBJECT: &'static str = "checkout.session";

    fn id(&self) -> &str {
        &self.id
    }
}

/// One line item on a checkout session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutSessionLineItemParams {
    /// Line amount, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URLs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Line name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Quantity purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Transfer-data parameters for the payment intent behind a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutSessionPaymentIntentDataTransferDataParams {
    /// Account to transfer the funds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Parameters for the payment intent created by a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutSessionPaymentIntentDataParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Platform fee, in minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_amount: Option<i64>,
    /// Capture method: `automatic` or `manual`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    /// Arbitrary description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Account the payment is on behalf of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
    /// Email the receipt is sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_email: Option<String>,
    /// How the payment method may be reused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<String>,
    /// Shipping details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingDetailsParams>,
    /// Statement descriptor override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Destination of the funds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_data: Option<CheckoutSessionPaymentIntentDataTransferDataParams>,
}

/// Parameters for the setup intent created by a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutSessionSetupIntentDataParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Arbitrary description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Account the setup is on behalf of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<String>,
}

/// One subscription item on a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutSessionSubscriptionDataItemsParams {
    /// Plan to bill against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Quantity of the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Parameters for the subscription created by a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutSessionSubscriptionDataParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Platform fee, as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_fee_percent: Option<f64>,
    /// Subscription items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CheckoutSessionSubscriptionDataItemsParams>,
    /// Trial end (unix timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_end: Option<i64>,
    /// Whether the trial comes from the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_from_plan: Option<bool>,
    /// Trial length in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period_days: Option<i64>,
}

/// Parameters for creating a checkout session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckoutSessionParams {
    /// Expansion paths and metadata.
    #[serde(flatten)]
    pub params: Params,
    /// Whether to collect the billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_collection: Option<String>,
    /// URL the customer returns to on cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    /// Reference supplied by the integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_reference_id: Option<String>,
    /// Customer the session is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Email used to prefill checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Items to sell.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<CheckoutSessionLineItemParams>,
    /// Locale checkout is shown in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// What the session sets up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Parameters for the payment intent, in payment mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_intent_data: Option<CheckoutSessionPaymentIntentDataParams>,
    /// Payment method types the session accepts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_method_types: Vec<String>,
    /// Parameters for the setup intent, in setup mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_intent_data: Option<CheckoutSessionSetupIntentDataParams>,
    /// Parameters for the subscription, in subscription mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_data: Option<CheckoutSessionSubscriptionDataParams>,
    /// Wording of the submit button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_type: Option<String>,
    /// URL the customer returns to on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
}

impl FormParams for CheckoutSessionParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::to_form_values;

    #[test]
    fn test_checkout_session_decode() {
        let json = r#"{
            "id": "cs_1",
            "object": "checkout.session",
            "mode": "subscription",
            "submit_type": "donate",
            "display_items": [
                {"amount": 1500, "type": "sku", "sku": {"id": "sku_1", "price": 1500}}
            ],
            "subscription": "sub_1"
        }"#;
        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.mode, Some(CheckoutSessionMode::Subscription));
        assert_eq!(session.submit_type, Some(CheckoutSessionSubmitType::Donate));
        let item = &session.display_items[0];
        assert_eq!(item.item_type, Some(CheckoutSessionDisplayItemType::Sku));
        assert_eq!(item.sku.as_ref().unwrap().price, 1500);
        assert_eq!(session.subscription.unwrap().id(), "sub_1");
    }

    #[test]
    fn test_checkout_session_params_nest_line_items() {
        let params = CheckoutSessionParams {
            cancel_url: Some("https://example.com/cancel".to_owned()),
            success_url: Some("https://example.com/success".to_owned()),
            payment_method_types: vec!["card".to_owned()],
            line_items: vec![CheckoutSessionLineItemParams {
                amount: Some(2000),
                currency: Some("usd".to_owned()),
                name: Some("Sticker pack".to_owned()),
                quantity: Some(2),
                ..CheckoutSessionLineItemParams::default()
            }],
            ..CheckoutSessionParams::default()
        };
        let form = to_form_values(&params).unwrap();
        assert_eq!(form.last("line_items[0][amount]"), Some("2000"));
        assert_eq!(form.last("line_items[0][quantity]"), Some("2"));
        assert_eq!(form.last("payment_method_types[0]"), Some("card"));
    }
}
