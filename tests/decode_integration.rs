//! End-to-end decode and encode scenarios across resources.

use payrail::form::{to_form, to_form_values};
use payrail::from_json;
use payrail::resources::account::{Account, AccountParams, PayoutScheduleParams};
use payrail::resources::account::{AccountSettingsParams, AccountSettingsPayoutsParams};
use payrail::resources::payment_source::PaymentSource;
use payrail::resources::taxrate::TaxRate;
use payrail::resources::topup::Topup;
use payrail::List;

#[test]
fn unexpanded_relation_decodes_as_bare_id() {
    let body = br#"{
        "id": "tu_1",
        "object": "topup",
        "amount": 10000,
        "currency": "usd",
        "balance_transaction": "txn_1",
        "source": "src_1"
    }"#;
    let topup: Topup = from_json(body).unwrap();
    let txn = topup.balance_transaction.unwrap();
    assert!(!txn.is_expanded());
    assert_eq!(txn.id(), "txn_1");
    assert!(txn.as_object().is_none());
}

#[test]
fn expanded_relation_decodes_as_full_object() {
    let body = br#"{
        "id": "tu_1",
        "object": "topup",
        "amount": 10000,
        "currency": "usd",
        "balance_transaction": {
            "id": "txn_1",
            "object": "balance_transaction",
            "amount": 10000,
            "net": 9700,
            "fee": 300,
            "status": "available"
        }
    }"#;
    let topup: Topup = from_json(body).unwrap();
    let txn = topup.balance_transaction.unwrap();
    assert!(txn.is_expanded());
    assert_eq!(txn.id(), "txn_1");
    assert_eq!(txn.as_object().unwrap().net, 9700);
}

#[test]
fn external_account_card_populates_only_card() {
    let body = br#"{
        "id": "acct_1",
        "object": "account",
        "external_accounts": {
            "object": "list",
            "data": [
                {"id": "card_1", "object": "card", "brand": "Visa", "last4": "4242"},
                {"id": "ba_1", "object": "bank_account", "bank_name": "First Fed", "last4": "6789"}
            ],
            "has_more": false,
            "url": "/v1/accounts/acct_1/external_accounts"
        }
    }"#;
    let account: Account = from_json(body).unwrap();
    let external = account.external_accounts.unwrap();

    let card = &external.data[0];
    assert_eq!(card.account_type, "card");
    assert_eq!(card.card().unwrap().last4, "4242");
    assert!(card.bank_account().is_none());

    let bank = &external.data[1];
    assert_eq!(bank.account_type, "bank_account");
    assert_eq!(bank.bank_account().unwrap().bank_name, "First Fed");
    assert!(bank.card().is_none());
}

#[test]
fn unknown_discriminator_is_kept_not_rejected() {
    let body = br#"{
        "id": "gc_1",
        "object": "gift_card",
        "balance": 5000
    }"#;
    let source: PaymentSource = from_json(body).unwrap();
    assert_eq!(source.id, "gc_1");
    assert_eq!(source.source_type, "gift_card");
    assert!(source.card().is_none());
    assert!(source.bank_account().is_none());
    assert!(source.source().is_none());

    // Re-encoding preserves the raw payload.
    let encoded = serde_json::to_value(&source).unwrap();
    assert_eq!(encoded["balance"], 5000);
}

#[test]
fn list_preserves_server_order_and_cursor_state() {
    let body = br#"{
        "object": "list",
        "data": [
            {"id": "txr_3", "object": "tax_rate", "percentage": 19.0},
            {"id": "txr_1", "object": "tax_rate", "percentage": 7.0},
            {"id": "txr_2", "object": "tax_rate", "percentage": 21.0}
        ],
        "has_more": true,
        "total_count": 12,
        "url": "/v1/tax_rates"
    }"#;
    let list: List<TaxRate> = serde_json::from_slice(body).unwrap();
    let ids: Vec<&str> = list.data.iter().map(|rate| rate.id.as_str()).collect();
    assert_eq!(ids, ["txr_3", "txr_1", "txr_2"]);
    assert!(list.has_more);
    assert_eq!(list.total_count, Some(12));
}

#[test]
fn nested_params_encode_with_bracketed_keys() {
    let params = AccountParams {
        country: Some("US".to_owned()),
        settings: Some(AccountSettingsParams {
            payouts: Some(AccountSettingsPayoutsParams {
                schedule: Some(PayoutScheduleParams {
                    interval: Some("manual".to_owned()),
                    ..PayoutScheduleParams::default()
                }),
                ..AccountSettingsPayoutsParams::default()
            }),
            ..AccountSettingsParams::default()
        }),
        ..AccountParams::default()
    };
    let form = to_form_values(&params).unwrap();
    assert_eq!(form.last("country"), Some("US"));
    assert_eq!(
        form.last("settings[payouts][schedule][interval]"),
        Some("manual")
    );
    assert_eq!(
        to_form(&params).unwrap(),
        "country=US&settings%5Bpayouts%5D%5Bschedule%5D%5Binterval%5D=manual"
    );
}

#[test]
fn decode_is_idempotent() {
    let body = br#"{
        "id": "acct_1",
        "object": "account",
        "charges_enabled": true,
        "capabilities": {"card_payments": "active"},
        "requirements": {"currently_due": ["individual.dob.day"]}
    }"#;
    let first: Account = from_json(body).unwrap();
    let second: Account = from_json(body).unwrap();
    assert_eq!(first, second);
}
