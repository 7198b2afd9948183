use std::collections::BTreeMap;

use serde::Serialize;

use super::*;

mod proptest_encoding;

#[derive(Serialize)]
struct Flat {
    amount: i64,
    currency: String,
}

impl FormParams for Flat {}

#[derive(Serialize)]
struct Nested {
    name: String,
    address: Address,
    tags: Vec<String>,
    metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

#[derive(Serialize)]
struct Address {
    city: String,
    line1: String,
}

impl FormParams for Nested {}

#[test]
fn test_format_key_bare() {
    assert_eq!(format_key(&["amount"]), "amount");
}

#[test]
fn test_format_key_nested() {
    assert_eq!(
        format_key(&["settings", "payouts", "schedule"]),
        "settings[payouts][schedule]"
    );
}

#[test]
fn test_format_key_empty() {
    assert_eq!(format_key::<&str>(&[]), "");
}

#[test]
fn test_flat_struct_encoding() {
    let params = Flat { amount: 2000, currency: "usd".to_owned() };
    assert_eq!(to_form(&params).unwrap(), "amount=2000&currency=usd");
}

#[test]
fn test_nested_struct_flattening() {
    let mut metadata = BTreeMap::new();
    metadata.insert("order_id".to_owned(), "6735".to_owned());

    let params = Nested {
        name: "Jenny".to_owned(),
        address: Address { city: "Lyon".to_owned(), line1: "3 rue de la Paix".to_owned() },
        tags: vec!["a".to_owned(), "b".to_owned()],
        metadata,
        phone: None,
    };

    let form = to_form_values(&params).unwrap();
    assert_eq!(form.last("address[city]"), Some("Lyon"));
    assert_eq!(form.last("address[line1]"), Some("3 rue de la Paix"));
    assert_eq!(form.last("tags[0]"), Some("a"));
    assert_eq!(form.last("tags[1]"), Some("b"));
    assert_eq!(form.last("metadata[order_id]"), Some("6735"));
    assert_eq!(form.last("name"), Some("Jenny"));
    assert!(form.last("phone").is_none());
}

#[test]
fn test_nulls_are_skipped() {
    #[derive(Serialize)]
    struct WithNull {
        kept: String,
        dropped: Option<String>,
    }
    impl FormParams for WithNull {}

    let params = WithNull { kept: "x".to_owned(), dropped: None };
    let form = to_form_values(&params).unwrap();
    assert_eq!(form.pairs().len(), 1);
    assert_eq!(form.last("kept"), Some("x"));
}

#[test]
fn test_bool_encoding() {
    #[derive(Serialize)]
    struct Flags {
        active: bool,
        shippable: bool,
    }
    impl FormParams for Flags {}

    let form = to_form_values(&Flags { active: true, shippable: false }).unwrap();
    assert_eq!(form.last("active"), Some("true"));
    assert_eq!(form.last("shippable"), Some("false"));
}

#[test]
fn test_append_extra_runs_after_typed_fields() {
    #[derive(Serialize)]
    struct WithSentinel {
        delay_days: i64,
    }

    impl FormParams for WithSentinel {
        fn append_extra(&self, form: &mut FormValues, key_parts: &[&str]) -> crate::error::Result<()> {
            form.add(format_key(&child_key(key_parts, "delay_days")), "minimum");
            Ok(())
        }
    }

    let form = to_form_values(&WithSentinel { delay_days: 7 }).unwrap();
    let delay_values: Vec<&str> = form
        .pairs()
        .iter()
        .filter(|(k, _)| k == "delay_days")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(delay_values, vec!["7", "minimum"]);
    assert_eq!(form.last("delay_days"), Some("minimum"));
}

#[test]
fn test_encode_percent_escapes() {
    let mut form = FormValues::new();
    form.add("description", "a b&c");
    assert_eq!(form.encode(), "description=a+b%26c");
}

#[test]
fn test_last_with_duplicates() {
    let mut form = FormValues::new();
    form.add("key", "first");
    form.add("key", "second");
    assert_eq!(form.last("key"), Some("second"));
}

#[test]
fn test_empty_form() {
    let form = FormValues::new();
    assert!(form.is_empty());
    assert_eq!(form.encode(), "");
}
