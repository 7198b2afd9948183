use proptest::prelude::*;

use crate::form::{format_key, FormValues};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_format_key_bracket_count(
        parts in prop::collection::vec("[a-z_]{1,12}", 1..6),
    ) {
        let key = format_key(&parts);

        // The first part is bare; each following part adds one bracket pair.
        prop_assert!(key.starts_with(parts[0].as_str()));
        prop_assert_eq!(key.matches('[').count(), parts.len() - 1);
        prop_assert_eq!(key.matches(']').count(), parts.len() - 1);
        for part in &parts[1..] {
            let bracketed = format!("[{}]", part);
            prop_assert!(key.contains(&bracketed));
        }
    }

    #[test]
    fn test_encode_parse_roundtrip(
        pairs in prop::collection::vec(("[a-z_]{1,10}(\\[[a-z0-9_]{1,10}\\]){0,3}", ".{0,24}"), 0..8),
    ) {
        let mut form = FormValues::new();
        for (key, value) in &pairs {
            form.add(key.clone(), value.clone());
        }

        let encoded = form.encode();
        let decoded: Vec<(String, String)> = url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();

        prop_assert_eq!(decoded, pairs);
    }

    #[test]
    fn test_last_matches_final_append(
        values in prop::collection::vec(".{0,16}", 1..6),
    ) {
        let mut form = FormValues::new();
        for value in &values {
            form.add("key", value.clone());
        }

        prop_assert_eq!(form.last("key"), values.last().map(String::as_str));
    }
}
