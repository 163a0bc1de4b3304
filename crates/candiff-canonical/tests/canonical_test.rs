//! Comprehensive tests for canonical encoding

use candiff_canonical::{canonize, CanonicalError};
use candiff_core::Value;
use serde_json::json;

/// The fixture matrix: pairwise distinct values except where noted.
fn fixtures() -> Vec<serde_json::Value> {
    vec![
        json!("abc"),
        json!(73),
        json!(true),
        json!(false),
        json!({"a": 7, "b": 8}),
        json!({"b": 8, "a": 7}),
        json!([{"b": 8, "a": 7}]),
        json!([{"b": 8, "c": 1, "a": 7}]),
        json!([{"b": 8, "c": [1, {"z": 1, "Z": 3, "a": 2, "A": 4}], "a": 7}]),
        json!([{"a": 7, "c": [1, {"a": 2, "A": 4, "z": 1, "Z": 3}], "b": 8}]),
        json!([5, 5, 5]),
        json!({"0": 5, "1": 5, "2": 5}),
    ]
}

mod equality_contract {
    use super::*;

    #[test]
    fn test_canonical_equality_matches_value_equality() {
        // Equal values (ignoring mapping key order) must canonize
        // identically; unequal values must not.
        for json1 in fixtures() {
            let value1 = Value::from(json1);
            for json2 in fixtures() {
                let value2 = Value::from(json2);
                let c1 = canonize(&value1).unwrap();
                let c2 = canonize(&value2).unwrap();
                if value1 == value2 {
                    assert_eq!(c1, c2, "{value1:?} vs {value2:?}");
                } else {
                    assert_ne!(c1, c2, "{value1:?} vs {value2:?}");
                }
            }
        }
    }

    #[test]
    fn test_round_trips_through_json_parser() {
        for json in fixtures() {
            let value = Value::from(json.clone());
            let encoding = canonize(&value).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&encoding).unwrap();
            assert_eq!(parsed, json);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        for json in fixtures() {
            let value = Value::from(json);
            assert_eq!(canonize(&value).unwrap(), canonize(&value).unwrap());
        }
    }
}

mod key_sorting {
    use super::*;

    #[test]
    fn test_key_order_does_not_affect_output() {
        let a = Value::from(json!({"a": 1, "b": 2}));
        let b = Value::from(json!({"b": 2, "a": 1}));
        assert_eq!(canonize(&a).unwrap(), canonize(&b).unwrap());
    }

    #[test]
    fn test_case_sensitive_byte_order() {
        // Uppercase letters sort before lowercase in byte order
        let value = Value::from(json!({"z": 1, "Z": 3, "a": 2, "A": 4}));
        assert_eq!(canonize(&value).unwrap(), r#"{"A":4,"Z":3,"a":2,"z":1}"#);
    }

    #[test]
    fn test_numeric_string_keys_sort_lexicographically() {
        let value = Value::from(json!({"10": 1, "2": 2, "1": 3}));
        assert_eq!(canonize(&value).unwrap(), r#"{"1":3,"10":1,"2":2}"#);
    }
}

mod list_order {
    use super::*;

    #[test]
    fn test_list_order_affects_output() {
        let a = Value::from(json!([1, 2]));
        let b = Value::from(json!([2, 1]));
        assert_ne!(canonize(&a).unwrap(), canonize(&b).unwrap());
    }

    #[test]
    fn test_repeated_elements_are_kept() {
        assert_eq!(canonize(&Value::from(json!([5, 5, 5]))).unwrap(), "[5,5,5]");
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_unsupported_kind_carries_name() {
        let err = canonize(&Value::unsupported("function")).unwrap_err();
        assert_eq!(err, CanonicalError::UnsupportedKind("function".to_owned()));
        assert!(err.to_string().contains("function"));
    }

    #[test]
    fn test_unsupported_nested_in_list() {
        let value = Value::from(json!([1, 2]));
        let Value::List(mut items) = value else { unreachable!() };
        items.push(Value::unsupported("symbol"));
        assert!(canonize(&Value::List(items)).is_err());
    }
}
