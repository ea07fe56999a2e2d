use super::*;
use serde_json::json;

#[test]
fn read_key_missing_is_null() {
    let obj = json!({ "name": "My Scene" });
    assert_eq!(read_key(&obj, "name"), json!("My Scene"));
    assert_eq!(read_key(&obj, "width"), Value::Null);
    assert_eq!(read_key(&json!(3), "width"), Value::Null);
}

#[test]
fn write_key_promotes_null_root_and_rejects_scalars() {
    let mut obj = Value::Null;
    assert!(write_key(&mut obj, "a", json!(1)));
    assert_eq!(obj, json!({ "a": 1 }));

    let mut scalar = json!(5);
    assert!(!write_key(&mut scalar, "a", json!(1)));
    assert_eq!(scalar, json!(5));
}

#[test]
fn write_pointer_creates_intermediate_maps() {
    let mut obj = json!({ "camera": {} });
    assert!(write_pointer(&mut obj, "/camera/lens/focal", json!(35)));
    assert_eq!(obj, json!({ "camera": { "lens": { "focal": 35 } } }));
    assert_eq!(read_pointer(&obj, "/camera/lens/focal"), json!(35));
}

#[test]
fn write_pointer_addresses_existing_array_slots_only() {
    let mut obj = json!({ "pair": [1, 2] });
    assert!(write_pointer(&mut obj, "/pair/1", json!(9)));
    assert_eq!(obj, json!({ "pair": [1, 9] }));
    assert!(!write_pointer(&mut obj, "/pair/5", json!(0)));
    assert!(!write_pointer(&mut obj, "/pair/1/x", json!(0)));
}

#[test]
fn write_pointer_unescapes_tokens() {
    let mut obj = json!({});
    assert!(write_pointer(&mut obj, "/a~1b/c~0d", json!(true)));
    assert_eq!(obj, json!({ "a/b": { "c~d": true } }));
}

#[test]
fn coerce_number_keeps_empty_sentinel() {
    assert_eq!(coerce_number(""), Some(json!("")));
    assert_eq!(coerce_number("42"), Some(json!(42)));
    assert_eq!(coerce_number("-2.5"), Some(json!(-2.5)));
    assert_eq!(coerce_number("-"), None);
    assert_eq!(coerce_number("abc"), None);
}

#[test]
fn number_value_keeps_integers_integral() {
    assert_eq!(number_value(3.0), json!(3));
    assert_eq!(number_value(0.25), json!(0.25));
}

#[test]
fn truthiness_matches_double_negation() {
    assert!(!truthy(&Value::Null));
    assert!(!truthy(&json!(0)));
    assert!(!truthy(&json!("")));
    assert!(truthy(&json!("x")));
    assert!(truthy(&json!([])));
}

#[test]
fn display_and_label_text() {
    assert_eq!(display_text(&Value::Null), "");
    assert_eq!(display_text(&json!(1920)), "1920");
    assert_eq!(label_text(&Value::Null), "null");
    assert_eq!(label_text(&json!(2)), "2");
}
