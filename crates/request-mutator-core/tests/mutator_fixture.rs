//! End-to-end tests for the mutation engine over the shared request fixture


use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use request_mutator_core::{AttributeValue, Mutator, RuleDeclaration, RuleMap};
use serde_json::json;

#[test]
fn test_mutate_all() {
    let mutator = test_support::fixture_mutator();
    let expected: IndexMap<String, AttributeValue> = test_support::expected_mapping()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let first = mutator.mutate_all().expect("fixture mutates");
    assert_eq!(first.len(), expected.len());
    for (key, value) in &expected {
        assert_eq!(&first[key.as_str()], value, "attribute {key}");
    }

    // keys come back in the order the request sent them
    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    let expected_keys: Vec<&str> = expected.keys().map(String::as_str).collect();
    assert_eq!(keys, expected_keys);

    // served from the cache the second time
    let second = mutator.mutate_all().expect("fixture mutates");
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_mutate_with_key() {
    let mutator = test_support::fixture_mutator();

    for (key, expected) in test_support::expected_mapping() {
        assert_eq!(mutator.mutate(key).unwrap(), expected, "attribute {key}");
    }

    assert!(mutator.mutate("none").unwrap().is_null());
    assert_eq!(mutator.mutate_with_default("baz", "FOO").unwrap(), AttributeValue::from("FOO"));
    assert!(!mutator.is_cached());
}

#[test]
fn test_mutate_with_default() {
    for (name, mutator) in test_support::fixtures_with_defaults() {
        assert_eq!(mutator.mutate("foo").unwrap(), AttributeValue::from("mutatedFOO"), "{name}");
        assert_eq!(mutator.mutate("baz").unwrap(), AttributeValue::from("BAZ"), "{name}");
        assert_eq!(
            mutator.mutate_with_default("baz", "FOO").unwrap(),
            AttributeValue::from("FOO"),
            "{name}"
        );
    }
}

#[test]
fn test_get_defaults() {
    for (name, mutator) in test_support::fixtures_with_defaults() {
        assert_eq!(mutator.defaults(), test_support::expected_defaults(), "{name}");
    }
}

#[test]
fn test_has_default() {
    for (name, mutator) in test_support::fixtures_with_defaults() {
        assert!(mutator.has_default("foo"), "{name}");
        assert!(!mutator.has_default("bar"), "{name}");
    }
}

#[test]
fn test_get_default() {
    for (name, mutator) in test_support::fixtures_with_defaults() {
        assert_eq!(mutator.default("foo"), Some(json!("bar")), "{name}");
        assert_eq!(mutator.default("bar"), None, "{name}");
    }
}

#[test]
fn test_has_rule() {
    let mutator = test_support::fixture_mutator();
    assert!(mutator.has_rule("foo"));
    assert!(!mutator.has_rule("none"));
}

#[test]
fn test_get_rule() {
    let mutator = test_support::fixture_mutator();
    assert_eq!(mutator.rule("boolean").tokens(), ["boolean"]);
    assert_eq!(mutator.rule("foo").tokens(), ["required", "string"]);
    assert!(mutator.rule("none").is_empty());
}

#[test]
fn test_rule_forms_normalize_identically() {
    let mut rules = RuleMap::new();
    rules.insert("delimited".to_string(), RuleDeclaration::from("required|string"));
    rules.insert("listed".to_string(), RuleDeclaration::from(["required", "string"]));
    let mutator = Mutator::builder(json!({})).rules(rules).build().unwrap();

    assert_eq!(mutator.rule("delimited"), mutator.rule("listed"));
}

#[test]
fn test_has_boolean_rule() {
    let mutator = test_support::fixture_mutator();
    assert!(mutator.has_boolean_rule("boolean"));
    assert!(!mutator.has_boolean_rule("integer"));
}

#[test]
fn test_has_integer_rule() {
    let mutator = test_support::fixture_mutator();
    assert!(mutator.has_integer_rule("integer"));
    assert!(!mutator.has_integer_rule("boolean"));
}

#[test]
fn test_has_numeric_rule() {
    let mutator = test_support::fixture_mutator();
    assert!(mutator.has_numeric_rule("numeric"));
    assert!(!mutator.has_numeric_rule("boolean"));
}

#[test]
fn test_has_date_rule() {
    let mutator = test_support::fixture_mutator();
    assert!(mutator.has_date_rule("date"));
    assert!(!mutator.has_date_rule("date_format"));
    assert!(!mutator.has_date_rule("boolean"));
}

#[test]
fn test_has_date_format_rule() {
    let mutator = test_support::fixture_mutator();
    assert!(mutator.has_date_format_rule("date_format"));
    assert!(!mutator.has_date_format_rule("date"));
    assert!(!mutator.has_date_format_rule("boolean"));
}

#[test]
fn test_has_date_rules() {
    let mutator = test_support::fixture_mutator();
    assert!(mutator.has_date_rules("date"));
    assert!(mutator.has_date_rules("date_format"));
    assert!(!mutator.has_date_rules("boolean"));
}

#[test]
fn test_get_date_time_format() {
    let mutator = test_support::fixture_mutator();
    assert_eq!(mutator.date_time_format("date_format").as_deref(), Some("Y/m/d"));
    assert_eq!(mutator.date_time_format("date"), None);
    assert_eq!(mutator.date_time_format("boolean"), None);
}

#[test]
fn test_boolean_rule_only_rejects_false_and_falsy() {
    let mut rules = RuleMap::new();
    for key in ["a", "b", "c", "d", "e"] {
        rules.insert(key.to_string(), RuleDeclaration::from("boolean"));
    }
    let mutator = Mutator::builder(json!({"a": "false", "b": "0", "c": "no", "d": "", "e": "1"}))
        .rules(rules)
        .build()
        .unwrap();

    let mutated = mutator.mutate_all().unwrap();
    assert_eq!(mutated["a"], AttributeValue::Boolean(false));
    assert_eq!(mutated["b"], AttributeValue::Boolean(true));
    assert_eq!(mutated["c"], AttributeValue::Boolean(true));
    assert_eq!(mutated["d"], AttributeValue::Boolean(false));
    assert_eq!(mutated["e"], AttributeValue::Boolean(true));
}

#[test]
fn test_without_collaborators() {
    let mutator = Mutator::builder(json!({"foo": "1"})).build().unwrap();

    assert!(!mutator.has_rule("foo"));
    assert!(mutator.rule("foo").is_empty());
    assert!(mutator.defaults().is_empty());
    assert!(!mutator.has_default("foo"));
    assert_eq!(mutator.mutate("foo").unwrap(), AttributeValue::from("1"));
}

#[test]
fn test_mapping_serializes_to_json() {
    let mutator = test_support::fixture_mutator();
    let rendered = serde_json::to_value(mutator.mutate_all().unwrap()).unwrap();

    assert_eq!(rendered["boolean"], json!(false));
    assert_eq!(rendered["integer"], json!(1234));
    assert_eq!(rendered["numeric"], json!(1.234));
    assert_eq!(rendered["date"], json!("2017-01-23T00:00:00Z"));
    assert_eq!(rendered["foo"], json!("mutatedFOO"));

    for (key, value) in mutator.mutate_all().unwrap() {
        assert_eq!(rendered[key.as_str()], value.clone().into_json(), "attribute {key}");
    }
}

#[test]
fn test_parsed_request_body_keeps_order() {
    let body: serde_json::Value =
        serde_json::from_str(r#"{"zeta": "1", "alpha": "false", "mid": "x"}"#).unwrap();
    let mut rules = RuleMap::new();
    rules.insert("alpha".to_string(), RuleDeclaration::from("boolean"));
    let mutator = Mutator::builder(body).rules(rules).build().unwrap();

    let keys: Vec<&str> = mutator.mutate_all().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}
