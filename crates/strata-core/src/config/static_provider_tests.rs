use super::*;
use crate::config::ValueType;
use serde_json::json;
use std::thread;

fn app_data() -> StaticProvider {
    StaticProvider::from_pairs([
        ("applicationID", json!("test123")),
        ("applicationOwner", json!("test456")),
    ])
}

#[test]
fn test_get_value_found() {
    let provider = app_data();
    let value = provider.get_value("applicationID");
    assert!(value.found());
    assert!(value.has_value());
    assert_eq!(value.as_str(), Some("test123"));
    assert_eq!(value.value_type(), ValueType::String);
    assert_eq!(value.source(), "static");
}

#[test]
fn test_get_value_missing() {
    let value = app_data().get_value("missing");
    assert!(!value.found());
    assert!(!value.has_value());
    assert_eq!(value.value(), None);
    assert_eq!(value.value_type(), ValueType::Invalid);
}

#[test]
fn test_explicit_null_is_found() {
    let provider = StaticProvider::from_pairs([("nothing", Value::Null)]);
    let value = provider.get_value("nothing");
    assert!(value.found());
    assert_eq!(value.value_type(), ValueType::Invalid);
}

#[test]
fn test_empty_key_returns_whole_table() {
    let provider = app_data();
    let value = provider.get_value("");
    assert!(value.found());
    assert_eq!(value.value_type(), ValueType::Dictionary);
    assert_eq!(
        value.value(),
        Some(&json!({"applicationID": "test123", "applicationOwner": "test456"}))
    );
}

#[test]
fn test_name_and_len() {
    let provider = app_data();
    assert_eq!(provider.name(), "static");
    assert_eq!(provider.len(), 2);
    assert!(!provider.is_empty());
    assert!(StaticProvider::new(Map::new()).is_empty());
}

#[test]
fn test_callbacks_are_noops() {
    let provider = app_data();
    let callback: ChangeCallback = Arc::new(|_: &str, _: &str, _: &Value| {
        panic!("static data never changes")
    });
    assert!(provider.register_change_callback("applicationID", callback).is_ok());
    assert!(provider.unregister_change_callback("any-token").is_ok());
}

#[test]
fn test_scope_returns_scoped_static_provider() {
    let provider = StaticProvider::from_pairs([("db.host", json!("localhost"))]);
    let scoped = provider.scope("db");
    assert_eq!(scoped.name(), "static");
    assert_eq!(scoped.get_value("host").as_str(), Some("localhost"));
    // the original provider is unaffected
    assert!(!provider.get_value("host").found());
}

#[test]
fn test_scoped_static_nested_scope() {
    let provider = StaticProvider::from_pairs([("a.b.k", json!(7))]);
    let nested = ScopedStaticProvider::new(provider, "a").scope("b");
    assert_eq!(nested.get_value("k").as_i64(), Some(7));
}

#[test]
fn test_scoped_static_empty_prefix() {
    let scoped = ScopedStaticProvider::new(app_data(), "");
    assert_eq!(scoped.prefix(), "");
    assert_eq!(scoped.get_value("applicationOwner").as_str(), Some("test456"));
}

#[test]
fn test_factory_builds_provider() {
    let mut data = Map::new();
    data.insert("x".to_string(), json!(1));
    let provider = static_provider(data)().unwrap();
    assert_eq!(provider.get_value("x").as_i64(), Some(1));
}

#[test]
fn test_concurrent_reads() {
    let provider = app_data();
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let provider = provider.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let key = if i % 2 == 0 { "applicationID" } else { "applicationOwner" };
                    let value = provider.get_value(key);
                    assert!(value.found());
                    let expected = if i % 2 == 0 { "test123" } else { "test456" };
                    assert_eq!(value.as_str(), Some(expected));
                    assert!(!provider.get_value("missing").found());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
