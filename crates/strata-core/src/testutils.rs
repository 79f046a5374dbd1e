//! Helpers for building test configuration

use rand::Rng;
use serde_json::{Map, Value};

use crate::config::StaticProvider;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Static provider holding a valid `applicationID` / `applicationOwner` pair.
///
/// When `application_id` is `None` a random `test...` identifier is generated.
pub fn static_app_data(application_id: Option<&str>) -> StaticProvider {
    StaticProvider::new(app_data(application_id))
}

fn app_data(application_id: Option<&str>) -> Map<String, Value> {
    let application_id = application_id
        .map(String::from)
        .unwrap_or_else(|| format!("test{}", random_letters(10)));
    let application_owner = format!("test{}", random_letters(10));

    let mut data = Map::new();
    data.insert("applicationID".to_string(), Value::String(application_id));
    data.insert("applicationOwner".to_string(), Value::String(application_owner));
    data
}

/// `n` random ASCII letters
pub fn random_letters(n: usize) -> String {
    let mut rng = rand::rng();
    (0..n)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}
