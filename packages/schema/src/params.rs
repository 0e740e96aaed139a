//! Typed accessors over an opaque parameter bag.
//!
//! Params are plain JSON objects. These helpers read a field with a safe
//! fallback so render code never has to unwrap.

use serde_json::{Map, Value};

/// A block's parameter bag: a JSON object keyed by field name.
pub type Params = Map<String, Value>;

/// Read a string field, falling back to `""`.
pub fn str_param<'a>(params: &'a Params, name: &str) -> &'a str {
    params.get(name).and_then(Value::as_str).unwrap_or("")
}

/// Read a numeric field, falling back to `0.0`.
pub fn num_param(params: &Params, name: &str) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Read a boolean field, falling back to `false`.
pub fn bool_param(params: &Params, name: &str) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(false)
}

/// Read a list field, falling back to an empty slice.
pub fn list_param<'a>(params: &'a Params, name: &str) -> &'a [Value] {
    params
        .get(name)
        .and_then(Value::as_array)
        .map(|items| items.as_slice())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag() -> Params {
        let Value::Object(map) = json!({
            "title": "Hello",
            "count": 3,
            "visible": true,
            "items": [{"a": 1}]
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn test_accessors_read_present_values() {
        let params = bag();
        assert_eq!(str_param(&params, "title"), "Hello");
        assert_eq!(num_param(&params, "count"), 3.0);
        assert!(bool_param(&params, "visible"));
        assert_eq!(list_param(&params, "items").len(), 1);
    }

    #[test]
    fn test_accessors_fall_back_on_missing_or_mistyped() {
        let params = bag();
        assert_eq!(str_param(&params, "missing"), "");
        assert_eq!(str_param(&params, "count"), "");
        assert_eq!(num_param(&params, "title"), 0.0);
        assert!(!bool_param(&params, "title"));
        assert!(list_param(&params, "title").is_empty());
    }
}
