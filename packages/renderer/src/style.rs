//! Style optimization: sparse style intents → minimal style map.

use std::collections::BTreeMap;

/// A single declarative style intent.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

/// Keys whose bare numbers carry pixel semantics.
fn is_spacing_key(key: &str) -> bool {
    matches!(
        key,
        "margin" | "margin-top" | "margin-right" | "margin-bottom" | "margin-left" |
        "padding" | "padding-top" | "padding-right" | "padding-bottom" | "padding-left" |
        "top" | "right" | "bottom" | "left" |
        "width" | "height" |
        "min-width" | "max-width" | "min-height" | "max-height" |
        "gap" | "row-gap" | "column-gap"
    )
}

/// Collapse sparse style intents into a minimal style map.
///
/// - `None` and empty-string values are dropped entirely - no zero-effect
///   properties are ever emitted. An explicit `Some(0.0)` IS emitted:
///   "unset" and "set to zero" are different intents.
/// - Numbers on spacing-semantic keys are suffixed with `px`; all other
///   numbers pass through bare.
///
/// Pure and order-independent: the output map depends only on the key set,
/// not on input order.
pub fn optimize_styles<K, I>(intents: I) -> BTreeMap<String, String>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, Option<StyleValue>)>,
{
    let mut styles = BTreeMap::new();
    for (key, intent) in intents {
        let key = key.as_ref();
        match intent {
            None => {}
            Some(StyleValue::Text(text)) => {
                if !text.is_empty() {
                    styles.insert(key.to_string(), text);
                }
            }
            Some(StyleValue::Number(number)) => {
                let value = if is_spacing_key(key) {
                    format!("{}px", number)
                } else {
                    number.to_string()
                };
                styles.insert(key.to_string(), value);
            }
        }
    }
    styles
}
