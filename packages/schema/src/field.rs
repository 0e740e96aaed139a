//! Field specifications: the typed building blocks of a schema.

use crate::refinement::is_absolute_url;
use crate::schema::BlockSchema;
use serde_json::Value;

/// Semantic type of a single schema field.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// Free-form text.
    Text,
    /// Floating-point number. Negative values are accepted, including for
    /// spacing fields (overlap effects stay possible).
    Number,
    /// On/off flag.
    Toggle,
    /// One of a closed set of string options.
    Choice(Vec<&'static str>),
    /// Optional absolute URL. Empty means "not set" and is always valid.
    Url,
    /// Ordered list of objects, each validated against a nested schema.
    List(Box<BlockSchema>),
}

/// One field in a block schema: name, editor label, type and default.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub ty: FieldType,
    pub default: Value,
}

impl FieldSpec {
    pub fn text(name: &'static str, label: &'static str, default: &str) -> Self {
        Self {
            name,
            label,
            ty: FieldType::Text,
            default: Value::String(default.to_string()),
        }
    }

    pub fn number(name: &'static str, label: &'static str, default: f64) -> Self {
        Self {
            name,
            label,
            ty: FieldType::Number,
            default: Value::from(default),
        }
    }

    pub fn toggle(name: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            name,
            label,
            ty: FieldType::Toggle,
            default: Value::Bool(default),
        }
    }

    /// `default` must be one of `options`.
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: Vec<&'static str>,
        default: &'static str,
    ) -> Self {
        debug_assert!(options.contains(&default), "choice default not in options");
        Self {
            name,
            label,
            ty: FieldType::Choice(options),
            default: Value::String(default.to_string()),
        }
    }

    /// URL field, unset by default.
    pub fn url(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            ty: FieldType::Url,
            default: Value::String(String::new()),
        }
    }

    /// List of objects, empty by default.
    pub fn list(name: &'static str, label: &'static str, item: BlockSchema) -> Self {
        Self {
            name,
            label,
            ty: FieldType::List(Box::new(item)),
            default: Value::Array(Vec::new()),
        }
    }

    /// Type-check a present value, returning the normalized value or an
    /// error message. Lists are handled by the schema itself so issues can
    /// carry per-item paths.
    pub(crate) fn check_scalar(&self, value: &Value) -> Result<Value, String> {
        match &self.ty {
            FieldType::Text => match value {
                Value::String(_) => Ok(value.clone()),
                other => Err(format!("expected text, found {}", value_kind(other))),
            },
            FieldType::Number => match value {
                Value::Number(_) => Ok(value.clone()),
                other => Err(format!("expected a number, found {}", value_kind(other))),
            },
            FieldType::Toggle => match value {
                Value::Bool(_) => Ok(value.clone()),
                other => Err(format!("expected true or false, found {}", value_kind(other))),
            },
            FieldType::Choice(options) => match value.as_str() {
                Some(s) if options.contains(&s) => Ok(value.clone()),
                Some(s) => Err(format!(
                    "'{}' is not one of: {}",
                    s,
                    options.join(", ")
                )),
                None => Err(format!("expected text, found {}", value_kind(value))),
            },
            FieldType::Url => match value.as_str() {
                Some("") => Ok(value.clone()),
                Some(s) if is_absolute_url(s) => Ok(value.clone()),
                Some(_) => Err("must be a well-formed absolute URL".to_string()),
                None => Err(format!("expected text, found {}", value_kind(value))),
            },
            FieldType::List(_) => unreachable!("lists are validated by BlockSchema"),
        }
    }
}

/// Human-readable JSON type name, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_accepts_strings_only() {
        let field = FieldSpec::text("title", "Title", "hi");
        assert!(field.check_scalar(&json!("hello")).is_ok());
        assert!(field.check_scalar(&json!(42)).is_err());
    }

    #[test]
    fn test_number_accepts_negative_values() {
        let field = FieldSpec::number("margin_top", "Top margin", 0.0);
        assert!(field.check_scalar(&json!(-24)).is_ok());
        assert!(field.check_scalar(&json!(1.5)).is_ok());
        assert!(field.check_scalar(&json!("24")).is_err());
    }

    #[test]
    fn test_choice_rejects_unknown_option() {
        let field = FieldSpec::choice("align", "Alignment", vec!["left", "center"], "left");
        assert!(field.check_scalar(&json!("center")).is_ok());
        let err = field.check_scalar(&json!("justify")).unwrap_err();
        assert!(err.contains("left, center"));
    }

    #[test]
    fn test_url_treats_empty_as_unset() {
        let field = FieldSpec::url("src", "Image URL");
        assert!(field.check_scalar(&json!("")).is_ok());
        assert!(field.check_scalar(&json!("https://example.com/x.png")).is_ok());
        assert!(field.check_scalar(&json!("not a url")).is_err());
    }
}
