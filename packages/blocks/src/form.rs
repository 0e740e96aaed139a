//! Schema-driven editor form.
//!
//! Renders a controlled form for any [`BlockSchema`]: one labeled control
//! per field, bound to the field name and its current value. This is the
//! default Editor view for every block; a block only overrides it when it
//! needs something the generic form cannot express.

use blocksmith_common::vdom::VNode;
use blocksmith_schema::{FieldSpec, FieldType, Params};
use serde_json::Value;

/// Render a controlled form for `schema` bound to `params`.
///
/// `params` is expected to be schema-valid (the contract wrapper
/// guarantees it); missing values still degrade to the field default.
pub fn schema_form(schema: &blocksmith_schema::BlockSchema, params: &Params) -> VNode {
    let mut form = VNode::element("form").with_class("bs-editor");
    for field in schema.fields() {
        form = form.with_child(field_control(field, params.get(field.name)));
    }
    form
}

fn field_control(field: &FieldSpec, value: Option<&Value>) -> VNode {
    let value = value.unwrap_or(&field.default);
    let label = VNode::element("label")
        .with_attr("for", field.name)
        .with_child(VNode::text(field.label));

    let control = match &field.ty {
        FieldType::Text => text_input(field, value, "text"),
        FieldType::Url => text_input(field, value, "url"),
        FieldType::Number => VNode::element("input")
            .with_attr("type", "number")
            .with_attr("name", field.name)
            .with_attr("id", field.name)
            .with_attr("value", number_text(value)),
        FieldType::Toggle => {
            let mut input = VNode::element("input")
                .with_attr("type", "checkbox")
                .with_attr("name", field.name)
                .with_attr("id", field.name);
            if value.as_bool().unwrap_or(false) {
                input = input.with_attr("checked", "checked");
            }
            input
        }
        FieldType::Choice(options) => {
            let current = value.as_str().unwrap_or("");
            let mut select = VNode::element("select")
                .with_attr("name", field.name)
                .with_attr("id", field.name);
            for option in options {
                let mut node = VNode::element("option")
                    .with_attr("value", *option)
                    .with_child(VNode::text(*option));
                if *option == current {
                    node = node.with_attr("selected", "selected");
                }
                select = select.with_child(node);
            }
            select
        }
        FieldType::List(item_schema) => {
            let mut fieldset = VNode::element("fieldset")
                .with_class("bs-editor__list")
                .with_attr("name", field.name)
                .with_child(
                    VNode::element("legend").with_child(VNode::text(field.label)),
                );
            for item in value.as_array().map(Vec::as_slice).unwrap_or(&[]) {
                let item_params = item.as_object().cloned().unwrap_or_default();
                fieldset = fieldset.with_child(schema_form(item_schema, &item_params));
            }
            fieldset
        }
    };

    VNode::element("div")
        .with_class("bs-editor__field")
        .with_child(label)
        .with_child(control)
}

fn text_input(field: &FieldSpec, value: &Value, input_type: &str) -> VNode {
    VNode::element("input")
        .with_attr("type", input_type)
        .with_attr("name", field.name)
        .with_attr("id", field.name)
        .with_attr("value", value.as_str().unwrap_or(""))
}

fn number_text(value: &Value) -> String {
    value.as_f64().unwrap_or(0.0).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocksmith_schema::BlockSchema;
    use serde_json::json;

    fn schema() -> BlockSchema {
        BlockSchema::new()
            .field(FieldSpec::text("title", "Title", "Untitled"))
            .field(FieldSpec::number("height", "Height", 48.0))
            .field(FieldSpec::toggle("visible", "Visible", true))
            .field(FieldSpec::choice(
                "align",
                "Alignment",
                vec!["left", "center", "right"],
                "left",
            ))
    }

    #[test]
    fn test_form_has_one_control_per_field() {
        let schema = schema();
        let form = schema_form(&schema, &schema.defaults());
        assert_eq!(form.tag(), Some("form"));
        assert_eq!(form.children().len(), 4);
    }

    #[test]
    fn test_controls_are_bound_to_current_values() {
        let schema = schema();
        let params = schema.parse(&json!({"title": "Shop", "align": "center"})).unwrap();
        let form = schema_form(&schema, &params);

        let mut bound_title = false;
        let mut selected_center = false;
        form.walk(&mut |node| {
            if node.attr("name") == Some("title") && node.attr("value") == Some("Shop") {
                bound_title = true;
            }
            if node.tag() == Some("option")
                && node.attr("value") == Some("center")
                && node.attr("selected").is_some()
            {
                selected_center = true;
            }
        });
        assert!(bound_title);
        assert!(selected_center);
    }

    #[test]
    fn test_toggle_checked_state() {
        let schema = schema();
        let form = schema_form(&schema, &schema.defaults());
        let mut checked = false;
        form.walk(&mut |node| {
            if node.attr("name") == Some("visible") {
                checked = node.attr("checked").is_some();
            }
        });
        assert!(checked);
    }
}
