//! Contact form block.

use super::spacing_fields;
use crate::contract::{BlockCategory, BlockDefinition, Icon};
use crate::registry::RegistryError;
use blocksmith_common::vdom::VNode;
use blocksmith_schema::{bool_param, str_param, BlockSchema, FieldSpec, Params};
use futures::future::BoxFuture;

pub(super) fn load() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
    Box::pin(async { Ok(definition()) })
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(
        "contact-form",
        "Contact form",
        BlockCategory::Forms,
        schema(),
        render,
    )
    .with_description("Name, email and message fields with a submit button")
    .with_icon(Icon::Mail)
}

fn schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::text("heading", "Heading", "Get in touch"))
        .field(FieldSpec::text("button_label", "Button label", "Send"))
        .field(FieldSpec::text(
            "success_message",
            "Success message",
            "Thanks, we'll get back to you.",
        ))
        .field(FieldSpec::toggle("collect_phone", "Ask for phone number", false))
        .extend_fields(spacing_fields(32.0))
}

fn labeled_input(name: &str, label: &str, input_type: &str) -> VNode {
    VNode::element("div")
        .with_class("bs-contact__field")
        .with_child(
            VNode::element("label")
                .with_attr("for", name)
                .with_child(VNode::text(label)),
        )
        .with_child(
            VNode::element("input")
                .with_attr("type", input_type)
                .with_attr("id", name)
                .with_attr("name", name),
        )
}

fn render(params: &Params, instance_id: Option<&str>) -> VNode {
    let mut form = VNode::element("form").with_class("bs-contact");
    if let Some(id) = instance_id {
        // DOM scoping only; never used for data lookup.
        form = form.with_attr("id", format!("contact-{}", id));
    }

    form = form
        .with_child(
            VNode::element("h2").with_child(VNode::text(str_param(params, "heading"))),
        )
        .with_child(labeled_input("name", "Name", "text"))
        .with_child(labeled_input("email", "Email", "email"));

    if bool_param(params, "collect_phone") {
        form = form.with_child(labeled_input("phone", "Phone", "tel"));
    }

    form.with_child(
        VNode::element("div")
            .with_class("bs-contact__field")
            .with_child(
                VNode::element("label")
                    .with_attr("for", "message")
                    .with_child(VNode::text("Message")),
            )
            .with_child(
                VNode::element("textarea")
                    .with_attr("id", "message")
                    .with_attr("name", "message")
                    .with_attr("rows", "5"),
            ),
    )
    .with_child(
        VNode::element("button")
            .with_attr("type", "submit")
            .with_child(VNode::text(str_param(params, "button_label"))),
    )
    .with_child(
        VNode::element("p")
            .with_class("bs-contact__success")
            .with_attr("hidden", "hidden")
            .with_child(VNode::text(str_param(params, "success_message"))),
    )
}
