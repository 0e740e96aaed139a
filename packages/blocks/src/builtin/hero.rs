//! Hero block: full-bleed opener with title, subtitle and call to action.

use super::spacing_fields;
use crate::contract::{BlockCategory, BlockDefinition, Icon, LayoutMode};
use crate::registry::RegistryError;
use blocksmith_common::vdom::VNode;
use blocksmith_schema::{str_param, BlockSchema, FieldSpec, Params, Refinement};
use futures::future::BoxFuture;

pub(super) fn load() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
    Box::pin(async { Ok(definition()) })
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new("hero", "Hero", BlockCategory::Layout, schema(), render)
        .with_description("Full-width opener with headline and call to action")
        .with_icon(Icon::Sparkles)
        .with_layout(LayoutMode::FullWidth)
        .popular()
}

fn schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::text("title", "Title", "Welcome"))
        .field(FieldSpec::text(
            "subtitle",
            "Subtitle",
            "Tell visitors what you do",
        ))
        .field(FieldSpec::url("background_image", "Background image"))
        .field(FieldSpec::text("cta_label", "Button label", ""))
        .field(FieldSpec::url("cta_url", "Button link"))
        .extend_fields(spacing_fields(64.0))
        .refine(Refinement::new(
            "cta_url",
            "a button link is required when the button label is set",
            |p| str_param(p, "cta_label").is_empty() || !str_param(p, "cta_url").is_empty(),
        ))
}

fn render(params: &Params, _instance_id: Option<&str>) -> VNode {
    let mut node = VNode::element("div").with_class("bs-hero");

    let background = str_param(params, "background_image");
    if !background.is_empty() {
        node = node
            .with_style("background-image", format!("url({})", background))
            .with_style("background-size", "cover")
            .with_style("background-position", "center");
    }

    node = node
        .with_child(
            VNode::element("h1")
                .with_class("bs-hero__title")
                .with_child(VNode::text(str_param(params, "title"))),
        )
        .with_child(
            VNode::element("p")
                .with_class("bs-hero__subtitle")
                .with_child(VNode::text(str_param(params, "subtitle"))),
        );

    let cta_label = str_param(params, "cta_label");
    if !cta_label.is_empty() {
        node = node.with_child(
            VNode::element("a")
                .with_class("bs-hero__cta")
                .with_attr("href", str_param(params, "cta_url"))
                .with_child(VNode::text(cta_label)),
        );
    }
    node
}
