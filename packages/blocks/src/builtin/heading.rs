//! Heading block: one configurable title line.

use super::spacing_fields;
use crate::contract::{BlockCategory, BlockDefinition, Icon};
use crate::registry::RegistryError;
use blocksmith_common::vdom::VNode;
use blocksmith_schema::{str_param, BlockSchema, FieldSpec, Params};
use futures::future::BoxFuture;

pub(super) fn load() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
    Box::pin(async { Ok(definition()) })
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(
        "heading",
        "Heading",
        BlockCategory::Text,
        schema(),
        render,
    )
    .with_description("A section title with selectable level and alignment")
    .with_icon(Icon::Heading)
    .popular()
}

fn schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::text("text", "Text", "Your heading"))
        .field(FieldSpec::choice(
            "level",
            "Level",
            vec!["h1", "h2", "h3"],
            "h2",
        ))
        .field(FieldSpec::choice(
            "align",
            "Alignment",
            vec!["left", "center", "right"],
            "left",
        ))
        .extend_fields(spacing_fields(0.0))
}

fn render(params: &Params, _instance_id: Option<&str>) -> VNode {
    VNode::element(str_param(params, "level"))
        .with_class("bs-heading")
        .with_style("text-align", str_param(params, "align"))
        .with_child(VNode::text(str_param(params, "text")))
}
