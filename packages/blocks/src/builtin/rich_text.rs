//! Rich text block: paragraphs of body copy.

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
        "rich-text",
        "Rich text",
        BlockCategory::Text,
        schema(),
        render,
    )
    .with_description("Body copy; blank lines separate paragraphs")
    .with_icon(Icon::AlignLeft)
    .popular()
}

fn schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::text(
            "content",
            "Content",
            "Write something about your business.",
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
    let mut node = VNode::element("div")
        .with_class("bs-rich-text")
        .with_style("text-align", str_param(params, "align"));
    for paragraph in str_param(params, "content").split("\n\n") {
        if paragraph.trim().is_empty() {
            continue;
        }
        node = node.with_child(VNode::element("p").with_child(VNode::text(paragraph.trim())));
    }
    node
}
