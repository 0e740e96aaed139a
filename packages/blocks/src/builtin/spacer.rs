//! Spacer block: fixed vertical gap between sections.

use crate::contract::{BlockCategory, BlockDefinition, Icon, LayoutMode};
use crate::registry::RegistryError;
use blocksmith_common::vdom::VNode;
use blocksmith_schema::{num_param, BlockSchema, FieldSpec, Params};
use futures::future::BoxFuture;

pub(super) fn load() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
    Box::pin(async { Ok(definition()) })
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new("spacer", "Spacer", BlockCategory::Layout, schema(), render)
        .with_description("Vertical breathing room between sections")
        .with_icon(Icon::MoveVertical)
        .with_layout(LayoutMode::Container)
}

fn schema() -> BlockSchema {
    // No shared spacing fields here; the block IS the spacing.
    BlockSchema::new().field(FieldSpec::number("height", "Height", 48.0))
}

fn render(params: &Params, _instance_id: Option<&str>) -> VNode {
    VNode::element("div")
        .with_class("bs-spacer")
        .with_attr("aria-hidden", "true")
        .with_style("height", format!("{}px", num_param(params, "height")))
}
