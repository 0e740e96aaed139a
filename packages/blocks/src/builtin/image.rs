//! Image block.

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
    BlockDefinition::new("image", "Image", BlockCategory::Media, schema(), render)
        .with_description("A single image with optional caption")
        .with_icon(Icon::Image)
}

fn schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::url("src", "Image URL"))
        .field(FieldSpec::text("alt", "Alt text", ""))
        .field(FieldSpec::text("caption", "Caption", ""))
        .field(FieldSpec::toggle("rounded", "Rounded corners", false))
        .extend_fields(spacing_fields(0.0))
}

fn render(params: &Params, _instance_id: Option<&str>) -> VNode {
    let src = str_param(params, "src");
    if src.is_empty() {
        // Nothing uploaded yet; hold the slot open.
        return VNode::element("div")
            .with_class("bs-image bs-image--placeholder")
            .with_child(VNode::text("No image selected"));
    }

    let mut img = VNode::element("img")
        .with_attr("src", src)
        .with_attr("alt", str_param(params, "alt"));
    if bool_param(params, "rounded") {
        img = img.with_style("border-radius", "8px");
    }

    let mut figure = VNode::element("figure").with_class("bs-image").with_child(img);
    let caption = str_param(params, "caption");
    if !caption.is_empty() {
        figure = figure.with_child(VNode::element("figcaption").with_child(VNode::text(caption)));
    }
    figure
}
