//! Navigation bar block.

use crate::contract::{BlockCategory, BlockDefinition, Icon, LayoutMode};
use crate::registry::RegistryError;
use blocksmith_common::vdom::VNode;
use blocksmith_schema::{bool_param, list_param, str_param, BlockSchema, FieldSpec, Params};
use futures::future::BoxFuture;

pub(super) fn load() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
    Box::pin(async { Ok(definition()) })
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(
        "navbar",
        "Navigation bar",
        BlockCategory::Navigation,
        schema(),
        render,
    )
    .with_description("Site navigation with brand and links")
    .with_icon(Icon::Menu)
    .with_layout(LayoutMode::FullWidth)
}

fn schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::text("brand", "Brand", "My site"))
        .field(FieldSpec::list(
            "links",
            "Links",
            BlockSchema::new()
                .field(FieldSpec::text("label", "Label", "Home"))
                .field(FieldSpec::url("url", "URL")),
        ))
        .field(FieldSpec::toggle("sticky", "Stick to top", false))
}

fn render(params: &Params, _instance_id: Option<&str>) -> VNode {
    let mut nav = VNode::element("nav").with_class("bs-navbar");
    if bool_param(params, "sticky") {
        nav = nav
            .with_style("position", "sticky")
            .with_style("top", "0");
    }

    nav = nav.with_child(
        VNode::element("span")
            .with_class("bs-navbar__brand")
            .with_child(VNode::text(str_param(params, "brand"))),
    );

    let mut list = VNode::element("ul").with_class("bs-navbar__links");
    for link in list_param(params, "links") {
        let Some(link) = link.as_object() else {
            continue;
        };
        list = list.with_child(
            VNode::element("li").with_child(
                VNode::element("a")
                    .with_attr("href", str_param(link, "url"))
                    .with_child(VNode::text(str_param(link, "label"))),
            ),
        );
    }
    nav.with_child(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_links_render_in_order() {
        let node = definition().render(
            &json!({"links": [
                {"label": "Home", "url": "https://example.com/"},
                {"label": "Shop", "url": "https://example.com/shop"}
            ]}),
            None,
        );
        let list = node.find_by_class("bs-navbar__links").unwrap();
        assert_eq!(list.children().len(), 2);
        assert_eq!(list.children()[0].text_content(), "Home");
        assert_eq!(list.children()[1].text_content(), "Shop");
    }

    #[test]
    fn test_bad_link_url_defaults_whole_bag() {
        let node = definition().render(
            &json!({"brand": "Shop", "links": [{"label": "x", "url": "nope"}]}),
            None,
        );
        // Defaults: brand "My site", no links.
        assert!(node.text_content().contains("My site"));
        let list = node.find_by_class("bs-navbar__links").unwrap();
        assert!(list.children().is_empty());
    }
}
