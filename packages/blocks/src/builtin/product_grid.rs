//! Product grid block.

use super::spacing_fields;
use crate::contract::{BlockCategory, BlockDefinition, Icon};
use crate::registry::RegistryError;
use blocksmith_common::vdom::VNode;
use blocksmith_schema::{
    bool_param, list_param, num_param, str_param, BlockSchema, FieldSpec, Params,
};
use futures::future::BoxFuture;

pub(super) fn load() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
    Box::pin(async { Ok(definition()) })
}

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(
        "product-grid",
        "Product grid",
        BlockCategory::Ecommerce,
        schema(),
        render,
    )
    .with_description("A responsive grid of products with optional prices")
    .with_icon(Icon::ShoppingBag)
}

fn schema() -> BlockSchema {
    BlockSchema::new()
        .field(FieldSpec::text("heading", "Heading", "Our products"))
        .field(FieldSpec::number("columns", "Columns", 3.0))
        .field(FieldSpec::toggle("show_prices", "Show prices", true))
        .field(FieldSpec::list(
            "products",
            "Products",
            BlockSchema::new()
                .field(FieldSpec::text("name", "Name", "Product"))
                .field(FieldSpec::number("price", "Price", 0.0))
                .field(FieldSpec::url("image", "Image URL"))
                .field(FieldSpec::url("url", "Product link")),
        ))
        .extend_fields(spacing_fields(32.0))
}

fn render(params: &Params, _instance_id: Option<&str>) -> VNode {
    let section = VNode::element("div").with_class("bs-products").with_child(
        VNode::element("h2").with_child(VNode::text(str_param(params, "heading"))),
    );

    let columns = num_param(params, "columns").max(1.0);
    let show_prices = bool_param(params, "show_prices");

    let mut grid = VNode::element("div")
        .with_class("bs-products__grid")
        .with_style("display", "grid")
        .with_style(
            "grid-template-columns",
            format!("repeat({}, 1fr)", columns as i64),
        )
        .with_style("gap", "24px");

    for product in list_param(params, "products") {
        let Some(product) = product.as_object() else {
            continue;
        };
        let mut card = VNode::element("div").with_class("bs-products__card");

        let image = str_param(product, "image");
        if !image.is_empty() {
            card = card.with_child(
                VNode::element("img")
                    .with_attr("src", image)
                    .with_attr("alt", str_param(product, "name")),
            );
        }

        let name: VNode = VNode::element("h3").with_child(VNode::text(str_param(product, "name")));
        let url = str_param(product, "url");
        card = if url.is_empty() {
            card.with_child(name)
        } else {
            card.with_child(VNode::element("a").with_attr("href", url).with_child(name))
        };

        if show_prices {
            card = card.with_child(
                VNode::element("span")
                    .with_class("bs-products__price")
                    .with_child(VNode::text(format!("${:.2}", num_param(product, "price")))),
            );
        }
        grid = grid.with_child(card);
    }

    section.with_child(grid)
}
