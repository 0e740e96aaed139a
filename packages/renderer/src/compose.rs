//! Page composition: ordered block instances → one virtual document.

use crate::layout::{resolve_layout, LayoutDecision};
use crate::style::{optimize_styles, StyleValue};
use blocksmith_blocks::{BlockDefinition, BlockRegistry};
use blocksmith_common::model::{BlockInstance, Page, PageSettings, SiteThemeSettings};
use blocksmith_common::vdom::{VDocument, VNode};
use blocksmith_schema::Params;
use serde_json::Value;
use tracing::{instrument, warn};

/// Hardcoded last-resort defaults, used when both page settings and the
/// site theme leave a value unset.
pub const SYSTEM_BACKGROUND: &str = "#ffffff";
pub const SYSTEM_TEXT_COLOR: &str = "#1f2933";
pub const SYSTEM_FONT_STACK: &str = "system-ui, sans-serif";

/// Compose a page into its final visual tree.
///
/// Blocks render in ascending display order (stable: ties keep their
/// stored relative order). An instance whose block id cannot be resolved
/// is skipped with a log - one bad instance never takes down the page. A
/// page with zero resolvable blocks renders an empty-state placeholder.
#[instrument(skip_all, fields(page_id = %page.id))]
pub async fn compose_page(
    page: &Page,
    theme: &SiteThemeSettings,
    registry: &BlockRegistry,
) -> VDocument {
    let mut ordered: Vec<&BlockInstance> = page.blocks.iter().collect();
    ordered.sort_by_key(|instance| instance.display_order);

    let mut sections = Vec::with_capacity(ordered.len());
    for instance in ordered {
        match registry.get(&instance.block_id).await {
            Ok(definition) => {
                sections.push(compose_block(&definition, instance, &page.settings));
            }
            Err(err) => {
                warn!(instance_id = %instance.id, %err, "skipping unresolvable block");
            }
        }
    }

    let mut root = page_container(&page.settings, theme);
    if sections.is_empty() {
        root = root.with_child(empty_state());
    } else {
        root = root.with_children(sections);
    }

    let mut document = VDocument::new();
    document.add_node(root);
    document
}

/// One block instance: section wrapper + optional sizing container +
/// optional padding wrapper + the block's rendered content.
fn compose_block(
    definition: &BlockDefinition,
    instance: &BlockInstance,
    settings: &PageSettings,
) -> VNode {
    let params = definition.schema.parse_or_defaults(&instance.params);

    let section_styles = optimize_styles([
        ("margin-top", spacing_intent(&params, "margin_top")),
        ("margin-bottom", spacing_intent(&params, "margin_bottom")),
    ]);
    let content_styles = optimize_styles([
        ("padding-top", spacing_intent(&params, "padding_top")),
        ("padding-bottom", spacing_intent(&params, "padding_bottom")),
    ]);

    let body = definition.render(&instance.params, Some(&instance.id));
    let content = if content_styles.is_empty() {
        body
    } else {
        VNode::element("div")
            .with_class("bs-block__content")
            .with_styles(content_styles)
            .with_child(body)
    };

    let section = VNode::element("section")
        .with_class("bs-block")
        .with_attr("data-block", definition.id)
        .with_attr("data-instance", instance.id.clone())
        .with_styles(section_styles);

    match resolve_layout(definition.layout_mode, settings) {
        LayoutDecision::Unconstrained => section.with_child(content),
        LayoutDecision::Contained { class, max_width } => {
            let mut container = VNode::element("div").with_class(class);
            if let Some(width) = max_width {
                container = container.with_styles(optimize_styles([
                    ("max-width", Some(StyleValue::Number(width))),
                    ("margin-left", Some(StyleValue::from("auto"))),
                    ("margin-right", Some(StyleValue::from("auto"))),
                ]));
            }
            section.with_child(container.with_child(content))
        }
    }
}

/// A spacing param becomes a style intent only when present; the schema
/// guarantees presence for blocks that declare spacing fields, so absence
/// simply means "this block has no such knob".
fn spacing_intent(params: &Params, name: &str) -> Option<StyleValue> {
    params
        .get(name)
        .and_then(Value::as_f64)
        .map(StyleValue::Number)
}

/// The page's outer container: page settings merged over theme fallbacks
/// over system defaults (first set value wins).
fn page_container(settings: &PageSettings, theme: &SiteThemeSettings) -> VNode {
    let background = first_set(&[
        &settings.background_color,
        &theme.background_color,
        SYSTEM_BACKGROUND,
    ]);
    let font_family = first_set(&[&settings.font_family, &theme.font_family, SYSTEM_FONT_STACK]);
    let text_color = first_set(&[&theme.text_color, SYSTEM_TEXT_COLOR]);

    VNode::element("div")
        .with_class("bs-page")
        .with_styles(optimize_styles([
            ("background-color", Some(StyleValue::from(background))),
            ("color", Some(StyleValue::from(text_color))),
            ("font-family", Some(StyleValue::from(font_family))),
            (
                "font-size",
                Some(StyleValue::Text(format!("{}px", settings.font_size))),
            ),
            ("line-height", Some(StyleValue::Number(settings.line_height))),
        ]))
}

fn first_set<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

fn empty_state() -> VNode {
    VNode::element("div")
        .with_class("bs-page__empty")
        .with_child(VNode::text("This page has no content yet."))
}
