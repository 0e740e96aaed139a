//! End-to-end composition scenarios over the built-in block library.

use blocksmith_blocks::BlockRegistry;
use blocksmith_common::model::{
    BlockInstance, ContainerWidth, Page, PageSettings, SiteThemeSettings,
};
use blocksmith_common::vdom::VNode;
use blocksmith_renderer::{compile_document, compose_page, HtmlOptions};
use serde_json::{json, Value};

fn instance(id: &str, block_id: &str, params: Value, display_order: i64) -> BlockInstance {
    BlockInstance {
        id: id.to_string(),
        block_id: block_id.to_string(),
        params,
        display_order,
    }
}

fn page(settings: PageSettings, blocks: Vec<BlockInstance>) -> Page {
    Page {
        id: "page-1".to_string(),
        title: "Home".to_string(),
        slug: "home".to_string(),
        published: true,
        settings,
        blocks,
    }
}

fn sections(root: &VNode) -> Vec<&VNode> {
    root.children()
        .iter()
        .filter(|node| node.has_class("bs-block"))
        .collect()
}

#[tokio::test]
async fn test_blocks_render_in_display_order() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![
            instance("blk-c", "heading", json!({"text": "Third"}), 2),
            instance("blk-a", "heading", json!({"text": "First"}), 0),
            instance("blk-b", "heading", json!({"text": "Second"}), 1),
        ],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let root = &document.nodes[0];
    let rendered = sections(root);

    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0].text_content(), "First");
    assert_eq!(rendered[1].text_content(), "Second");
    assert_eq!(rendered[2].text_content(), "Third");
}

#[tokio::test]
async fn test_display_order_ties_keep_stored_order() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![
            instance("blk-a", "heading", json!({"text": "Alpha"}), 5),
            instance("blk-b", "heading", json!({"text": "Beta"}), 5),
        ],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let rendered = sections(&document.nodes[0]);
    assert_eq!(rendered[0].text_content(), "Alpha");
    assert_eq!(rendered[1].text_content(), "Beta");
}

#[tokio::test]
async fn test_unknown_block_id_is_skipped_not_fatal() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![
            instance("blk-a", "heading", json!({"text": "Kept"}), 0),
            instance("blk-b", "retired-block", json!({}), 1),
            instance("blk-c", "heading", json!({"text": "Also kept"}), 2),
        ],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let rendered = sections(&document.nodes[0]);
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].text_content(), "Kept");
    assert_eq!(rendered[1].text_content(), "Also kept");
}

#[tokio::test]
async fn test_empty_page_renders_placeholder() {
    let registry = BlockRegistry::builtin();
    let document = compose_page(
        &page(PageSettings::default(), vec![]),
        &SiteThemeSettings::default(),
        &registry,
    )
    .await;

    let root = &document.nodes[0];
    assert!(root.find_by_class("bs-page__empty").is_some());
}

#[tokio::test]
async fn test_all_unresolvable_counts_as_empty() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![instance("blk-a", "ghost", json!({}), 0)],
    );
    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    assert!(document.nodes[0].find_by_class("bs-page__empty").is_some());
}

/// The end-to-end scenario: a "wide" page and a container block - preset
/// class, centered by stylesheet, no inline max-width.
#[tokio::test]
async fn test_wide_preset_uses_class_not_inline_width() {
    let registry = BlockRegistry::builtin();
    let settings = PageSettings {
        container_width: ContainerWidth::Wide,
        max_width: None,
        ..PageSettings::default()
    };
    let page = page(
        settings,
        vec![instance("blk-a", "spacer", json!({}), 0)],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let section = document.nodes[0].find_by_class("bs-block").unwrap();
    let container = section.find_by_class("bs-container--wide").unwrap();
    assert!(container.has_class("bs-container"));
    assert_eq!(container.style("max-width"), None);
}

#[tokio::test]
async fn test_explicit_max_width_overrides_preset_inline() {
    let registry = BlockRegistry::builtin();
    let settings = PageSettings {
        container_width: ContainerWidth::Narrow,
        max_width: Some(900.0),
        ..PageSettings::default()
    };
    let page = page(
        settings,
        vec![instance("blk-a", "spacer", json!({}), 0)],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let container = document.nodes[0].find_by_class("bs-container").unwrap();
    assert!(!container.has_class("bs-container--narrow"));
    assert_eq!(container.style("max-width"), Some("900px"));
    assert_eq!(container.style("margin-left"), Some("auto"));
}

#[tokio::test]
async fn test_full_width_block_gets_no_container() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![instance("blk-a", "hero", json!({"title": "Big"}), 0)],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let section = document.nodes[0].find_by_class("bs-block").unwrap();
    assert!(section.find_by_class("bs-container").is_none());
    assert!(section.find_by_class("bs-hero").is_some());
}

#[tokio::test]
async fn test_spacing_params_become_section_and_content_styles() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![instance(
            "blk-a",
            "heading",
            json!({"text": "Spaced", "margin_top": 40, "padding_bottom": 12}),
            0,
        )],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let section = document.nodes[0].find_by_class("bs-block").unwrap();
    assert_eq!(section.style("margin-top"), Some("40px"));
    // Zero margins are explicit values and are emitted.
    assert_eq!(section.style("margin-bottom"), Some("0px"));

    let content = section.find_by_class("bs-block__content").unwrap();
    assert_eq!(content.style("padding-bottom"), Some("12px"));
}

#[tokio::test]
async fn test_corrupt_params_render_like_fresh_block() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![
            instance("blk-a", "heading", json!({"text": 42, "level": []}), 0),
            instance("blk-b", "heading", json!({}), 1),
        ],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let rendered = sections(&document.nodes[0]);
    // Both render the schema-default heading; no error artifacts.
    assert_eq!(rendered[0].text_content(), rendered[1].text_content());
}

#[tokio::test]
async fn test_composition_is_deterministic() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings::default(),
        vec![
            instance("blk-a", "hero", json!({"title": "Hi"}), 0),
            instance("blk-b", "product-grid", json!({"products": [{"name": "Mug"}]}), 1),
        ],
    );
    let theme = SiteThemeSettings::default();

    let first = compose_page(&page, &theme, &registry).await;
    let second = compose_page(&page, &theme, &registry).await;
    assert_eq!(first, second);

    let html_a = compile_document(&first, HtmlOptions::default());
    let html_b = compile_document(&second, HtmlOptions::default());
    assert_eq!(html_a, html_b);
}

#[tokio::test]
async fn test_full_pipeline_to_html() {
    let registry = BlockRegistry::builtin();
    let page = page(
        PageSettings {
            container_width: ContainerWidth::Wide,
            ..PageSettings::default()
        },
        vec![
            instance("blk-nav", "navbar", json!({"brand": "Acme"}), 0),
            instance("blk-hero", "hero", json!({"title": "Hello"}), 1),
        ],
    );

    let document = compose_page(&page, &SiteThemeSettings::default(), &registry).await;
    let html = compile_document(
        &document,
        HtmlOptions {
            title: page.title.clone(),
            ..HtmlOptions::default()
        },
    );

    assert!(html.contains("<title>Home</title>"));
    assert!(html.contains("Acme"));
    assert!(html.contains("bs-hero"));
    assert!(html.contains("class=\"bs-page\""));
}
