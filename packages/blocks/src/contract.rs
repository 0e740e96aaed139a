//! The block contract: identity, metadata and the three views.

use crate::form::schema_form;
use blocksmith_common::vdom::VNode;
use blocksmith_schema::{BlockSchema, Params};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of picker categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockCategory {
    Text,
    Media,
    Layout,
    Forms,
    Navigation,
    Ecommerce,
}

impl BlockCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BlockCategory::Text => "Text",
            BlockCategory::Media => "Media",
            BlockCategory::Layout => "Layout",
            BlockCategory::Forms => "Forms",
            BlockCategory::Navigation => "Navigation",
            BlockCategory::Ecommerce => "E-commerce",
        }
    }
}

/// Closed set of picker icons, resolved through a fixed mapping table
/// rather than reflective name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Heading,
    AlignLeft,
    Image,
    Sparkles,
    MoveVertical,
    Menu,
    Mail,
    ShoppingBag,
    Square,
}

impl Icon {
    /// Stable icon asset name.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Heading => "heading",
            Icon::AlignLeft => "align-left",
            Icon::Image => "image",
            Icon::Sparkles => "sparkles",
            Icon::MoveVertical => "move-vertical",
            Icon::Menu => "menu",
            Icon::Mail => "mail",
            Icon::ShoppingBag => "shopping-bag",
            Icon::Square => "square",
        }
    }
}

/// Whether a block renders full-bleed or inside the page's sizing
/// container. `Inherit` means "use the page default", which is always
/// container-shaped - there is no parent lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    FullWidth,
    Container,
    #[default]
    Inherit,
}

/// Lightweight block description for picker UIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub category: BlockCategory,
    pub description: &'static str,
    pub icon: Icon,
    pub popular: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<&'static str>,
}

/// Editor view: a controlled form over validated params.
pub type EditorFn = fn(&BlockSchema, &Params) -> VNode;

/// Renderer/preview view: final markup from validated params, with an
/// optional instance id for DOM scoping only.
pub type RenderFn = fn(&Params, Option<&str>) -> VNode;

/// Identity and behavior bundle for one block variant.
///
/// Constructed once at registration, never mutated. The three views are
/// pure functions over the same parameter bag; the wrapper methods below
/// run the schema's safe-validation path first, so a view never sees an
/// invalid bag.
#[derive(Debug, Clone)]
pub struct BlockDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: BlockCategory,
    pub description: &'static str,
    pub icon: Icon,
    pub popular: bool,
    pub layout_mode: LayoutMode,
    pub preview_image: Option<&'static str>,
    pub schema: BlockSchema,
    editor_view: EditorFn,
    preview_view: RenderFn,
    render_view: RenderFn,
}

impl BlockDefinition {
    /// A definition whose Editor is the schema-driven form and whose
    /// Preview delegates to the Renderer - the common case. Override with
    /// [`with_editor`](Self::with_editor) / [`with_preview`](Self::with_preview).
    pub fn new(
        id: &'static str,
        name: &'static str,
        category: BlockCategory,
        schema: BlockSchema,
        render_view: RenderFn,
    ) -> Self {
        Self {
            id,
            name,
            category,
            description: "",
            icon: Icon::Square,
            popular: false,
            layout_mode: LayoutMode::default(),
            preview_image: None,
            schema,
            editor_view: schema_form,
            preview_view: render_view,
            render_view,
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    pub fn with_layout(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    pub fn with_preview_image(mut self, url: &'static str) -> Self {
        self.preview_image = Some(url);
        self
    }

    pub fn with_editor(mut self, editor: EditorFn) -> Self {
        self.editor_view = editor;
        self
    }

    pub fn with_preview(mut self, preview: RenderFn) -> Self {
        self.preview_view = preview;
        self
    }

    /// Final-output view. Falls back to schema defaults on invalid params.
    pub fn render(&self, params: &Value, instance_id: Option<&str>) -> VNode {
        let params = self.schema.parse_or_defaults(params);
        (self.render_view)(&params, instance_id)
    }

    /// Editing-canvas view. Falls back to schema defaults on invalid params.
    pub fn preview(&self, params: &Value, instance_id: Option<&str>) -> VNode {
        let params = self.schema.parse_or_defaults(params);
        (self.preview_view)(&params, instance_id)
    }

    /// Editing form view. Usable standalone; falls back to schema defaults
    /// on invalid params.
    pub fn editor(&self, params: &Value) -> VNode {
        let params = self.schema.parse_or_defaults(params);
        (self.editor_view)(&self.schema, &params)
    }

    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            icon: self.icon,
            popular: self.popular,
            preview_image: self.preview_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocksmith_schema::{str_param, FieldSpec};
    use serde_json::json;

    fn test_definition() -> BlockDefinition {
        BlockDefinition::new(
            "greeting",
            "Greeting",
            BlockCategory::Text,
            BlockSchema::new().field(FieldSpec::text("text", "Text", "Hello")),
            |params, _| VNode::element("p").with_child(VNode::text(str_param(params, "text"))),
        )
        .with_description("Says hello")
        .with_icon(Icon::Heading)
        .popular()
    }

    #[test]
    fn test_render_uses_valid_params() {
        let def = test_definition();
        let node = def.render(&json!({"text": "Hi there"}), None);
        assert_eq!(node.text_content(), "Hi there");
    }

    #[test]
    fn test_render_degrades_to_defaults_on_corrupt_params() {
        let def = test_definition();
        // Wrong shape entirely.
        assert_eq!(def.render(&json!([1, 2, 3]), None).text_content(), "Hello");
        // Wrong field type.
        assert_eq!(def.render(&json!({"text": 42}), None).text_content(), "Hello");
    }

    #[test]
    fn test_preview_defaults_to_renderer() {
        let def = test_definition();
        let params = json!({"text": "Same"});
        assert_eq!(def.preview(&params, None), def.render(&params, None));
    }

    #[test]
    fn test_editor_renders_schema_form() {
        let def = test_definition();
        let form = def.editor(&json!({}));
        assert_eq!(form.tag(), Some("form"));
        // One control per schema field.
        assert_eq!(form.children().len(), def.schema.fields().len());
    }

    #[test]
    fn test_summary_carries_metadata() {
        let summary = test_definition().summary();
        assert_eq!(summary.id, "greeting");
        assert_eq!(summary.category, BlockCategory::Text);
        assert!(summary.popular);
        assert_eq!(summary.icon.name(), "heading");
    }
}
