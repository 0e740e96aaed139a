//! Page and site data model.
//!
//! These are value objects exchanged with the persistence layer. Settings
//! structs deserialize with per-field defaults so a page that never stored
//! settings is indistinguishable from one that stored the defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A block placed on a page.
///
/// `params` is opaque here - it is only given meaning by the block's
/// schema, and is not necessarily valid at rest (imports and external
/// edits may corrupt it). Display order drives composition; it is not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInstance {
    pub id: String,
    pub block_id: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub display_order: i64,
}

/// Named page container sizing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerWidth {
    Full,
    #[default]
    Container,
    Narrow,
    Wide,
}

fn default_font_size() -> f64 {
    16.0
}

fn default_line_height() -> f64 {
    1.6
}

fn default_true() -> bool {
    true
}

fn default_autosave_interval() -> u32 {
    30
}

/// Page-wide rendering configuration.
///
/// Empty-string color/font values mean "unset, fall back to the site
/// theme". An explicit `max_width` overrides `container_width` entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    pub container_width: ContainerWidth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    pub background_color: String,
    pub font_size: f64,
    pub font_family: String,
    pub line_height: f64,
    pub autosave: bool,
    pub autosave_interval_secs: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            container_width: ContainerWidth::default(),
            max_width: None,
            background_color: String::new(),
            font_size: default_font_size(),
            font_family: String::new(),
            line_height: default_line_height(),
            autosave: default_true(),
            autosave_interval_secs: default_autosave_interval(),
        }
    }
}

impl PageSettings {
    /// Match a stored settings blob. Absence and malformed data both fall
    /// back to defaults - at render time the two are indistinguishable.
    pub fn from_value(stored: Option<&Value>) -> Self {
        match stored {
            None | Some(Value::Null) => Self::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
                warn!(%err, "malformed page settings, using defaults");
                Self::default()
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVariant {
    #[default]
    Minimal,
    Centered,
    Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterVariant {
    #[default]
    Simple,
    Columns,
}

/// Site-wide defaults: consumed by header/footer blocks and as the
/// fallback tier for page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteThemeSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub header_variant: HeaderVariant,
    pub footer_variant: FooterVariant,
}

impl Default for SiteThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#64748b".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#1f2933".to_string(),
            font_family: "Inter, system-ui, sans-serif".to_string(),
            header_variant: HeaderVariant::default(),
            footer_variant: FooterVariant::default(),
        }
    }
}

impl SiteThemeSettings {
    /// Same fallback contract as [`PageSettings::from_value`].
    pub fn from_value(stored: Option<&Value>) -> Self {
        match stored {
            None | Some(Value::Null) => Self::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
                warn!(%err, "malformed site theme, using defaults");
                Self::default()
            }),
        }
    }
}

/// One page of a site, with its placed blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub settings: PageSettings,
    #[serde(default)]
    pub blocks: Vec<BlockInstance>,
}

/// A site: theme plus pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub theme: SiteThemeSettings,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Site {
    /// Parse a site bundle from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, crate::CommonError> {
        Ok(serde_json::from_str(raw)?)
    }
}
