//! Layout resolution: block layout mode × page container settings.

use blocksmith_blocks::LayoutMode;
use blocksmith_common::model::{ContainerWidth, PageSettings};

/// Stylesheet backing the preset container classes. Embedded in the
/// document head by the HTML compiler; presets use classes so repeated
/// blocks share rules instead of repeating inline styles.
pub const PRESET_STYLESHEET: &str = "\
.bs-container { width: 100%; max-width: 1080px; margin-left: auto; margin-right: auto; padding-left: 24px; padding-right: 24px; }
.bs-container--narrow { max-width: 720px; }
.bs-container--wide { max-width: 1320px; }
.bs-container--full { max-width: none; }
.bs-page__empty { padding: 96px 24px; text-align: center; color: #9aa5b1; }";

/// How one block should be placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutDecision {
    /// Render unconstrained; no sizing wrapper is injected at all.
    Unconstrained,
    /// Wrap in a centered sizing container. `max_width` is set only when
    /// the page carries an explicit override, in which case it is applied
    /// inline and the named preset is irrelevant.
    Contained {
        class: &'static str,
        max_width: Option<f64>,
    },
}

/// Preset container class for a named width mode.
pub fn container_class(width: ContainerWidth) -> &'static str {
    match width {
        ContainerWidth::Full => "bs-container bs-container--full",
        ContainerWidth::Container => "bs-container",
        ContainerWidth::Narrow => "bs-container bs-container--narrow",
        ContainerWidth::Wide => "bs-container bs-container--wide",
    }
}

/// Resolve a block's effective placement.
///
/// `FullWidth` bypasses the page container entirely. `Container` and
/// `Inherit` are resolved identically - "inherit" means "use the page
/// default", which is always container-shaped. An explicit page
/// `max_width` always wins over the named width mode.
pub fn resolve_layout(mode: LayoutMode, settings: &PageSettings) -> LayoutDecision {
    match mode {
        LayoutMode::FullWidth => LayoutDecision::Unconstrained,
        LayoutMode::Container | LayoutMode::Inherit => match settings.max_width {
            Some(width) => LayoutDecision::Contained {
                class: "bs-container",
                max_width: Some(width),
            },
            None => LayoutDecision::Contained {
                class: container_class(settings.container_width),
                max_width: None,
            },
        },
    }
}
