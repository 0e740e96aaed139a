//! The standard block library.
//!
//! Each module is one independent block variant: a schema plus its views,
//! bundled into a [`BlockDefinition`](crate::BlockDefinition). Blocks know
//! nothing about each other or about pages; they are looked up by id from
//! the registry.

mod contact_form;
mod heading;
mod hero;
mod image;
mod navbar;
mod product_grid;
mod rich_text;
mod spacer;

use crate::registry::LoaderFn;
use blocksmith_schema::FieldSpec;

/// Loader table consumed by [`BlockRegistry::builtin`](crate::BlockRegistry::builtin).
pub const LOADERS: &[(&str, LoaderFn)] = &[
    ("contact-form", contact_form::load),
    ("heading", heading::load),
    ("hero", hero::load),
    ("image", image::load),
    ("navbar", navbar::load),
    ("product-grid", product_grid::load),
    ("rich-text", rich_text::load),
    ("spacer", spacer::load),
];

/// Spacing fields shared by every block: outer margins and inner padding,
/// in pixels. Defaults to zero margins and a block-specific padding.
pub(crate) fn spacing_fields(padding_default: f64) -> [FieldSpec; 4] {
    [
        FieldSpec::number("margin_top", "Top margin", 0.0),
        FieldSpec::number("margin_bottom", "Bottom margin", 0.0),
        FieldSpec::number("padding_top", "Top padding", padding_default),
        FieldSpec::number("padding_bottom", "Bottom padding", padding_default),
    ]
}
