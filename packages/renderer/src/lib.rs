//! # Blocksmith Renderer
//!
//! Turns a page's block instances into a final visual tree.
//!
//! ## Pipeline
//!
//! ```text
//! BlockInstance[] ──sort──▶ Registry lookup ──▶ validate params
//!        │                      (skip + log            │
//!        │                       on failure)           ▼
//!        │                              Layout Resolution (container?)
//!        │                                             │
//!        │                              Style Optimization (margins,
//!        │                                             │   paddings)
//!        ▼                                             ▼
//!   page container  ◀──────────────────────  block Renderer views
//! ```
//!
//! The same pipeline serves the interactive editor canvas and the public
//! read-only page; there is no incremental re-render contract - a params
//! change re-runs the whole deterministic pass.
//!
//! Published/unpublished gating is the caller's concern and happens before
//! composition is invoked.

mod compose;
mod html;
mod layout;
mod style;

pub use compose::{compose_page, SYSTEM_BACKGROUND, SYSTEM_FONT_STACK, SYSTEM_TEXT_COLOR};
pub use html::{compile_document, compile_node, HtmlOptions};
pub use layout::{container_class, resolve_layout, LayoutDecision, PRESET_STYLESHEET};
pub use style::{optimize_styles, StyleValue};
