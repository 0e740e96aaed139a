//! # Blocksmith Common
//!
//! Shared value types for the block builder: the virtual DOM produced by
//! block views, the page/site data model, and the umbrella error type.
//!
//! This crate is deliberately thin - anything with behavior (validation,
//! composition, persistence) lives in the crates that own that behavior.

mod error;
pub mod model;
pub mod vdom;

pub use error::CommonError;
pub use model::{
    BlockInstance, ContainerWidth, FooterVariant, HeaderVariant, Page, PageSettings, Site,
    SiteThemeSettings,
};
pub use vdom::{VDocument, VNode};
