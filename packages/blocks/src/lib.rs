//! # Blocksmith Blocks
//!
//! The block contract and the block library.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ contract: BlockDefinition                   │
//! │  - identity + metadata (id, category, icon) │
//! │  - a parameter schema                       │
//! │  - three views over the same param bag:     │
//! │      Editor / Preview / Renderer            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ registry: id → lazily-loaded definition     │
//! │  - append-only, process-wide cache          │
//! │  - concurrent gets converge on one load     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Closed capability interface**: every block variant is an
//!    independent value implementing `{schema, Editor, Preview, Renderer}`
//!    - registered by string key, no inheritance.
//! 2. **Defaults over crashes**: all three views validate through the
//!    schema's safe path and degrade to defaults. A corrupt stored param
//!    bag renders like a freshly-added block, never an error page.
//! 3. **Determinism**: a view's output depends on `params` (plus an
//!    optional instance id for DOM scoping) and nothing else.

pub mod builtin;
mod contract;
mod form;
mod registry;

pub use contract::{BlockCategory, BlockDefinition, BlockSummary, Icon, LayoutMode};
pub use form::schema_form;
pub use registry::{BlockRegistry, LoaderFn, RegistryError};
