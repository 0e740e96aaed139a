//! # Blocksmith Schema
//!
//! Declarative parameter schemas for content blocks.
//!
//! Every block variant describes the shape of its configuration ("params")
//! as a [`BlockSchema`]: a list of typed fields with defaults, plus optional
//! cross-field refinements. Params travel as opaque JSON objects; the schema
//! is the only thing that gives them meaning.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Validation is fully deterministic and side-effect free.**
//!
//! For any schema + candidate value, `parse()` MUST produce an identical
//! result on every invocation:
//!
//! - No I/O, no clock reads, no randomness
//! - Same candidate → same normalized params, same issues
//! - `parse(parse(p))` is structurally equal to `parse(p)` (idempotence)
//!
//! **Why determinism matters:** the editor re-validates on every keystroke
//! and the renderer re-validates on every composition pass; both assume a
//! candidate that validated once keeps validating.
//!
//! ## Default Safety
//!
//! Every field carries a default, so `parse(&json!({}))` always succeeds and
//! yields a fully-defaulted params object. This is the universal fallback:
//! whenever stored or incoming params fail validation, callers degrade to
//! `defaults()` instead of crashing.

mod field;
mod params;
mod refinement;
mod schema;

pub use field::{FieldSpec, FieldType};
pub use params::{bool_param, list_param, num_param, str_param, Params};
pub use refinement::{is_absolute_url, Refinement};
pub use schema::{format_issues, BlockSchema, FieldIssue, SafeParse, SchemaError};
