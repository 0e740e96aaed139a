//! # Blocksmith Store
//!
//! The persistence contract the builder core calls, as a black box.
//!
//! The core never defines transport or storage shape - only that these
//! operations accept and return the schema-shaped objects from the data
//! model. Param bags cross this boundary as opaque JSON; settings blobs
//! are matched against their schemas by the caller (absence means
//! defaults). [`MemoryStore`] is the reference implementation, used by
//! tests and the CLI.

mod memory;
mod store;

pub use memory::MemoryStore;
pub use store::{create_block_with_defaults, SiteStore, StoreError};
