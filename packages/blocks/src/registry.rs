//! String-keyed block lookup with lazy, memoized loading.
//!
//! The registry is process-wide state with an explicit lifecycle:
//! populated at startup with loader functions, definitions materialized
//! lazily on first `get`, append-only, never invalidated within a process
//! run. The in-flight load itself is memoized (not just the resolved
//! value), so concurrent `get`s for the same id converge on a single load.

use crate::builtin;
use crate::contract::{BlockDefinition, BlockSummary};
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::warn;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown block id '{0}'")]
    UnknownBlockId(String),

    #[error("Block '{id}' failed to load: {reason}")]
    LoadFailed { id: String, reason: String },
}

/// Produces a definition on first reference. Loads are idempotent and
/// abandon-safe: dropping a caller mid-load leaves the cache consistent.
pub type LoaderFn = fn() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>>;

struct RegistryEntry {
    loader: LoaderFn,
    cell: OnceCell<Arc<BlockDefinition>>,
}

/// Process-wide, read-mostly block lookup.
pub struct BlockRegistry {
    entries: HashMap<&'static str, RegistryEntry>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The standard block library.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &(id, loader) in builtin::LOADERS {
            registry.register(id, loader);
        }
        registry
    }

    /// Register a loader. Last registration for an id wins; this only
    /// happens during startup, before any `get`.
    pub fn register(&mut self, id: &'static str, loader: LoaderFn) {
        self.entries.insert(
            id,
            RegistryEntry {
                loader,
                cell: OnceCell::new(),
            },
        );
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered ids, sorted for deterministic iteration.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve a definition, loading and caching it on first use.
    ///
    /// Fails with [`RegistryError::UnknownBlockId`] for unregistered ids.
    /// A failed load is not cached, so a later `get` retries.
    pub async fn get(&self, id: &str) -> Result<Arc<BlockDefinition>, RegistryError> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| RegistryError::UnknownBlockId(id.to_string()))?;

        let loader = entry.loader;
        entry
            .cell
            .get_or_try_init(|| async move { loader().await.map(Arc::new) })
            .await
            .map(Arc::clone)
    }

    /// Load every registered block and return lightweight summaries for
    /// picker UIs. The registry is small and loads are cached, so the full
    /// load is amortized. Blocks that fail to load are skipped with a log.
    pub async fn list_metadata(&self) -> Vec<BlockSummary> {
        let mut summaries = Vec::with_capacity(self.entries.len());
        for id in self.ids() {
            match self.get(id).await {
                Ok(definition) => summaries.push(definition.summary()),
                Err(err) => warn!(%id, %err, "skipping block in metadata listing"),
            }
        }
        summaries
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::BlockCategory;
    use blocksmith_common::vdom::VNode;
    use blocksmith_schema::BlockSchema;

    fn stub_loader() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
        Box::pin(async {
            Ok(BlockDefinition::new(
                "stub",
                "Stub",
                BlockCategory::Text,
                BlockSchema::new(),
                |_, _| VNode::element("div"),
            ))
        })
    }

    fn failing_loader() -> BoxFuture<'static, Result<BlockDefinition, RegistryError>> {
        Box::pin(async {
            Err(RegistryError::LoadFailed {
                id: "broken".to_string(),
                reason: "stub failure".to_string(),
            })
        })
    }

    #[tokio::test]
    async fn test_unknown_id_is_an_error_naming_the_id() {
        let registry = BlockRegistry::new();
        let err = registry.get("ghost").await.unwrap_err();
        assert!(matches!(err, RegistryError::UnknownBlockId(ref id) if id == "ghost"));
        assert!(err.to_string().contains("ghost"));
    }

    #[tokio::test]
    async fn test_definitions_are_cached_after_first_get() {
        let mut registry = BlockRegistry::new();
        registry.register("stub", stub_loader);

        let first = registry.get("stub").await.unwrap();
        let second = registry.get("stub").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_concurrent_gets_converge_on_one_definition() {
        let mut registry = BlockRegistry::new();
        registry.register("stub", stub_loader);

        let (a, b) = tokio::join!(registry.get("stub"), registry.get("stub"));
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    }

    #[tokio::test]
    async fn test_failed_loads_are_skipped_in_metadata() {
        let mut registry = BlockRegistry::new();
        registry.register("stub", stub_loader);
        registry.register("broken", failing_loader);

        let summaries = registry.list_metadata().await;
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "stub");
    }

    #[tokio::test]
    async fn test_builtin_registry_lists_all_blocks() {
        let registry = BlockRegistry::builtin();
        let summaries = registry.list_metadata().await;
        assert_eq!(summaries.len(), registry.ids().len());

        // Every category is represented in the standard library.
        for category in [
            BlockCategory::Text,
            BlockCategory::Media,
            BlockCategory::Layout,
            BlockCategory::Forms,
            BlockCategory::Navigation,
            BlockCategory::Ecommerce,
        ] {
            assert!(
                summaries.iter().any(|s| s.category == category),
                "no block in category {:?}",
                category
            );
        }
    }
}
