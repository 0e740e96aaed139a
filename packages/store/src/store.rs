//! The `SiteStore` trait and store-level errors.

use blocksmith_blocks::{BlockRegistry, RegistryError};
use blocksmith_common::model::BlockInstance;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Block instance not found: {0}")]
    InstanceNotFound(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Black-box persistence operations for block instances and settings.
///
/// Completion of a write is what triggers re-composition on the rendering
/// side; the store itself knows nothing about rendering.
#[async_trait::async_trait]
pub trait SiteStore: Send + Sync {
    /// Block instances for a page, in stored (insertion) order.
    async fn fetch_blocks(&self, page_id: &str) -> Result<Vec<BlockInstance>, StoreError>;

    /// Raw page settings blob; `None` means "never stored" and callers
    /// treat it as schema defaults.
    async fn fetch_page_settings(&self, page_id: &str) -> Result<Option<Value>, StoreError>;

    /// Raw site theme blob, same absence contract as page settings.
    async fn fetch_site_theme(&self) -> Result<Option<Value>, StoreError>;

    /// Append a new instance with the given params; the store assigns the
    /// instance id and the next display order.
    async fn create_block(
        &self,
        page_id: &str,
        block_id: &str,
        params: Value,
    ) -> Result<BlockInstance, StoreError>;

    /// Replace one instance's params.
    async fn update_block_params(
        &self,
        page_id: &str,
        instance_id: &str,
        params: Value,
    ) -> Result<(), StoreError>;

    async fn delete_block(&self, page_id: &str, instance_id: &str) -> Result<(), StoreError>;

    /// Reassign display order so instances render in the given id order.
    async fn set_display_order(
        &self,
        page_id: &str,
        ordered_ids: &[String],
    ) -> Result<(), StoreError>;
}

/// Create an instance of `block_id` carrying its schema defaults - the
/// "add block" action of the editor surface.
pub async fn create_block_with_defaults(
    store: &dyn SiteStore,
    registry: &BlockRegistry,
    page_id: &str,
    block_id: &str,
) -> Result<BlockInstance, StoreError> {
    let definition = registry.get(block_id).await?;
    let params = Value::Object(definition.schema.defaults());
    store.create_block(page_id, definition.id, params).await
}
