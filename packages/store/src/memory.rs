//! In-memory store: the reference `SiteStore` implementation.

use crate::store::{SiteStore, StoreError};
use blocksmith_common::model::BlockInstance;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct PageRecord {
    settings: Option<Value>,
    blocks: Vec<BlockInstance>,
}

#[derive(Default)]
struct Inner {
    pages: HashMap<String, PageRecord>,
    theme: Option<Value>,
    next_id: u64,
}

/// Keyed in-memory state behind an async lock. Instance ids are
/// counter-derived, so behavior is reproducible in tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a page exists (pages are otherwise created implicitly by
    /// the first write against their id).
    pub async fn add_page(&self, page_id: &str) {
        self.inner
            .write()
            .await
            .pages
            .entry(page_id.to_string())
            .or_default();
    }

    pub async fn set_page_settings(&self, page_id: &str, settings: Value) {
        let mut inner = self.inner.write().await;
        inner
            .pages
            .entry(page_id.to_string())
            .or_default()
            .settings = Some(settings);
    }

    pub async fn set_site_theme(&self, theme: Value) {
        self.inner.write().await.theme = Some(theme);
    }
}

#[async_trait::async_trait]
impl SiteStore for MemoryStore {
    async fn fetch_blocks(&self, page_id: &str) -> Result<Vec<BlockInstance>, StoreError> {
        let inner = self.inner.read().await;
        let page = inner
            .pages
            .get(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        Ok(page.blocks.clone())
    }

    async fn fetch_page_settings(&self, page_id: &str) -> Result<Option<Value>, StoreError> {
        let inner = self.inner.read().await;
        let page = inner
            .pages
            .get(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        Ok(page.settings.clone())
    }

    async fn fetch_site_theme(&self) -> Result<Option<Value>, StoreError> {
        Ok(self.inner.read().await.theme.clone())
    }

    async fn create_block(
        &self,
        page_id: &str,
        block_id: &str,
        params: Value,
    ) -> Result<BlockInstance, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = format!("blk-{}", inner.next_id);

        let page = inner.pages.entry(page_id.to_string()).or_default();
        let display_order = page
            .blocks
            .iter()
            .map(|instance| instance.display_order)
            .max()
            .map(|order| order + 1)
            .unwrap_or(0);

        let instance = BlockInstance {
            id,
            block_id: block_id.to_string(),
            params,
            display_order,
        };
        page.blocks.push(instance.clone());
        Ok(instance)
    }

    async fn update_block_params(
        &self,
        page_id: &str,
        instance_id: &str,
        params: Value,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let page = inner
            .pages
            .get_mut(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        let instance = page
            .blocks
            .iter_mut()
            .find(|instance| instance.id == instance_id)
            .ok_or_else(|| StoreError::InstanceNotFound(instance_id.to_string()))?;
        instance.params = params;
        Ok(())
    }

    async fn delete_block(&self, page_id: &str, instance_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let page = inner
            .pages
            .get_mut(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        let before = page.blocks.len();
        page.blocks.retain(|instance| instance.id != instance_id);
        if page.blocks.len() == before {
            return Err(StoreError::InstanceNotFound(instance_id.to_string()));
        }
        Ok(())
    }

    async fn set_display_order(
        &self,
        page_id: &str,
        ordered_ids: &[String],
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let page = inner
            .pages
            .get_mut(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;

        for (order, id) in ordered_ids.iter().enumerate() {
            let instance = page
                .blocks
                .iter_mut()
                .find(|instance| &instance.id == id)
                .ok_or_else(|| StoreError::InstanceNotFound(id.clone()))?;
            instance.display_order = order as i64;
        }
        Ok(())
    }
}
