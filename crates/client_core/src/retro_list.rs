use std::sync::Arc;

use shared::domain::{BoardId, ItemId, ItemStatus, ItemType, RetroItem};

use crate::{form::Control, ItemStore};

#[derive(Debug, Clone, Copy)]
pub struct FilterArgs {
    pub status: ItemStatus,
}

/// View-model for the full item collection of one board.
///
/// Holds the items exactly as last fetched; the happy/unhappy/mediocre
/// views are derived on demand, so partitioning is idempotent and never
/// mutates the loaded set. Store failures land in `store_error` instead of
/// propagating.
pub struct RetroList {
    store: Arc<dyn ItemStore>,
    board_id: BoardId,
    pub items: Vec<RetroItem>,
    pub filter: FilterArgs,
    pub order_by_likes: bool,
    pub store_error: Option<anyhow::Error>,
    pub happy_message: Control,
    pub unhappy_message: Control,
    pub mediocre_message: Control,
}

impl RetroList {
    /// Builds the list and performs the construction-time load.
    pub async fn new(board_id: BoardId, store: Arc<dyn ItemStore>) -> Self {
        let mut list = Self {
            store,
            board_id,
            items: Vec::new(),
            filter: FilterArgs {
                status: ItemStatus::Active,
            },
            order_by_likes: false,
            store_error: None,
            happy_message: Control::required(),
            unhappy_message: Control::required(),
            mediocre_message: Control::required(),
        };
        list.reload().await;
        list
    }

    pub fn happy_items(&self) -> Vec<&RetroItem> {
        self.bucket(ItemType::Happy)
    }

    pub fn unhappy_items(&self) -> Vec<&RetroItem> {
        self.bucket(ItemType::Unhappy)
    }

    pub fn mediocre_items(&self) -> Vec<&RetroItem> {
        self.bucket(ItemType::Mediocre)
    }

    /// Items matching both the active status filter and the given type,
    /// in fetch order, or stably sorted by likes ascending when requested.
    fn bucket(&self, kind: ItemType) -> Vec<&RetroItem> {
        let mut bucket: Vec<&RetroItem> = self
            .items
            .iter()
            .filter(|item| item.status == self.filter.status && item.kind == kind)
            .collect();
        if self.order_by_likes {
            bucket.sort_by_key(|item| item.likes);
        }
        bucket
    }

    /// Builds an item from the matching message control and persists it.
    /// On success the control is cleared and the list reloaded to pick up
    /// the server-assigned fields; on failure the control keeps its value.
    pub async fn add_item(&mut self, kind: ItemType) {
        let message = self.message_control(kind).value().to_owned();
        let item = RetroItem::new(self.board_id, message, kind);
        match self.store.add_item(&item).await {
            Ok(_) => {
                self.message_control_mut(kind).reset();
                self.reload().await;
            }
            Err(err) => self.store_error = Some(err),
        }
    }

    pub async fn remove_item(&mut self, id: ItemId) {
        match self.store.delete_item(id).await {
            Ok(()) => self.reload().await,
            Err(err) => self.store_error = Some(err),
        }
    }

    /// Flips the view between active and archived cards. Operates on the
    /// already-loaded items; no refetch.
    pub fn switch_status_filter(&mut self) {
        self.filter.status = match self.filter.status {
            ItemStatus::Active => ItemStatus::Archived,
            ItemStatus::Archived => ItemStatus::Active,
        };
    }

    /// Toggles like-ordering and reloads the items from the store.
    pub async fn switch_order_by_likes(&mut self) {
        self.order_by_likes = !self.order_by_likes;
        self.reload().await;
    }

    pub fn message_control(&self, kind: ItemType) -> &Control {
        match kind {
            ItemType::Happy => &self.happy_message,
            ItemType::Unhappy => &self.unhappy_message,
            ItemType::Mediocre => &self.mediocre_message,
        }
    }

    pub fn message_control_mut(&mut self, kind: ItemType) -> &mut Control {
        match kind {
            ItemType::Happy => &mut self.happy_message,
            ItemType::Unhappy => &mut self.unhappy_message,
            ItemType::Mediocre => &mut self.mediocre_message,
        }
    }

    async fn reload(&mut self) {
        match self.store.get_items().await {
            Ok(items) => self.items = items,
            Err(err) => self.store_error = Some(err),
        }
    }
}

#[cfg(test)]
#[path = "tests/retro_list_tests.rs"]
mod tests;
