use std::sync::Arc;

use shared::domain::{ItemStatus, RetroItem};
use tracing::warn;

use crate::ItemStore;

/// View-model for a single rendered card.
pub struct RetroRow {
    store: Arc<dyn ItemStore>,
    pub item: RetroItem,
}

impl RetroRow {
    pub fn new(store: Arc<dyn ItemStore>, item: RetroItem) -> Self {
        Self { store, item }
    }

    /// Optimistically archives the item: the status flips locally first,
    /// then the store persists it. If persistence fails the snapshot taken
    /// beforehand is restored and the error goes no further than a log
    /// line. An already-archived item is not guarded against; the call
    /// persists a no-op status change.
    pub async fn archive(&mut self) {
        let previous = self.item.status;
        self.item.status = ItemStatus::Archived;
        if let Err(err) = self.store.update_item(&self.item).await {
            self.item.status = previous;
            warn!("failed to archive item, status restored: {err:#}");
        }
    }
}

#[cfg(test)]
#[path = "tests/retro_row_tests.rs"]
mod tests;
