use super::*;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::{
    domain::{BoardId, ItemId, ItemType},
    protocol::BoardPayload,
};
use tokio::sync::Mutex;

struct MockItemStore {
    fail_update: Option<String>,
    updated: Arc<Mutex<Vec<RetroItem>>>,
}

impl MockItemStore {
    fn ok() -> Self {
        Self {
            fail_update: None,
            updated: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_update: Some(message.into()),
            updated: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ItemStore for MockItemStore {
    async fn get_board(&self) -> Result<BoardPayload> {
        Err(anyhow!("get_board is not exercised by these tests"))
    }

    async fn get_items(&self) -> Result<Vec<RetroItem>> {
        Err(anyhow!("get_items is not exercised by these tests"))
    }

    async fn add_item(&self, _item: &RetroItem) -> Result<RetroItem> {
        Err(anyhow!("add_item is not exercised by these tests"))
    }

    async fn update_item(&self, item: &RetroItem) -> Result<()> {
        self.updated.lock().await.push(item.clone());
        if let Some(err) = &self.fail_update {
            return Err(anyhow!(err.clone()));
        }
        Ok(())
    }

    async fn delete_item(&self, _id: ItemId) -> Result<()> {
        Err(anyhow!("delete_item is not exercised by these tests"))
    }
}

fn active_item() -> RetroItem {
    let timestamp = "2016-01-01T21:30:00Z".parse().expect("timestamp");
    RetroItem {
        id: Some(ItemId(1)),
        board_id: BoardId(1),
        message: "I'm a message".into(),
        status: ItemStatus::Active,
        kind: ItemType::Happy,
        likes: 0,
        creation_date: Some(timestamp),
        last_modified_date: Some(timestamp),
    }
}

#[tokio::test]
async fn tells_the_store_to_persist_the_archived_item() {
    let mock = MockItemStore::ok();
    let updated = Arc::clone(&mock.updated);
    let mut row = RetroRow::new(Arc::new(mock), active_item());

    row.archive().await;

    let updated = updated.lock().await;
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].status, ItemStatus::Archived);
    assert_eq!(updated[0].id, Some(ItemId(1)));
    assert_eq!(row.item.status, ItemStatus::Archived);
}

#[tokio::test]
async fn rolls_back_the_status_when_archiving_fails() {
    let mock = MockItemStore::failing("Some problem");
    let updated = Arc::clone(&mock.updated);
    let mut row = RetroRow::new(Arc::new(mock), active_item());

    row.archive().await;

    // The store was still asked exactly once, with the archived version.
    let updated = updated.lock().await;
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].status, ItemStatus::Archived);
    // The failed persist reverts the optimistic flip.
    assert_eq!(row.item.status, ItemStatus::Active);
}
