use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(BoardId);
id_newtype!(ItemId);
id_newtype!(ActionId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Active,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Happy,
    Unhappy,
    Mediocre,
}

/// One feedback card on a retro board. `id` and the timestamps stay unset
/// until the server has persisted the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetroItem {
    pub id: Option<ItemId>,
    pub board_id: BoardId,
    pub message: String,
    pub status: ItemStatus,
    pub kind: ItemType,
    pub likes: u32,
    pub creation_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl RetroItem {
    pub fn new(board_id: BoardId, message: impl Into<String>, kind: ItemType) -> Self {
        Self {
            id: None,
            board_id,
            message: message.into(),
            status: ItemStatus::Active,
            kind,
            likes: 0,
            creation_date: None,
            last_modified_date: None,
        }
    }
}

/// A follow-up task agreed during the retro. Sent once, never mutated
/// client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    pub board_id: BoardId,
    pub description: String,
    pub owner: String,
}
