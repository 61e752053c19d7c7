use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ActionItem, BoardId, ItemId, ItemStatus, ItemType, RetroItem};

/// Wire form of one retro item. Field names here are the external contract
/// with the backend; the rest of the client only sees `RetroItem`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub message: String,
    pub status: ItemStatus,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub likes: u32,
    pub board_id: BoardId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// Body of `GET /board/{board_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardPayload {
    pub items: Vec<ItemRecord>,
}

/// Body of `POST /items`. The server assigns id, timestamps and the default
/// status, so only the client-chosen fields are mandatory here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItemRequest {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub board_id: BoardId,
    pub status: ItemStatus,
    pub likes: u32,
}

/// Body of `POST /actions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActionRequest {
    pub board_id: BoardId,
    pub description: String,
    pub owner: String,
}

impl From<ItemRecord> for RetroItem {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            board_id: record.board_id,
            message: record.message,
            status: record.status,
            kind: record.kind,
            likes: record.likes,
            creation_date: record.creation_date,
            last_modified_date: record.last_modified_date,
        }
    }
}

impl From<&RetroItem> for NewItemRequest {
    fn from(item: &RetroItem) -> Self {
        Self {
            message: item.message.clone(),
            kind: item.kind,
            board_id: item.board_id,
            status: item.status,
            likes: item.likes,
        }
    }
}

impl From<&RetroItem> for ItemRecord {
    fn from(item: &RetroItem) -> Self {
        Self {
            id: item.id,
            message: item.message.clone(),
            status: item.status,
            kind: item.kind,
            likes: item.likes,
            board_id: item.board_id,
            creation_date: item.creation_date,
            last_modified_date: item.last_modified_date,
        }
    }
}

impl From<&ActionItem> for NewActionRequest {
    fn from(action: &ActionItem) -> Self {
        Self {
            board_id: action.board_id,
            description: action.description.clone(),
            owner: action.owner.clone(),
        }
    }
}
