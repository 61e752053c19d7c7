use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{ActionItem, BoardId, ItemId, RetroItem},
    error::ApiError,
    protocol::{BoardPayload, ItemRecord, NewActionRequest, NewItemRequest},
};
use tracing::debug;

pub mod action;
pub mod form;
pub mod retro_list;
pub mod retro_row;

pub use action::ActionComposer;
pub use form::Control;
pub use retro_list::{FilterArgs, RetroList};
pub use retro_row::RetroRow;

/// Data-access seam for retro items. View-models hold this as
/// `Arc<dyn ItemStore>` so tests can substitute a scripted store.
///
/// Every method is a single network round trip: no retries, no caching,
/// no client-side reconciliation. A call either resolves once with its
/// payload or fails once with the transport error.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Raw payload of `GET /board/{board_id}`.
    async fn get_board(&self) -> Result<BoardPayload>;
    /// Items of the board, mapped from wire records into domain items.
    async fn get_items(&self) -> Result<Vec<RetroItem>>;
    /// Persist a new item; the response carries the server-assigned fields.
    async fn add_item(&self, item: &RetroItem) -> Result<RetroItem>;
    /// Persist the full state of an already-stored item.
    async fn update_item(&self, item: &RetroItem) -> Result<()>;
    async fn delete_item(&self, id: ItemId) -> Result<()>;
}

/// Data-access seam for the independent action-item path.
#[async_trait]
pub trait ActionStore: Send + Sync {
    async fn add_action(&self, action: &ActionItem) -> Result<()>;
}

/// HTTP implementation of [`ItemStore`] bound to one board.
pub struct RetroStore {
    http: Client,
    server_url: String,
    board_id: BoardId,
}

impl RetroStore {
    pub fn new(server_url: impl Into<String>, board_id: BoardId) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
            board_id,
        }
    }
}

#[async_trait]
impl ItemStore for RetroStore {
    async fn get_board(&self) -> Result<BoardPayload> {
        debug!(board_id = self.board_id.0, "fetching board");
        let response = self
            .http
            .get(format!("{}/board/{}", self.server_url, self.board_id.0))
            .send()
            .await
            .context("failed to fetch board")?;
        let payload = checked(response).await?.json().await?;
        Ok(payload)
    }

    async fn get_items(&self) -> Result<Vec<RetroItem>> {
        let payload = self.get_board().await?;
        Ok(payload.items.into_iter().map(RetroItem::from).collect())
    }

    async fn add_item(&self, item: &RetroItem) -> Result<RetroItem> {
        debug!(board_id = item.board_id.0, "adding item");
        let response = self
            .http
            .post(format!("{}/items", self.server_url))
            .json(&NewItemRequest::from(item))
            .send()
            .await
            .context("failed to add item")?;
        let record: ItemRecord = checked(response).await?.json().await?;
        Ok(record.into())
    }

    async fn update_item(&self, item: &RetroItem) -> Result<()> {
        let Some(id) = item.id else {
            bail!("cannot update an item that has not been persisted");
        };
        debug!(item_id = id.0, "updating item");
        let response = self
            .http
            .put(format!("{}/items/{}", self.server_url, id.0))
            .json(&ItemRecord::from(item))
            .send()
            .await
            .context("failed to update item")?;
        checked(response).await?;
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        debug!(item_id = id.0, "deleting item");
        let response = self
            .http
            .delete(format!("{}/items/{}", self.server_url, id.0))
            .send()
            .await
            .context("failed to delete item")?;
        checked(response).await?;
        Ok(())
    }
}

/// HTTP implementation of [`ActionStore`].
pub struct ActionService {
    http: Client,
    server_url: String,
}

impl ActionService {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }
}

#[async_trait]
impl ActionStore for ActionService {
    async fn add_action(&self, action: &ActionItem) -> Result<()> {
        debug!(board_id = action.board_id.0, "adding action");
        let response = self
            .http
            .post(format!("{}/actions", self.server_url))
            .json(&NewActionRequest::from(action))
            .send()
            .await
            .context("failed to add action")?;
        checked(response).await?;
        Ok(())
    }
}

/// Turns a non-success response into an error, decoding the backend's
/// `ApiError` body when one is present.
async fn checked(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let Ok(body) = response.json::<ApiError>().await {
        bail!("request rejected ({status}): {body}");
    }
    bail!("request rejected with status {status}");
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
