use std::sync::Arc;

use shared::domain::{ActionItem, BoardId};
use tracing::warn;

use crate::{form::Control, ActionStore};

/// View-model for the follow-up-action form. Independent of the retro item
/// path: it talks to its own store and shares no state with `RetroList`.
pub struct ActionComposer {
    service: Arc<dyn ActionStore>,
    board_id: BoardId,
    pub description: Control,
    pub owner: Control,
}

impl ActionComposer {
    pub fn new(board_id: BoardId, service: Arc<dyn ActionStore>) -> Self {
        Self {
            service,
            board_id,
            description: Control::required(),
            owner: Control::required(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.description.is_valid() && self.owner.is_valid()
    }

    /// Submits the form once. Returns whether the action was recorded; a
    /// store failure is only logged and the form keeps its values so the
    /// user can retry.
    pub async fn submit(&mut self) -> bool {
        if !self.is_valid() {
            return false;
        }
        let action = ActionItem {
            board_id: self.board_id,
            description: self.description.value().to_owned(),
            owner: self.owner.value().to_owned(),
        };
        match self.service.add_action(&action).await {
            Ok(()) => {
                self.description.reset();
                self.owner.reset();
                true
            }
            Err(err) => {
                warn!("failed to add action: {err:#}");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/action_tests.rs"]
mod tests;
