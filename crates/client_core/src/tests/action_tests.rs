use super::*;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

struct MockActionStore {
    fail_with: Option<String>,
    added: Arc<Mutex<Vec<ActionItem>>>,
}

impl MockActionStore {
    fn ok() -> Self {
        Self {
            fail_with: None,
            added: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            added: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ActionStore for MockActionStore {
    async fn add_action(&self, action: &ActionItem) -> Result<()> {
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        self.added.lock().await.push(action.clone());
        Ok(())
    }
}

#[tokio::test]
async fn submits_the_action_and_resets_the_form() {
    let mock = MockActionStore::ok();
    let added = Arc::clone(&mock.added);
    let mut composer = ActionComposer::new(BoardId(1), Arc::new(mock));

    composer.description.set_value("rotate the pager schedule");
    composer.owner.set_value("sam");

    assert!(composer.submit().await);

    let added = added.lock().await;
    assert_eq!(
        added[0],
        ActionItem {
            board_id: BoardId(1),
            description: "rotate the pager schedule".to_owned(),
            owner: "sam".to_owned(),
        }
    );
    assert_eq!(composer.description.value(), "");
    assert_eq!(composer.owner.value(), "");
}

#[tokio::test]
async fn keeps_the_form_when_the_store_fails() {
    let mock = MockActionStore::failing("Some problem");
    let mut composer = ActionComposer::new(BoardId(1), Arc::new(mock));

    composer.description.set_value("rotate the pager schedule");
    composer.owner.set_value("sam");

    assert!(!composer.submit().await);

    assert_eq!(composer.description.value(), "rotate the pager schedule");
    assert_eq!(composer.owner.value(), "sam");
}

#[tokio::test]
async fn refuses_to_submit_an_invalid_form() {
    let mock = MockActionStore::ok();
    let added = Arc::clone(&mock.added);
    let mut composer = ActionComposer::new(BoardId(1), Arc::new(mock));

    composer.description.set_value("rotate the pager schedule");
    // owner left blank

    assert!(!composer.submit().await);
    assert!(added.lock().await.is_empty());
}
