use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{ActionComposer, ActionService, ItemStore, RetroList, RetroRow, RetroStore};
use shared::domain::{BoardId, ItemId, ItemType, RetroItem};

mod config;

#[derive(Parser, Debug)]
#[command(name = "retro", about = "Terminal client for a retro board backend")]
struct Args {
    /// Backend base URL; falls back to retroboard.toml / RETRO_SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    /// Board to operate on; falls back to retroboard.toml / RETRO_BOARD_ID.
    #[arg(long)]
    board_id: Option<i64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the board grouped by item type.
    List {
        /// Show archived cards instead of active ones.
        #[arg(long)]
        archived: bool,
        /// Order each group by likes, ascending.
        #[arg(long)]
        by_likes: bool,
    },
    /// Add a feedback card.
    Add { kind: Kind, message: String },
    /// Archive a card by id.
    Archive { id: i64 },
    /// Delete a card by id.
    Remove { id: i64 },
    /// Record a follow-up action.
    Action { description: String, owner: String },
    /// Dump the raw board payload.
    Board,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Happy,
    Unhappy,
    Mediocre,
}

impl From<Kind> for ItemType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Happy => ItemType::Happy,
            Kind::Unhappy => ItemType::Unhappy,
            Kind::Mediocre => ItemType::Mediocre,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = config::load_settings(args.server_url.clone(), args.board_id);
    url::Url::parse(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;

    let board_id = BoardId(settings.board_id);
    let store: Arc<dyn ItemStore> = Arc::new(RetroStore::new(settings.server_url.clone(), board_id));

    match args.command {
        Command::List { archived, by_likes } => {
            let mut list = RetroList::new(board_id, Arc::clone(&store)).await;
            if archived {
                list.switch_status_filter();
            }
            if by_likes {
                list.switch_order_by_likes().await;
            }
            if let Some(err) = list.store_error.take() {
                return Err(err.context("failed to load the board"));
            }
            print_bucket("HAPPY", &list.happy_items());
            print_bucket("UNHAPPY", &list.unhappy_items());
            print_bucket("MEDIOCRE", &list.mediocre_items());
        }
        Command::Add { kind, message } => {
            let kind = ItemType::from(kind);
            let mut list = RetroList::new(board_id, Arc::clone(&store)).await;
            if let Some(err) = list.store_error.take() {
                return Err(err.context("failed to load the board"));
            }
            list.message_control_mut(kind).set_value(message);
            list.add_item(kind).await;
            if let Some(err) = list.store_error.take() {
                return Err(err.context("failed to add the item"));
            }
            println!("Added. The board now has {} items.", list.items.len());
        }
        Command::Archive { id } => {
            let items = store.get_items().await?;
            let item = items
                .into_iter()
                .find(|item| item.id == Some(ItemId(id)))
                .with_context(|| format!("no item with id {id} on board {}", board_id.0))?;
            let mut row = RetroRow::new(Arc::clone(&store), item);
            row.archive().await;
            println!("Item {id} is now {:?}.", row.item.status);
        }
        Command::Remove { id } => {
            let mut list = RetroList::new(board_id, Arc::clone(&store)).await;
            if let Some(err) = list.store_error.take() {
                return Err(err.context("failed to load the board"));
            }
            list.remove_item(ItemId(id)).await;
            if let Some(err) = list.store_error.take() {
                return Err(err.context("failed to delete the item"));
            }
            println!("Removed item {id}.");
        }
        Command::Action { description, owner } => {
            let service = Arc::new(ActionService::new(settings.server_url.clone()));
            let mut composer = ActionComposer::new(board_id, service);
            composer.description.set_value(description);
            composer.owner.set_value(owner);
            if composer.submit().await {
                println!("Action recorded.");
            } else {
                println!("Action was not recorded.");
            }
        }
        Command::Board => {
            let payload = store.get_board().await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

fn print_bucket(label: &str, items: &[&RetroItem]) {
    println!("{label}:");
    if items.is_empty() {
        println!("  (none)");
    }
    for item in items {
        let id = item.id.map_or(-1, |id| id.0);
        println!("  [{}] {} ({} likes)", id, item.message, item.likes);
    }
}
