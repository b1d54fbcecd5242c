//! Main TUI runner - entry point and event loop
//!
//! Drives the TEA cycle: poll terminal events and background fetch
//! results into messages, run them through the pure `update` reducer, and
//! draw the resulting state. Fetch tasks described by the reducer are
//! spawned onto the tokio runtime; their settlements come back over the
//! same message channel, so a resolution for a screen that has been
//! navigated away from is just another message the reducer discards.

use tokio::sync::mpsc;

use storefront_api::CatalogClient;
use storefront_app::{update, AppState, Message, Task, UpdateAction};
use storefront_core::prelude::*;
use storefront_core::Product;

use crate::{event, render, terminal};

/// Run the TUI application against the given catalog
pub async fn run(client: CatalogClient) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::new();

    // Unified message channel: fetch settlements arrive here
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Mount the list screen; this starts the initial fetch
    process_message(&mut state, Message::MountList, &client, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &CatalogClient,
) -> Result<()> {
    while !state.should_quit() {
        // Process settled fetches (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, client, &msg_tx);
        }

        // The gallery pages by viewport width; feed it the width the
        // detail body will be drawn at (full width minus card borders)
        let size = terminal.size()?;
        state
            .detail
            .gallery
            .set_viewport_width(size.width.saturating_sub(2).max(1));

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, client, &msg_tx);
        }
    }

    Ok(())
}

/// Run a message (and any follow-ups) through the reducer, spawning the
/// fetch tasks it requests
fn process_message(
    state: &mut AppState,
    message: Message,
    client: &CatalogClient,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut current = Some(message);
    while let Some(message) = current.take() {
        let result = update(state, message);
        current = result.message;
        if let Some(UpdateAction::SpawnTask(task)) = result.action {
            spawn_task(task, client.clone(), msg_tx.clone());
        }
    }
}

/// Spawn one background fetch; its settlement is sent back as a message
fn spawn_task(task: Task, client: CatalogClient, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let settlement = match task {
            Task::FetchList => match client.list_products().await {
                Ok(page) => Message::ListLoaded {
                    products: page.products.iter().map(Product::summary).collect(),
                },
                Err(e) => {
                    error!("Product list fetch failed: {e}");
                    Message::ListFailed {
                        error: e.to_string(),
                    }
                }
            },
            Task::FetchProduct { id, seq } => match client.get_product(id).await {
                Ok(product) => Message::ProductLoaded {
                    seq,
                    product: Box::new(product),
                },
                Err(e) => {
                    error!("Product {id} fetch failed: {e}");
                    Message::ProductFailed {
                        seq,
                        error: e.to_string(),
                    }
                }
            },
        };

        if msg_tx.send(settlement).await.is_err() {
            warn!("Message channel closed before fetch settled");
        }
    });
}
