// Runs feed loading off the UI loop.
use crate::client::{FeedClient, FeedSources};
use crate::model::DateOrder;
use crate::store::EventStore;
use crate::tui::action::{Action, AppEvent};
use tokio::sync::mpsc::{Receiver, Sender};

async fn load(client: &FeedClient, sources: &FeedSources, order: DateOrder) -> AppEvent {
    match client.load_feeds(sources).await {
        Ok(feeds) => AppEvent::FeedsLoaded(EventStore::from_feeds(&feeds, order)),
        Err(e) => {
            log::error!("Error loading feeds: {}", e);
            AppEvent::Error(e.to_string())
        }
    }
}

/// Loads once on start, then again on every `Action::Reload`, until `Quit`
/// or the UI drops its sender.
pub async fn run_network_actor(
    sources: FeedSources,
    order: DateOrder,
    mut action_rx: Receiver<Action>,
    event_tx: Sender<AppEvent>,
) {
    let client = FeedClient::new();

    let _ = event_tx.send(load(&client, &sources, order).await).await;

    while let Some(action) = action_rx.recv().await {
        match action {
            Action::Quit => break,
            Action::Reload => {
                let _ = event_tx
                    .send(AppEvent::Status("Recargando...".to_string()))
                    .await;
                let _ = event_tx.send(load(&client, &sources, order).await).await;
            }
        }
    }
}
