use std::sync::Arc;

use kanal::AsyncSender;
use luxverbs_grist::{GristClient, RecordSource, build_catalog};
use luxverbs_types::AppEvent;

use crate::state::AppState;

/// The startup fetch. Builds the client from config and runs the one load of
/// the process lifetime.
pub async fn loader_task(
    state: Arc<AppState>,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let client = {
        let config = state.config.read().await;
        GristClient::new(&config.grist)
    };

    load_catalog(&client, &event_tx).await;
    Ok(())
}

/// Fetch once, group, and hand the catalog to the event loop. A failed fetch
/// is logged and suppressed; the catalog stays empty and browsing still
/// works over an empty home view.
pub async fn load_catalog(source: &dyn RecordSource, event_tx: &AsyncSender<AppEvent>) {
    match source.fetch_records().await {
        Ok(records) => {
            let catalog = build_catalog(records);
            tracing::info!(
                "loaded {} verbs in {} categories",
                catalog.verb_count(),
                catalog.categories.len()
            );
            // A send failure here means the app is already shutting down.
            if event_tx.send(AppEvent::CatalogLoaded(catalog)).await.is_err() {
                tracing::debug!("event loop gone before the catalog arrived");
            }
        }
        Err(e) => {
            tracing::error!("failed to load verbs from Grist: {e}");
        }
    }
}
