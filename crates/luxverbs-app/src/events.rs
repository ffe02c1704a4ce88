use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use luxverbs_core::Navigator;
use luxverbs_types::{AppEvent, UiEvent, ViewModel};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// App's main loop. Owns the navigator; UI events mutate only the selection,
/// the catalog load mutates only the catalog slot. Every handled event is
/// followed by a freshly derived view.
pub async fn event_loop(
    state: Arc<AppState>,
    event_rx: AsyncReceiver<AppEvent>,
    render_tx: AsyncSender<ViewModel>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut nav = Navigator::new();

    // Initial (usually empty) home view so the UI is interactive before the
    // fetch completes.
    {
        let catalog = state.catalog.read().await;
        render_tx.send(nav.view(&catalog)).await?;
    }

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = event_rx.recv() => event?,
        };

        match event {
            AppEvent::CatalogLoaded(catalog) => {
                let mut slot = state.catalog.write().await;
                if slot.is_empty() {
                    *slot = catalog;
                } else {
                    tracing::warn!("ignoring duplicate catalog load");
                }
            }
            AppEvent::Ui(UiEvent::SelectCategory(label)) => {
                let catalog = state.catalog.read().await;
                if !nav.select_category(&catalog, &label) {
                    tracing::warn!("unknown category selected: {label}");
                }
            }
            AppEvent::Ui(UiEvent::SelectVerb(id)) => {
                let catalog = state.catalog.read().await;
                if !nav.select_verb(&catalog, id) {
                    tracing::warn!("unknown verb selected: {id}");
                }
            }
            AppEvent::Ui(UiEvent::Back) => {
                nav.back();
            }
            AppEvent::Ui(UiEvent::Quit) => {
                tracing::info!("quit requested");
                break;
            }
        }

        let catalog = state.catalog.read().await;
        render_tx.send(nav.view(&catalog)).await?;
    }

    Ok(())
}
