use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use luxverbs_types::{AppEvent, ViewModel};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::loader::loader_task;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    /// UI interactions and the one-shot catalog load, into the event loop
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Derived views, out to the rendering surface
    pub render: (AsyncSender<ViewModel>, AsyncReceiver<ViewModel>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),
            render: kanal::bounded_async(16),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // One-shot startup fetch
        tasks.spawn(loader_task(
            self.state.clone(),
            self.channels.events.0.clone(),
        ));

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.events.1.clone(),
            self.channels.render.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Rendering surface
        tasks.spawn(ui_loop(
            self.channels.render.1.clone(),
            self.channels.events.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
