use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::EventDispatcher;
use super::HandlerRegistry;
use crate::ChangeEvent;
use crate::ClusterContext;
use crate::Result;

/// Drives the dispatcher from the repository's watch stream.
///
/// The repository pushes change events into the context's event sink; this
/// loop pulls them off one at a time and awaits the dispatcher, so handlers
/// run serialized in delivery order. A handler failure is logged and the
/// loop moves on; retry of the underlying store operation belongs to the
/// repository or an outer supervisor, not here.
pub struct ClusterEventListener {
    dispatcher: EventDispatcher,
    events: mpsc::UnboundedReceiver<ChangeEvent>,
    shutdown: CancellationToken,
}

impl ClusterEventListener {
    pub fn new(
        dispatcher: EventDispatcher,
        events: mpsc::UnboundedReceiver<ChangeEvent>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            dispatcher,
            events,
            shutdown,
        }
    }

    /// Registers a repository watch for every subscribed key in the registry,
    /// delivering into the context's event sink.
    pub async fn subscribe(
        context: &ClusterContext,
        registry: &HandlerRegistry,
    ) -> Result<()> {
        for key in registry.subscribed_keys() {
            context.repository().watch(key, context.event_sink()).await?;
        }
        Ok(())
    }

    pub async fn run(mut self) {
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("change event listener shutting down");
                    return;
                }

                maybe_event = self.events.recv() => {
                    match maybe_event {
                        Some(event) => {
                            if let Err(e) = self.dispatcher.dispatch(&event).await {
                                error!(
                                    path = event.path(),
                                    error = %e,
                                    "change event handler failed"
                                );
                            }
                        }
                        None => {
                            warn!("change event stream closed, listener exiting");
                            return;
                        }
                    }
                }
            }
        }
    }
}
