use std::sync::Arc;

use tracing::trace;

use super::HandlerRegistry;
use crate::ChangeEvent;
use crate::ClusterContext;
use crate::Result;

/// Routes raw change events to the single handler subscribed to their path.
///
/// Events whose path falls under no registered key are dropped silently;
/// the coordination store namespace is shared and paths this node does not
/// care about are expected. The dispatcher itself has no side effects beyond
/// invoking the selected handler, and it awaits the handler to completion,
/// so events taken from one delivery stream keep their order.
pub struct EventDispatcher {
    context: Arc<ClusterContext>,
    registry: Arc<HandlerRegistry>,
}

impl EventDispatcher {
    pub fn new(
        context: Arc<ClusterContext>,
        registry: Arc<HandlerRegistry>,
    ) -> Self {
        Self { context, registry }
    }

    pub async fn dispatch(
        &self,
        event: &ChangeEvent,
    ) -> Result<()> {
        let Some(handler) = self.registry.route(event.path()) else {
            trace!(path = event.path(), "no handler subscribed, event dropped");
            return Ok(());
        };
        handler.handle(&self.context, event).await
    }
}
